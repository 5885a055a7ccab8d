use once_cell::sync::Lazy;
use regex::Regex;

// [macro]module [static|automatic] name (   |   module name #(   |   module name;
static DECLARATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:macro)?module\s+(?:(?:static|automatic)\s+)?([A-Za-z_][A-Za-z0-9_$]*)\s*(?:#\s*)?[(;]")
        .unwrap()
});

/// Name declared by the `module` header at the start of `block`.
pub fn parse_module_name(block: &str) -> Option<&str> {
    DECLARATION_PATTERN
        .captures(block)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}
