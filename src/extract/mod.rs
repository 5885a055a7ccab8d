//! Module block extraction from comment-stripped Verilog.

mod declaration;
mod scanner;

pub use declaration::parse_module_name;
pub use scanner::{ModuleScanner, ScanState};

use crate::error::Result;

/// A `module ... endmodule` span of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleBlock<'a> {
    /// Identifier from the module header
    pub name: &'a str,
    /// Verbatim text from `module` through the paired `endmodule`
    pub text: &'a str,
    /// 1-based line of the `module` keyword
    pub line: usize,
    /// Byte offset of the `module` keyword
    pub offset: usize,
}

/// Collect every module block, stopping at the first error.
pub fn extract_modules(source: &str) -> Result<Vec<ModuleBlock<'_>>> {
    ModuleScanner::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SplitError;

    #[test]
    fn test_extract_modules() {
        let src = "module A (input x); endmodule\nmodule B (input y); endmodule\n";
        let blocks = extract_modules(src).unwrap();
        let names: Vec<&str> = blocks.iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_extract_modules_stops_at_error() {
        let src = "module A; endmodule\nmodule (x); endmodule\nmodule C; endmodule\n";
        let err = extract_modules(src).unwrap_err();
        assert!(matches!(err, SplitError::UnnamedModule { line: 2 }));
    }
}
