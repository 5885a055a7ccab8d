//! Comment removal for Verilog source.
//!
//! A single forward pass classifies the text into code, string literals, line
//! comments and block comments, so the result is already stable: stripping it
//! again changes nothing.
//!
//! - `// ...` collapses to a newline, together with any spaces or tabs in
//!   front of it.
//! - `/* ... */` is deleted. Block comments do not nest.
//! - Comment markers inside `"..."` literals are left alone.

use crate::error::{Result, SplitError};
use crate::text::line_number_at_offset;

pub fn strip_comments(source: &str) -> Result<String> {
    let bytes = source.as_bytes();
    let mut output = String::with_capacity(source.len());
    // Start of the code run not yet copied to `output`
    let mut pending = 0;
    let mut i = 0;

    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'"', _) => {
                i = skip_string(bytes, i);
            }
            (b'/', Some(b'/')) => {
                output.push_str(&source[pending..i]);
                trim_trailing_blanks(&mut output);

                i = match source[i..].find('\n') {
                    Some(offset) => {
                        output.push('\n');
                        i + offset + 1
                    }
                    None => bytes.len(),
                };
                pending = i;
            }
            (b'/', Some(b'*')) => {
                output.push_str(&source[pending..i]);

                i = match source[i + 2..].find("*/") {
                    Some(offset) => i + 2 + offset + 2,
                    None => {
                        return Err(SplitError::UnterminatedComment {
                            line: line_number_at_offset(source, i),
                        })
                    }
                };
                pending = i;
            }
            _ => i += 1,
        }
    }

    output.push_str(&source[pending..]);
    Ok(output)
}

/// Returns the offset just past the string literal opening at `start`.
/// Verilog strings cannot span lines, so an unclosed literal ends at the newline.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            b'\n' => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn trim_trailing_blanks(output: &mut String) {
    let trimmed = output.trim_end_matches([' ', '\t']).len();
    output.truncate(trimmed);
}
