use once_cell::sync::Lazy;
use regex::Regex;

use super::declaration::parse_module_name;
use super::ModuleBlock;
use crate::error::{Result, SplitError};
use crate::text::line_number_at_offset;

// A whole string literal, or a module/macromodule/endmodule candidate.
// String matches are consumed and ignored so keywords inside them never count.
// `$` is an identifier character in Verilog, so word boundaries are checked by
// hand in `is_identifier_byte` instead of with `\b`.
static KEYWORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:[^"\\\n]|\\.)*"|((?:end|macro)?module)"#).unwrap()
});

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Module,
    EndModule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Searching,
    Done,
}

/// Walks comment-stripped source and yields one [`ModuleBlock`] per
/// `module ... endmodule` pair.
///
/// The scanner owns an explicit cursor: each block is consumed by moving the
/// cursor past its `endmodule`, and the scan is `Done` once no further
/// `module` keyword exists or an error has been returned.
pub struct ModuleScanner<'a> {
    source: &'a str,
    cursor: usize,
    state: ScanState,
}

impl<'a> ModuleScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            cursor: 0,
            state: ScanState::Searching,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text not yet consumed by the scan
    pub fn remaining(&self) -> &'a str {
        &self.source[self.cursor..]
    }

    fn keywords(&self) -> impl Iterator<Item = (Keyword, usize, usize)> + 'a {
        let source: &'a str = self.source;
        let base = self.cursor;
        KEYWORD_PATTERN
            .captures_iter(&source[base..])
            .filter_map(move |cap| {
                let m = cap.get(1)?;
                let bytes = source.as_bytes();
                let (start, end) = (base + m.start(), base + m.end());
                let glued_before = start > 0 && is_identifier_byte(bytes[start - 1]);
                let glued_after = bytes.get(end).is_some_and(|&b| is_identifier_byte(b));
                if glued_before || glued_after {
                    return None;
                }

                let keyword = match m.as_str() {
                    "endmodule" => Keyword::EndModule,
                    _ => Keyword::Module,
                };
                Some((keyword, start, end))
            })
    }

    fn next_block(&mut self) -> Result<Option<ModuleBlock<'a>>> {
        let mut keywords = self.keywords();

        // Stray endmodules ahead of the next module are skipped
        let start = loop {
            match keywords.next() {
                None => return Ok(None),
                Some((Keyword::Module, start, _)) => break start,
                Some((Keyword::EndModule, _, _)) => continue,
            }
        };

        let mut depth = 1usize;
        let mut end = None;
        for (keyword, _, keyword_end) in keywords {
            match keyword {
                Keyword::Module => depth += 1,
                Keyword::EndModule => {
                    depth -= 1;
                    if depth == 0 {
                        end = Some(keyword_end);
                        break;
                    }
                }
            }
        }

        let line = line_number_at_offset(self.source, start);
        let tail = &self.source[start..];

        let Some(end) = end else {
            return Err(SplitError::UnterminatedModule {
                name: parse_module_name(tail).unwrap_or("<unnamed>").to_string(),
                line,
            });
        };

        let name = parse_module_name(tail).ok_or(SplitError::UnnamedModule { line })?;

        self.cursor = end;
        Ok(Some(ModuleBlock {
            name,
            text: &self.source[start..end],
            line,
            offset: start,
        }))
    }
}

impl<'a> Iterator for ModuleScanner<'a> {
    type Item = Result<ModuleBlock<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == ScanState::Done {
            return None;
        }

        match self.next_block() {
            Ok(Some(block)) => Some(Ok(block)),
            Ok(None) => {
                self.state = ScanState::Done;
                None
            }
            Err(e) => {
                self.state = ScanState::Done;
                Some(Err(e))
            }
        }
    }
}
