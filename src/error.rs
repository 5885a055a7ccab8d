use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, SplitError>;

/// Errors raised while splitting a netlist into per-module files.
///
/// Line numbers are 1-based. For `UnterminatedComment` they point into the raw
/// input; for the module errors they point into the comment-stripped text.
#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unterminated block comment starting at line {line}")]
    UnterminatedComment { line: usize },
    #[error("module block at line {line} has no parseable name")]
    UnnamedModule { line: usize },
    #[error("module `{name}` at line {line} has no matching endmodule")]
    UnterminatedModule { name: String, line: usize },
    /// Names are compared ignoring ASCII case, since `Foo.v` and `foo.v`
    /// are the same file on case-insensitive filesystems.
    #[error("module `{name}` at line {line} is defined more than once")]
    DuplicateModule { name: String, line: usize },
}

impl SplitError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SplitError::Io {
            path: path.into(),
            source,
        }
    }
}
