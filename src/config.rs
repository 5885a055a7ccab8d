use std::path::PathBuf;

/// Netlist produced by the elaboration step.
pub const DEFAULT_INPUT: &str = "build/sim/TestTop.v";

/// Directory receiving one `<module>.v` per module. Wiped on every run.
pub const DEFAULT_OUTPUT_DIR: &str = "build/sim/files";

/// Extension given to every written module file
pub const MODULE_FILE_EXTENSION: &str = "v";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl SplitConfig {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
        }
    }
}
