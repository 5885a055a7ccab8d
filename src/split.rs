//! End-to-end split: read, strip comments, wipe the output directory, then
//! write one file per module block.
//!
//! The first error stops the run. Files written before it stay on disk.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::config::SplitConfig;
use crate::emit::{prepare_output_dir, write_module};
use crate::error::{Result, SplitError};
use crate::extract::{ModuleBlock, ModuleScanner};
use crate::strip::strip_comments;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenModule {
    pub name: String,
    pub path: PathBuf,
    /// Line of the `module` keyword in the comment-stripped text
    pub line: usize,
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub modules: Vec<WrittenModule>,
}

pub fn split_file(config: &SplitConfig) -> Result<SplitSummary> {
    split_file_with(config, |_| {})
}

/// Same as [`split_file`], calling `on_written` after each module file lands.
pub fn split_file_with<F>(config: &SplitConfig, mut on_written: F) -> Result<SplitSummary>
where
    F: FnMut(&WrittenModule),
{
    let raw = fs::read_to_string(&config.input).map_err(|e| SplitError::io(&config.input, e))?;
    let code = strip_comments(&raw)?;

    prepare_output_dir(&config.output_dir)?;

    // Keyed case-insensitively: `Foo.v` and `foo.v` collide on some filesystems
    let mut seen = HashSet::new();
    let mut modules = Vec::new();

    for block in ModuleScanner::new(&code) {
        let block = block?;
        if !seen.insert(block.name.to_ascii_lowercase()) {
            return Err(SplitError::DuplicateModule {
                name: block.name.to_string(),
                line: block.line,
            });
        }

        let written = emit_block(config, &block)?;
        on_written(&written);
        modules.push(written);
    }

    Ok(SplitSummary {
        input: config.input.clone(),
        output_dir: config.output_dir.clone(),
        modules,
    })
}

fn emit_block(config: &SplitConfig, block: &ModuleBlock<'_>) -> Result<WrittenModule> {
    let path = write_module(&config.output_dir, block)?;
    Ok(WrittenModule {
        name: block.name.to_string(),
        path,
        line: block.line,
        bytes: block.text.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn setup(source: &str) -> (TempDir, SplitConfig) {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("TestTop.v");
        fs::write(&input, source).unwrap();
        let config = SplitConfig::new(input, tmp.path().join("files"));
        (tmp, config)
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_split_two_modules() {
        let (_tmp, config) =
            setup("module A (input x); endmodule\nmodule B (input y); endmodule\n");

        let summary = split_file(&config).unwrap();

        assert_eq!(summary.modules.len(), 2);
        assert_eq!(listing(&config.output_dir), vec!["A.v", "B.v"]);
        assert_eq!(
            fs::read_to_string(config.output_dir.join("A.v")).unwrap(),
            "module A (input x); endmodule"
        );
        assert_eq!(
            fs::read_to_string(config.output_dir.join("B.v")).unwrap(),
            "module B (input y); endmodule"
        );
    }

    #[test]
    fn test_split_strips_comments() {
        let (_tmp, config) = setup(
            "// header comment\nmodule C (input z); // port\n  /* body\n note */ wire w;\nendmodule\n",
        );

        split_file(&config).unwrap();

        let text = fs::read_to_string(config.output_dir.join("C.v")).unwrap();
        assert!(text.starts_with("module C"));
        assert!(!text.contains("//"));
        assert!(!text.contains("/*"));
        assert_eq!(text, "module C (input z);\n   wire w;\nendmodule");
    }

    #[test]
    fn test_callback_sees_each_module() {
        let (_tmp, config) = setup("module A; endmodule\nmodule B; endmodule\n");
        let mut seen = Vec::new();

        split_file_with(&config, |m| seen.push(m.name.clone())).unwrap();

        assert_eq!(seen, vec!["A", "B"]);
    }

    #[test]
    fn test_summary_records_lines_and_sizes() {
        let (_tmp, config) = setup("\nmodule A; endmodule\n\nmodule B; endmodule\n");

        let summary = split_file(&config).unwrap();

        assert_eq!(summary.modules[0].line, 2);
        assert_eq!(summary.modules[1].line, 4);
        assert_eq!(summary.modules[0].bytes, "module A; endmodule".len());
        assert_eq!(summary.modules[1].path, config.output_dir.join("B.v"));
    }

    #[test]
    fn test_missing_input() {
        let tmp = TempDir::new().unwrap();
        let config = SplitConfig::new(tmp.path().join("absent.v"), tmp.path().join("files"));

        let err = split_file(&config).unwrap_err();

        assert!(matches!(err, SplitError::Io { .. }));
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn test_duplicate_module_keeps_first_file() {
        let (_tmp, config) =
            setup("module A (input x); endmodule\nmodule A (input y); endmodule\n");

        let err = split_file(&config).unwrap_err();

        assert!(matches!(err, SplitError::DuplicateModule { ref name, line: 2 } if name == "A"));
        assert_eq!(
            fs::read_to_string(config.output_dir.join("A.v")).unwrap(),
            "module A (input x); endmodule"
        );
    }

    #[test]
    fn test_duplicate_check_ignores_case() {
        let (_tmp, config) = setup("module Foo; endmodule\nmodule foo; endmodule\n");

        let err = split_file(&config).unwrap_err();

        assert!(matches!(err, SplitError::DuplicateModule { ref name, line: 2 } if name == "foo"));
        assert_eq!(listing(&config.output_dir), vec!["Foo.v"]);
    }

    #[test]
    fn test_error_leaves_partial_output() {
        let (_tmp, config) = setup("module A; endmodule\nmodule B (input y);\n");

        let err = split_file(&config).unwrap_err();

        assert!(matches!(err, SplitError::UnterminatedModule { .. }));
        assert_eq!(listing(&config.output_dir), vec!["A.v"]);
    }
}
