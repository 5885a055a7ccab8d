use std::fs;
use std::path::{Path, PathBuf};

use crate::config::MODULE_FILE_EXTENSION;
use crate::error::{Result, SplitError};
use crate::extract::ModuleBlock;

/// Wipe `dir` (if present) and recreate it empty.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|e| SplitError::io(dir, e))?;
    }
    fs::create_dir_all(dir).map_err(|e| SplitError::io(dir, e))
}

pub fn module_file_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, MODULE_FILE_EXTENSION))
}

/// Write `block` verbatim to `<dir>/<name>.v` and return the file path.
pub fn write_module(dir: &Path, block: &ModuleBlock<'_>) -> Result<PathBuf> {
    let path = module_file_path(dir, block.name);
    fs::write(&path, block.text).map_err(|e| SplitError::io(&path, e))?;
    Ok(path)
}
