mod files;
mod json;

pub use files::{module_file_path, prepare_output_dir, write_module};
pub use json::{ModuleOutput, SplitReport};
