pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod split;
pub mod strip;
mod text;

pub use config::SplitConfig;
pub use error::{Result, SplitError};
pub use extract::{extract_modules, ModuleBlock, ModuleScanner};
pub use split::{split_file, split_file_with, SplitSummary, WrittenModule};
pub use strip::strip_comments;
