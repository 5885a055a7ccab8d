mod args;
mod split;

pub use args::Args;
pub use split::run_split;
