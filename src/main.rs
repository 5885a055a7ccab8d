use anyhow::Result;
use clap::Parser;

use vsplit::cli::{run_split, Args};
use vsplit::SplitConfig;

fn main() -> Result<()> {
    let args = Args::parse();
    run_split(&SplitConfig::default(), args.verbose, args.json)
}
