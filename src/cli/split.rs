use anyhow::{Context, Result};
use console::{style, Emoji};

use crate::config::SplitConfig;
use crate::emit::SplitReport;
use crate::split::{split_file_with, WrittenModule};

static SPLITTING: Emoji<'_, '_> = Emoji("✂️  ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static FILE: Emoji<'_, '_> = Emoji("📄 ", "");

pub fn run_split(config: &SplitConfig, verbose: bool, json: bool) -> Result<()> {
    let show_progress = verbose && !json;

    if show_progress {
        println!(
            "{}Splitting {} into {}",
            SPLITTING,
            style(config.input.display()).cyan(),
            style(config.output_dir.display()).cyan()
        );
    }

    let summary = split_file_with(config, |module: &WrittenModule| {
        if show_progress {
            println!(
                "  {}{} {}",
                FILE,
                style(module.path.display()).green(),
                style(format!("(L{}, {} bytes)", module.line, module.bytes)).dim()
            );
        }
    })
    .with_context(|| format!("failed to split {}", config.input.display()))?;

    if json {
        println!("{}", SplitReport::from_summary(&summary).to_json());
        return Ok(());
    }

    println!(
        "{}Wrote {} module files to {}",
        SUCCESS,
        style(summary.modules.len()).green(),
        style(summary.output_dir.display()).cyan()
    );

    Ok(())
}
