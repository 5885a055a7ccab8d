use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::split::{SplitSummary, WrittenModule};

#[derive(Serialize)]
pub struct SplitReport {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub input: String,
    pub output_dir: String,
    pub modules_count: usize,
    pub modules: Vec<ModuleOutput>,
}

#[derive(Serialize, Clone)]
pub struct ModuleOutput {
    pub name: String,
    pub file: String,
    pub line: usize,
    pub bytes: usize,
}

impl ModuleOutput {
    pub fn from_written(module: &WrittenModule) -> Self {
        Self {
            name: module.name.clone(),
            file: module.path.display().to_string(),
            line: module.line,
            bytes: module.bytes,
        }
    }
}

impl SplitReport {
    pub fn from_summary(summary: &SplitSummary) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            input: summary.input.display().to_string(),
            output_dir: summary.output_dir.display().to_string(),
            modules_count: summary.modules.len(),
            modules: summary
                .modules
                .iter()
                .map(ModuleOutput::from_written)
                .collect(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
