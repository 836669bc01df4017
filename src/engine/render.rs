use crate::domain::model::ApiConfig;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Toml,
}

pub fn render(config: &ApiConfig, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Toml => toml::to_string_pretty(config)?,
    };
    Ok(text)
}

/// Writes `contents` to `path`, creating parent directories as needed.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, contents)?;
    Ok(())
}
