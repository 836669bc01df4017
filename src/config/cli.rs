use crate::engine::render::OutputFormat;
use crate::utils::error::{ConfigError, Result};
use crate::utils::validation::validate_non_empty_string;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "parse-azure-config")]
#[command(about = "Generate Parse Server and dashboard configuration for Azure App Service")]
pub struct CliConfig {
    /// Site root; cloud code is expected at <site-root>/cloud/main.js
    #[arg(long, default_value = ".")]
    pub site_root: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the configuration to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Fail when the generated configuration does not pass strict checks
    #[arg(long)]
    pub strict: bool,

    /// Print secrets instead of masking them
    #[arg(long)]
    pub show_secrets: bool,

    /// Load additional variables from a dotenv file; process variables win
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Skip the configuration dump normally written to the log
    #[arg(long)]
    pub quiet: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("site_root", &self.site_root.to_string_lossy())?;
        if let Some(output) = &self.output {
            validate_non_empty_string("output", &output.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Reads `KEY=value` pairs from a dotenv file without touching the process
/// environment.
pub fn load_env_file(path: &Path) -> Result<Vec<(String, String)>> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| ConfigError::EnvFileError {
        message: format!("{}: {}", path.display(), e),
    })?;

    iter.map(|item| {
        item.map_err(|e| ConfigError::EnvFileError {
            message: format!("{}: {}", path.display(), e),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["parse-azure-config"]);
        assert_eq!(config.site_root, PathBuf::from("."));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.strict);
        assert!(!config.quiet);
        assert!(config.output.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "parse-azure-config",
            "--site-root",
            "/home/site/wwwroot",
            "--format",
            "toml",
            "--strict",
            "--output",
            "out/config.toml",
            "--quiet",
        ]);
        assert_eq!(config.site_root, PathBuf::from("/home/site/wwwroot"));
        assert_eq!(config.format, OutputFormat::Toml);
        assert!(config.strict);
        assert_eq!(config.output, Some(PathBuf::from("out/config.toml")));
        assert!(config.quiet);
    }

    #[test]
    fn test_load_env_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "APP_ID=fromFile").unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "STORAGE_NAME=\"acct\"").unwrap();

        let pairs = load_env_file(file.path()).unwrap();
        assert!(pairs.contains(&("APP_ID".to_string(), "fromFile".to_string())));
        assert!(pairs.contains(&("STORAGE_NAME".to_string(), "acct".to_string())));
    }

    #[test]
    fn test_missing_env_file_is_an_error() {
        let err = load_env_file(Path::new("/definitely/not/here/.env")).unwrap_err();
        assert!(matches!(err, ConfigError::EnvFileError { .. }));
    }
}
