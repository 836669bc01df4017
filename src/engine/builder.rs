use crate::config::env::Environment;
use crate::domain::model::{ApiConfig, DashboardConfig, PushConfig, ServerConfig, StorageConfig};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Log the generated configuration (secrets masked) after every build.
    pub emit_dump: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { emit_dump: true }
    }
}

/// Assembles an [`ApiConfig`] for a site from an environment snapshot.
///
/// Building never fails: incomplete storage or push settings fall back to the
/// default adapters, and unset identity fields fall back to fixed defaults.
/// Both adapter choices are made here, once, and stored as plain data.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    site_root: PathBuf,
    options: BuildOptions,
}

impl ConfigBuilder {
    pub fn new(site_root: impl Into<PathBuf>) -> Self {
        Self {
            site_root: site_root.into(),
            options: BuildOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn site_root(&self) -> &Path {
        &self.site_root
    }

    pub fn build(&self, env: &Environment) -> ApiConfig {
        let push = PushConfig::from_env(env);
        let storage = StorageConfig::from_env(env);
        let server = ServerConfig::from_env(&self.site_root, env, &storage, &push);
        let dashboard = DashboardConfig::from_server(&server, env);

        tracing::debug!(
            files_adapter = %server.files_adapter.kind(),
            push_adapter = %server.push.adapter.kind(),
            "Adapter selection complete"
        );

        let config = ApiConfig {
            server,
            dashboard,
            push,
            storage,
        };

        if self.options.emit_dump {
            dump(&config);
        }

        config
    }
}

/// Shorthand for `ConfigBuilder::new(site_root).with_options(options).build(env)`.
pub fn build_api_config(
    site_root: impl AsRef<Path>,
    env: &Environment,
    options: BuildOptions,
) -> ApiConfig {
    ConfigBuilder::new(site_root.as_ref())
        .with_options(options)
        .build(env)
}

fn dump(config: &ApiConfig) {
    tracing::info!("parse-azure-config generated the following configuration:");
    match serde_json::to_string_pretty(&config.redacted()) {
        Ok(text) => tracing::info!("{}", text),
        // 輸出失敗不影響設定本身
        Err(e) => tracing::warn!("Could not render configuration dump: {}", e),
    }
}
