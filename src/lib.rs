pub mod adapters;
pub mod config;
pub mod engine;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::env::Environment;
pub use engine::builder::{build_api_config, BuildOptions, ConfigBuilder};
pub use engine::render::{render, OutputFormat};
pub use domain::model::{
    ApiConfig, DashboardConfig, FilesAdapterChoice, PushAdapterChoice, PushConfig, ServerConfig,
    StorageConfig,
};
pub use domain::ports::{AdapterKind, FilesAdapter, PushAdapter};
pub use utils::error::{ConfigError, Result};
