use crate::config::env::{
    Environment, APP_ID_ENV, DATABASE_URI_ENV, MASTER_KEY_ENV, SERVER_URL_ENV,
};
use crate::domain::model::{PushConfig, PushOptions, ServerConfig, StorageConfig};
use std::path::Path;

pub const DEFAULT_APP_ID: &str = "appId";
pub const DEFAULT_MASTER_KEY: &str = "masterKey";
pub const DEFAULT_DATABASE_URI: &str = "mongodb://localhost:27017/dev";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:1337";
pub const MOUNT_PATH: &str = "/parse";

impl ServerConfig {
    /// Server identity from `env`, with adapter choices decided from the
    /// storage and push groups.
    pub fn from_env(
        site_root: &Path,
        env: &Environment,
        storage: &StorageConfig,
        push: &PushConfig,
    ) -> Self {
        let app_id = env.get_or(APP_ID_ENV, DEFAULT_APP_ID);
        let master_key = env.get_or(MASTER_KEY_ENV, DEFAULT_MASTER_KEY);

        if !env.is_set(APP_ID_ENV) {
            tracing::warn!(
                "⚠️ {} is not set, using the well-known default '{}'",
                APP_ID_ENV,
                DEFAULT_APP_ID
            );
        }
        if !env.is_set(MASTER_KEY_ENV) {
            tracing::warn!(
                "⚠️ {} is not set, using the well-known default master key",
                MASTER_KEY_ENV
            );
        }

        Self {
            app_id,
            master_key,
            database_uri: env.get_or(DATABASE_URI_ENV, DEFAULT_DATABASE_URI),
            server_url: format!("{}{}", env.get_or(SERVER_URL_ENV, DEFAULT_SERVER_URL), MOUNT_PATH),
            cloud: site_root.join("cloud").join("main.js"),
            files_adapter: storage.adapter_choice(),
            push: PushOptions {
                adapter: push.adapter_choice(),
            },
        }
    }

    pub fn uses_default_credentials(&self) -> bool {
        self.app_id == DEFAULT_APP_ID || self.master_key == DEFAULT_MASTER_KEY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn build(env: &Environment) -> ServerConfig {
        ServerConfig::from_env(
            Path::new("/home/site/wwwroot"),
            env,
            &StorageConfig::from_env(env),
            &PushConfig::from_env(env),
        )
    }

    #[test]
    fn test_defaults() {
        let server = build(&Environment::new());
        assert_eq!(server.app_id, "appId");
        assert_eq!(server.master_key, "masterKey");
        assert_eq!(server.database_uri, "mongodb://localhost:27017/dev");
        assert_eq!(server.server_url, "http://localhost:1337/parse");
        assert_eq!(server.cloud, PathBuf::from("/home/site/wwwroot/cloud/main.js"));
        assert!(server.files_adapter.is_default());
        assert!(server.push.adapter.is_default());
        assert!(server.uses_default_credentials());
    }

    #[test]
    fn test_server_url_is_suffixed_verbatim() {
        let env = Environment::from_pairs([(SERVER_URL_ENV, "https://mysite.azurewebsites.net")]);
        assert_eq!(build(&env).server_url, "https://mysite.azurewebsites.net/parse");

        // no trailing slash normalization
        let env = Environment::from_pairs([(SERVER_URL_ENV, "https://mysite.azurewebsites.net/")]);
        assert_eq!(build(&env).server_url, "https://mysite.azurewebsites.net//parse");
    }

    #[test]
    fn test_explicit_identity() {
        let env = Environment::from_pairs([
            (APP_ID_ENV, "prod-app"),
            (MASTER_KEY_ENV, "s3cret"),
            (DATABASE_URI_ENV, "mongodb://db.internal:27017/prod"),
        ]);
        let server = build(&env);
        assert_eq!(server.app_id, "prod-app");
        assert_eq!(server.master_key, "s3cret");
        assert_eq!(server.database_uri, "mongodb://db.internal:27017/prod");
        assert!(!server.uses_default_credentials());
    }
}
