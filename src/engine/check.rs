use crate::domain::model::{ApiConfig, FilesAdapterChoice};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_database_uri, validate_non_empty_string, validate_url, Validate,
};

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("appId", &self.server.app_id)?;
        validate_non_empty_string("masterKey", &self.server.master_key)?;
        validate_url("serverURL", &self.server.server_url)?;
        validate_database_uri("databaseURI", &self.server.database_uri)?;

        if let FilesAdapterChoice::Azure(creds) = &self.server.files_adapter {
            validate_non_empty_string("container", &creds.container)?;
        }

        if self.server.uses_default_credentials() {
            tracing::warn!("⚠️ Configuration still uses the default app id or master key");
        }

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }
}
