use crate::config::env::{Environment, STORAGE_CONTAINER_ENV, STORAGE_KEY_ENV, STORAGE_NAME_ENV};
use crate::domain::model::{AzureStorageCredentials, FilesAdapterChoice, StorageConfig};
use crate::utils::validation::{required_fields_present, RequiredField};

pub const DEFAULT_STORAGE_CONTAINER: &str = "parse";

impl StorageConfig {
    pub fn from_env(env: &Environment) -> Self {
        Self {
            name: env.get(STORAGE_NAME_ENV).map(str::to_string),
            container: env.get_or(STORAGE_CONTAINER_ENV, DEFAULT_STORAGE_CONTAINER),
            access_key: env.get(STORAGE_KEY_ENV).map(str::to_string),
            direct_access: true,
        }
    }

    pub fn required_fields(&self) -> [RequiredField<'_>; 3] {
        [
            ("name", self.name.as_deref()),
            ("container", Some(self.container.as_str())),
            ("accessKey", self.access_key.as_deref()),
        ]
    }

    /// Azure storage when every required field is set, the default files
    /// adapter otherwise.
    pub fn adapter_choice(&self) -> FilesAdapterChoice {
        let present = required_fields_present(&self.required_fields());

        match (&self.name, &self.access_key) {
            (Some(name), Some(access_key)) if present => {
                FilesAdapterChoice::Azure(AzureStorageCredentials {
                    name: name.clone(),
                    container: self.container.clone(),
                    access_key: access_key.clone(),
                    direct_access: self.direct_access,
                })
            }
            _ => FilesAdapterChoice::Default,
        }
    }
}
