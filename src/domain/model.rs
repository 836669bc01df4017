use crate::domain::ports::AdapterKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const REDACTED: &str = "********";

/// Aggregate handed to the hosting server and dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
    pub push: PushConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub app_id: String,
    pub master_key: String,
    #[serde(rename = "databaseURI")]
    pub database_uri: String,
    #[serde(rename = "serverURL")]
    pub server_url: String,
    pub cloud: PathBuf,
    pub files_adapter: FilesAdapterChoice,
    pub push: PushOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushOptions {
    pub adapter: PushAdapterChoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub container: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    pub direct_access: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushConfig {
    #[serde(rename = "HubName", default, skip_serializing_if = "Option::is_none")]
    pub hub_name: Option<String>,
    #[serde(
        rename = "ConnectionString",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub connection_string: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub apps: Vec<DashboardApp>,
    pub users: Vec<DashboardUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardApp {
    pub app_id: String,
    #[serde(rename = "serverURL")]
    pub server_url: String,
    pub master_key: String,
    pub app_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardUser {
    pub user: String,
    pub pass: String,
}

/// Files adapter picked at build time. Resolved into a concrete adapter only
/// when the hosting server asks for one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FilesAdapterChoice {
    Default,
    Azure(AzureStorageCredentials),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureStorageCredentials {
    pub name: String,
    pub container: String,
    pub access_key: String,
    pub direct_access: bool,
}

/// Push adapter picked at build time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PushAdapterChoice {
    Default,
    Azure(AzurePushCredentials),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzurePushCredentials {
    #[serde(rename = "HubName")]
    pub hub_name: String,
    #[serde(rename = "ConnectionString")]
    pub connection_string: String,
}

impl FilesAdapterChoice {
    pub fn kind(&self) -> AdapterKind {
        match self {
            FilesAdapterChoice::Default => AdapterKind::Default,
            FilesAdapterChoice::Azure(_) => AdapterKind::Azure,
        }
    }

    pub fn is_default(&self) -> bool {
        self.kind() == AdapterKind::Default
    }
}

impl PushAdapterChoice {
    pub fn kind(&self) -> AdapterKind {
        match self {
            PushAdapterChoice::Default => AdapterKind::Default,
            PushAdapterChoice::Azure(_) => AdapterKind::Azure,
        }
    }

    pub fn is_default(&self) -> bool {
        self.kind() == AdapterKind::Default
    }
}

fn redact(value: &mut String) {
    if !value.is_empty() {
        *value = REDACTED.to_string();
    }
}

fn redact_opt(value: &mut Option<String>) {
    if let Some(v) = value.as_mut() {
        redact(v);
    }
}

impl ApiConfig {
    /// Copy with every secret replaced by [`REDACTED`]: master keys, the
    /// storage access key, the hub connection string and dashboard passwords.
    pub fn redacted(&self) -> ApiConfig {
        let mut copy = self.clone();

        redact(&mut copy.server.master_key);
        if let FilesAdapterChoice::Azure(creds) = &mut copy.server.files_adapter {
            redact(&mut creds.access_key);
        }
        if let PushAdapterChoice::Azure(creds) = &mut copy.server.push.adapter {
            redact(&mut creds.connection_string);
        }
        for app in &mut copy.dashboard.apps {
            redact(&mut app.master_key);
        }
        for user in &mut copy.dashboard.users {
            redact(&mut user.pass);
        }
        redact_opt(&mut copy.push.connection_string);
        redact_opt(&mut copy.storage.access_key);

        copy
    }
}
