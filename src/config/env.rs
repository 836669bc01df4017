//! Environment snapshot the builder reads from.
//!
//! | Variable | Used for | Default |
//! |----------|----------|---------|
//! | `MS_NotificationHubName` | push hub name | `<WEBSITE_SITE_NAME>-hub`, else unset |
//! | `WEBSITE_SITE_NAME` | hub fallback, dashboard app name | `Parse Server Azure` (app name) |
//! | `CUSTOMCONNSTR_MS_NotificationHubConnectionString` | push connection string | unset |
//! | `STORAGE_NAME` | storage account | unset |
//! | `STORAGE_CONTAINER` | blob container | `parse` |
//! | `STORAGE_KEY` | storage access key | unset |
//! | `APP_ID` | application id | `appId` |
//! | `MASTER_KEY` | master key | `masterKey` |
//! | `DATABASE_URI` | database connection string | `mongodb://localhost:27017/dev` |
//! | `SERVER_URL` | public base URL | `http://localhost:1337` |

use std::collections::HashMap;

pub const NOTIFICATION_HUB_NAME_ENV: &str = "MS_NotificationHubName";
pub const WEBSITE_SITE_NAME_ENV: &str = "WEBSITE_SITE_NAME";
pub const NOTIFICATION_HUB_CONNECTION_STRING_ENV: &str =
    "CUSTOMCONNSTR_MS_NotificationHubConnectionString";
pub const STORAGE_NAME_ENV: &str = "STORAGE_NAME";
pub const STORAGE_CONTAINER_ENV: &str = "STORAGE_CONTAINER";
pub const STORAGE_KEY_ENV: &str = "STORAGE_KEY";
pub const APP_ID_ENV: &str = "APP_ID";
pub const MASTER_KEY_ENV: &str = "MASTER_KEY";
pub const DATABASE_URI_ENV: &str = "DATABASE_URI";
pub const SERVER_URL_ENV: &str = "SERVER_URL";

/// Immutable name → value snapshot.
///
/// Empty values behave like unset ones everywhere the builder looks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current process environment. Variables that are not valid
    /// unicode are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Fills in names the snapshot has no value for. Non-empty existing
    /// values win; empty ones count as unset and are replaced.
    pub fn merge_missing<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in pairs {
            let slot = self.vars.entry(k.into()).or_default();
            if slot.is_empty() {
                *slot = v.into();
            }
        }
        self
    }

    /// Value of `name`, with empty strings reported as unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or(default).to_string()
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
