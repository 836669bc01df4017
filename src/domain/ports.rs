use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterKind {
    Default,
    Azure,
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterKind::Default => f.write_str("default"),
            AdapterKind::Azure => f.write_str("azure"),
        }
    }
}

/// File storage capability the hosting server plugs in.
pub trait FilesAdapter: Send + Sync + fmt::Debug {
    fn kind(&self) -> AdapterKind;

    /// Public location of `filename` for the app served at `server_url`.
    fn file_location(&self, server_url: &str, app_id: &str, filename: &str) -> String;
}

/// Push delivery capability the hosting server plugs in.
pub trait PushAdapter: Send + Sync + fmt::Debug {
    fn kind(&self) -> AdapterKind;

    /// Installation device types this adapter can deliver to.
    fn valid_push_types(&self) -> &'static [&'static str];
}
