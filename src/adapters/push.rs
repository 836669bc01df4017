use crate::domain::model::{AzurePushCredentials, PushAdapterChoice};
use crate::domain::ports::{AdapterKind, PushAdapter};
use url::Url;

/// Push adapter with no delivery channels configured.
#[derive(Debug, Clone, Default)]
pub struct DefaultPushAdapter;

impl DefaultPushAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl PushAdapter for DefaultPushAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Default
    }

    fn valid_push_types(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Azure Notification Hubs push adapter.
#[derive(Debug, Clone)]
pub struct AzurePushAdapter {
    hub_name: String,
    connection_string: String,
}

impl AzurePushAdapter {
    pub fn new(hub_name: String, connection_string: String) -> Self {
        Self {
            hub_name,
            connection_string,
        }
    }

    pub fn hub_name(&self) -> &str {
        &self.hub_name
    }

    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    fn connection_part(&self, key: &str) -> Option<&str> {
        self.connection_string
            .split(';')
            .filter_map(|part| part.split_once('='))
            .find(|(k, _)| k.trim().eq_ignore_ascii_case(key))
            .map(|(_, v)| v.trim())
    }

    /// Service Bus namespace endpoint from the `Endpoint=` part, if it parses.
    pub fn endpoint(&self) -> Option<Url> {
        self.connection_part("Endpoint").and_then(|v| Url::parse(v).ok())
    }

    pub fn shared_access_key_name(&self) -> Option<&str> {
        self.connection_part("SharedAccessKeyName")
    }
}

impl PushAdapter for AzurePushAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Azure
    }

    fn valid_push_types(&self) -> &'static [&'static str] {
        &["ios", "android"]
    }
}

impl From<&AzurePushCredentials> for AzurePushAdapter {
    fn from(creds: &AzurePushCredentials) -> Self {
        Self::new(creds.hub_name.clone(), creds.connection_string.clone())
    }
}

impl PushAdapterChoice {
    /// Builds the adapter this choice names. Calling it again yields the same
    /// kind of adapter with the same settings.
    pub fn resolve(&self) -> Box<dyn PushAdapter> {
        match self {
            PushAdapterChoice::Azure(creds) => {
                tracing::debug!("Using Azure push adapter for hub '{}'", creds.hub_name);
                Box::new(AzurePushAdapter::from(creds))
            }
            PushAdapterChoice::Default => {
                tracing::debug!("Using default push adapter");
                Box::new(DefaultPushAdapter::new())
            }
        }
    }
}
