use crate::domain::model::{AzureStorageCredentials, FilesAdapterChoice};
use crate::domain::ports::{AdapterKind, FilesAdapter};
use url::Url;

/// Appends `segments` to `base` as percent-encoded path segments. Falls back
/// to plain joining when `base` is not an absolute URL.
fn join_segments(base: &str, segments: &[&str]) -> String {
    match Url::parse(base) {
        Ok(mut url) if !url.cannot_be_a_base() => {
            if let Ok(mut path) = url.path_segments_mut() {
                path.pop_if_empty().extend(segments);
            }
            url.to_string()
        }
        _ => {
            let mut out = base.trim_end_matches('/').to_string();
            for segment in segments {
                out.push('/');
                out.push_str(segment);
            }
            out
        }
    }
}

/// Files served back through the server's own `/files` route.
#[derive(Debug, Clone, Default)]
pub struct DefaultFilesAdapter;

impl DefaultFilesAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FilesAdapter for DefaultFilesAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Default
    }

    fn file_location(&self, server_url: &str, app_id: &str, filename: &str) -> String {
        join_segments(server_url, &["files", app_id, filename])
    }
}

/// Azure Blob Storage backed files.
#[derive(Debug, Clone)]
pub struct AzureStorageAdapter {
    account: String,
    container: String,
    access_key: String,
    direct_access: bool,
}

impl AzureStorageAdapter {
    pub fn new(
        account: String,
        container: String,
        access_key: String,
        direct_access: bool,
    ) -> Self {
        Self {
            account,
            container,
            access_key,
            direct_access,
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn direct_access(&self) -> bool {
        self.direct_access
    }

    pub fn container_url(&self) -> String {
        format!("https://{}.blob.core.windows.net/{}", self.account, self.container)
    }
}

impl FilesAdapter for AzureStorageAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::Azure
    }

    fn file_location(&self, server_url: &str, app_id: &str, filename: &str) -> String {
        if self.direct_access {
            join_segments(&self.container_url(), &[filename])
        } else {
            join_segments(server_url, &["files", app_id, filename])
        }
    }
}

impl From<&AzureStorageCredentials> for AzureStorageAdapter {
    fn from(creds: &AzureStorageCredentials) -> Self {
        Self::new(
            creds.name.clone(),
            creds.container.clone(),
            creds.access_key.clone(),
            creds.direct_access,
        )
    }
}

impl FilesAdapterChoice {
    /// Builds the adapter this choice names. Calling it again yields the same
    /// kind of adapter with the same settings.
    pub fn resolve(&self) -> Box<dyn FilesAdapter> {
        match self {
            FilesAdapterChoice::Azure(creds) => {
                tracing::debug!(
                    "Using Azure storage adapter for container '{}' on account '{}'",
                    creds.container,
                    creds.name
                );
                Box::new(AzureStorageAdapter::from(creds))
            }
            FilesAdapterChoice::Default => {
                tracing::debug!("Using default files adapter");
                Box::new(DefaultFilesAdapter::new())
            }
        }
    }
}
