// Adapters layer: concrete files and push adapters behind the domain ports.

pub mod files;
pub mod push;

pub use files::{AzureStorageAdapter, DefaultFilesAdapter};
pub use push::{AzurePushAdapter, DefaultPushAdapter};
