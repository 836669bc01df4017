#[cfg(feature = "cli")]
pub mod cli;
pub mod dashboard;
pub mod env;
pub mod push;
pub mod server;
pub mod storage;

pub use env::Environment;
