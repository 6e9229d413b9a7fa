//! # sl-infra
//!
//! Adapters behind the `sl-core` ports: the JSON file client store, the HTTP
//! client for the SmartLearn API, config file loading and app directories.

pub mod app_dirs;
pub mod config;
pub mod remote;
pub mod storage;

pub use app_dirs::DirsAppDirsAdapter;
pub use config::load_config;
pub use remote::HttpApiClient;
pub use storage::JsonFileStore;
