//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and infrastructure
//! implementations, keeping the domain independent of storage and HTTP.

pub mod app_dirs;
pub mod auth;
pub mod errors;
pub mod onboarding_remote;
pub mod storage;

pub use app_dirs::AppDirsPort;
pub use auth::AuthPort;
pub use errors::{AppDirsError, RemoteError, StorageError};
pub use onboarding_remote::OnboardingRemotePort;
pub use storage::ClientStoragePort;
