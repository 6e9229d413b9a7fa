//! # Application Dependencies
//!
//! Dependency grouping for [`crate::App`] construction.
//!
//! **Note**: This is NOT a Builder pattern. No build steps, no defaults,
//! only parameter grouping.

use std::sync::Arc;

use sl_core::ports::{AuthPort, ClientStoragePort, OnboardingRemotePort};
use sl_core::PersistenceStrategy;

/// All dependencies are required; the remote ports are present even when the
/// local strategy is configured, since sign-in always talks to the API.
pub struct AppDeps {
    pub storage: Arc<dyn ClientStoragePort>,
    pub onboarding_remote: Arc<dyn OnboardingRemotePort>,
    pub auth: Arc<dyn AuthPort>,
    pub strategy: PersistenceStrategy,
}
