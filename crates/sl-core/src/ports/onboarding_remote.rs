//! Remote onboarding API port
//!
//! Used only by the remote persistence strategy. Every call carries the
//! bearer token from sign-in when there is one.

use async_trait::async_trait;

use crate::onboarding::{OnboardingProfile, StoredPreferences};
use crate::ports::errors::RemoteError;

#[async_trait]
pub trait OnboardingRemotePort: Send + Sync {
    /// `POST /onboarding/me/info`
    async fn save_info(
        &self,
        token: Option<&str>,
        profile: &OnboardingProfile,
    ) -> Result<OnboardingProfile, RemoteError>;

    /// `GET /onboarding/me/info`. `None` when the server has no name yet.
    async fn load_info(&self, token: Option<&str>) -> Result<Option<OnboardingProfile>, RemoteError>;

    /// `POST /onboarding/me/step2`
    async fn save_preferences(
        &self,
        token: Option<&str>,
        preferences: &StoredPreferences,
    ) -> Result<StoredPreferences, RemoteError>;

    /// `GET /onboarding/me/step2`
    async fn load_preferences(&self, token: Option<&str>) -> Result<StoredPreferences, RemoteError>;
}
