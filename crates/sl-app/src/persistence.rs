//! Onboarding persistence strategies.
//!
//! A deployment picks exactly one strategy. The strategy, not the call site,
//! decides what a failed save means:
//!
//! - [`LocalStepPersistence`] writes to client storage and always reports
//!   [`SaveOutcome::Saved`]; write failures are logged only.
//! - [`RemoteStepPersistence`] waits for the API and reports
//!   [`SaveOutcome::Blocked`] on any failure so the step does not advance.

use std::sync::Arc;

use async_trait::async_trait;
use sl_core::onboarding::{OnboardingPreferences, OnboardingProfile, StoredPreferences};
use sl_core::ports::OnboardingRemotePort;
use sl_core::PersistenceStrategy;
use tracing::{debug, warn};

use crate::records::ClientRecords;

/// Result of saving a wizard step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The step may advance.
    Saved,
    /// The step must not advance; `message` is shown inline.
    Blocked { message: String },
}

#[async_trait]
pub trait StepPersistence: Send + Sync {
    fn strategy(&self) -> PersistenceStrategy;

    /// Saved step-1 record for resume. Load failures read as "nothing saved".
    async fn load_profile(&self) -> Option<OnboardingProfile>;

    async fn save_profile(&self, profile: &OnboardingProfile) -> SaveOutcome;

    /// Saved step-2 record for resume. Load failures read as "nothing saved".
    async fn load_preferences(&self) -> Option<StoredPreferences>;

    async fn save_preferences(&self, preferences: &OnboardingPreferences) -> SaveOutcome;
}

/// Client-storage-only persistence.
pub struct LocalStepPersistence {
    records: ClientRecords,
}

impl LocalStepPersistence {
    pub fn new(records: ClientRecords) -> Self {
        Self { records }
    }
}

#[async_trait]
impl StepPersistence for LocalStepPersistence {
    fn strategy(&self) -> PersistenceStrategy {
        PersistenceStrategy::Local
    }

    async fn load_profile(&self) -> Option<OnboardingProfile> {
        match self.records.profile().await {
            Ok(profile) => profile,
            Err(err) => {
                warn!(error = %err, "Failed to load saved step-1 record");
                None
            }
        }
    }

    async fn save_profile(&self, profile: &OnboardingProfile) -> SaveOutcome {
        if let Err(err) = self.records.set_profile(profile).await {
            warn!(error = %err, "Failed to persist step-1 record, continuing");
        }
        match self.records.merge_profile(profile).await {
            Ok(merged) => debug!(merged, "Step-1 record merged into user profile"),
            Err(err) => warn!(error = %err, "Failed to merge step-1 record into user profile"),
        }
        SaveOutcome::Saved
    }

    async fn load_preferences(&self) -> Option<StoredPreferences> {
        match self.records.preferences().await {
            Ok(preferences) => preferences,
            Err(err) => {
                warn!(error = %err, "Failed to load saved step-2 record");
                None
            }
        }
    }

    async fn save_preferences(&self, preferences: &OnboardingPreferences) -> SaveOutcome {
        if let Err(err) = self.records.set_preferences(preferences).await {
            warn!(error = %err, "Failed to persist step-2 record, continuing");
        }
        match self.records.merge_preferences(preferences).await {
            Ok(merged) => debug!(merged, "Step-2 record merged into user profile"),
            Err(err) => warn!(error = %err, "Failed to merge step-2 record into user profile"),
        }
        SaveOutcome::Saved
    }
}

/// API-confirmed persistence.
pub struct RemoteStepPersistence {
    records: ClientRecords,
    remote: Arc<dyn OnboardingRemotePort>,
}

impl RemoteStepPersistence {
    pub fn new(records: ClientRecords, remote: Arc<dyn OnboardingRemotePort>) -> Self {
        Self { records, remote }
    }

    async fn token(&self) -> Option<String> {
        match self.records.token().await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "Failed to read auth token, sending request without it");
                None
            }
        }
    }
}

#[async_trait]
impl StepPersistence for RemoteStepPersistence {
    fn strategy(&self) -> PersistenceStrategy {
        PersistenceStrategy::Remote
    }

    async fn load_profile(&self) -> Option<OnboardingProfile> {
        let token = self.token().await;
        match self.remote.load_info(token.as_deref()).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!(error = %err, "Failed to load step-1 record from API");
                None
            }
        }
    }

    async fn save_profile(&self, profile: &OnboardingProfile) -> SaveOutcome {
        let token = self.token().await;
        if let Err(err) = self.remote.save_info(token.as_deref(), profile).await {
            warn!(error = ?err, "API rejected step-1 record");
            return SaveOutcome::Blocked {
                message: err.to_string(),
            };
        }
        if let Err(err) = self.records.merge_profile(profile).await {
            warn!(error = %err, "Failed to merge step-1 record into user profile");
        }
        SaveOutcome::Saved
    }

    async fn load_preferences(&self) -> Option<StoredPreferences> {
        let token = self.token().await;
        match self.remote.load_preferences(token.as_deref()).await {
            Ok(preferences) => Some(preferences),
            Err(err) => {
                warn!(error = %err, "Failed to load step-2 record from API");
                None
            }
        }
    }

    async fn save_preferences(&self, preferences: &OnboardingPreferences) -> SaveOutcome {
        let payload = StoredPreferences::from(preferences);
        if let Err(err) = payload.validate() {
            return SaveOutcome::Blocked {
                message: err.to_string(),
            };
        }
        let token = self.token().await;
        if let Err(err) = self.remote.save_preferences(token.as_deref(), &payload).await {
            warn!(error = ?err, "API rejected step-2 record");
            return SaveOutcome::Blocked {
                message: err.to_string(),
            };
        }
        if let Err(err) = self.records.merge_preferences(preferences).await {
            warn!(error = %err, "Failed to merge step-2 record into user profile");
        }
        SaveOutcome::Saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeRemote, MemoryStorage};
    use sl_core::onboarding::AgeRange;
    use sl_core::ports::RemoteError;
    use sl_core::StorageKey;

    fn ada() -> OnboardingProfile {
        OnboardingProfile {
            name: "Ada".to_string(),
            age_range: AgeRange::NineToEleven,
            grade: None,
        }
    }

    #[tokio::test]
    async fn local_save_advances_even_when_storage_fails() {
        let storage = Arc::new(MemoryStorage::read_only());
        let persistence = LocalStepPersistence::new(ClientRecords::new(storage.clone()));

        assert_eq!(persistence.save_profile(&ada()).await, SaveOutcome::Saved);
        assert_eq!(
            persistence
                .save_preferences(&OnboardingPreferences::default())
                .await,
            SaveOutcome::Saved
        );
        assert!(storage.raw(StorageKey::OnboardingStep1).is_none());
    }

    #[tokio::test]
    async fn local_load_treats_corrupt_record_as_absent() {
        let storage = Arc::new(MemoryStorage::default());
        storage.put(StorageKey::OnboardingStep1, "not json");
        let persistence = LocalStepPersistence::new(ClientRecords::new(storage));

        assert_eq!(persistence.load_profile().await, None);
    }

    #[tokio::test]
    async fn remote_save_blocks_on_rejection_with_server_detail() {
        let storage = Arc::new(MemoryStorage::default());
        storage.put(StorageKey::AuthToken, "tok");
        storage.put(StorageKey::SessionEmail, "ada@example.com");
        let remote = Arc::new(FakeRemote::failing(RemoteError::rejected(
            401,
            Some("Not authenticated".to_string()),
        )));

        let persistence =
            RemoteStepPersistence::new(ClientRecords::new(storage.clone()), remote.clone());

        assert_eq!(
            persistence.save_profile(&ada()).await,
            SaveOutcome::Blocked {
                message: "Not authenticated".to_string()
            }
        );
        assert_eq!(*remote.tokens.lock().unwrap(), vec![Some("tok".to_string())]);
        assert!(storage.raw(StorageKey::UserProfile).is_none());
    }

    #[tokio::test]
    async fn remote_save_reports_generic_network_message() {
        let remote = Arc::new(FakeRemote::failing(RemoteError::Network(
            "connection refused".to_string(),
        )));
        let persistence = RemoteStepPersistence::new(
            ClientRecords::new(Arc::new(MemoryStorage::default())),
            remote,
        );

        let outcome = persistence
            .save_preferences(&OnboardingPreferences::default())
            .await;
        assert_eq!(
            outcome,
            SaveOutcome::Blocked {
                message: "Network error. Please check your connection and try again.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn remote_success_advances_and_sends_full_preference_maps() {
        let remote = Arc::new(FakeRemote::default());
        let persistence = RemoteStepPersistence::new(
            ClientRecords::new(Arc::new(MemoryStorage::default())),
            remote.clone(),
        );

        assert_eq!(
            persistence
                .save_preferences(&OnboardingPreferences::default())
                .await,
            SaveOutcome::Saved
        );
        let sent = remote.preferences.lock().unwrap().clone().unwrap();
        assert_eq!(sent.subjects.len(), 4);
        assert_eq!(sent.styles.len(), 3);
        assert_eq!(*remote.tokens.lock().unwrap(), vec![None]);
    }

    #[tokio::test]
    async fn remote_load_failure_reads_as_nothing_saved() {
        let remote = Arc::new(FakeRemote::failing(RemoteError::rejected(500, None)));
        let persistence = RemoteStepPersistence::new(
            ClientRecords::new(Arc::new(MemoryStorage::default())),
            remote,
        );

        assert_eq!(persistence.load_profile().await, None);
        assert_eq!(persistence.load_preferences().await, None);
        assert_eq!(persistence.strategy(), PersistenceStrategy::Remote);
    }
}
