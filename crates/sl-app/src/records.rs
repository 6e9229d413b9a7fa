//! Typed access to the records kept in client storage.
//!
//! All reads and writes of `userType`, the onboarding records, the combined
//! profile and the session values go through [`ClientRecords`]. Each method
//! returns an explicit result; callers decide whether a failure blocks the
//! flow or is only logged.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sl_core::onboarding::{OnboardingPreferences, OnboardingProfile, StoredPreferences, UserProfile};
use sl_core::ports::{ClientStoragePort, StorageError};
use sl_core::{Role, StorageKey};
use tracing::warn;

#[derive(Clone)]
pub struct ClientRecords {
    storage: Arc<dyn ClientStoragePort>,
}

impl ClientRecords {
    pub fn new(storage: Arc<dyn ClientStoragePort>) -> Self {
        Self { storage }
    }

    async fn get_json<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.storage.get(key).await? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    async fn set_json<T: Serialize>(&self, key: StorageKey, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|e| StorageError::Corrupt {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.storage.set(key, &json).await
    }

    // ----- role -----

    /// Persisted role. Anything but an exact role name reads as unset.
    pub async fn role(&self) -> Result<Option<Role>, StorageError> {
        let raw = self.storage.get(StorageKey::UserType).await?;
        Ok(raw.and_then(|value| {
            let role = Role::from_stored(&value);
            if role.is_none() {
                warn!(value = %value, "Ignoring unrecognized stored role");
            }
            role
        }))
    }

    pub async fn set_role(&self, role: Role) -> Result<(), StorageError> {
        self.storage.set(StorageKey::UserType, role.as_str()).await
    }

    // ----- step 1 -----

    pub async fn profile(&self) -> Result<Option<OnboardingProfile>, StorageError> {
        self.get_json(StorageKey::OnboardingStep1).await
    }

    pub async fn set_profile(&self, profile: &OnboardingProfile) -> Result<(), StorageError> {
        self.set_json(StorageKey::OnboardingStep1, profile).await
    }

    // ----- step 2 -----

    pub async fn preferences(&self) -> Result<Option<StoredPreferences>, StorageError> {
        self.get_json(StorageKey::OnboardingStep2).await
    }

    pub async fn set_preferences(&self, preferences: &OnboardingPreferences) -> Result<(), StorageError> {
        self.set_json(StorageKey::OnboardingStep2, preferences).await
    }

    // ----- combined profile -----

    pub async fn user_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        self.get_json(StorageKey::UserProfile).await
    }

    /// Merge step-1 fields into the combined profile when a session email is
    /// known. Returns whether a merge happened.
    pub async fn merge_profile(&self, profile: &OnboardingProfile) -> Result<bool, StorageError> {
        let Some(email) = self.session_email().await? else {
            return Ok(false);
        };
        let mut combined = match self.user_profile().await? {
            Some(existing) => existing,
            None => UserProfile::new(email.clone()),
        };
        combined.email = email;
        combined.merge_profile(profile);
        self.set_json(StorageKey::UserProfile, &combined).await?;
        Ok(true)
    }

    /// Merge step-2 fields into the combined profile if one exists.
    /// Returns whether a merge happened.
    pub async fn merge_preferences(&self, preferences: &OnboardingPreferences) -> Result<bool, StorageError> {
        let Some(mut combined) = self.user_profile().await? else {
            return Ok(false);
        };
        combined.merge_preferences(preferences);
        self.set_json(StorageKey::UserProfile, &combined).await?;
        Ok(true)
    }

    // ----- session -----

    pub async fn session_email(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .storage
            .get(StorageKey::SessionEmail)
            .await?
            .filter(|email| !email.trim().is_empty()))
    }

    pub async fn set_session_email(&self, email: &str) -> Result<(), StorageError> {
        self.storage.set(StorageKey::SessionEmail, email).await
    }

    pub async fn token(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .storage
            .get(StorageKey::AuthToken)
            .await?
            .filter(|token| !token.is_empty()))
    }

    pub async fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(StorageKey::AuthToken, token).await
    }

    /// Forget the signed-in session: token and role.
    pub async fn clear_session(&self) -> Result<(), StorageError> {
        self.storage.remove(StorageKey::AuthToken).await?;
        self.storage.remove(StorageKey::UserType).await
    }

    /// Raw dump of every known key, for diagnostics.
    pub async fn snapshot(&self) -> Result<Vec<(StorageKey, Option<String>)>, StorageError> {
        let mut entries = Vec::with_capacity(StorageKey::ALL.len());
        for key in StorageKey::ALL {
            entries.push((key, self.storage.get(key).await?));
        }
        Ok(entries)
    }
}
