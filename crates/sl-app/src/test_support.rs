//! In-memory fakes shared by unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use sl_core::onboarding::{OnboardingProfile, StoredPreferences};
use sl_core::ports::{ClientStoragePort, OnboardingRemotePort, RemoteError, StorageError};
use sl_core::StorageKey;

#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<StorageKey, String>>,
    writes_fail: AtomicBool,
}

impl MemoryStorage {
    /// Storage whose writes all fail, as when the user disabled it.
    pub fn read_only() -> Self {
        let storage = Self::default();
        storage.writes_fail.store(true, Ordering::SeqCst);
        storage
    }

    pub fn raw(&self, key: StorageKey) -> Option<String> {
        self.values.lock().unwrap().get(&key).cloned()
    }

    pub fn put(&self, key: StorageKey, value: &str) {
        self.values.lock().unwrap().insert(key, value.to_string());
    }
}

#[async_trait]
impl ClientStoragePort for MemoryStorage {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        if self.writes_fail.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.put(key, value);
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        if self.writes_fail.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.values.lock().unwrap().remove(&key);
        Ok(())
    }
}

/// Remote API fake. Records the token of every call and can be told to fail.
#[derive(Default)]
pub struct FakeRemote {
    pub info: Mutex<Option<OnboardingProfile>>,
    pub preferences: Mutex<Option<StoredPreferences>>,
    pub tokens: Mutex<Vec<Option<String>>>,
    pub fail_with: Mutex<Option<RemoteError>>,
}

impl FakeRemote {
    pub fn failing(err: RemoteError) -> Self {
        let remote = Self::default();
        *remote.fail_with.lock().unwrap() = Some(err);
        remote
    }

    fn call(&self, token: Option<&str>) -> Result<(), RemoteError> {
        self.tokens.lock().unwrap().push(token.map(str::to_string));
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OnboardingRemotePort for FakeRemote {
    async fn save_info(
        &self,
        token: Option<&str>,
        profile: &OnboardingProfile,
    ) -> Result<OnboardingProfile, RemoteError> {
        self.call(token)?;
        *self.info.lock().unwrap() = Some(profile.clone());
        Ok(profile.clone())
    }

    async fn load_info(&self, token: Option<&str>) -> Result<Option<OnboardingProfile>, RemoteError> {
        self.call(token)?;
        Ok(self.info.lock().unwrap().clone())
    }

    async fn save_preferences(
        &self,
        token: Option<&str>,
        preferences: &StoredPreferences,
    ) -> Result<StoredPreferences, RemoteError> {
        self.call(token)?;
        *self.preferences.lock().unwrap() = Some(preferences.clone());
        Ok(preferences.clone())
    }

    async fn load_preferences(&self, token: Option<&str>) -> Result<StoredPreferences, RemoteError> {
        self.call(token)?;
        Ok(self.preferences.lock().unwrap().clone().unwrap_or_default())
    }
}
