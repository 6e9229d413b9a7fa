use tracing::info;

use sl_core::ports::StorageError;
use sl_core::Route;

use crate::records::ClientRecords;

/// Forget the signed-in session. Onboarding records are kept.
pub struct Logout {
    records: ClientRecords,
}

impl Logout {
    pub fn new(records: ClientRecords) -> Self {
        Self { records }
    }

    pub async fn execute(&self) -> Result<Route, StorageError> {
        self.records.clear_session().await?;
        info!("signed out");
        Ok(Route::SignIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStorage;
    use sl_core::StorageKey;
    use std::sync::Arc;

    #[tokio::test]
    async fn clears_token_and_role() {
        let storage = Arc::new(MemoryStorage::default());
        storage.put(StorageKey::AuthToken, "tok");
        storage.put(StorageKey::UserType, "parent");
        storage.put(StorageKey::SessionEmail, "p@example.com");

        let route = Logout::new(ClientRecords::new(storage.clone()))
            .execute()
            .await
            .unwrap();

        assert_eq!(route, Route::SignIn);
        assert!(storage.raw(StorageKey::AuthToken).is_none());
        assert!(storage.raw(StorageKey::UserType).is_none());
        assert!(storage.raw(StorageKey::SessionEmail).is_some());
    }
}
