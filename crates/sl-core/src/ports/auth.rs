use async_trait::async_trait;

use crate::auth::AccessToken;
use crate::ports::errors::RemoteError;

#[async_trait]
pub trait AuthPort: Send + Sync {
    /// `POST /auth/login` with form-encoded credentials.
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, RemoteError>;

    /// `POST /auth/register`
    async fn register(&self, email: &str, password: &str) -> Result<(), RemoteError>;
}
