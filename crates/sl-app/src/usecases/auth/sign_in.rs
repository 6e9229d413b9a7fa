use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use sl_core::auth::{AuthFormError, SignInForm};
use sl_core::ports::{AuthPort, RemoteError, StorageError};
use sl_core::Route;

use crate::records::ClientRecords;

#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    /// Shown inline; no request was made.
    #[error(transparent)]
    Invalid(#[from] AuthFormError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error("failed to store session: {0}")]
    Storage(#[from] StorageError),
}

/// Sign in with email and password, then keep the token and role.
pub struct SignIn {
    auth: Arc<dyn AuthPort>,
    records: ClientRecords,
}

impl SignIn {
    pub fn new(auth: Arc<dyn AuthPort>, records: ClientRecords) -> Self {
        Self { auth, records }
    }

    pub async fn execute(&self, form: SignInForm) -> Result<Route, SignInError> {
        let span = info_span!("usecase.sign_in.execute", role = %form.role);
        async {
            form.validate()?;

            let token = self.auth.login(form.email.trim(), &form.password).await?;
            self.records.set_token(&token.access_token).await?;
            self.records.set_role(form.role).await?;

            info!("signed in");
            Ok(Route::Dashboard)
        }
        .instrument(span)
        .await
    }
}
