use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use sl_core::auth::{AuthFormError, SignUpForm};
use sl_core::ports::{AuthPort, RemoteError, StorageError};
use sl_core::Route;

use crate::records::ClientRecords;

#[derive(Debug, thiserror::Error)]
pub enum SignUpError {
    #[error(transparent)]
    Invalid(#[from] AuthFormError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error("failed to store session: {0}")]
    Storage(#[from] StorageError),
}

/// Register a new account. The email is remembered so onboarding can build
/// the combined profile for it.
pub struct SignUp {
    auth: Arc<dyn AuthPort>,
    records: ClientRecords,
}

impl SignUp {
    pub fn new(auth: Arc<dyn AuthPort>, records: ClientRecords) -> Self {
        Self { auth, records }
    }

    pub async fn execute(&self, form: SignUpForm) -> Result<Route, SignUpError> {
        let span = info_span!("usecase.sign_up.execute", role = %form.role);
        async {
            form.validate()?;

            let email = form.email.trim();
            self.auth.register(email, &form.password).await?;
            self.records.set_session_email(email).await?;
            self.records.set_role(form.role).await?;

            info!("account registered");
            Ok(Route::SignIn)
        }
        .instrument(span)
        .await
    }
}
