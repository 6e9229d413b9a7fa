use tracing::{info, info_span, warn, Instrument};

use sl_core::{Role, Route};

use crate::records::ClientRecords;

/// Confirm the role chosen on the role selector.
///
/// The role is persisted best effort: a failed write is logged and the user
/// is still sent on to the route for the role.
pub struct SelectRole {
    records: ClientRecords,
}

impl SelectRole {
    pub fn new(records: ClientRecords) -> Self {
        Self { records }
    }

    pub async fn execute(&self, role: Option<Role>) -> Route {
        let span = info_span!("usecase.select_role.execute", role = ?role);
        async {
            if let Some(role) = role {
                if let Err(err) = self.records.set_role(role).await {
                    warn!(error = %err, role = %role, "Failed to persist selected role");
                }
            }
            let route = Route::after_role_selection(role);
            info!(route = %route, "role selected");
            route
        }
        .instrument(span)
        .await
    }
}
