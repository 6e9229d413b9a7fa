use tracing::{debug, info, warn};

use sl_core::{GuardDecision, Route, RouteGuard};

use crate::records::ClientRecords;

/// Run the role guard for a route entry.
///
/// The persisted role is read fresh on every entry. Storage that cannot be
/// read counts as no role.
pub struct EnterRoute {
    records: ClientRecords,
}

impl EnterRoute {
    pub fn new(records: ClientRecords) -> Self {
        Self { records }
    }

    pub async fn execute(&self, route: &Route) -> GuardDecision {
        let role = match self.records.role().await {
            Ok(role) => role,
            Err(err) => {
                warn!(error = %err, "Failed to read stored role, treating as unset");
                None
            }
        };

        let decision = RouteGuard::check(route, role);
        match &decision {
            GuardDecision::Allow => debug!(route = %route, role = ?role, "route allowed"),
            GuardDecision::Redirect { to } => {
                info!(route = %route, role = ?role, redirect = %to, "route guarded, redirecting")
            }
        }
        decision
    }
}
