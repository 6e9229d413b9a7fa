use std::io::Write;

use sl_app::App;
use sl_core::Role;
use tracing::{info_span, warn, Instrument};

pub(super) async fn select(app: &App, raw: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    let span = info_span!("command.role.select", role = %raw);
    async {
        let role = match raw.parse::<Role>() {
            Ok(role) => Some(role),
            Err(err) => {
                warn!(error = %err, "Unrecognized role, no role will be stored");
                None
            }
        };
        let route = app.usecases().select_role().execute(role).await;
        writeln!(out, "-> {route}")?;
        Ok(())
    }
    .instrument(span)
    .await
}
