use std::io::Write;

use sl_app::App;
use sl_core::{GuardDecision, Route};
use tracing::{info_span, Instrument};

pub(super) async fn visit(app: &App, path: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    let span = info_span!("command.route.visit", path = %path);
    async {
        let route = Route::parse(path);
        match app.usecases().enter_route().execute(&route).await {
            GuardDecision::Allow => writeln!(out, "{route}")?,
            GuardDecision::Redirect { to } => writeln!(out, "-> {to} (redirected from {route})")?,
        }
        Ok(())
    }
    .instrument(span)
    .await
}
