use std::io::Write;

use sl_app::App;
use tracing::{info_span, Instrument};

pub(super) async fn dump(app: &App, out: &mut dyn Write) -> anyhow::Result<()> {
    let span = info_span!("command.records.dump");
    async {
        writeln!(out, "strategy: {}", app.strategy())?;
        for (key, value) in app.records().snapshot().await? {
            match value {
                Some(value) => writeln!(out, "{key}: {value}")?,
                None => writeln!(out, "{key}: (unset)")?,
            }
        }
        Ok(())
    }
    .instrument(span)
    .await
}
