//! Command handlers.
//!
//! Each handler runs one use case inside a `command.*` span and writes a
//! short human-readable result to `out`. Inline errors that keep the user on
//! a screen are returned as `Err` so the process exits non-zero.

mod onboard;
mod records;
mod role;
mod session;
mod visit;

use std::io::Write;

use sl_app::App;

use crate::cli::Command;

pub async fn run(app: &App, command: Command, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::Role { role } => role::select(app, &role, out).await,
        Command::Onboard { action } => onboard::run(app, action, out).await,
        Command::Visit { path } => visit::visit(app, &path, out).await,
        Command::SignIn(args) => session::sign_in(app, args, out).await,
        Command::SignUp(args) => session::sign_up(app, args, out).await,
        Command::Logout => session::logout(app, out).await,
        Command::Records => records::dump(app, out).await,
    }
}
