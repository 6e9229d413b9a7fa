use std::io::Write;

use sl_app::App;
use sl_core::auth::{SignInForm, SignUpForm};
use sl_core::Role;
use tracing::{info_span, Instrument};

use crate::cli::{SignInArgs, SignUpArgs};

pub(super) async fn sign_in(
    app: &App,
    args: SignInArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let span = info_span!("command.session.sign_in");
    async {
        let form = SignInForm {
            email: args.email,
            password: args.password,
            role: args.role.parse::<Role>()?,
        };
        let route = app.usecases().sign_in().execute(form).await?;
        writeln!(out, "-> {route}")?;
        Ok(())
    }
    .instrument(span)
    .await
}

pub(super) async fn sign_up(
    app: &App,
    args: SignUpArgs,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let span = info_span!("command.session.sign_up");
    async {
        let form = SignUpForm {
            email: args.email,
            first_name: args.first_name,
            last_name: args.last_name,
            password: args.password,
            confirm_password: args.confirm_password,
            role: args.role.parse::<Role>()?,
            agreed_to_terms: args.agree_terms,
        };
        let route = app.usecases().sign_up().execute(form).await?;
        writeln!(out, "Account created. Please sign in.")?;
        writeln!(out, "-> {route}")?;
        Ok(())
    }
    .instrument(span)
    .await
}

pub(super) async fn logout(app: &App, out: &mut dyn Write) -> anyhow::Result<()> {
    let span = info_span!("command.session.logout");
    async {
        let route = app.usecases().logout().execute().await?;
        writeln!(out, "-> {route}")?;
        Ok(())
    }
    .instrument(span)
    .await
}
