use std::io::Write;

use anyhow::Context;
use clap::Parser;
use sl_app::AppPaths;
use sl_core::ports::AppDirsPort;
use sl_infra::DirsAppDirsAdapter;

use smartlearn_lib::bootstrap::{
    build_app, init_tracing_subscriber, read_config, resolve_settings, EnvOverrides,
};
use smartlearn_lib::cli::Cli;
use smartlearn_lib::commands;

fn main() -> anyhow::Result<()> {
    // A missing .env is the normal case.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;
    let config = read_config(cli.config.as_deref(), &dirs)?;
    let env = EnvOverrides::from_env();
    let settings = resolve_settings(&config, &env, cli.data_dir.clone(), &dirs)?;
    let paths = AppPaths::new(&settings.data_dir, &dirs.app_config_root);

    if let Err(err) = init_tracing_subscriber(&paths.logs_dir) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(async {
        let app = build_app(&settings, &paths)?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let result = commands::run(&app, cli.command, &mut out).await;
        out.flush()?;
        result
    })
}
