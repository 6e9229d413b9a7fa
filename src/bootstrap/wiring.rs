//! Dependency wiring: concrete adapters behind the ports.

use std::sync::Arc;

use sl_app::{App, AppDeps, AppPaths};
use sl_core::RuntimeSettings;
use sl_infra::{HttpApiClient, JsonFileStore};
use tracing::info;

pub fn build_app(settings: &RuntimeSettings, paths: &AppPaths) -> anyhow::Result<App> {
    let storage = Arc::new(JsonFileStore::new(paths.storage_path.clone()));
    let api = Arc::new(HttpApiClient::new(settings.api_base_url.clone())?);

    info!(
        strategy = %settings.strategy,
        api = %settings.api_base_url,
        storage = %paths.storage_path.display(),
        "SmartLearn client starting"
    );

    Ok(App::new(AppDeps {
        storage,
        onboarding_remote: api.clone(),
        auth: api,
        strategy: settings.strategy,
    }))
}
