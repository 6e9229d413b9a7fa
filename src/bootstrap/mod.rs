//! Process bootstrap: configuration, tracing and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{read_config, resolve_settings, EnvOverrides};
pub use tracing::init_tracing_subscriber;
pub use wiring::build_app;
