//! # sl-app
//!
//! SmartLearn onboarding application layer: typed access to client records,
//! the onboarding persistence strategies and the use cases the CLI drives.

pub mod app;
pub mod app_paths;
pub mod deps;
pub mod persistence;
pub mod records;
pub mod usecases;

#[cfg(test)]
pub(crate) mod test_support;

pub use app::{App, UseCases};
pub use app_paths::AppPaths;
pub use deps::AppDeps;
pub use persistence::{LocalStepPersistence, RemoteStepPersistence, SaveOutcome, StepPersistence};
pub use records::ClientRecords;
