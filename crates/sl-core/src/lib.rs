//! # sl-core
//!
//! Core domain models and business logic for SmartLearn onboarding.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod auth;
pub mod config;
pub mod guard;
pub mod onboarding;
pub mod ports;
pub mod role;
pub mod route;
pub mod storage_key;

pub use config::{AppConfig, PersistenceStrategy, RuntimeSettings};
pub use guard::{GuardDecision, RouteGuard};
pub use onboarding::{
    OnboardingAction, OnboardingError, OnboardingEvent, OnboardingState, OnboardingStateMachine,
    WizardStep,
};
pub use role::Role;
pub use route::Route;
pub use storage_key::StorageKey;
