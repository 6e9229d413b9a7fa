//! SmartLearn onboarding client
//!
//! Role selection, the three-step student onboarding wizard and the
//! role-based route guard, driven from the command line.

pub mod bootstrap;
pub mod cli;
pub mod commands;
