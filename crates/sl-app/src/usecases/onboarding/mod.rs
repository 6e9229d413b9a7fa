pub mod orchestrator;

pub use orchestrator::OnboardingOrchestrator;
