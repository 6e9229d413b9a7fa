pub mod auth;
pub mod guard;
pub mod onboarding;
pub mod role;

pub use auth::{Logout, SignIn, SignInError, SignUp, SignUpError};
pub use guard::EnterRoute;
pub use onboarding::OnboardingOrchestrator;
pub use role::SelectRole;
