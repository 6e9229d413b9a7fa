//! Session use cases: sign in, sign up, log out.

pub mod logout;
pub mod sign_in;
pub mod sign_up;

pub use logout::Logout;
pub use sign_in::{SignIn, SignInError};
pub use sign_up::{SignUp, SignUpError};
