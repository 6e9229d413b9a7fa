//! Sign-in and sign-up forms.
//!
//! Validation happens before any request is made; the first failing rule
//! is reported inline and nothing is sent.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::role::Role;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email regex"));

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthFormError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error(
        "Password must contain at least one uppercase letter, one lowercase letter, and one number"
    )]
    PasswordTooWeak,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must agree to the Terms of Service and Privacy Policy")]
    TermsNotAccepted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), AuthFormError> {
        if self.email.trim().is_empty() {
            return Err(AuthFormError::EmailRequired);
        }
        if self.password.trim().is_empty() {
            return Err(AuthFormError::PasswordRequired);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub agreed_to_terms: bool,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), AuthFormError> {
        if self.email.trim().is_empty() {
            return Err(AuthFormError::EmailRequired);
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(AuthFormError::EmailInvalid);
        }
        if self.first_name.trim().is_empty() {
            return Err(AuthFormError::FirstNameRequired);
        }
        if self.last_name.trim().is_empty() {
            return Err(AuthFormError::LastNameRequired);
        }
        if self.password.is_empty() {
            return Err(AuthFormError::PasswordRequired);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthFormError::PasswordTooShort);
        }
        let has_upper = self.password.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = self.password.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = self.password.chars().any(|c| c.is_ascii_digit());
        if !(has_upper && has_lower && has_digit) {
            return Err(AuthFormError::PasswordTooWeak);
        }
        if self.password != self.confirm_password {
            return Err(AuthFormError::PasswordMismatch);
        }
        if !self.agreed_to_terms {
            return Err(AuthFormError::TermsNotAccepted);
        }
        Ok(())
    }
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up() -> SignUpForm {
        SignUpForm {
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            password: "Analytical1".to_string(),
            confirm_password: "Analytical1".to_string(),
            role: Role::Student,
            agreed_to_terms: true,
        }
    }

    #[test]
    fn sign_in_requires_email_then_password() {
        let mut form = SignInForm {
            email: " ".to_string(),
            password: String::new(),
            role: Role::Teacher,
        };
        assert_eq!(form.validate(), Err(AuthFormError::EmailRequired));
        form.email = "t@example.com".to_string();
        assert_eq!(form.validate(), Err(AuthFormError::PasswordRequired));
        form.password = "secret".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn sign_up_accepts_valid_form() {
        assert!(sign_up().validate().is_ok());
    }

    #[test]
    fn sign_up_reports_first_failing_rule() {
        let cases = [
            (
                SignUpForm {
                    email: "not-an-email".to_string(),
                    ..sign_up()
                },
                AuthFormError::EmailInvalid,
            ),
            (
                SignUpForm {
                    last_name: "  ".to_string(),
                    ..sign_up()
                },
                AuthFormError::LastNameRequired,
            ),
            (
                SignUpForm {
                    password: "Ab1".to_string(),
                    confirm_password: "Ab1".to_string(),
                    ..sign_up()
                },
                AuthFormError::PasswordTooShort,
            ),
            (
                SignUpForm {
                    password: "alllowercase1".to_string(),
                    confirm_password: "alllowercase1".to_string(),
                    ..sign_up()
                },
                AuthFormError::PasswordTooWeak,
            ),
            (
                SignUpForm {
                    confirm_password: "Different1".to_string(),
                    ..sign_up()
                },
                AuthFormError::PasswordMismatch,
            ),
            (
                SignUpForm {
                    agreed_to_terms: false,
                    ..sign_up()
                },
                AuthFormError::TermsNotAccepted,
            ),
        ];

        for (form, expected) in cases {
            assert_eq!(form.validate(), Err(expected));
        }
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            AuthFormError::TermsNotAccepted.to_string(),
            "You must agree to the Terms of Service and Privacy Policy"
        );
    }
}
