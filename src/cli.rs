//! Command-line surface. Each invocation is one UI event: confirming a
//! role, mounting or submitting a wizard step, or entering a route.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "smartlearn", version, about = "SmartLearn onboarding client")]
pub struct Cli {
    /// Config file (default: smartlearn.toml in the config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Data directory holding client storage and logs
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Confirm a role on the role selector
    Role {
        /// student, teacher or parent
        #[arg(default_value = "student")]
        role: String,
    },
    /// Drive the student onboarding wizard
    Onboard {
        #[command(subcommand)]
        action: OnboardCommand,
    },
    /// Enter a route through the role guard
    Visit { path: String },
    SignIn(SignInArgs),
    SignUp(SignUpArgs),
    /// Forget the token and role
    Logout,
    /// Dump every stored client record
    Records,
}

#[derive(Debug, Subcommand)]
pub enum OnboardCommand {
    /// Mount a step and print its pre-filled form
    Show {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        step: u8,
    },
    /// Submit step 1
    Step1 {
        #[arg(long)]
        name: String,
        /// 6-8, 9-11, 11-14 or 15+ (keeps the saved value when omitted)
        #[arg(long)]
        age_range: Option<String>,
        /// Kindergarten, 1st .. 12th, or "" for none
        #[arg(long)]
        grade: Option<String>,
    },
    /// Submit step 2, flipping the given subjects and styles first
    Step2 {
        /// reading, science, english, math, visual, audio, handsOn
        #[arg(long = "toggle", value_name = "KEY")]
        toggles: Vec<String>,
    },
    /// Leave step 3
    Finish {
        /// "Customize settings later" instead of "Start Learning"
        #[arg(long)]
        later: bool,
    },
    /// Press Back on a step
    Back {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
        step: u8,
    },
}

#[derive(Debug, Args)]
pub struct SignInArgs {
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub password: String,
    #[arg(long, default_value = "student")]
    pub role: String,
}

#[derive(Debug, Args)]
pub struct SignUpArgs {
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub password: String,
    #[arg(long, default_value = "")]
    pub confirm_password: String,
    #[arg(long, default_value = "student")]
    pub role: String,
    /// Agree to the Terms of Service and Privacy Policy
    #[arg(long)]
    pub agree_terms: bool,
}
