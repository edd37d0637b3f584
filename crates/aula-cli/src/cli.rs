//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands;

/// CLI tool for exploring an aula backend project.
#[derive(Parser, Debug)]
#[command(name = "aula")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with email and password
    Login(commands::login::LoginArgs),

    /// Request a password-reset mail
    ResetPassword(commands::reset_password::ResetPasswordArgs),

    /// Fetch the classes in a category
    Classes(commands::classes::ClassesArgs),

    /// Fetch all seminars
    Seminars(commands::seminars::SeminarsArgs),

    /// Follow the session state until interrupted
    Watch(commands::watch::WatchArgs),
}
