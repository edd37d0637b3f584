//! Watch command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use tracing::warn;

use aula::{SessionState, SessionTracker};

use crate::commands::gateway;
use crate::output;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Sign in with this email before watching
    #[arg(long, requires = "password")]
    pub email: Option<String>,

    /// Password for --email
    #[arg(long, requires = "email")]
    pub password: Option<String>,

    /// Backend endpoint override (e.g. a local emulator)
    #[arg(long)]
    pub endpoint: Option<String>,
}

pub async fn run(args: WatchArgs) -> Result<()> {
    let gateway = gateway(args.endpoint.as_deref())?;
    let mut tracker = SessionTracker::spawn(gateway.provider());

    if let (Some(email), Some(password)) = (&args.email, &args.password) {
        if let Err(fault) = gateway.sign_in(email, password).await {
            warn!(fault = %fault, "sign-in failed; watching unauthenticated state");
            output::error(fault.message());
        }
    }

    eprintln!("{}", "Watching session state (Ctrl-C to stop)...".dimmed());

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = tracker.changed() => {
                if !changed {
                    break;
                }
                print_state(&tracker.state());
            }
        }
    }

    tracker.stop();
    Ok(())
}

fn print_state(state: &SessionState) {
    match (&state.user, &state.error) {
        (_, Some(error)) => output::error(error),
        (Some(user), None) => output::success(&format!("signed in as {}", user.uid)),
        (None, None) => println!("{}", "signed out".dimmed()),
    }
}
