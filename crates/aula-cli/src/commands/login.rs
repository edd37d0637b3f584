//! Login command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::commands::gateway;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Backend endpoint override (e.g. a local emulator)
    #[arg(long)]
    pub endpoint: Option<String>,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let gateway = gateway(args.endpoint.as_deref())?;

    eprintln!("{}", "Signing in...".dimmed());

    match gateway.sign_in(&args.email, &args.password).await {
        Ok(user) => {
            output::success("Signed in");
            println!();
            output::field("uid", &user.uid);
            if let Some(email) = &user.email {
                output::field("email", email);
            }
            if let Some(name) = &user.display_name {
                output::field("name", name);
            }
            Ok(())
        }
        Err(fault) => {
            output::error(fault.message());
            std::process::exit(1);
        }
    }
}
