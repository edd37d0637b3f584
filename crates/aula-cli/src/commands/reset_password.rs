//! Password reset command implementation.

use anyhow::Result;
use clap::Args;

use crate::commands::gateway;
use crate::output;

#[derive(Args, Debug)]
pub struct ResetPasswordArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Backend endpoint override (e.g. a local emulator)
    #[arg(long)]
    pub endpoint: Option<String>,
}

pub async fn run(args: ResetPasswordArgs) -> Result<()> {
    let gateway = gateway(args.endpoint.as_deref())?;

    match gateway.reset_password(&args.email).await {
        Ok(()) => {
            output::success("Password reset mail requested");
            Ok(())
        }
        Err(fault) => {
            output::error(fault.message());
            std::process::exit(1);
        }
    }
}
