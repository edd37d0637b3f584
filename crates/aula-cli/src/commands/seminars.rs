//! Seminars command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::commands::gateway;
use crate::output;

#[derive(Args, Debug)]
pub struct SeminarsArgs {
    /// Backend endpoint override (e.g. a local emulator)
    #[arg(long)]
    pub endpoint: Option<String>,
}

pub async fn run(args: SeminarsArgs) -> Result<()> {
    let gateway = gateway(args.endpoint.as_deref())?;

    match gateway.seminars().await {
        Ok(records) => {
            if records.is_empty() {
                eprintln!("{}", "No seminars found.".dimmed());
                return Ok(());
            }

            for record in &records {
                output::json(record)?;
            }
            output::count(records.len());
            Ok(())
        }
        Err(fault) => {
            output::error(fault.message());
            std::process::exit(1);
        }
    }
}
