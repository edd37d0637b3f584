//! Subcommand implementations.

pub mod classes;
pub mod login;
pub mod reset_password;
pub mod seminars;
pub mod watch;

use anyhow::{Context, Result};

use aula::Gateway;
use aula_rest::{Config, RestProvider};

use crate::cli::Commands;

pub async fn handle(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Login(args) => login::run(args).await,
        Commands::ResetPassword(args) => reset_password::run(args).await,
        Commands::Classes(args) => classes::run(args).await,
        Commands::Seminars(args) => seminars::run(args).await,
        Commands::Watch(args) => watch::run(args).await,
    }
}

/// Build a gateway from the environment, with an optional endpoint
/// override for local emulators.
pub(crate) fn gateway(endpoint: Option<&str>) -> Result<Gateway<RestProvider>> {
    let mut config = Config::from_env()
        .context("Incomplete configuration; set AULA_API_KEY and AULA_PROJECT_ID")?;

    if let Some(endpoint) = endpoint {
        config = config.with_endpoint(endpoint).context("Invalid endpoint")?;
    }

    Ok(Gateway::new(RestProvider::new(config)))
}
