//! aula-rest - REST-backed provider implementation.

mod api;
mod config;
mod listeners;
mod provider;

pub use config::Config;
pub use provider::RestProvider;
