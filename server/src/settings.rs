//! Server Configuration
//!
//! Layered: built-in defaults, then an optional `gonews.toml` in the working
//! directory, then `GONEWS_*` environment variables.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub listen_addr: String,
    /// SQLite database file
    pub database_path: PathBuf,
    /// Directory with the built frontend, served at `/`
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("gonews").required(false))
            .add_source(Environment::with_prefix("GONEWS"))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("listen_addr", "0.0.0.0:8080")?
            .set_default("database_path", "gonews.db")?
            .set_default("static_dir", "dist")
    }
}
