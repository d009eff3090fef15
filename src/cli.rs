//! Command-line configuration for the catalog server.

use std::path::PathBuf;

use clap::Parser;

/// Serve the car model and aftermarket product catalog over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(name = "hp-catalog", version, about)]
pub struct Cli {
    /// Path of the JSON catalog document
    #[arg(long, env = "HP_CATALOG_DB", default_value = "db.json")]
    pub db: PathBuf,

    /// Address to listen on
    #[arg(long, env = "HP_CATALOG_LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: String,

    /// Write an empty document if the database file does not exist
    #[arg(long, env = "HP_CATALOG_CREATE_IF_MISSING")]
    pub create_if_missing: bool,
}
