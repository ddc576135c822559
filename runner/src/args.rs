use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sql_bridge::{DbConfig, Engine, SqlBridgeError};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run SQL scripts and queries through sql-bridge")]
pub(crate) struct Args {
    /// Database engine
    #[arg(long, value_enum, default_value = "sqlite")]
    pub(crate) engine: Engine,
    /// Database file (sqlite) or connection string (postgres)
    #[arg(long, required_unless_present = "config")]
    pub(crate) db: Option<String>,
    /// JSON file holding `{"engine": ..., "name": ...}`; overrides --engine and --db
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Also write log lines to this file
    #[arg(long)]
    pub(crate) log: Option<PathBuf>,
    /// Log every statement
    #[arg(short, long)]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Create an empty database file (no-op for postgres)
    Create,
    /// Run a `;`-separated script; `-` reads stdin
    Script { path: PathBuf },
    /// Run one query and print each row as a JSON object
    Query {
        /// Template using #1..#N placeholders
        sql: String,
        /// Text values bound to #1..#N in order
        #[arg(short, long = "param")]
        params: Vec<String>,
    },
}

impl Args {
    pub(crate) fn db_config(&self) -> Result<DbConfig, SqlBridgeError> {
        if let Some(path) = &self.config {
            let text = std::fs::read_to_string(path)?;
            return serde_json::from_str(&text).map_err(|e| {
                SqlBridgeError::ConfigError(format!("{}: {e}", path.display()))
            });
        }
        let name = self
            .db
            .clone()
            .ok_or_else(|| SqlBridgeError::ConfigError("--db is required".to_string()))?;
        Ok(DbConfig::new(self.engine, name))
    }
}
