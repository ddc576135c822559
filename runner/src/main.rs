mod args;
mod logging;

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use serde_json::{Map, Value};
use sql_bridge::prelude::*;
use tracing::Level;

use crate::args::{Args, Command};
use crate::logging::log_writer;

fn main() -> ExitCode {
    let args = Args::parse();
    let writer = log_writer(args.log.as_deref()).unwrap_or_else(|err| {
        eprintln!("failed to open log file: {err}");
        std::process::exit(1);
    });

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_target(false)
        .with_ansi(args.log.is_none())
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), SqlBridgeError> {
    let config = args.db_config()?;
    match &args.command {
        Command::Create => config.create(),
        Command::Script { path } => {
            let conn = config.open()?;
            if path.as_os_str() == "-" {
                conn.batch_from_stream(io::stdin().lock())
            } else {
                conn.batch_from_stream(File::open(path)?)
            }
        }
        Command::Query { sql, params } => {
            let conn = config.open()?;
            let params: Vec<BindValue> = params.iter().map(|p| BindValue::from(p.as_str())).collect();
            let mut result = conn.execute(sql, &params)?;
            let columns = result.column_names();
            let mut out = io::stdout().lock();
            while result.step()?.is_row() {
                let mut values = vec![String::new(); columns.len()];
                let mut targets: Vec<ScanTarget<'_>> =
                    values.iter_mut().map(ScanTarget::Text).collect();
                result.scan_columns(&mut targets)?;
                drop(targets);

                let row: Map<String, Value> = columns
                    .iter()
                    .cloned()
                    .zip(values.into_iter().map(Value::String))
                    .collect();
                writeln!(out, "{}", Value::Object(row))?;
            }
            tracing::debug!(changes = conn.count_changes(), "query finished");
            Ok(())
        }
    }
}
