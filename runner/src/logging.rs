use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

/// Log lines always go to stderr, since stdout carries query output, and are
/// copied to `path` when one is given.
pub(crate) fn log_writer(path: Option<&Path>) -> io::Result<BoxMakeWriter> {
    Ok(match path {
        Some(path) => {
            let file = Mutex::new(File::create(path)?);
            BoxMakeWriter::new(io::stderr.and(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    })
}
