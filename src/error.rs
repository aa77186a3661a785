use std::path::PathBuf;

use thiserror::Error;

/// Conditions that stop the program before the first frame.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("cannot open diagnostic log {path:?}: {source}")]
    DiagnosticLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
