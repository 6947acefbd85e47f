use std::fmt;

pub mod args;
pub mod executor;
pub mod search_path;

pub use args::ArgVector;
pub use executor::{CommandExecutor, Launch, LaunchMode};
pub use search_path::SearchPath;

#[derive(Debug)]
pub enum ProcessError {
    EmptyArgv,
    Spawn { path: String, source: std::io::Error },
    Wait(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::EmptyArgv => write!(f, "Empty argument vector"),
            ProcessError::Spawn { path, source } => {
                write!(f, "Failed to spawn {}: {}", path, source)
            }
            ProcessError::Wait(e) => write!(f, "Failed to wait for child: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Spawn { source, .. } => Some(source),
            ProcessError::Wait(e) => Some(e),
            ProcessError::EmptyArgv => None,
        }
    }
}
