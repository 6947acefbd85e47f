use std::env;

use crate::parse::{tokenize, Delimiter};

/// Directories searched for commands, in `PATH` order.
///
/// Built once before the first dispatch and handed to whoever needs it.
/// Later changes to `PATH` (including `PATH=...` typed at the prompt) are not
/// picked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<String>,
}

impl SearchPath {
    pub fn from_env() -> Self {
        match env::var_os("PATH") {
            Some(value) => Self::from_value(&value.to_string_lossy()),
            None => {
                log::warn!("PATH is not set, no command will resolve");
                Self::default()
            }
        }
    }

    pub fn from_value(value: &str) -> Self {
        match tokenize(value, Delimiter::Char(':')) {
            Ok(dirs) => Self { dirs },
            Err(e) => {
                log::warn!("Ignoring unusable PATH {:?}: {}", value, e);
                Self::default()
            }
        }
    }

    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    /// `<dir>/<name>` for every directory, in search order.
    pub fn candidates<'a>(&'a self, name: &'a str) -> impl Iterator<Item = String> + 'a {
        self.dirs.iter().map(move |dir| format!("{}/{}", dir, name))
    }
}
