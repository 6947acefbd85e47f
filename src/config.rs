use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::flags::Flags;

/// Fits a 256-byte line buffer with room for the terminator.
pub const DEFAULT_MAX_LINE_LEN: usize = 255;

pub const PROMPT: &str = "uish $ ";

#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub max_line_len: usize,
    pub quiet: bool,
    pub debug: bool,
    pub color: bool,
    pub read_rc: bool,
    pub persist_history: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            quiet: false,
            debug: false,
            color: true,
            read_rc: true,
            persist_history: true,
        }
    }
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags) -> Result<Self, ConfigError> {
        let max_line_len = match flags.get_value("max-line") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMaxLine(raw.to_string())),
            },
            None => DEFAULT_MAX_LINE_LEN,
        };

        Ok(ShellConfig {
            max_line_len,
            quiet: flags.is_set("quiet"),
            debug: flags.is_set("debug"),
            color: !flags.is_set("no-color"),
            read_rc: !flags.is_set("norc"),
            persist_history: !flags.is_set("no-history"),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    pub history_path: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::in_dir(&home))
    }

    pub fn in_dir(home: &Path) -> Self {
        ConfigPaths {
            rc_path: home.join(".uishrc"),
            history_path: home.join(".uish_history"),
        }
    }
}

/// Lines of a startup file worth dispatching: no blanks, no `#` comments.
/// A missing file yields nothing.
pub fn read_rc_lines(path: &Path) -> Result<Vec<String>, ConfigError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect())
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    InvalidMaxLine(String),
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::InvalidMaxLine(raw) => {
                write!(f, "Invalid maximum line length: {}", raw)
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn flags(words: &[&str]) -> Flags {
        let mut flags = Flags::new();
        let args: Vec<String> = words.iter().map(|s| s.to_string()).collect();
        flags.parse(&args).expect("flags parse");
        flags
    }

    #[test]
    fn test_defaults() -> Result<(), ConfigError> {
        let config = ShellConfig::from_flags(&flags(&[]))?;
        assert_eq!(config.max_line_len, DEFAULT_MAX_LINE_LEN);
        assert!(config.read_rc);
        assert!(config.persist_history);
        assert!(config.color);
        Ok(())
    }

    #[test]
    fn test_from_flags() -> Result<(), ConfigError> {
        let config = ShellConfig::from_flags(&flags(&["-m", "64", "-n", "--no-history", "-q"]))?;
        assert_eq!(config.max_line_len, 64);
        assert!(!config.read_rc);
        assert!(!config.persist_history);
        assert!(config.quiet);
        Ok(())
    }

    #[test]
    fn test_bad_max_line() {
        for raw in ["0", "-3", "lots"] {
            assert!(matches!(
                ShellConfig::from_flags(&flags(&["--max-line", raw])),
                Err(ConfigError::InvalidMaxLine(_))
            ));
        }
    }

    #[test]
    fn test_paths_in_dir() {
        let paths = ConfigPaths::in_dir(Path::new("/home/lance"));
        assert_eq!(paths.rc_path, PathBuf::from("/home/lance/.uishrc"));
        assert_eq!(paths.history_path, PathBuf::from("/home/lance/.uish_history"));
    }

    #[test]
    fn test_read_rc_lines() -> Result<(), ConfigError> {
        let path = env::temp_dir().join(format!("uishrc_test_{}", std::process::id()));
        fs::write(&path, "# comment\n\nEDITOR=vi\n   PAGER=less  \n")?;

        let lines = read_rc_lines(&path)?;
        assert_eq!(lines, vec!["EDITOR=vi", "PAGER=less"]);

        let _ = fs::remove_file(path);
        Ok(())
    }

    #[test]
    fn test_missing_rc_is_empty() -> Result<(), ConfigError> {
        let lines = read_rc_lines(Path::new("/nonexistent/uish/.uishrc"))?;
        assert!(lines.is_empty());
        Ok(())
    }
}
