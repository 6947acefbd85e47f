use std::io;

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

mod dispatcher;

pub use dispatcher::{Dispatcher, Outcome};

use crate::{
    config::{self, ConfigPaths, ShellConfig, PROMPT},
    error::ShellError,
    highlight::{Palette, PromptHelper},
    process::SearchPath,
};

pub struct Shell {
    editor: Editor<PromptHelper, FileHistory>,
    dispatcher: Dispatcher,
    config: ShellConfig,
    paths: Option<ConfigPaths>,
    palette: Palette,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let palette = Palette::detect(config.color);
        let mut editor = Editor::<PromptHelper, FileHistory>::new()?;
        editor.set_helper(Some(PromptHelper::new(palette)));
        editor.set_auto_add_history(true);

        let paths = match ConfigPaths::new() {
            Ok(paths) => Some(paths),
            Err(e) => {
                log::warn!("{}, skipping ~/.uishrc and history", e);
                None
            }
        };

        if let Some(paths) = paths.as_ref().filter(|_| config.persist_history) {
            if paths.history_path.exists() {
                if let Err(e) = editor.load_history(&paths.history_path) {
                    log::warn!("Couldn't load history: {}", e);
                }
            }
        }

        // PATH is read once here and never again.
        let search_path = SearchPath::from_env();
        log::debug!("Search path: {:?}", search_path.dirs());
        let dispatcher = Dispatcher::new(search_path, config.max_line_len);

        // A foreground child takes SIGINT from the terminal; the shell
        // itself only needs to survive it.
        ctrlc::set_handler(|| {
            println!();
        })?;

        Ok(Shell {
            editor,
            dispatcher,
            config,
            paths,
            palette,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        if self.config.read_rc {
            self.source_rc();
        }

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => self.handle_line(&line),
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(e) => {
                    self.save_history();
                    return Err(e.into());
                }
            }
        }

        self.save_history();
        Ok(())
    }

    fn handle_line(&self, line: &str) {
        match self.dispatcher.dispatch(line, &mut io::stdout()) {
            Ok(outcome) => {
                if let Some(message) = diagnostic(&outcome, self.config.max_line_len) {
                    if !self.config.quiet {
                        eprintln!("{}", self.palette.error(&message));
                    }
                }
            }
            Err(e) => eprintln!("{}", self.palette.error(&format!("-uish: {}", e))),
        }
    }

    fn source_rc(&self) {
        let Some(paths) = &self.paths else {
            return;
        };

        match config::read_rc_lines(&paths.rc_path) {
            Ok(lines) => {
                log::debug!("Sourcing {} lines from {}", lines.len(), paths.rc_path.display());
                for line in &lines {
                    self.handle_line(line);
                }
            }
            Err(e) => log::warn!("Couldn't read {}: {}", paths.rc_path.display(), e),
        }
    }

    fn save_history(&mut self) {
        let Some(paths) = self.paths.as_ref().filter(|_| self.config.persist_history) else {
            return;
        };
        if let Err(e) = self.editor.save_history(&paths.history_path) {
            log::warn!("Couldn't save history: {}", e);
        }
    }
}

/// Message for stderr when a line was dropped for a reason the user should hear about.
fn diagnostic(outcome: &Outcome, max_line_len: usize) -> Option<String> {
    match outcome {
        Outcome::Malformed(reason) => Some(format!("-uish: malformed assignment: {}", reason)),
        Outcome::LineTooLong { len } => Some(format!(
            "-uish: line too long: {} characters (limit {})",
            len, max_line_len
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{MalformedReason, ParseError};

    #[test]
    fn test_diagnostic_for_dropped_lines() {
        assert_eq!(
            diagnostic(&Outcome::Malformed(MalformedReason::EmbeddedWhitespace), 255).as_deref(),
            Some("-uish: malformed assignment: contains embedded whitespace")
        );
        assert_eq!(
            diagnostic(&Outcome::LineTooLong { len: 300 }, 255).as_deref(),
            Some("-uish: line too long: 300 characters (limit 255)")
        );
    }

    #[test]
    fn test_no_diagnostic_for_quiet_outcomes() {
        assert!(diagnostic(&Outcome::Idle, 255).is_none());
        assert!(diagnostic(&Outcome::ParseFailed(ParseError::EmptyInput), 255).is_none());
        assert!(diagnostic(&Outcome::NotFound("ghost".into()), 255).is_none());
    }
}
