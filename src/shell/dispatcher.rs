use std::io::Write;
use std::process::ExitStatus;

use crate::error::ShellError;
use crate::parse::tokenizer::is_space;
use crate::parse::{
    assign, expand_env, tokenize, Assignment, Delimiter, ExpandError, Expansion, MalformedReason,
    ParseError,
};
use crate::process::{ArgVector, CommandExecutor, Launch, LaunchMode, SearchPath};

/// How one dispatch cycle ended.
#[derive(Debug)]
pub enum Outcome {
    /// Nothing to do: blank line or a lone `=`.
    Idle,
    Assigned { name: String },
    Malformed(MalformedReason),
    LineTooLong { len: usize },
    ExpansionFailed(ExpandError),
    ParseFailed(ParseError),
    Waited(ExitStatus),
    Detached(u32),
    NotFound(String),
}

/// Runs single input lines end to end.
///
/// Each cycle goes strip, assignment check, background check, expansion,
/// tokenizing and finally spawning. Any stage may end the cycle early; the
/// returned [`Outcome`] says which one did. Only resource failures (spawn,
/// wait, writing to `out`) come back as errors.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    executor: CommandExecutor,
    max_line_len: usize,
}

impl Dispatcher {
    pub fn new(search_path: SearchPath, max_line_len: usize) -> Self {
        Dispatcher {
            executor: CommandExecutor::new(search_path),
            max_line_len,
        }
    }

    pub fn search_path(&self) -> &SearchPath {
        self.executor.search_path()
    }

    /// Dispatches `raw`, writing user-facing output to `out`.
    pub fn dispatch<W: Write>(&self, raw: &str, out: &mut W) -> Result<Outcome, ShellError> {
        let mut line = raw.split('\n').next().unwrap_or_default().to_string();

        if line.chars().all(is_space) {
            return Ok(Outcome::Idle);
        }

        let len = line.chars().count();
        if len > self.max_line_len {
            log::debug!("Rejecting line of {} characters", len);
            return Ok(Outcome::LineTooLong { len });
        }

        match assign::classify(&line) {
            Assignment::Binding { name, value } => {
                assign::apply(&name, &value);
                log::debug!("Set {}={}", name, value);
                return Ok(Outcome::Assigned { name });
            }
            Assignment::Blank => return Ok(Outcome::Idle),
            Assignment::Malformed(reason) => {
                log::debug!("Malformed assignment {:?}: {}", line, reason);
                return Ok(Outcome::Malformed(reason));
            }
            Assignment::NotAssignment => {}
        }

        let mode = match line.find('&') {
            Some(pos) => {
                line.truncate(pos);
                LaunchMode::Background
            }
            None => LaunchMode::Foreground,
        };

        match expand_env(&mut line, self.max_line_len) {
            Ok(Expansion::Replaced {
                name,
                truncated: true,
            }) => log::debug!("Expansion of ${} cut to {} characters", name, self.max_line_len),
            Ok(_) => {}
            Err(e) => {
                log::debug!("{}", e);
                writeln!(out)?;
                return Ok(Outcome::ExpansionFailed(e));
            }
        }

        let tokens = match tokenize(&line, Delimiter::from(' ')) {
            Ok(tokens) => tokens,
            Err(e) => {
                log::debug!("Abandoning {:?}: {}", line, e);
                return Ok(Outcome::ParseFailed(e));
            }
        };
        let argv = ArgVector::new(tokens)?;

        match self.executor.launch(&argv, mode)? {
            Launch::Waited(status) => Ok(Outcome::Waited(status)),
            Launch::Detached(pid) => Ok(Outcome::Detached(pid)),
            Launch::NotFound => {
                writeln!(out, "-uish: {}: command not found", argv.program())?;
                Ok(Outcome::NotFound(argv.program().to_string()))
            }
        }
    }
}
