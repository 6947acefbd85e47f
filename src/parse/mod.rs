use std::fmt;

pub mod assign;
pub mod expand;
pub mod tokenizer;

pub use assign::{Assignment, MalformedReason};
pub use expand::{expand_env, expand_first, Expansion};
pub use tokenizer::{tokenize, Delimiter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    EmptyInput,
    CountMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "empty input"),
            ParseError::CountMismatch { expected, actual } => write!(
                f,
                "token count mismatch: expected {}, found {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    Unset(String),
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::Unset(name) => write!(f, "Environment variable not found: {}", name),
        }
    }
}

impl std::error::Error for ExpandError {}
