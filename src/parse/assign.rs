use std::env;

use super::tokenizer::is_space;

/// How a raw input line reads as an environment assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// No `=` anywhere; the line is a command.
    NotAssignment,
    /// A lone `=`: nothing to bind on either side.
    Blank,
    /// Looked like an assignment but cannot be applied.
    Malformed(MalformedReason),
    Binding { name: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    EmbeddedWhitespace,
    EmptyName,
    NulByte,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::EmbeddedWhitespace => write!(f, "contains embedded whitespace"),
            MalformedReason::EmptyName => write!(f, "empty variable name"),
            MalformedReason::NulByte => write!(f, "contains a NUL byte"),
        }
    }
}

/// Classifies `line` without touching the environment or the line itself.
///
/// Any line holding a `=` is assignment-shaped. Its trimmed span must be free
/// of whitespace; the split happens at the first `=`, so `A=b=c` binds `A` to
/// `b=c`.
pub fn classify(line: &str) -> Assignment {
    if !line.contains('=') {
        return Assignment::NotAssignment;
    }

    let trimmed = line.trim_matches(is_space);
    if trimmed.chars().nth(1).is_none() {
        return Assignment::Blank;
    }
    if trimmed.contains(is_space) {
        return Assignment::Malformed(MalformedReason::EmbeddedWhitespace);
    }

    let Some((name, value)) = trimmed.split_once('=') else {
        return Assignment::NotAssignment;
    };
    if name.is_empty() {
        return Assignment::Malformed(MalformedReason::EmptyName);
    }
    if trimmed.contains('\0') {
        return Assignment::Malformed(MalformedReason::NulByte);
    }

    Assignment::Binding {
        name: name.to_string(),
        value: value.to_string(),
    }
}

/// Writes the binding through to the process environment, overwriting any
/// previous value.
pub fn apply(name: &str, value: &str) {
    env::set_var(name, value);
}
