use super::ProcessError;

/// Owned argv for one dispatch cycle. Element 0 is the command name.
///
/// The end-of-list sentinel `execv` expects is added by
/// `std::process::Command` when the child is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgVector {
    argv: Vec<String>,
}

impl ArgVector {
    pub fn new(argv: Vec<String>) -> Result<Self, ProcessError> {
        if argv.first().map_or(true, |name| name.is_empty()) {
            return Err(ProcessError::EmptyArgv);
        }
        Ok(Self { argv })
    }

    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn len(&self) -> usize {
        self.argv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }
}
