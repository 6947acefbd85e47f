use std::io;
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, ExitStatus, Stdio};

use super::{ArgVector, ProcessError, SearchPath};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Foreground,
    Background,
}

#[derive(Debug)]
pub enum Launch {
    /// Foreground child ran to completion.
    Waited(ExitStatus),
    /// Background child left running; nobody will reap it.
    Detached(u32),
    /// No directory in the search path held a runnable `<dir>/<name>`.
    NotFound,
}

/// Resolves argv[0] against the cached search path and runs the first hit.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    search_path: SearchPath,
}

impl CommandExecutor {
    pub fn new(search_path: SearchPath) -> Self {
        CommandExecutor { search_path }
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    pub fn launch(&self, argv: &ArgVector, mode: LaunchMode) -> Result<Launch, ProcessError> {
        let Some(mut child) = self.spawn_first(argv)? else {
            return Ok(Launch::NotFound);
        };

        match mode {
            LaunchMode::Foreground => {
                let status = child.wait().map_err(ProcessError::Wait)?;
                log::debug!("{} exited with {}", argv.program(), status);
                Ok(Launch::Waited(status))
            }
            LaunchMode::Background => {
                let pid = child.id();
                log::debug!("{} detached as pid {}", argv.program(), pid);
                Ok(Launch::Detached(pid))
            }
        }
    }

    fn spawn_first(&self, argv: &ArgVector) -> Result<Option<Child>, ProcessError> {
        for candidate in self.search_path.candidates(argv.program()) {
            let mut command = Command::new(&candidate);
            command
                .arg0(argv.program())
                .args(argv.args())
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());

            match command.spawn() {
                Ok(child) => {
                    log::debug!("Spawned {} as pid {}", candidate, child.id());
                    return Ok(Some(child));
                }
                Err(e) if is_exec_failure(&e) => {
                    log::trace!("{}: {}", candidate, e);
                }
                Err(source) => {
                    return Err(ProcessError::Spawn {
                        path: candidate,
                        source,
                    })
                }
            }
        }
        Ok(None)
    }
}

/// Failures that only mean "not runnable from this directory".
fn is_exec_failure(e: &io::Error) -> bool {
    if e.kind() == io::ErrorKind::InvalidInput {
        // interior NUL in the path or an argument
        return true;
    }
    matches!(
        e.raw_os_error(),
        Some(
            libc::ENOENT
                | libc::EACCES
                | libc::ENOEXEC
                | libc::ENOTDIR
                | libc::EISDIR
                | libc::ELOOP
                | libc::ENAMETOOLONG
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("uish_exec_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    fn argv(words: &[&str]) -> ArgVector {
        ArgVector::new(words.iter().map(|s| s.to_string()).collect()).expect("argv")
    }

    fn system_executor() -> CommandExecutor {
        CommandExecutor::new(SearchPath::from_value("/bin:/usr/bin"))
    }

    #[test]
    fn test_foreground_waits() -> Result<(), ProcessError> {
        let dir = scratch_dir("fg");
        let marker = dir.join("done");
        let script = format!("sleep 0.2; echo ok > {}", marker.display());

        let launch = system_executor().launch(&argv(&["sh", "-c", &script]), LaunchMode::Foreground)?;

        assert!(matches!(launch, Launch::Waited(status) if status.success()));
        assert!(marker.exists());
        let _ = fs::remove_dir_all(dir);
        Ok(())
    }

    #[test]
    fn test_foreground_reports_status() -> Result<(), ProcessError> {
        let launch = system_executor().launch(&argv(&["sh", "-c", "exit 3"]), LaunchMode::Foreground)?;
        assert!(matches!(launch, Launch::Waited(status) if status.code() == Some(3)));
        Ok(())
    }

    #[test]
    fn test_background_does_not_wait() -> Result<(), ProcessError> {
        let dir = scratch_dir("bg");
        let marker = dir.join("late");
        let script = format!("sleep 2; echo ok > {}", marker.display());

        let start = Instant::now();
        let launch = system_executor().launch(&argv(&["sh", "-c", &script]), LaunchMode::Background)?;

        assert!(matches!(launch, Launch::Detached(pid) if pid > 0));
        assert!(start.elapsed() < Duration::from_secs(2));
        assert!(!marker.exists());
        Ok(())
    }

    #[test]
    fn test_not_found() -> Result<(), ProcessError> {
        let launch = system_executor().launch(&argv(&["ghost_uish_cmd"]), LaunchMode::Foreground)?;
        assert!(matches!(launch, Launch::NotFound));
        Ok(())
    }

    #[test]
    fn test_empty_search_path_finds_nothing() -> Result<(), ProcessError> {
        let executor = CommandExecutor::new(SearchPath::default());
        let launch = executor.launch(&argv(&["sh", "-c", "true"]), LaunchMode::Foreground)?;
        assert!(matches!(launch, Launch::NotFound));
        Ok(())
    }

    #[test]
    fn test_falls_through_to_next_dir() -> Result<(), ProcessError> {
        let dir = scratch_dir("fallthrough");
        // same name, not executable
        fs::write(dir.join("sh"), "not a program").expect("write decoy");

        let path = format!("/nonexistent/uish:{}:/bin:/usr/bin", dir.display());
        let executor = CommandExecutor::new(SearchPath::from_value(&path));
        let launch = executor.launch(&argv(&["sh", "-c", "exit 0"]), LaunchMode::Foreground)?;

        assert!(matches!(launch, Launch::Waited(status) if status.success()));
        let _ = fs::remove_dir_all(dir);
        Ok(())
    }

    #[test]
    fn test_exec_failure_classification() {
        assert!(is_exec_failure(&io::Error::from_raw_os_error(libc::ENOENT)));
        assert!(is_exec_failure(&io::Error::from_raw_os_error(libc::EACCES)));
        assert!(!is_exec_failure(&io::Error::from_raw_os_error(libc::EAGAIN)));
        assert!(!is_exec_failure(&io::Error::from_raw_os_error(libc::ENOMEM)));
    }
}
