use std::io;
use std::path::Path;

/// Handle data for a process that was started and left running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedProcess {
    /// OS process identifier of the child.
    pub pid: u32,
}

/// Starts external programs without waiting for them.
pub trait ProcessSpawner {
    /// Issue one process-creation request for `program`.
    ///
    /// No arguments are passed, the environment is inherited as-is and stdio is
    /// not redirected. Returns as soon as the process exists.
    fn spawn(&self, program: &Path) -> io::Result<SpawnedProcess>;
}
