use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::{ProcessSpawner, SpawnedProcess};

/// Spawner that records requests instead of creating processes.
pub struct FakeSpawner {
    pub requests: Mutex<Vec<PathBuf>>,
    failure: Option<io::ErrorKind>,
    pid: u32,
}

impl FakeSpawner {
    pub fn new() -> Self {
        Self { requests: Mutex::new(Vec::new()), failure: None, pid: 4242 }
    }

    /// Every spawn request fails with `kind`.
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self { failure: Some(kind), ..Self::new() }
    }

    pub fn requests(&self) -> Vec<PathBuf> {
        self.requests.lock().unwrap().clone()
    }
}

impl ProcessSpawner for FakeSpawner {
    fn spawn(&self, program: &Path) -> io::Result<SpawnedProcess> {
        self.requests.lock().unwrap().push(program.to_path_buf());
        match self.failure {
            Some(kind) => Err(io::Error::new(kind, "spawn refused")),
            None => Ok(SpawnedProcess { pid: self.pid }),
        }
    }
}
