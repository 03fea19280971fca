use std::io;
use std::path::Path;
use std::process::Command;

use crate::ports::{ProcessSpawner, SpawnedProcess};

/// Spawns programs with `std::process::Command`.
///
/// The `Child` handle is dropped without `wait()`, so the child keeps running
/// after the launcher exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandSpawner;

impl CommandSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSpawner for CommandSpawner {
    fn spawn(&self, program: &Path) -> io::Result<SpawnedProcess> {
        let child = Command::new(program).spawn()?;
        Ok(SpawnedProcess { pid: child.id() })
    }
}
