use std::io;
use std::path::PathBuf;

use crate::ports::EntryPointLocator;

/// Locates the entry point through the running executable's own path.
///
/// On Linux `current_exe` reads `/proc/self/exe`, so a launcher started through
/// a symlink reports the symlink target and anchors at the real file's directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentExeLocator;

impl CurrentExeLocator {
    pub fn new() -> Self {
        Self
    }
}

impl EntryPointLocator for CurrentExeLocator {
    fn entry_point(&self) -> io::Result<PathBuf> {
        std::env::current_exe()
    }
}
