use std::io;
use std::path::PathBuf;

/// Reports where the running entry point lives on disk.
pub trait EntryPointLocator {
    /// Path of the entry-point file itself (not its directory).
    fn entry_point(&self) -> io::Result<PathBuf>;
}
