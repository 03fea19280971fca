use crate::ports::{EntryPointLocator, ProcessSpawner};

/// Application context holding dependencies for command execution.
pub struct AppContext<L: EntryPointLocator, S: ProcessSpawner> {
    locator: L,
    spawner: S,
}

impl<L: EntryPointLocator, S: ProcessSpawner> AppContext<L, S> {
    /// Create a new application context.
    pub fn new(locator: L, spawner: S) -> Self {
        Self { locator, spawner }
    }

    /// Get a reference to the entry-point locator.
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Get a reference to the process spawner.
    pub fn spawner(&self) -> &S {
        &self.spawner
    }
}
