mod entry_point_locator;
mod process_spawner;

pub use entry_point_locator::EntryPointLocator;
pub use process_spawner::{ProcessSpawner, SpawnedProcess};
