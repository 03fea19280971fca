pub mod command_spawner;
pub mod current_exe_locator;

pub use command_spawner::CommandSpawner;
pub use current_exe_locator::CurrentExeLocator;
