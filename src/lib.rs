//! wolfedit-launcher: start the prebuilt WolfEdit editor found in `build/` next to the launcher.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use adapters::{CommandSpawner, CurrentExeLocator};
use app::{AppContext, commands::launch};

pub use app::commands::launch::Launched;
pub use domain::{AppError, BUILD_DIR, EXECUTABLE_NAME, ExecutablePath};

/// Start `<launcher dir>/build/WolfEdit` and return without waiting for it.
///
/// The current working directory plays no part in locating the executable.
/// Process-creation failures are returned as [`AppError::Spawn`] carrying the
/// OS error untouched; nothing is retried.
pub fn launch() -> Result<Launched, AppError> {
    let ctx = AppContext::new(CurrentExeLocator::new(), CommandSpawner::new());
    launch::execute(&ctx)
}
