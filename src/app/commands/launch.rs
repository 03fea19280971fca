use crate::app::AppContext;
use crate::domain::{AppError, ExecutablePath};
use crate::ports::{EntryPointLocator, ProcessSpawner};

/// Outcome of a successful launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launched {
    /// Executable that was started.
    pub executable: ExecutablePath,
    /// OS process identifier of the running editor.
    pub pid: u32,
}

/// Resolve `build/WolfEdit` next to the entry point and start it.
///
/// Exactly one spawn request is issued. The target is not checked beforehand;
/// a missing or non-executable file surfaces as [`AppError::Spawn`].
pub fn execute<L, S>(ctx: &AppContext<L, S>) -> Result<Launched, AppError>
where
    L: EntryPointLocator,
    S: ProcessSpawner,
{
    let entry_point = ctx
        .locator()
        .entry_point()
        .map_err(|e| AppError::entry_point_unresolved(e.to_string()))?;
    let executable = ExecutablePath::from_entry_point(&entry_point)?;

    let spawned = ctx
        .spawner()
        .spawn(executable.as_path())
        .map_err(|source| AppError::Spawn { path: executable.as_path().to_path_buf(), source })?;

    Ok(Launched { executable, pid: spawned.pid })
}
