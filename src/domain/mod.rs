pub mod error;
pub mod executable_path;

pub use error::AppError;
pub use executable_path::{BUILD_DIR, EXECUTABLE_NAME, ExecutablePath};
