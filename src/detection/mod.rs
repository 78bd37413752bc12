//! Setup artifact detection.

pub mod file_detection;
pub mod types;

pub use file_detection::{
    detect_strategy, file_exists, PYPROJECT_FILE, REQUIREMENTS_FILE, SETUP_SCRIPT,
};
pub use types::SetupStrategy;
