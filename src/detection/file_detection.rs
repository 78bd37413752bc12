//! File-based strategy detection.

use std::path::{Path, PathBuf};

use super::types::SetupStrategy;

/// Relative path of the custom setup script.
pub const SETUP_SCRIPT: &str = "script/setup";

/// Relative path of the requirements manifest.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Relative path of the packaging manifest.
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// Probes in priority order. First match wins.
const PROBES: &[(&str, fn(PathBuf) -> SetupStrategy)] = &[
    (SETUP_SCRIPT, SetupStrategy::CustomScript),
    (REQUIREMENTS_FILE, SetupStrategy::RequirementsFile),
    (PYPROJECT_FILE, SetupStrategy::PyprojectManifest),
];

/// Check if a file exists relative to the project root.
///
/// Errors while checking (e.g. permission denied) count as absent.
pub fn file_exists(project_root: &Path, file: &str) -> bool {
    project_root.join(file).exists()
}

/// Select the setup strategy for a directory.
pub fn detect_strategy(project_root: &Path) -> SetupStrategy {
    for (file, strategy) in PROBES {
        let found = file_exists(project_root, file);
        tracing::debug!(file, found, "probed setup artifact");
        if found {
            return strategy(project_root.join(file));
        }
    }
    SetupStrategy::None
}
