//! Setup strategy types.

use std::fmt;
use std::path::{Path, PathBuf};

/// The single installation mechanism chosen for a run.
///
/// Each variant carries the artifact that selected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupStrategy {
    /// `script/setup`, executed directly.
    CustomScript(PathBuf),
    /// `requirements.txt`, installed with `install -r`.
    RequirementsFile(PathBuf),
    /// `pyproject.toml`, installed editable from its directory.
    PyprojectManifest(PathBuf),
    /// No setup artifact found.
    None,
}

impl SetupStrategy {
    /// Short name used in logs and notices.
    pub fn name(&self) -> &'static str {
        match self {
            SetupStrategy::CustomScript(_) => "custom-script",
            SetupStrategy::RequirementsFile(_) => "requirements-file",
            SetupStrategy::PyprojectManifest(_) => "pyproject-manifest",
            SetupStrategy::None => "none",
        }
    }

    /// The artifact that selected this strategy.
    pub fn artifact(&self) -> Option<&Path> {
        match self {
            SetupStrategy::CustomScript(p)
            | SetupStrategy::RequirementsFile(p)
            | SetupStrategy::PyprojectManifest(p) => Some(p),
            SetupStrategy::None => None,
        }
    }
}

impl fmt::Display for SetupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.artifact() {
            Some(path) => write!(f, "{} ({})", self.name(), path.display()),
            None => f.write_str(self.name()),
        }
    }
}
