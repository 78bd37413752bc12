//! File permission helpers.

use std::path::Path;

use crate::error::Result;

/// Mark every file under `dir` executable, recursing into subdirectories.
///
/// Adds the execute bit wherever the read bit is set (the effect of
/// `chmod -R +x` under a typical umask). Returns the number of files
/// changed. A no-op on platforms without POSIX permissions.
pub fn make_executable(dir: &Path) -> Result<usize> {
    let mut changed = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();
        if file_type.is_dir() {
            changed += make_executable(&path)?;
        } else if file_type.is_file() && set_executable(&path)? {
            changed += 1;
        }
    }
    Ok(changed)
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)?.permissions();
    let mode = perms.mode();
    let wanted = mode | ((mode & 0o444) >> 2);
    if wanted == mode {
        return Ok(false);
    }
    perms.set_mode(wanted);
    std::fs::set_permissions(path, perms)?;
    tracing::debug!(path = %path.display(), mode = %format!("{:o}", wanted), "marked executable");
    Ok(true)
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<bool> {
    Ok(false)
}
