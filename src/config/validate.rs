//! Input validation for the CLI driver.
//! Verifies roots/destination are existing directories and the staging name
//! is usable, before any core operation runs.

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

use crate::errors::RenflsError;

/// Staging name must be one plain path component.
pub fn validate_staging_name(name: &str) -> Result<()> {
    let p = Path::new(name);
    let mut components = p.components();
    match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(c)), None) if c == p.as_os_str() => Ok(()),
        _ => bail!("staging_dir_name must be a single directory name, got '{name}'"),
    }
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path, name: &str) -> Result<()> {
    if !path.exists() {
        error!("{name} does not exist: {}", path.display());
        return Err(RenflsError::NotFound(path.to_path_buf()).into());
    }
    if !path.is_dir() {
        error!("{name} is not a directory: {}", path.display());
        bail!("{name} is not a directory: {}", path.display());
    }
    Ok(())
}

/// Validate one root and its destination. Returns the destination in use
/// (`dest` if given, else `root`).
///
/// Warns when the destination lies inside a subdirectory of `root`: that
/// subdirectory is left in place and its files are not promoted.
pub fn validate_roots(root: &Path, dest: Option<&Path>) -> Result<PathBuf> {
    ensure_dir_exists_and_is_dir(root, "root")?;
    let dest = dest.unwrap_or(root);
    ensure_dir_exists_and_is_dir(dest, "destination")?;

    let root_real = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let dest_real = dunce::canonicalize(dest).unwrap_or_else(|_| dest.to_path_buf());
    if dest_real != root_real && dest_real.starts_with(&root_real) {
        warn!(
            root = %root_real.display(),
            dest = %dest_real.display(),
            "Destination is inside the root; the subdirectory holding it will not be promoted"
        );
    }
    debug!(root = %root.display(), dest = %dest.display(), "Validated");
    Ok(dest.to_path_buf())
}
