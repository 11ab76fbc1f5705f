//! The single rename primitive every higher-level operation funnels through.
//! Validates inputs, asks the resolver for a free name, then moves atomically.

use anyhow::Result;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::info;

use crate::errors::RenflsError;

use super::atomic::atomic_move;
use super::resolve::resolve_destination;

/// One completed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Rename `old_path` to `<dest_dir>/<new_name>[-N]<ext>` and return the new path.
///
/// - `old_path` (not followed if a symlink) and `dest_dir` must exist.
/// - `ext` is taken from `old_path`'s name, dot included. Dotfiles have none.
/// - Works for files and directories; nothing is touched on failure before the move.
pub fn rename(old_path: &Path, dest_dir: &Path, new_name: &OsStr) -> Result<PathBuf> {
    validate_base_name(new_name)?;
    if fs::symlink_metadata(old_path).is_err() {
        return Err(RenflsError::NotFound(old_path.to_path_buf()).into());
    }
    if !dest_dir.exists() {
        return Err(RenflsError::NotFound(dest_dir.to_path_buf()).into());
    }

    let ext = extension_of(old_path);
    let new_path = resolve_destination(dest_dir, new_name, &ext)?;
    atomic_move(old_path, &new_path)?;

    info!(from = %old_path.display(), to = %new_path.display(), "Renamed");
    Ok(new_path)
}

/// Extension of `path`'s last component including the leading dot ("" if none).
pub fn extension_of(path: &Path) -> OsString {
    match path.extension() {
        Some(ext) => {
            let mut dotted = OsString::from(".");
            dotted.push(ext);
            dotted
        }
        None => OsString::new(),
    }
}

/// A base name must be exactly one normal path component.
pub(crate) fn validate_base_name(name: &OsStr) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == name => Ok(()),
        _ => Err(RenflsError::InvalidBaseName(name.to_os_string()).into()),
    }
}
