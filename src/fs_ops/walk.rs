//! Recursive rename walk.
//! Visits `root` depth-first and renames every non-directory entry that
//! satisfies the condition into `dest_dir` under one base name.
//!
//! Notes:
//! - Each directory listing is snapshotted when walkdir opens it (sorting
//!   forces a full read), so entries the walk moves into an already-listed
//!   directory are never visited again.
//! - The first failure aborts the walk; earlier renames stay in place.

use anyhow::Result;
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::condition::{MatchCondition, Matcher};
use crate::errors::RenflsError;

use super::rename::{Renamed, rename, validate_base_name};

/// Rename all files under `root` matching `condition` to `new_name` in `dest_dir`.
pub fn walk_rename(
    root: &Path,
    dest_dir: &Path,
    new_name: &OsStr,
    condition: &MatchCondition,
) -> Result<Vec<Renamed>> {
    walk_rename_reporting(root, dest_dir, new_name, condition, &mut |_| {})
}

/// Like `walk_rename`, calling `on_rename` right after each move. Renames
/// done before a failure have already been reported when the error returns.
pub fn walk_rename_reporting(
    root: &Path,
    dest_dir: &Path,
    new_name: &OsStr,
    condition: &MatchCondition,
    on_rename: &mut dyn FnMut(&Renamed),
) -> Result<Vec<Renamed>> {
    let matcher = condition.compile()?;
    walk_rename_with(root, dest_dir, new_name, &matcher, on_rename)
}

/// Same as `walk_rename_reporting` with an already compiled matcher.
pub(crate) fn walk_rename_with(
    root: &Path,
    dest_dir: &Path,
    new_name: &OsStr,
    matcher: &Matcher,
    on_rename: &mut dyn FnMut(&Renamed),
) -> Result<Vec<Renamed>> {
    validate_base_name(new_name)?;
    if !root.exists() {
        return Err(RenflsError::NotFound(root.to_path_buf()).into());
    }
    if !dest_dir.exists() {
        return Err(RenflsError::NotFound(dest_dir.to_path_buf()).into());
    }

    let mut renamed = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(RenflsError::from)?;
        if entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !matcher.matches(&name) {
            debug!(path = %entry.path().display(), "Skipped (condition)");
            continue;
        }
        let to = rename(entry.path(), dest_dir, new_name)?;
        let done = Renamed {
            from: entry.into_path(),
            to,
        };
        on_rename(&done);
        renamed.push(done);
    }
    Ok(renamed)
}
