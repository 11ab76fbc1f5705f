//! Directory-name propagation: every matching file under a directory takes
//! that directory's own name.

use anyhow::Result;
use std::ffi::OsString;
use std::path::Path;

use crate::condition::{MatchCondition, Matcher};
use crate::errors::RenflsError;

use super::rename::Renamed;
use super::walk::walk_rename_with;

/// Rename files under `root` matching `condition` to `root`'s leaf name, moving them into `dest_dir`.
pub fn to_dir_name(root: &Path, dest_dir: &Path, condition: &MatchCondition) -> Result<Vec<Renamed>> {
    to_dir_name_reporting(root, dest_dir, condition, &mut |_| {})
}

/// Like `to_dir_name`, calling `on_rename` right after each move.
pub fn to_dir_name_reporting(
    root: &Path,
    dest_dir: &Path,
    condition: &MatchCondition,
    on_rename: &mut dyn FnMut(&Renamed),
) -> Result<Vec<Renamed>> {
    let matcher = condition.compile()?;
    to_dir_name_with(root, dest_dir, &matcher, on_rename)
}

pub(crate) fn to_dir_name_with(
    root: &Path,
    dest_dir: &Path,
    matcher: &Matcher,
    on_rename: &mut dyn FnMut(&Renamed),
) -> Result<Vec<Renamed>> {
    let name = leaf_name(root)?;
    walk_rename_with(root, dest_dir, &name, matcher, on_rename)
}

/// Leaf name of `root`. Roots like "." or "a/.." have no lexical leaf, so
/// the canonical path is consulted.
pub fn leaf_name(root: &Path) -> Result<OsString> {
    if let Some(name) = root.file_name() {
        return Ok(name.to_os_string());
    }
    let real = dunce::canonicalize(root).map_err(|_| RenflsError::NotFound(root.to_path_buf()))?;
    real.file_name()
        .map(|n| n.to_os_string())
        .ok_or_else(|| RenflsError::InvalidBaseName(root.as_os_str().to_os_string()).into())
}
