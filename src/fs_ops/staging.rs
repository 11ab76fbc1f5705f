//! Promote subdirectory names to their contents.
//!
//! Every file inside each immediate subdirectory of `root` is renamed after
//! that subdirectory and moved up into the destination (normally `root`).
//! Writing into `root` while listing it would let the scan see its own
//! output, so the work runs as three explicit phases:
//!
//! 1. Stage: move every immediate subdirectory into `root/<staging>`.
//!    A subdirectory that cannot be moved, or that contains the
//!    destination, is skipped and left in place.
//! 2. Promote: propagate each staged directory's name onto its files,
//!    writing into the destination. The first failure aborts and the
//!    staging directory is kept for inspection.
//! 3. Cleanup: remove the staging directory and whatever was not matched.

use anyhow::Result;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::condition::{MatchCondition, Matcher};
use crate::errors::RenflsError;

use super::dirname::to_dir_name_with;
use super::rename::Renamed;

/// Reserved name of the staging directory created inside the root.
pub const STAGING_DIR_NAME: &str = "fail";

/// Outcome of one promotion run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PromoteSummary {
    /// Subdirectories that were moved into staging (their original paths).
    pub staged: Vec<PathBuf>,
    /// Subdirectories left in place because they could not be staged.
    pub skipped: Vec<(PathBuf, String)>,
    /// Every rename performed during the promote phase.
    pub renamed: Vec<Renamed>,
}

/// Promote subdirectory names within `root`, writing results back into `root`.
pub fn promote_subdirectory_names(root: &Path, condition: &MatchCondition) -> Result<PromoteSummary> {
    promote_subdirectory_names_into(root, root, condition, OsStr::new(STAGING_DIR_NAME))
}

/// General form: results go to `dest_dir`, staging uses `staging_name`.
pub fn promote_subdirectory_names_into(
    root: &Path,
    dest_dir: &Path,
    condition: &MatchCondition,
    staging_name: &OsStr,
) -> Result<PromoteSummary> {
    promote_subdirectory_names_reporting(root, dest_dir, condition, staging_name, &mut |_| {})
}

/// Like `promote_subdirectory_names_into`, calling `on_rename` right after
/// each move so callers see progress even when a later move fails.
pub fn promote_subdirectory_names_reporting(
    root: &Path,
    dest_dir: &Path,
    condition: &MatchCondition,
    staging_name: &OsStr,
    on_rename: &mut dyn FnMut(&Renamed),
) -> Result<PromoteSummary> {
    let matcher = condition.compile()?;
    let root_real =
        dunce::canonicalize(root).map_err(|_| RenflsError::NotFound(root.to_path_buf()))?;
    let dest_real =
        dunce::canonicalize(dest_dir).map_err(|_| RenflsError::NotFound(dest_dir.to_path_buf()))?;

    let mut summary = PromoteSummary::default();
    let staging = stage(root, &root_real, &dest_real, staging_name, &mut summary)?;
    promote(&staging, dest_dir, &matcher, &mut summary, on_rename)?;
    cleanup(&staging)?;

    info!(
        root = %root.display(),
        staged = summary.staged.len(),
        skipped = summary.skipped.len(),
        renamed = summary.renamed.len(),
        "Promotion finished"
    );
    Ok(summary)
}

fn stage(
    root: &Path,
    root_real: &Path,
    dest_real: &Path,
    staging_name: &OsStr,
    summary: &mut PromoteSummary,
) -> Result<PathBuf> {
    let children = list_dir(root)?;

    let staging = root.join(staging_name);
    fs::create_dir(&staging).map_err(|source| RenflsError::StagingCreateFailed {
        path: staging.clone(),
        source,
    })?;
    debug!(staging = %staging.display(), "Created staging directory");

    for (path, is_dir) in children {
        if !is_dir {
            continue;
        }
        let Some(name) = path.file_name() else { continue };
        // Staging this one would carry the destination away with it
        if dest_real.starts_with(root_real.join(name)) {
            warn!(path = %path.display(), dest = %dest_real.display(), "Subdirectory contains the destination; leaving it in place");
            summary.skipped.push((path, "contains the destination directory".to_string()));
            continue;
        }
        let target = staging.join(name);
        match fs::rename(&path, &target) {
            Ok(()) => summary.staged.push(path),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not stage subdirectory; leaving it in place");
                summary.skipped.push((path, e.to_string()));
            }
        }
    }

    info!(staging = %staging.display(), staged = summary.staged.len(), "Stage phase done");
    Ok(staging)
}

fn promote(
    staging: &Path,
    dest_dir: &Path,
    matcher: &Matcher,
    summary: &mut PromoteSummary,
    on_rename: &mut dyn FnMut(&Renamed),
) -> Result<()> {
    for (dir, _) in list_dir(staging)? {
        let renamed = to_dir_name_with(&dir, dest_dir, matcher, on_rename)?;
        debug!(dir = %dir.display(), count = renamed.len(), "Promoted");
        summary.renamed.extend(renamed);
    }
    Ok(())
}

fn cleanup(staging: &Path) -> Result<()> {
    fs::remove_dir_all(staging).map_err(|source| RenflsError::StagingRemoveFailed {
        path: staging.to_path_buf(),
        source,
    })?;
    debug!(staging = %staging.display(), "Removed staging directory");
    Ok(())
}

/// Immediate children of `dir` sorted by name, with a not-followed is-dir flag.
fn list_dir(dir: &Path) -> Result<Vec<(PathBuf, bool)>> {
    let read_err = |source| RenflsError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut children = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        children.push((entry.path(), is_dir));
    }
    children.sort();
    Ok(children)
}
