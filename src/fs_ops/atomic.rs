//! Atomic move primitive.
//! - Performs a single `fs::rename`; files and directories alike.
//! - Never overwrites: callers pick a free destination first.
//! - On Unix, best-effort fsync of the destination directory after rename.

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::errors::RenflsError;

pub(crate) fn atomic_move(src: &Path, dst: &Path) -> Result<()> {
    fs::rename(src, dst).map_err(|source| RenflsError::MoveFailed {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    })?;

    // best-effort; the rename already happened
    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
