//! Collision-safe destination names.
//!
//! Policy:
//! - First try "<base><ext>" (ext includes its dot and may be empty).
//! - Then "<base>-2<ext>", "<base>-3<ext>", ... so the unsuffixed name is
//!   always the first occurrence and "-1" is never produced.
//! - Give up with `SuffixExhausted` past `MAX_SUFFIX`; the bound only
//!   guarantees termination.
//!
//! Notes:
//! - This only decides the path name from current filesystem state; another
//!   process creating the same name before the move is an accepted race.

use anyhow::Result;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::errors::RenflsError;

use super::util::is_occupied;

/// Largest numeric suffix tried before giving up.
pub const MAX_SUFFIX: u32 = i16::MAX as u32;

/// Return a path inside `dest_dir` that does not currently exist.
pub fn resolve_destination(dest_dir: &Path, base_name: &OsStr, ext: &OsStr) -> Result<PathBuf> {
    let candidate = dest_dir.join(build_name(base_name, None, ext));
    if !is_occupied(&candidate) {
        return Ok(candidate);
    }

    for n in 2..=MAX_SUFFIX {
        let candidate = dest_dir.join(build_name(base_name, Some(n), ext));
        if !is_occupied(&candidate) {
            return Ok(candidate);
        }
        if n == 4 {
            trace!(base = ?base_name, dir = %dest_dir.display(), "multiple collisions, continuing suffix search");
        }
    }

    Err(RenflsError::SuffixExhausted {
        dir: dest_dir.to_path_buf(),
        base: base_name.to_string_lossy().into_owned(),
    }
    .into())
}

fn build_name(base: &OsStr, suffix: Option<u32>, ext: &OsStr) -> OsString {
    let mut name = OsString::from(base);
    if let Some(n) = suffix {
        name.push(format!("-{n}"));
    }
    name.push(ext);
    name
}
