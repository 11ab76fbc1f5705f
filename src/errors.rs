//! Typed error definitions for renfls.
//! Provides a small set of well-known failure modes for better logs and tests.
//!
//! Core operations return `anyhow::Result`; callers branch on the variant with
//! `err.downcast_ref::<RenflsError>()`.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenflsError {
    #[error("{0}: no such file or directory")]
    NotFound(PathBuf),

    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("no free name for '{base}' in {dir} (suffix search exhausted)")]
    SuffixExhausted { dir: PathBuf, base: String },

    #[error("move '{from}' -> '{to}': {source}")]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("staging directory {path} can't be created: {source}")]
    StagingCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("staging directory {path} can't be removed: {source}")]
    StagingRemoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid base name {0:?}")]
    InvalidBaseName(OsString),

    #[error("read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("walk: {0}")]
    Walk(#[from] walkdir::Error),
}

impl RenflsError {
    /// Stable numeric code for structured logs; the binary also exits with it.
    pub fn code(&self) -> i32 {
        match self {
            RenflsError::NotFound(_) => 2,
            RenflsError::Pattern { .. } => 3,
            RenflsError::SuffixExhausted { .. } => 4,
            RenflsError::MoveFailed { .. } => 5,
            RenflsError::StagingCreateFailed { .. } => 6,
            RenflsError::StagingRemoveFailed { .. } => 7,
            RenflsError::InvalidBaseName(_) => 8,
            RenflsError::ReadDir { .. } => 9,
            RenflsError::Walk(_) => 10,
        }
    }

    /// Short machine-friendly kind, used as the `kind` field in error logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RenflsError::NotFound(_) => "not_found",
            RenflsError::Pattern { .. } => "pattern",
            RenflsError::SuffixExhausted { .. } => "suffix_exhausted",
            RenflsError::MoveFailed { .. } => "move_failed",
            RenflsError::StagingCreateFailed { .. } => "staging_create_failed",
            RenflsError::StagingRemoveFailed { .. } => "staging_remove_failed",
            RenflsError::InvalidBaseName(_) => "invalid_base_name",
            RenflsError::ReadDir { .. } => "read_dir",
            RenflsError::Walk(_) => "walk",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let errs = [
            RenflsError::NotFound(PathBuf::from("x")),
            RenflsError::SuffixExhausted {
                dir: PathBuf::from("d"),
                base: "b".into(),
            },
            RenflsError::MoveFailed {
                from: PathBuf::from("a"),
                to: PathBuf::from("b"),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            },
            RenflsError::StagingCreateFailed {
                path: PathBuf::from("s"),
                source: io::Error::from(io::ErrorKind::AlreadyExists),
            },
            RenflsError::StagingRemoveFailed {
                path: PathBuf::from("s"),
                source: io::Error::from(io::ErrorKind::Other),
            },
            RenflsError::InvalidBaseName(OsString::from("")),
        ];
        let mut codes: Vec<i32> = errs.iter().map(RenflsError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errs.len());
    }

    #[test]
    fn not_found_message_names_path() {
        let e = RenflsError::NotFound(PathBuf::from("/nope/dir"));
        assert_eq!(e.to_string(), "/nope/dir: no such file or directory");
    }
}
