//! Core library for `renfls`.
//!
//! Renames files inside a directory tree according to a [`MatchCondition`],
//! resolving name collisions with a numeric suffix, and promotes
//! subdirectory names onto their contents through a staging directory.
//!
//! Modules:
//! - condition: the match predicate compiled once per operation
//! - fs_ops: rename primitive, collision resolver, walker, staging coordinator
//! - config: XML config, default paths, input validation
//! - platform: OS-specific file modes for config/log files
//! - errors: typed error taxonomy with stable codes

pub mod cli;
pub mod condition;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod platform;
pub mod shutdown;

pub use condition::{MatchCondition, Matcher};
pub use config::types::{Config, LogLevel};
pub use config::{
    default_config_path, default_log_path, load_config_from_xml_path, path_has_symlink_ancestor,
};
pub use errors::RenflsError;
pub use fs_ops::{
    MAX_SUFFIX, PromoteSummary, Renamed, STAGING_DIR_NAME, promote_subdirectory_names,
    promote_subdirectory_names_into, promote_subdirectory_names_reporting, rename,
    resolve_destination, to_dir_name, to_dir_name_reporting, walk_rename, walk_rename_reporting,
};
