//! Rename-and-relocate engine.
//!
//! Layers, leaves first: collision resolver (`resolve`), the rename primitive
//! (`rename`), the recursive walker (`walk`), directory-name propagation
//! (`dirname`) and the staging coordinator (`staging`).

mod atomic;
mod dirname;
pub mod helpers;
mod rename;
mod resolve;
mod staging;
mod util;
mod walk;

pub use dirname::{leaf_name, to_dir_name, to_dir_name_reporting};
pub use rename::{Renamed, extension_of, rename};
pub use resolve::{MAX_SUFFIX, resolve_destination};
pub use staging::{
    PromoteSummary, STAGING_DIR_NAME, promote_subdirectory_names, promote_subdirectory_names_into,
    promote_subdirectory_names_reporting,
};
pub use walk::{walk_rename, walk_rename_reporting};
