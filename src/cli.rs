//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - --ext, --reg and --ignore replace the config file's condition clause by clause.

use clap::{Parser, ValueEnum, ValueHint};
use std::path::PathBuf;
use std::str::FromStr;

use crate::condition::MatchCondition;
use crate::config::types::{Config, LogLevel};

/// What to do with each root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Promote each immediate subdirectory's name onto its files, via staging
    #[default]
    Subdirs,
    /// Rename files under the root after the root's own name (or --name)
    Dir,
}

/// Rename files after their directory, resolving collisions with -2, -3, ...
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Rename files after their parent directory, collision-safe"
)]
pub struct Args {
    /// Root directories, processed in order.
    #[arg(
        value_name = "ROOT",
        num_args = 1..,
        required_unless_present_any = ["print_config", "init_config"],
        value_hint = ValueHint::DirPath
    )]
    pub roots: Vec<PathBuf>,

    /// Operation mode.
    #[arg(long, value_enum, default_value_t = Mode::Subdirs)]
    pub mode: Mode,

    /// Explicit base name (only with --mode dir).
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Destination directory (defaults to each root).
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub dest: Option<PathBuf>,

    /// Comma-separated extensions to rename, e.g. "jpg,png".
    #[arg(short = 'e', long = "ext", value_name = "LIST")]
    pub ext: Option<String>,

    /// Regular expression matched against file names.
    #[arg(short = 'r', long = "reg", value_name = "PATTERN")]
    pub reg: Option<String>,

    /// Invert the condition: rename everything that does NOT match.
    #[arg(short = 'i', long)]
    pub ignore: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(
        long,
        value_parser = LogLevel::from_str,
        help = "Set log level: quiet, normal, info, debug"
    )]
    pub log_level: Option<LogLevel>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print the config file location in use, then exit.
    #[arg(long, help = "Print the config file location used by renfls and exit")]
    pub print_config: bool,

    /// Write a template config at the default location, then exit.
    #[arg(long, help = "Write a template config file and exit")]
    pub init_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(list) = &self.ext {
            cfg.condition.extensions = MatchCondition::parse_extension_list(list);
        }
        if let Some(reg) = &self.reg {
            cfg.condition.pattern = Some(reg.clone()).filter(|r| !r.is_empty());
        }
        if self.ignore {
            cfg.condition.ignore = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
