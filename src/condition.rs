//! Match conditions: which directory entries are rename candidates.
//!
//! A `MatchCondition` is a plain value (extension list, optional pattern,
//! ignore flag). It is compiled once per operation into a `Matcher`, which is
//! a pure predicate over entry names.
//!
//! Rules:
//! - positive = (pattern matches) OR (extension is listed)
//! - with neither clause configured, positive = true (match-all)
//! - `ignore` negates the final result

use anyhow::Result;
use regex::Regex;
use std::path::Path;

use crate::errors::RenflsError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCondition {
    /// Extensions without leading dot; compared ASCII case-insensitively.
    pub extensions: Vec<String>,
    /// Regular expression searched anywhere in the entry's base name.
    pub pattern: Option<String>,
    /// Invert the combined result.
    pub ignore: bool,
}

impl MatchCondition {
    /// Condition that matches every non-directory entry.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = exts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn ignoring(mut self, ignore: bool) -> Self {
        self.ignore = ignore;
        self
    }

    /// Parse a comma-separated extension list ("jpg, .PNG,,txt").
    pub fn parse_extension_list(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Compile into a `Matcher`. Fails with `RenflsError::Pattern` on a bad regex.
    pub fn compile(&self) -> Result<Matcher> {
        let pattern = match self.pattern.as_deref() {
            Some(p) => Some(Regex::new(p).map_err(|source| RenflsError::Pattern {
                pattern: p.to_string(),
                source,
            })?),
            None => None,
        };
        let extensions = self
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Ok(Matcher {
            extensions,
            pattern,
            ignore: self.ignore,
        })
    }
}

/// Compiled, side-effect free form of a `MatchCondition`.
#[derive(Debug, Clone)]
pub struct Matcher {
    extensions: Vec<String>,
    pattern: Option<Regex>,
    ignore: bool,
}

impl Matcher {
    /// Decide whether `entry_name` (a base name, not a path) is a candidate.
    pub fn matches(&self, entry_name: &str) -> bool {
        let positive = if self.extensions.is_empty() && self.pattern.is_none() {
            true
        } else {
            let by_pattern = self
                .pattern
                .as_ref()
                .is_some_and(|re| re.is_match(entry_name));
            by_pattern || self.extension_listed(entry_name)
        };
        positive != self.ignore
    }

    fn extension_listed(&self, entry_name: &str) -> bool {
        if self.extensions.is_empty() {
            return false;
        }
        let ext = entry_extension(entry_name).to_ascii_lowercase();
        self.extensions.iter().any(|e| *e == ext)
    }
}

/// Extension of an entry name without the dot; empty when there is none.
/// Dotfiles such as ".profile" have no extension.
pub fn entry_extension(entry_name: &str) -> &str {
    Path::new(entry_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
}

/// One-shot helper: compile `condition` and evaluate it against `entry_name`.
pub fn matches(entry_name: &str, condition: &MatchCondition) -> Result<bool> {
    Ok(condition.compile()?.matches(entry_name))
}
