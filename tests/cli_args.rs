use clap::Parser;
use std::path::PathBuf;

use renfls::cli::{Args, Mode};
use renfls::{Config, LogLevel, MatchCondition};

#[test]
fn multiple_roots_keep_order() {
    let a = Args::parse_from(["renfls", "b", "a", "c"]);
    assert_eq!(
        a.roots,
        vec![PathBuf::from("b"), PathBuf::from("a"), PathBuf::from("c")]
    );
}

#[test]
fn dir_mode_with_name_and_dest() {
    let a = Args::parse_from([
        "renfls", "--mode", "dir", "--name", "holiday", "--dest", "/tmp/out", "photos",
    ]);
    assert_eq!(a.mode, Mode::Dir);
    assert_eq!(a.name.as_deref(), Some("holiday"));
    assert_eq!(a.dest, Some(PathBuf::from("/tmp/out")));
}

#[test]
fn unknown_mode_is_rejected() {
    assert!(Args::try_parse_from(["renfls", "--mode", "flat", "r"]).is_err());
}

#[test]
fn condition_flags_map_onto_config() {
    let a = Args::parse_from(["renfls", "--ext", "jpg, png,,", "--reg", "^IMG_", "r"]);
    let mut cfg = Config::default();
    a.apply_overrides(&mut cfg);
    assert_eq!(
        cfg.condition,
        MatchCondition::all()
            .with_extensions(["jpg", "png"])
            .with_pattern("^IMG_")
    );
}

#[test]
fn unset_flags_keep_config_values() {
    let a = Args::parse_from(["renfls", "r"]);
    let mut cfg = Config {
        log_level: LogLevel::Quiet,
        condition: MatchCondition::all().with_extensions(["txt"]).ignoring(true),
        ..Config::default()
    };
    let before = cfg.clone();
    a.apply_overrides(&mut cfg);
    assert_eq!(cfg, before);
}

#[test]
fn invalid_log_level_is_a_usage_error() {
    let err = Args::try_parse_from(["renfls", "--log-level", "loud", "r"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}

#[test]
fn log_level_aliases_parse() {
    let a = Args::parse_from(["renfls", "--log-level", "verbose", "r"]);
    assert_eq!(a.effective_log_level(), Some(LogLevel::Info));
}
