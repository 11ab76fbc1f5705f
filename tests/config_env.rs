use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use renfls::config::{CONFIG_ENV, ensure_default_config_exists, load_config};
use renfls::{Config, LogLevel, default_config_path, default_log_path};

struct EnvGuard;
impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            std::env::remove_var(CONFIG_ENV);
        }
    }
}

fn set_config_env(path: &std::path::Path) -> EnvGuard {
    unsafe {
        std::env::set_var(CONFIG_ENV, path);
    }
    EnvGuard
}

#[test]
#[serial]
fn env_override_sets_config_and_log_location() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("custom.xml");
    let _g = set_config_env(&cfg);

    assert_eq!(default_config_path().unwrap(), cfg);
    let log = default_log_path().unwrap();
    assert_eq!(log.parent(), cfg.parent());
    assert_eq!(log.file_name().unwrap(), "renfls.log");
}

#[test]
#[serial]
fn missing_file_means_no_config() {
    let td = tempdir().unwrap();
    let _g = set_config_env(&td.path().join("absent.xml"));
    assert!(load_config().unwrap().is_none());
}

#[test]
#[serial]
fn env_config_is_loaded() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    fs::write(
        &cfg,
        "<config><log_level>info</log_level><extensions>txt</extensions></config>",
    )
    .unwrap();
    let _g = set_config_env(&cfg);

    let loaded = load_config().unwrap().unwrap();
    assert_eq!(loaded.log_level, LogLevel::Info);
    assert_eq!(loaded.condition.extensions, vec!["txt"]);
    assert_eq!(loaded.staging_dir_name, Config::default().staging_dir_name);
}

#[test]
#[serial]
fn malformed_config_error_names_the_file() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("broken.xml");
    fs::write(&cfg, "<config><log_level>info</config>").unwrap();
    let _g = set_config_env(&cfg);

    let err = load_config().unwrap_err();
    assert!(format!("{err:#}").contains("broken.xml"));
}

#[test]
#[serial]
fn staging_name_with_separator_is_rejected() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    fs::write(
        &cfg,
        "<config><staging_dir_name>a/b</staging_dir_name></config>",
    )
    .unwrap();
    let _g = set_config_env(&cfg);
    assert!(load_config().is_err());
}

#[test]
#[serial]
fn ensure_default_writes_template_once() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg = base.join("nested").join("config.xml");
    let _g = set_config_env(&cfg);

    assert_eq!(ensure_default_config_exists().unwrap(), Some(cfg.clone()));
    assert!(cfg.is_file());
    assert_eq!(ensure_default_config_exists().unwrap(), None);
    assert_eq!(load_config().unwrap(), Some(Config::default()));
}
