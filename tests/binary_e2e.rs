use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn renfls(config_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("renfls"));
    // never pick up the invoking user's config
    cmd.env("RENFLS_CONFIG", config_dir.join("config.xml"));
    cmd
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

#[test]
fn print_config_reports_env_path() {
    let td = tempdir().unwrap();
    let out = renfls(td.path()).arg("--print-config").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("config.xml"), "stdout: {stdout}");
}

#[test]
fn init_config_writes_template() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let out = renfls(&base).arg("--init-config").output().unwrap();
    assert!(out.status.success());
    assert!(base.join("config.xml").is_file());
}

#[test]
fn promotes_subdirectories_and_prints_renames() {
    let td = tempdir().unwrap();
    let root = td.path().join("root");
    touch(&root.join("a/1.txt"));
    touch(&root.join("a/2.txt"));
    touch(&root.join("b/3.jpg"));

    let out = renfls(td.path())
        .args(["--log-level", "quiet"])
        .arg(&root)
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    assert!(root.join("a.txt").is_file());
    assert!(root.join("a-2.txt").is_file());
    assert!(root.join("b.jpg").is_file());
    assert!(!root.join("fail").exists());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "stdout: {stdout}");
    assert!(lines.iter().all(|l| l.contains(" -> ")));
    assert!(lines[2].ends_with("b.jpg"));
}

#[test]
fn dir_mode_with_ext_filter() {
    let td = tempdir().unwrap();
    let root = td.path().join("holiday");
    touch(&root.join("x/IMG_1.JPG"));
    touch(&root.join("notes.txt"));

    let out = renfls(td.path())
        .args(["--mode", "dir", "-e", "jpg", "--dest"])
        .arg(td.path())
        .arg(&root)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(td.path().join("holiday.JPG").is_file());
    assert!(root.join("notes.txt").is_file());
}

#[test]
fn missing_root_fails_and_stops() {
    let td = tempdir().unwrap();
    let later = td.path().join("later");
    touch(&later.join("d/f.txt"));

    let out = renfls(td.path())
        .arg(td.path().join("missing"))
        .arg(&later)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    // second root never processed
    assert!(later.join("d/f.txt").is_file());
}

#[test]
fn bad_regex_fails_without_changes() {
    let td = tempdir().unwrap();
    let root = td.path().join("root");
    touch(&root.join("a/1.txt"));

    let out = renfls(td.path())
        .args(["-r", "(oops"])
        .arg(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(3));
    assert!(root.join("a/1.txt").is_file());
    assert!(!root.join("fail").exists());
}

#[test]
fn unknown_log_level_is_rejected_before_any_work() {
    let td = tempdir().unwrap();
    let root = td.path().join("root");
    touch(&root.join("a/1.txt"));

    let out = renfls(td.path())
        .args(["--log-level", "loud"])
        .arg(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("loud"));
    assert!(root.join("a/1.txt").is_file());
}

#[test]
fn renames_done_before_a_failure_are_still_printed() {
    let td = tempdir().unwrap();
    let root = td.path().join("root");
    touch(&root.join("abcdefghij/1.txt"));
    // renaming this one overflows the file name length limit
    touch(&root.join("abcdefghij").join(format!("x.{}", "e".repeat(248))));

    let out = renfls(td.path())
        .args(["--log-level", "quiet"])
        .arg(&root)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(5));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("abcdefghij.txt"), "stdout: {stdout}");
    assert!(root.join("abcdefghij.txt").is_file());
    assert!(root.join("fail").is_dir());
}
