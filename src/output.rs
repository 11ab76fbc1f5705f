use owo_colors::OwoColorize;

use crate::fs_ops::Renamed;

/// Consistent, colored user-facing messages. Colors only on a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix); scripts parse these.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// `old -> new`, one line per rename.
pub fn rename_line(r: &Renamed) -> String {
    format!("{} -> {}", r.from.display(), r.to.display())
}

pub fn print_renamed(r: &Renamed) {
    print_user(&rename_line(r));
}
