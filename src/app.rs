//! Application orchestrator.
//! Loads/merges config, initializes logging, installs signal handlers, validates roots,
//! and runs the selected operation on each root in order.

use anyhow::Result;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};

use renfls::cli::{Args, Mode};
use renfls::config::{
    CONFIG_ENV, ensure_default_config_exists, load_config, validate_roots, validate_staging_name,
};
use renfls::fs_ops::helpers::error_hint;
use renfls::output as out;
use renfls::{
    Config, RenflsError, Renamed, default_config_path, promote_subdirectory_names_reporting,
    shutdown, to_dir_name_reporting, walk_rename_reporting,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handled before logging init
    if args.print_config {
        return print_config();
    }
    if args.init_config {
        match ensure_default_config_exists() {
            Ok(Some(path)) => out::print_success(&format!(
                "A template renfls config was written to: {}",
                path.display()
            )),
            Ok(None) => out::print_info("A config file already exists; leaving it untouched."),
            Err(e) => {
                out::print_error(&format!("Could not write a template config: {e:#}"));
                return Err(e);
            }
        }
        return Ok(());
    }

    let mut cfg = match load_config() {
        Ok(Some(cfg)) => cfg,
        Ok(None) => Config::default(),
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            return Err(e);
        }
    };
    args.apply_overrides(&mut cfg);
    if let Err(e) = validate_staging_name(&cfg.staging_dir_name) {
        out::print_error(&format!("{e:#}"));
        return Err(e);
    }

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; stopping after the current root...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })
        .expect("failed to install signal handler");
    }

    debug!(?args, ?cfg, "Starting renfls");
    if args.name.is_some() && args.mode != Mode::Dir {
        warn!("--name only applies to --mode dir; ignoring it");
    }

    let result = (|| -> Result<()> {
        for root in &args.roots {
            if shutdown::is_requested() {
                warn!(root = %root.display(), "Interrupted; remaining roots not processed");
                break;
            }
            if let Err(e) = run_root(&args, &cfg, root) {
                report(&e, root);
                return Err(e);
            }
        }
        Ok(())
    })();

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn print_config() -> Result<()> {
    if let Some(cfg_env) = std::env::var_os(CONFIG_ENV) {
        out::print_info(&format!(
            "Using {CONFIG_ENV} (explicit):\n  {}\n",
            Path::new(&cfg_env).display()
        ));
        return Ok(());
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default renfls config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file already exists at that location.");
            } else {
                out::print_info("No config file exists there yet. Run with --init-config to create a template.");
            }
            Ok(())
        }
        Err(e) => {
            out::print_error(&format!("Could not determine a default config path: {e}"));
            Err(e)
        }
    }
}

/// Run the selected mode on one root, printing each rename as it happens.
fn run_root(args: &Args, cfg: &Config, root: &Path) -> Result<()> {
    let dest = validate_roots(root, args.dest.as_deref())?;
    info!(root = %root.display(), dest = %dest.display(), mode = ?args.mode, "Processing root");

    let mut print = |r: &Renamed| out::print_renamed(r);
    let count = match args.mode {
        Mode::Subdirs => {
            let summary = promote_subdirectory_names_reporting(
                root,
                &dest,
                &cfg.condition,
                OsStr::new(&cfg.staging_dir_name),
                &mut print,
            )?;
            for (path, reason) in &summary.skipped {
                out::print_warn(&format!("skipped {}: {}", path.display(), reason));
            }
            summary.renamed.len()
        }
        Mode::Dir => match &args.name {
            Some(name) => {
                walk_rename_reporting(root, &dest, OsStr::new(name), &cfg.condition, &mut print)?
                    .len()
            }
            None => to_dir_name_reporting(root, &dest, &cfg.condition, &mut print)?.len(),
        },
    };

    info!(root = %root.display(), count, "Root done");
    Ok(())
}

/// Process exit status for a failed run: the error's code, or 1 when untyped.
pub fn exit_code(e: &anyhow::Error) -> u8 {
    e.downcast_ref::<RenflsError>()
        .and_then(|re| u8::try_from(re.code()).ok())
        .unwrap_or(1)
}

/// Structured error log plus a user-facing line.
fn report(e: &anyhow::Error, root: &Path) {
    let hint = error_hint(e);
    if let Some(re) = e.downcast_ref::<RenflsError>() {
        error!(
            code = re.code(),
            kind = re.kind(),
            root = %root.display(),
            hint = hint.unwrap_or(""),
            error = %re,
            "Operation failed"
        );
    } else {
        error!(root = %root.display(), error = %format!("{e:#}"), "Operation failed");
    }
    match hint {
        Some(h) => out::print_error(&format!("{e:#} ({h})")),
        None => out::print_error(&format!("{e:#}")),
    }
}
