use std::process::ExitCode;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = renfls::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        // already reported by app::run
        Err(e) => ExitCode::from(app::exit_code(&e)),
    }
}
