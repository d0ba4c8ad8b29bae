mod app;
mod common;
mod utils;
mod workers;

use crate::app::Args;
use crate::common::source::FsSource;
use clap::error::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = match Args::load() {
        Ok(args) => args,
        Err(err) => return report(err),
    };

    let options = args.to_list_options();
    log::debug!("{options:?}");

    if options.escape {
        log::warn!("--escape has no effect, names are printed as-is");
    }

    // colored follows the resolved --color choice, not its own env detection
    colored::control::set_override(options.colorize);

    match workers::view::run(&FsSource, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(err),
    }
}

/// Prints an error and picks the exit code: 0 for help/version, 1 otherwise.
fn report(err: anyhow::Error) -> ExitCode {
    if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
        let _ = clap_err.print();
        return match clap_err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        };
    }

    eprintln!("lsr: {err:#}");
    ExitCode::FAILURE
}
