//! Grievance portal entry-point: loads configuration, installs logging, and
//! runs one CLI command.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use ortho_config::OrthoConfig;
use tracing::warn;

use grievance_portal::config::PortalSettings;
use grievance_portal::inbound::cli::{self, Cli, CliError};
use grievance_portal::telemetry;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match PortalSettings::load_from_iter([OsString::from("grievance-portal")]) {
        Ok(settings) => settings,
        Err(error) => return report(&cli, &CliError::Config(error.to_string())),
    };
    let log_format = match settings.log_format() {
        Ok(format) => format,
        Err(error) => return report(&cli, &CliError::Config(error.to_string())),
    };
    telemetry::init(log_format);

    let mut stdout = io::stdout().lock();
    match cli::run(&cli, &settings, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(&cli, &error),
    }
}

fn report(cli: &Cli, error: &CliError) -> ExitCode {
    let written = if cli.json {
        let mut stdout = io::stdout().lock();
        cli::write_error_json(&mut stdout, &error.to_domain()).map_err(io::Error::from)
    } else {
        let mut stderr = io::stderr().lock();
        cli::write_error_text(&mut stderr, error.code(), &error.to_string())
    };
    if let Err(e) = written {
        warn!(error = %e, "failed to report error");
    }
    ExitCode::FAILURE
}
