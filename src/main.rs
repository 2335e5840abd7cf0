use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use services::logfile::{self, LogConfig};
use services::output::print_failure;
use services::provision::ProvisionError;
use services::speech::SpeechError;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        print_failure(cli.json, error_code(&err), &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    logfile::init(&LogConfig::from_cli(cli))?;
    tracing::info!(root = %cli.root.display(), "logger loaded");

    if commands::handle_provision_commands(cli)? {
        return Ok(());
    }
    if commands::handle_byline_commands(cli)? {
        return Ok(());
    }
    Ok(())
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<ProvisionError>().is_some() {
        "FILESYSTEM"
    } else if let Some(speech) = err.downcast_ref::<SpeechError>() {
        match speech {
            SpeechError::EngineUnavailable { .. } => "SPEECH_UNAVAILABLE",
            SpeechError::EngineFailed { .. } => "SPEECH",
        }
    } else {
        "ERROR"
    }
}
