//! tkn - Command-line utility for inspecting Tekton Triggers resources.

mod cli;
mod commands;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> Result<()> {
    match &cli.command {
        cli::Commands::TriggerBinding(args) => {
            commands::triggerbinding::execute(args, cli.connection_options())
        }
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell, &mut io::stdout().lock())
        }
    }
}
