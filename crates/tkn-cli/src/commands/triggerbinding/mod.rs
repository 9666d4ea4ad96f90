//! `tkn triggerbinding` command group.

pub mod list;

use crate::cli::TriggerBindingArgs;
use crate::cli::TriggerBindingCommands;
use crate::output::Stream;
use anyhow::Result;
use std::io;
use tkn_core::ConnectionOptions;
use tkn_core::KubeParams;

/// Runs a `triggerbinding` subcommand against the configured cluster,
/// writing to stdout and stderr.
pub fn execute(args: &TriggerBindingArgs, options: ConnectionOptions) -> Result<()> {
    let params = KubeParams::new(options);

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let mut stream = Stream {
        out: &mut out,
        err: &mut err,
    };

    match &args.command {
        TriggerBindingCommands::List(list_args) => list::execute(list_args, &params, &mut stream),
    }
}
