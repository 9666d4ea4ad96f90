//! Shell completion generation command.

use crate::cli::Cli;
use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

const BIN_NAME: &str = "tkn";

/// Writes the completion script for `shell` to `out`.
///
/// The script covers every subcommand, alias and flag known to [`Cli`], so
/// `tkn tb ls -<TAB>` completes `--all-namespaces` and `--output`.
pub fn execute(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut script);

    out.write_all(&script)
        .and_then(|()| out.flush())
        .context("failed to write completion script")
}
