//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;
use tkn_core::ConnectionOptions;

const LIST_EXAMPLE: &str = "\
Examples:
  List all TriggerBindings in namespace 'bar':

    tkn triggerbinding list -n bar

  or

    tkn tb ls -n bar
";

#[derive(Parser)]
#[command(name = "tkn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Namespace to use (defaults to the namespace of the kubeconfig context)
    #[arg(short, long, global = true, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Kubeconfig file to use
    #[arg(short, long, global = true, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(short, long, global = true, value_name = "CONTEXT")]
    pub context: Option<String>,
}

impl Cli {
    /// Cluster connection settings gathered from the global flags.
    pub fn connection_options(&self) -> ConnectionOptions {
        ConnectionOptions {
            kubeconfig: self.kubeconfig.clone(),
            context: self.context.clone(),
            namespace: self.namespace.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage TriggerBindings
    #[command(name = "triggerbinding", visible_aliases = ["tb", "triggerbindings"])]
    TriggerBinding(TriggerBindingArgs),
    /// Generate shell completion scripts
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct TriggerBindingArgs {
    #[command(subcommand)]
    pub command: TriggerBindingCommands,
}

#[derive(Subcommand)]
pub enum TriggerBindingCommands {
    /// Lists TriggerBindings in a namespace
    #[command(visible_alias = "ls", after_help = LIST_EXAMPLE)]
    List(ListArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    /// List TriggerBindings from all namespaces
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,

    /// Output format. One of: json, name, yaml
    #[arg(short, long, value_name = "FORMAT", default_value = "", hide_default_value = true)]
    pub output: String,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}
