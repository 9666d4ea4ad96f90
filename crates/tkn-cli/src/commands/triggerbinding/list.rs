//! List command implementation

use crate::cli::ListArgs;
use crate::output::Stream;
use anyhow::Context;
use anyhow::Result;
use anyhow::anyhow;
use chrono::DateTime;
use chrono::Utc;
use std::io;
use std::io::Write;
use tabwriter::TabWriter;
use tkn_core::Params;
use tkn_core::TriggerBindingList;
use tkn_core::TriggersClient;
use tkn_core::formatted;
use tkn_core::print_object;
use tkn_core::resource::LIST_API_VERSION;
use tkn_core::resource::LIST_KIND;

const EMPTY_MSG: &str = "No TriggerBindings found";

pub fn execute(args: &ListArgs, params: &dyn Params, stream: &mut Stream<'_>) -> Result<()> {
    let client = params.triggers()?;

    let namespace = if args.all_namespaces {
        ""
    } else {
        client.namespace()
    };

    let tbs = list(client.as_ref(), namespace).map_err(|err| {
        if args.all_namespaces {
            anyhow!("failed to list TriggerBindings from all namespaces: {err}")
        } else {
            anyhow!("failed to list TriggerBindings from {namespace} namespace: {err}")
        }
    })?;

    match args.output.as_str() {
        "" => print_formatted(stream, &tbs, params.time(), args.all_namespaces)
            .context("failed to print TriggerBindings"),
        "name" => {
            for tb in &tbs.items {
                writeln!(stream.out, "triggerbinding.triggers.tekton.dev/{}", tb.name())?;
            }
            stream.out.flush()?;
            Ok(())
        }
        format => Ok(print_object(&mut *stream.out, &tbs, format)?),
    }
}

/// Lists TriggerBindings in `namespace` (all namespaces when empty) and tags
/// the result with its `apiVersion` and `kind`, which the server leaves out
/// of list responses.
pub fn list(client: &dyn TriggersClient, namespace: &str) -> tkn_core::Result<TriggerBindingList> {
    let mut tbs = client.list_trigger_bindings(namespace)?;
    tbs.set_group_version_kind(LIST_API_VERSION, LIST_KIND);

    tracing::debug!(namespace, count = tbs.items.len(), "listed TriggerBindings");
    Ok(tbs)
}

fn print_formatted(
    stream: &mut Stream<'_>,
    tbs: &TriggerBindingList,
    now: DateTime<Utc>,
    all_namespaces: bool,
) -> io::Result<()> {
    if tbs.items.is_empty() {
        writeln!(stream.err, "{EMPTY_MSG}")?;
        return Ok(());
    }

    let headers = if all_namespaces {
        "NAMESPACE\tNAME\tAGE"
    } else {
        "NAME\tAGE"
    };

    let mut w = TabWriter::new(&mut *stream.out).minwidth(0).padding(3);

    writeln!(w, "{headers}")?;
    for tb in &tbs.items {
        let age = formatted::age(tb.creation_timestamp(), now);
        if all_namespaces {
            writeln!(w, "{}\t{}\t{}", tb.namespace(), tb.name(), age)?;
        } else {
            writeln!(w, "{}\t{}", tb.name(), age)?;
        }
    }

    w.flush()
}
