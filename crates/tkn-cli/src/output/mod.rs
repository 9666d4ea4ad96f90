//! Output streams and error reporting.

use console::Term;
use console::style;
use std::io::Write;

/// The pair of streams a command writes to.
pub struct Stream<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

/// Prints `error` and its causes on stderr.
pub fn report_error(error: &anyhow::Error) {
    let term = Term::stderr();
    let label = if console::colors_enabled_stderr() {
        style("Error:").red().bold().to_string()
    } else {
        "Error:".to_string()
    };
    term.write_line(&format!("{label} {error:#}")).ok();
}
