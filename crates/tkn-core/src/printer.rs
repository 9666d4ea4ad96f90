//! Structured (machine readable) object printer.

use std::io::Write;

use serde::Serialize;

use crate::error::PrintError;

/// Output formats accepted by `-o`, including the name-only format that
/// commands handle themselves.
pub const ALLOWED_FORMATS: &str = "json, name, yaml";

/// Serializes `object` to `writer` in the requested `format`.
///
/// `json` is pretty printed and newline terminated; `yaml` is written as a
/// single document. Any other format is rejected without writing anything.
///
/// # Errors
///
/// Returns [`PrintError::UnsupportedFormat`] for unknown formats, or the
/// serialization/I-O error that interrupted printing.
///
/// # Examples
///
/// ```
/// use tkn_core::TriggerBindingList;
/// use tkn_core::print_object;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut out = Vec::new();
/// print_object(&mut out, &TriggerBindingList::default(), "json")?;
/// assert!(String::from_utf8(out)?.contains("\"items\": []"));
/// # Ok(())
/// # }
/// ```
pub fn print_object<W, T>(writer: &mut W, object: &T, format: &str) -> Result<(), PrintError>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    match format {
        "json" => {
            serde_json::to_writer_pretty(&mut *writer, object)?;
            writeln!(writer)?;
        }
        "yaml" => {
            let yaml = serde_yaml::to_string(object)?;
            writer.write_all(yaml.as_bytes())?;
        }
        other => {
            return Err(PrintError::UnsupportedFormat {
                format: other.to_string(),
                allowed: ALLOWED_FORMATS,
            });
        }
    }

    writer.flush()?;
    Ok(())
}
