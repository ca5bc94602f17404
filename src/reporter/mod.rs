use std::io::Write;

use crate::app::Result;
use crate::domain::Tld;

/// Writes the newly inserted entries as a JSON array of strings, in
/// encounter order, followed by a newline. An empty batch still produces
/// a complete document (`[]`).
pub fn write_report<W: Write>(new_tlds: &[Tld], mut out: W) -> Result<()> {
    serde_json::to_writer(&mut out, new_tlds)?;
    out.write_all(b"\n")?;
    Ok(())
}
