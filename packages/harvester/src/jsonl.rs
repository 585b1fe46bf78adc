//! Line-delimited JSON output.
//!
//! The interchange contract with the import collaborator: one JSON object
//! per record per line, UTF-8 with non-ASCII emitted literally, no
//! enclosing array.

use std::io::Write;

use crate::error::Result;
use crate::types::ProductionRecord;

/// Append records to the sink, one JSON object per line.
pub fn write_records<W: Write>(out: &mut W, records: &[ProductionRecord]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
