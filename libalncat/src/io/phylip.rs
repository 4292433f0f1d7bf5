use std::io::Write;

use crate::structs::Alignment;

/// Relaxed PHYLIP: a "records columns" header, then one
/// whitespace separated name and sequence per line.
pub(super) fn write<W: Write>(writer: &mut W, alignment: &Alignment) -> std::io::Result<()> {
    writeln!(writer, "{} {}", alignment.len(), alignment.width())?;
    for record in alignment {
        writeln!(writer, "{} {}", record.name, record.sequence)?;
    }
    Ok(())
}
