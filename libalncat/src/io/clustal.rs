use std::io::Write;

use super::{column_chunks, name_column_width, LINE_WIDTH};
use crate::structs::Alignment;

const HEADER: &str = "CLUSTAL W multiple sequence alignment";
const NAME_PADDING: usize = 4;

pub(super) fn write<W: Write>(writer: &mut W, alignment: &Alignment) -> std::io::Result<()> {
    let name_width = name_column_width(alignment) + NAME_PADDING;

    writeln!(writer, "{HEADER}")?;

    let mut blocks: Vec<_> = alignment
        .iter()
        .map(|record| column_chunks(&record.sequence, LINE_WIDTH))
        .collect();

    let num_blocks = alignment
        .iter()
        .map(|record| record.sequence.chars().count().div_ceil(LINE_WIDTH))
        .max()
        .unwrap_or(0);

    for _ in 0..num_blocks {
        writeln!(writer)?;
        for (record, chunks) in alignment.iter().zip(blocks.iter_mut()) {
            let block = chunks.next().unwrap_or_default();
            writeln!(writer, "{:<name_width$}{block}", record.name)?;
        }
    }
    Ok(())
}
