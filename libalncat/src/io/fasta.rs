use std::io::{Read, Write};

use anyhow::Context;
use seq_io::fasta::{Reader, Record as FastaRecord};

use super::{column_chunks, LINE_WIDTH};
use crate::structs::{Alignment, Record};

pub(super) fn parse<R: Read>(reader: R) -> anyhow::Result<Alignment> {
    let mut reader = Reader::new(reader);
    let mut records = vec![];

    while let Some(record) = reader.next() {
        let record = record.with_context(|| "failed to read fasta record")?;

        let error_context: fn() -> &'static str =
            || "failed to create String from fasta header bytes";

        let header = std::str::from_utf8(record.head()).with_context(error_context)?;
        let (name, description) = match header.split_once(char::is_whitespace) {
            Some((name, details)) => (name, Some(details.trim())),
            None => (header, None),
        };

        let mut sequence_bytes: Vec<u8> = vec![];
        for line in record.seq_lines() {
            sequence_bytes.extend(line.iter().filter(|b| !b.is_ascii_whitespace()));
        }

        records.push(Record {
            name: name.to_string(),
            description: description
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            sequence: String::from_utf8(sequence_bytes)
                .context("failed to create String from fasta sequence bytes")?,
        });
    }

    Ok(Alignment::new(records))
}

pub(super) fn write<W: Write>(writer: &mut W, alignment: &Alignment) -> std::io::Result<()> {
    for record in alignment {
        write!(writer, ">{}", record.name)?;
        if let Some(ref description) = record.description {
            write!(writer, " {description}")?;
        }
        writeln!(writer)?;

        for line in column_chunks(&record.sequence, LINE_WIDTH) {
            writeln!(writer, "{line}")?;
        }
    }
    Ok(())
}
