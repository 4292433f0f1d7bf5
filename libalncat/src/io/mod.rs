//! Reading and writing alignments.
//!
//! The format is always named by the caller; nothing here tries to guess it.

mod clustal;
mod fasta;
mod phylip;
mod stockholm;

pub use stockholm::StockholmParseError;

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use anyhow::Context;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::structs::Alignment;

/// Columns per line for the formats that wrap sequences.
pub const LINE_WIDTH: usize = 60;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter, clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum AlignmentFormat {
    /// Aligned FASTA
    #[default]
    Fasta,
    Stockholm,
    /// Relaxed, sequential PHYLIP
    Phylip,
    Clustal,
}

/// The subset of formats that alignments can be read from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Fasta,
    Stockholm,
}

impl From<InputFormat> for AlignmentFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Fasta => AlignmentFormat::Fasta,
            InputFormat::Stockholm => AlignmentFormat::Stockholm,
        }
    }
}

#[derive(Error, Debug)]
#[error("alignments can't be read from {format} files")]
pub struct UnsupportedInputFormatError {
    format: AlignmentFormat,
}

#[derive(Error, Debug)]
#[error("record {name} has {length} columns, expected {expected}")]
pub struct RaggedAlignmentError {
    name: String,
    length: usize,
    expected: usize,
}

#[derive(Error, Debug)]
#[error("record name {name} occurs more than once")]
pub struct DuplicateNameError {
    name: String,
}

/// Read a single alignment from the file at `path`.
pub fn read_alignment(
    path: impl AsRef<Path>,
    format: AlignmentFormat,
) -> anyhow::Result<Alignment> {
    let path = path.as_ref();
    let file = File::open(path).context(format!(
        "failed to open alignment file: {}",
        path.to_string_lossy()
    ))?;

    parse_alignment(BufReader::new(file), format).context(format!(
        "failed to read {format} alignment: {}",
        path.to_string_lossy()
    ))
}

/// Parse a single alignment from `reader`, checking that record
/// names are unique and that every record has the same length.
pub fn parse_alignment<R: Read>(reader: R, format: AlignmentFormat) -> anyhow::Result<Alignment> {
    let alignment = match format {
        AlignmentFormat::Fasta => fasta::parse(reader)?,
        AlignmentFormat::Stockholm => stockholm::parse(reader)?,
        AlignmentFormat::Phylip | AlignmentFormat::Clustal => {
            return Err(UnsupportedInputFormatError { format }.into())
        }
    };

    validate(&alignment)?;
    Ok(alignment)
}

fn validate(alignment: &Alignment) -> anyhow::Result<()> {
    if let Some((name, _)) = alignment
        .name_index()
        .into_iter()
        .find(|(_, indices)| indices.len() > 1)
    {
        return Err(DuplicateNameError {
            name: name.to_string(),
        }
        .into());
    }

    if let Some(idx) = alignment.ragged_index() {
        let record = &alignment.records[idx];
        return Err(RaggedAlignmentError {
            name: record.name.clone(),
            length: record.len(),
            expected: alignment.width(),
        }
        .into());
    }

    Ok(())
}

pub fn write_alignment<W: Write>(
    writer: &mut W,
    alignment: &Alignment,
    format: AlignmentFormat,
) -> anyhow::Result<()> {
    match format {
        AlignmentFormat::Fasta => fasta::write(writer, alignment),
        AlignmentFormat::Stockholm => stockholm::write(writer, alignment),
        AlignmentFormat::Phylip => phylip::write(writer, alignment),
        AlignmentFormat::Clustal => clustal::write(writer, alignment),
    }
    .context(format!("failed to write {format} alignment"))?;

    writer.flush()?;
    Ok(())
}

/// Split `sequence` into lines of at most `width` characters, never inside a character.
fn column_chunks(sequence: &str, width: usize) -> impl Iterator<Item = &str> {
    let mut rest = sequence;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let split = rest
            .char_indices()
            .nth(width)
            .map_or(rest.len(), |(idx, _)| idx);
        let (chunk, tail) = rest.split_at(split);
        rest = tail;
        Some(chunk)
    })
}

/// The column width needed to left-align every record name.
fn name_column_width(alignment: &Alignment) -> usize {
    alignment.names().map(str::len).max().unwrap_or(0)
}
