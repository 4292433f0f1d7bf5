use std::io::{BufRead, BufReader, Read, Write};

use indexmap::IndexMap;
use thiserror::Error;

use super::name_column_width;
use crate::structs::{Alignment, Record};

const HEADER: &str = "# STOCKHOLM 1.0";
const TERMINATOR: &str = "//";

#[derive(Error, Debug)]
#[error("stockholm line {line}: {reason}")]
pub struct StockholmParseError {
    line: usize,
    reason: &'static str,
}

pub(super) fn parse<R: Read>(reader: R) -> anyhow::Result<Alignment> {
    let mut sequences: IndexMap<String, String> = IndexMap::new();
    let mut seen_header = false;

    for (line_idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        let line_number = line_idx + 1;

        if !seen_header {
            match line {
                "" => continue,
                l if l.starts_with("# STOCKHOLM") => {
                    seen_header = true;
                    continue;
                }
                _ => {
                    return Err(StockholmParseError {
                        line: line_number,
                        reason: "missing \"# STOCKHOLM\" header",
                    }
                    .into())
                }
            }
        }

        if line == TERMINATOR {
            break;
        }

        // blank lines separate blocks, #= lines carry annotation
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(name), Some(chunk), None) => {
                sequences.entry(name.to_string()).or_default().push_str(chunk);
            }
            _ => {
                return Err(StockholmParseError {
                    line: line_number,
                    reason: "expected a name followed by a sequence",
                }
                .into())
            }
        }
    }

    Ok(sequences
        .into_iter()
        .map(|(name, sequence)| Record {
            name,
            description: None,
            sequence,
        })
        .collect())
}

pub(super) fn write<W: Write>(writer: &mut W, alignment: &Alignment) -> std::io::Result<()> {
    let width = name_column_width(alignment);

    writeln!(writer, "{HEADER}")?;
    for record in alignment {
        writeln!(writer, "{:<width$} {}", record.name, record.sequence)?;
    }
    writeln!(writer, "{TERMINATOR}")
}
