//! Concatenation of independently computed alignments into one composite alignment.
//!
//! Records are matched across alignments either by position (record `i` of every
//! alignment belongs together) or by name, in which case the names of the first
//! alignment are sorted and looked up in every other alignment. Both modes first
//! resolve a [`Correspondence`] table and then share the same assembly code.

mod correspondence;
mod linker;
mod names;
mod partition;

pub use correspondence::{Correspondence, CorrespondenceMode};
pub use linker::build_linker;
pub use names::merge_names;
pub use partition::{partitions, Partition};

use derive_builder::Builder;
use log::debug;
use rayon::prelude::*;
use thiserror::Error;

use crate::structs::{Alignment, Record};

pub(crate) const NAME_SEPARATOR: &str = "_";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConcatError {
    #[error("no alignments to concatenate")]
    EmptyInput,
    #[error("alignment at index {index} has {found} records, expected {expected}")]
    ShapeMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("record name {name} occurs {count} times in alignment at index {index}, expected exactly once")]
    IdentifierMismatch {
        name: String,
        index: usize,
        count: usize,
    },
}

/// Controls how [`concatenate_with`] joins alignments.
#[derive(Builder, Clone, Debug, Default, PartialEq, Eq)]
#[builder(default)]
pub struct ConcatOptions {
    /// A motif placed between every pair of consecutive segments
    #[builder(setter(into, strip_option))]
    pub linker: Option<String>,
    /// Match records by sorted name instead of by position
    pub sort_by_id: bool,
}

impl ConcatOptions {
    /// The linker motif, if there is one that would actually add columns.
    pub fn linker_motif(&self) -> Option<&str> {
        self.linker.as_deref().filter(|motif| !motif.is_empty())
    }

    pub fn correspondence_mode(&self) -> CorrespondenceMode {
        match self.sort_by_id {
            true => CorrespondenceMode::ByName,
            false => CorrespondenceMode::Positional,
        }
    }
}

/// Returns the shared record count of `alignments`.
pub(crate) fn record_count(alignments: &[Alignment]) -> Result<usize, ConcatError> {
    let expected = alignments.first().ok_or(ConcatError::EmptyInput)?.len();

    match alignments.iter().position(|a| a.len() != expected) {
        Some(index) => Err(ConcatError::ShapeMismatch {
            index,
            expected,
            found: alignments[index].len(),
        }),
        None => Ok(expected),
    }
}

/// Concatenate `alignments` in order, optionally separating segments with `linker`
/// and optionally matching records by sorted name instead of by position.
///
/// The inputs are left untouched and a freshly allocated alignment is returned.
pub fn concatenate(
    alignments: &[Alignment],
    linker: Option<&str>,
    sort_by_id: bool,
) -> Result<Alignment, ConcatError> {
    let options = ConcatOptions {
        linker: linker.map(str::to_string),
        sort_by_id,
    };
    concatenate_with(alignments, &options)
}

pub fn concatenate_with(
    alignments: &[Alignment],
    options: &ConcatOptions,
) -> Result<Alignment, ConcatError> {
    let correspondence = Correspondence::resolve(alignments, options.correspondence_mode())?;

    debug!(
        "concatenating {} records across {} alignments ({:?})",
        correspondence.len(),
        alignments.len(),
        correspondence.mode()
    );

    let linker = options
        .linker_motif()
        .map(|motif| build_linker(motif, correspondence.len()));

    // the row order is fixed by the correspondence table before
    // any work is dispatched; collect() keeps records in that order
    let records: Vec<Record> = correspondence
        .rows()
        .enumerate()
        .map(|(row_idx, row)| {
            let segments: Vec<&Record> = row
                .iter()
                .zip(alignments)
                .map(|(&record_idx, alignment)| &alignment.records[record_idx])
                .collect();

            let linker_record = linker.as_ref().map(|l| &l.records[row_idx]);
            composite_record(&segments, linker_record, correspondence.mode())
        })
        .collect();

    Ok(Alignment::new(records))
}

fn composite_record(
    segments: &[&Record],
    linker: Option<&Record>,
    mode: CorrespondenceMode,
) -> Record {
    let linker_len = linker.map_or(0, Record::len);
    let capacity = segments.iter().map(|r| r.len()).sum::<usize>()
        + linker_len * segments.len().saturating_sub(1);

    let mut sequence = String::with_capacity(capacity);
    for (idx, segment) in segments.iter().enumerate() {
        if idx > 0 {
            if let Some(linker) = linker {
                sequence.push_str(&linker.sequence);
            }
        }
        sequence.push_str(&segment.sequence);
    }

    let name = match mode {
        CorrespondenceMode::Positional => {
            names::join_names(segments.iter().map(|r| r.name.as_str()))
        }
        // every segment was looked up by this exact name
        CorrespondenceMode::ByName => segments
            .first()
            .map(|r| r.name.clone())
            .unwrap_or_default(),
    };

    Record {
        name,
        description: None,
        sequence,
    }
}
