use rayon::prelude::*;

use crate::structs::Alignment;

use super::{record_count, ConcatError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorrespondenceMode {
    /// Record `i` of every alignment belongs to output row `i`
    Positional,
    /// Output rows follow the sorted names of the first alignment
    ByName,
}

/// A table of record indices: one row per output record,
/// one column per input alignment (in input order).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Correspondence {
    mode: CorrespondenceMode,
    num_alignments: usize,
    indices: Vec<usize>,
}

impl Correspondence {
    pub fn resolve(
        alignments: &[Alignment],
        mode: CorrespondenceMode,
    ) -> Result<Self, ConcatError> {
        let num_records = record_count(alignments)?;
        let num_alignments = alignments.len();

        let indices = match mode {
            CorrespondenceMode::Positional => (0..num_records)
                .flat_map(|record_idx| std::iter::repeat(record_idx).take(num_alignments))
                .collect(),
            CorrespondenceMode::ByName => resolve_by_name(alignments, num_records)?,
        };

        Ok(Self {
            mode,
            num_alignments,
            indices,
        })
    }

    pub fn mode(&self) -> CorrespondenceMode {
        self.mode
    }

    /// The number of output rows.
    pub fn len(&self) -> usize {
        match self.num_alignments {
            0 => 0,
            n => self.indices.len() / n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The record index in each alignment that contributes to each output row, in row order.
    pub fn rows(&self) -> rayon::slice::Chunks<'_, usize> {
        self.indices.par_chunks(self.num_alignments.max(1))
    }
}

fn resolve_by_name(
    alignments: &[Alignment],
    num_records: usize,
) -> Result<Vec<usize>, ConcatError> {
    let name_indexes: Vec<_> = alignments.iter().map(Alignment::name_index).collect();

    let mut names: Vec<&str> = alignments[0].names().collect();
    names.sort_unstable();

    let mut indices = Vec::with_capacity(num_records * alignments.len());
    for name in names {
        for (alignment_idx, name_index) in name_indexes.iter().enumerate() {
            match name_index.get(name).map(Vec::as_slice) {
                Some(&[record_idx]) => indices.push(record_idx),
                found => {
                    return Err(ConcatError::IdentifierMismatch {
                        name: name.to_string(),
                        index: alignment_idx,
                        count: found.map_or(0, <[usize]>::len),
                    })
                }
            }
        }
    }

    Ok(indices)
}
