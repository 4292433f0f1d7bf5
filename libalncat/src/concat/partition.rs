use serde::{Deserialize, Serialize};

use crate::structs::Alignment;

/// The columns of a composite alignment contributed by one input alignment.
///
/// Coordinates are 1-based and inclusive; linker columns belong to no partition.
/// A segment without columns is reported with `end == start - 1`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub source: String,
    pub start: usize,
    pub end: usize,
}

impl Partition {
    pub fn width(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }
}

/// Compute the partition of each `(source, alignment)` segment, laid out
/// the way [`super::concatenate`] lays them out for the same linker.
pub fn partitions<'a, S>(
    segments: impl IntoIterator<Item = (S, &'a Alignment)>,
    linker: Option<&str>,
) -> Vec<Partition>
where
    S: Into<String>,
{
    let linker_width = linker.map_or(0, str::len);
    let mut offset = 0usize;

    segments
        .into_iter()
        .enumerate()
        .map(|(idx, (source, alignment))| {
            if idx > 0 {
                offset += linker_width;
            }
            let start = offset + 1;
            offset += alignment.width();

            Partition {
                source: source.into(),
                start,
                end: offset,
            }
        })
        .collect()
}
