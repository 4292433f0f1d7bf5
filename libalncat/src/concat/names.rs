use crate::structs::Alignment;

use super::{record_count, ConcatError, NAME_SEPARATOR};

pub(crate) fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(NAME_SEPARATOR)
}

/// Produce one composite name per record position by joining the
/// names found at that position in each alignment with an underscore.
///
/// Alignments with differing record counts are rejected rather than
/// zipped down to the shortest one.
pub fn merge_names(alignments: &[Alignment]) -> Result<Vec<String>, ConcatError> {
    let num_records = record_count(alignments)?;

    Ok((0..num_records)
        .map(|record_idx| {
            join_names(
                alignments
                    .iter()
                    .map(|alignment| alignment.records[record_idx].name.as_str()),
            )
        })
        .collect())
}
