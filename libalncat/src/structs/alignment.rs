use std::fmt::{Debug, Formatter};

use indexmap::IndexMap;

use super::Record;

/// An ordered collection of aligned records.
///
/// Every record is expected to span the same number of columns. The
/// concatenation code trusts this; the readers in `crate::io` check it.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Alignment {
    pub records: Vec<Record>,
}

impl Alignment {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The number of records (rows) in the alignment.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The number of columns in the alignment, taken from the first record.
    pub fn width(&self) -> usize {
        self.records.first().map_or(0, Record::len)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Map each record name to the indices of the records that carry it, in record order.
    pub fn name_index(&self) -> IndexMap<&str, Vec<usize>> {
        let mut index: IndexMap<&str, Vec<usize>> = IndexMap::with_capacity(self.records.len());
        self.records
            .iter()
            .enumerate()
            .for_each(|(idx, record)| index.entry(record.name.as_str()).or_default().push(idx));
        index
    }

    /// Returns the (first, if any) index of a record whose length differs
    /// from the first record's length.
    pub fn ragged_index(&self) -> Option<usize> {
        let width = self.width();
        self.records.iter().position(|r| r.len() != width)
    }
}

impl FromIterator<Record> for Alignment {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Alignment {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Alignment {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl Debug for Alignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Alignment ({} x {})", self.len(), self.width())?;
        for record in &self.records {
            writeln!(f, "{record:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_width_and_ragged_index() {
        let alignment = Alignment::new(vec![
            Record::new("a", "AC-GT"),
            Record::new("b", "ACGGT"),
            Record::new("c", "AC-G"),
        ]);

        check!(alignment.len() == 3);
        check!(alignment.width() == 5);
        check!(alignment.ragged_index() == Some(2));
        check!(Alignment::default().width() == 0);
        check!(Alignment::default().ragged_index().is_none());
    }

    #[test]
    fn test_name_index_groups_duplicates() {
        let alignment = Alignment::new(vec![
            Record::new("b", "A"),
            Record::new("a", "C"),
            Record::new("b", "G"),
        ]);

        let index = alignment.name_index();
        check!(index.len() == 2);
        check!(index["b"] == vec![0, 2]);
        check!(index["a"] == vec![1]);
        check!(index.keys().copied().collect::<Vec<_>>() == vec!["b", "a"]);
    }
}
