use std::fmt::{Debug, Display, Formatter};

/// One row of an alignment: a named, aligned sequence.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Record {
    /// The name of the sequence
    pub name: String,
    /// The sequence details. If the record comes from a fasta, this
    /// is the information following the sequence name in the header
    pub description: Option<String>,
    /// The aligned sequence, gap characters included
    pub sequence: String,
}

impl Record {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sequence: sequence.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The number of alignment columns covered by this record.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;

        if let Some(ref description) = self.description {
            write!(f, " {description}")?
        };

        write!(f, "\n{}", self.sequence)
    }
}

impl Debug for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.sequence)
    }
}
