use crate::structs::{Alignment, Record};

/// Build a padding alignment of `count` unnamed records whose sequence is `motif`.
pub fn build_linker(motif: &str, count: usize) -> Alignment {
    (0..count).map(|_| Record::new("", motif)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_build_linker() {
        let linker = build_linker("GGSGG", 4);

        check!(linker.len() == 4);
        check!(linker.width() == 5);
        check!(linker.iter().all(|r| r.sequence == "GGSGG" && r.name.is_empty()));
        check!(linker.ragged_index().is_none());
    }

    #[test]
    fn test_build_empty_linker() {
        check!(build_linker("xx", 0).is_empty());
        check!(build_linker("", 3).width() == 0);
    }
}
