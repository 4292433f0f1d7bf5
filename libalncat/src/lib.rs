//! Concatenate multiple sequence alignments, computed independently per gene or
//! per domain, into one composite alignment.
//!
//! ```
//! use libalncat::concat::concatenate;
//! use libalncat::structs::{Alignment, Record};
//!
//! let gene_a = Alignment::new(vec![Record::new("human", "AC-G"), Record::new("mouse", "ACCG")]);
//! let gene_b = Alignment::new(vec![Record::new("mouse", "TT-"), Record::new("human", "T-T")]);
//!
//! let composite = concatenate(&[gene_a, gene_b], Some("NN"), true).unwrap();
//! assert_eq!(composite.records[0].name, "human");
//! assert_eq!(composite.records[0].sequence, "AC-GNNT-T");
//! ```

pub mod concat;
pub mod io;
pub mod structs;

#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}
