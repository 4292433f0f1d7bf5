pub mod alignment;
pub use alignment::Alignment;

pub mod record;
pub use record::Record;
