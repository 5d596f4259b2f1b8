pub mod catalog;
pub mod entry;
pub mod record;

pub use catalog::Catalog;
pub use entry::{Entry, Reference};
pub use record::MessageRecord;
