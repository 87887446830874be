pub mod change_modifier;
pub mod diff_line;
pub mod file_record;
pub mod listing_entry;
pub mod report;
pub mod size_index;
pub mod snapshot;

pub use crate::model::change_modifier::ChangeModifier;

pub use crate::model::diff_line::{ChangeEntry, DiffLine};

pub use crate::model::file_record::FileRecord;

pub use crate::model::listing_entry::ListingEntry;

pub use crate::model::report::Report;

pub use crate::model::size_index::SizeIndex;

pub use crate::model::snapshot::Snapshot;
