//! Application records and their per-owner store.
//!
//! A [`RecordStore`] holds the ordered records of one [`Owner`] and keeps
//! them in a CSV file named after that owner. The CSV layout is shared with
//! exports; see [`codec`].

pub mod codec;
pub mod errors;
pub mod store;
pub mod types;

pub use errors::RecordError;
pub use store::{ModeSummary, RecordStore, StoredRecord};
pub use types::*;
