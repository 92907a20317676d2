//! Request extractors.

pub mod record_id;
pub use record_id::{InvalidRecordId, RecordId};
