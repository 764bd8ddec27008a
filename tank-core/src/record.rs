//! Types and traits for recording per-step and per-episode values.
//!
//! * [`Record`] - a container of named values
//! * [`RecordValue`] - the values a record can hold
//! * [`Recorder`] - a sink for records
//! * [`BufferedRecorder`] - keeps records in memory
//! * [`NullRecorder`] - discards records
//!
//! ```rust
//! use tank_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("step", RecordValue::Scalar(12.0));
//! record.insert("reward", RecordValue::Scalar(-0.05));
//! record.insert("reload_ratio", RecordValue::Scalar(0.25));
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
