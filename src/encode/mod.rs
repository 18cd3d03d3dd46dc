//! OTLP export request encoding
//!
//! Converts a batch of [`SpanRecord`](crate::model::SpanRecord)s into a
//! serialized `ExportTraceServiceRequest` in two phases:
//!
//! 1. **Construction**: the batch is grouped by (resource, scope) and an
//!    immutable marshaler tree is built bottom-up, each node memoizing its
//!    exact encoded byte length.
//! 2. **Write**: a single top-down pass emits every length prefix and body
//!    from the lengths cached in phase 1 — no buffering, no backtracking.
//!
//! The phases stay separate because a parent's length prefix can only be
//! written once its children's lengths are known.

mod attribute;
pub mod cache;
pub mod field;
mod group;
pub mod marshal;
pub mod request;
mod span;
mod tags;

pub use cache::IdBytesCache;
pub use field::FieldWriter;
pub use marshal::Marshal;
pub use request::{TraceRequestMarshaler, encode_spans};
