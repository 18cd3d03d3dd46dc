//! Read-only span data model
//!
//! The records the encoder consumes. The encoder never mutates these; a
//! batch is materialized as a slice of [`SpanRecord`] before encoding
//! begins.

pub mod attribute;
pub mod resource;
pub mod span;

pub use attribute::{ArrayValue, KeyValue, Value};
pub use resource::{InstrumentationScope, Resource};
pub use span::{SpanContext, SpanEvent, SpanKind, SpanLink, SpanRecord, Status};
