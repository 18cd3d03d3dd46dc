//! Finished span records
//!
//! A [`SpanRecord`] is a completed span as handed to the exporter: all
//! fields are final, identifiers are in lowercase hex text form, and the
//! `total_*_count` fields may exceed the retained collections when the
//! producer dropped data under its limits.

use bytes::Bytes;

use crate::model::attribute::KeyValue;
use crate::model::resource::{InstrumentationScope, Resource};

/// Identifiers of a span within a trace, in lowercase hex text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpanContext {
    /// 16-byte trace id as 32 hex characters.
    pub trace_id: String,
    /// 8-byte span id as 16 hex characters.
    pub span_id: String,
}

impl SpanContext {
    /// Create a span context from hex-encoded identifiers.
    pub fn new(trace_id: impl Into<String>, span_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            span_id: span_id.into(),
        }
    }

    /// Raw trace id bytes. Malformed hex decodes to empty bytes.
    pub fn trace_id_bytes(&self) -> Bytes {
        decode_hex(&self.trace_id)
    }

    /// Raw span id bytes. Malformed hex decodes to empty bytes.
    pub fn span_id_bytes(&self) -> Bytes {
        decode_hex(&self.span_id)
    }
}

fn decode_hex(text: &str) -> Bytes {
    hex::decode(text).map(Bytes::from).unwrap_or_default()
}

/// The role a span plays in a trace.
///
/// This set is closed: the wire mapping matches on it exhaustively, so an
/// out-of-set kind cannot reach the encoder at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Internal operation within an application.
    Internal,
    /// Server-side handling of a synchronous request.
    Server,
    /// Client-side of a synchronous request.
    Client,
    /// Initiator of an asynchronous message.
    Producer,
    /// Consumer of an asynchronous message.
    Consumer,
}

/// Final status of a finished span.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    /// No status was set by the application.
    #[default]
    Unset,
    /// The operation completed successfully.
    Ok,
    /// The operation failed.
    Error {
        /// Developer-facing description of the failure.
        description: String,
    },
}

/// A timestamped event recorded on a span.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanEvent {
    /// Event timestamp in nanoseconds since the Unix epoch.
    pub time_unix_nano: u64,
    /// Event name.
    pub name: String,
    /// Retained event attributes.
    pub attributes: Vec<KeyValue>,
    /// Total attributes seen, including any the producer dropped.
    pub total_attribute_count: u32,
}

/// A link from a span to a span in the same or another trace.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanLink {
    /// Identifiers of the linked span.
    pub context: SpanContext,
    /// Retained link attributes.
    pub attributes: Vec<KeyValue>,
    /// Total attributes seen, including any the producer dropped.
    pub total_attribute_count: u32,
}

/// A completed span, ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanRecord {
    /// Identifiers of this span.
    pub context: SpanContext,
    /// Identifiers of the parent span, if this span has a valid parent.
    pub parent: Option<SpanContext>,
    /// Operation name.
    pub name: String,
    /// Role of the span in the trace.
    pub kind: SpanKind,
    /// Start timestamp in nanoseconds since the Unix epoch.
    pub start_unix_nano: u64,
    /// End timestamp in nanoseconds since the Unix epoch.
    pub end_unix_nano: u64,
    /// Retained span attributes.
    pub attributes: Vec<KeyValue>,
    /// Total attributes seen, including any the producer dropped.
    pub total_attribute_count: u32,
    /// Retained events.
    pub events: Vec<SpanEvent>,
    /// Total events recorded, including any the producer dropped.
    pub total_event_count: u32,
    /// Retained links.
    pub links: Vec<SpanLink>,
    /// Total links recorded, including any the producer dropped.
    pub total_link_count: u32,
    /// Final status.
    pub status: Status,
    /// Resource the span was produced under; grouping key.
    pub resource: Resource,
    /// Instrumentation scope that recorded the span; grouping key.
    pub scope: InstrumentationScope,
}
