//! OTLP Trace Encoder
//!
//! A Rust library for encoding batches of finished trace spans into OTLP
//! `ExportTraceServiceRequest` protobuf messages.
//!
//! # Features
//!
//! - Single-pass encoding: every nested message length is computed before
//!   the first byte is written
//! - Stable grouping by resource and instrumentation scope in first-seen
//!   order
//! - Per-batch identifier cache so hex ids are converted to bytes once
//! - No internal locking; independent batches encode concurrently
//!
//! # Example
//!
//! ```
//! use otlp_trace_encoder::encode_spans;
//! use otlp_trace_encoder::model::{
//!     InstrumentationScope, KeyValue, Resource, SpanContext, SpanKind, SpanRecord, Status,
//! };
//!
//! let span = SpanRecord {
//!     context: SpanContext::new(
//!         "0102030405060708090a0b0c0d0e0f10",
//!         "0102030405060708",
//!     ),
//!     parent: None,
//!     name: "GET /health".to_owned(),
//!     kind: SpanKind::Server,
//!     start_unix_nano: 1_000,
//!     end_unix_nano: 2_000,
//!     attributes: vec![KeyValue::new("http.status_code", 200i64)],
//!     total_attribute_count: 1,
//!     events: Vec::new(),
//!     total_event_count: 0,
//!     links: Vec::new(),
//!     total_link_count: 0,
//!     status: Status::Ok,
//!     resource: Resource::new(vec![KeyValue::new("service.name", "api")]),
//!     scope: InstrumentationScope::new("example"),
//! };
//!
//! let encoded = encode_spans(&[span]);
//! assert!(!encoded.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encode;
pub mod error;
pub mod model;

// Re-export public API
pub use encode::{IdBytesCache, Marshal, TraceRequestMarshaler, encode_spans};
pub use error::EncodeError;

// Initialize tracing subscriber for structured logging
use tracing_subscriber::EnvFilter;

/// Initialize structured logging
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init();
}
