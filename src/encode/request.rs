//! Export request marshaler
//!
//! The top of the marshaler tree and the crate's entry point. Construction
//! runs the grouping stage and computes every nested length bottom-up;
//! writing is then a single forward pass that emits each length prefix from
//! the value cached at construction.

use std::io::{self, Write};

use tracing::debug;

use crate::encode::attribute::AttributeMarshaler;
use crate::encode::cache::IdBytesCache;
use crate::encode::field::{self, FieldWriter};
use crate::encode::group::{self, ScopeGroups};
use crate::encode::marshal::{self, Marshal};
use crate::encode::span::SpanMarshaler;
use crate::encode::tags;
use crate::error::EncodeError;
use crate::model::{InstrumentationScope, Resource, SpanRecord};

/// Marshaler for a full `ExportTraceServiceRequest`.
///
/// Borrow the batch, build the marshaler, then write it out:
///
/// ```
/// use otlp_trace_encoder::{IdBytesCache, TraceRequestMarshaler};
///
/// let spans = Vec::new();
/// let mut cache = IdBytesCache::new();
/// let request = TraceRequestMarshaler::new(&spans, &mut cache);
/// let encoded = request.encode_to_vec();
/// assert_eq!(encoded.len(), request.encoded_len());
/// ```
pub struct TraceRequestMarshaler<'a> {
    resource_spans: Vec<ResourceSpansMarshaler<'a>>,
    size: usize,
}

impl<'a> TraceRequestMarshaler<'a> {
    /// Build the request tree for one batch.
    ///
    /// Groups the batch by (resource, scope), constructs every nested
    /// marshaler, and computes all encoded lengths. The cache is cleared
    /// before this returns, success or not, so a reused cache never leaks
    /// identifiers across batches.
    pub fn new(spans: &'a [SpanRecord], cache: &mut IdBytesCache) -> Self {
        let grouped = group::by_resource_and_scope(spans, cache);
        cache.clear();

        let resource_spans: Vec<ResourceSpansMarshaler<'a>> = grouped
            .into_iter()
            .map(|(resource, scopes)| ResourceSpansMarshaler::new(resource, scopes))
            .collect();
        let size =
            marshal::repeated_len(tags::export_trace_request::RESOURCE_SPANS, &resource_spans);

        debug!(
            spans = spans.len(),
            resource_groups = resource_spans.len(),
            bytes = size,
            "built trace export request"
        );

        Self {
            resource_spans,
            size,
        }
    }

    /// Exact size of the serialized request in bytes.
    pub fn encoded_len(&self) -> usize {
        self.size
    }

    /// Write the serialized request to a sink in one pass.
    ///
    /// A sink failure propagates immediately and aborts the write; no
    /// partial result is reported as success.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), EncodeError> {
        let mut writer = FieldWriter::new(out);
        marshal::write_repeated(
            tags::export_trace_request::RESOURCE_SPANS,
            &self.resource_spans,
            &mut writer,
        )?;
        Ok(())
    }

    /// Serialize the request into a freshly allocated buffer of exactly
    /// [`encoded_len`](Self::encoded_len) bytes.
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.size);
        self.write_to(&mut buf)
            .expect("writing to a Vec cannot fail");
        buf
    }
}

/// Encode a batch of finished spans into a serialized
/// `ExportTraceServiceRequest`, using a cache scoped to this call.
pub fn encode_spans(spans: &[SpanRecord]) -> Vec<u8> {
    let mut cache = IdBytesCache::new();
    TraceRequestMarshaler::new(spans, &mut cache).encode_to_vec()
}

/// One `ResourceSpans` message: resource descriptor, scope groups, schema URL.
struct ResourceSpansMarshaler<'a> {
    resource: ResourceMarshaler<'a>,
    scope_spans: Vec<ScopeSpansMarshaler<'a>>,
    schema_url: &'a str,
    size: usize,
}

impl<'a> ResourceSpansMarshaler<'a> {
    fn new(resource: &'a Resource, scopes: ScopeGroups<'a>) -> Self {
        let scope_spans: Vec<ScopeSpansMarshaler<'a>> = scopes
            .into_iter()
            .map(|(scope, spans)| ScopeSpansMarshaler::new(scope, spans))
            .collect();
        let resource_marshaler = ResourceMarshaler::new(resource);
        let schema_url = resource.schema_url.as_deref().unwrap_or("");
        let size = marshal::message_len(tags::resource_spans::RESOURCE, &resource_marshaler)
            + marshal::repeated_len(tags::resource_spans::SCOPE_SPANS, &scope_spans)
            + field::string_len(tags::resource_spans::SCHEMA_URL, schema_url);
        Self {
            resource: resource_marshaler,
            scope_spans,
            schema_url,
            size,
        }
    }
}

impl Marshal for ResourceSpansMarshaler<'_> {
    fn encoded_len(&self) -> usize {
        self.size
    }

    fn write<W: Write>(&self, out: &mut FieldWriter<W>) -> io::Result<()> {
        marshal::write_message(tags::resource_spans::RESOURCE, &self.resource, out)?;
        marshal::write_repeated(tags::resource_spans::SCOPE_SPANS, &self.scope_spans, out)?;
        out.string_field(tags::resource_spans::SCHEMA_URL, self.schema_url)
    }
}

/// One `ScopeSpans` message: scope descriptor, spans, schema URL.
struct ScopeSpansMarshaler<'a> {
    scope: ScopeMarshaler<'a>,
    spans: Vec<SpanMarshaler<'a>>,
    schema_url: &'a str,
    size: usize,
}

impl<'a> ScopeSpansMarshaler<'a> {
    fn new(scope: &'a InstrumentationScope, spans: Vec<SpanMarshaler<'a>>) -> Self {
        let scope_marshaler = ScopeMarshaler::new(scope);
        let schema_url = scope.schema_url.as_deref().unwrap_or("");
        let size = marshal::message_len(tags::scope_spans::SCOPE, &scope_marshaler)
            + marshal::repeated_len(tags::scope_spans::SPANS, &spans)
            + field::string_len(tags::scope_spans::SCHEMA_URL, schema_url);
        Self {
            scope: scope_marshaler,
            spans,
            schema_url,
            size,
        }
    }
}

impl Marshal for ScopeSpansMarshaler<'_> {
    fn encoded_len(&self) -> usize {
        self.size
    }

    fn write<W: Write>(&self, out: &mut FieldWriter<W>) -> io::Result<()> {
        marshal::write_message(tags::scope_spans::SCOPE, &self.scope, out)?;
        marshal::write_repeated(tags::scope_spans::SPANS, &self.spans, out)?;
        out.string_field(tags::scope_spans::SCHEMA_URL, self.schema_url)
    }
}

/// The `Resource` descriptor sub-message: its attribute set.
struct ResourceMarshaler<'a> {
    attributes: Vec<AttributeMarshaler<'a>>,
    size: usize,
}

impl<'a> ResourceMarshaler<'a> {
    fn new(resource: &'a Resource) -> Self {
        let attributes = AttributeMarshaler::create_repeated(&resource.attributes);
        let size = marshal::repeated_len(tags::resource::ATTRIBUTES, &attributes);
        Self { attributes, size }
    }
}

impl Marshal for ResourceMarshaler<'_> {
    fn encoded_len(&self) -> usize {
        self.size
    }

    fn write<W: Write>(&self, out: &mut FieldWriter<W>) -> io::Result<()> {
        marshal::write_repeated(tags::resource::ATTRIBUTES, &self.attributes, out)
    }
}

/// The `InstrumentationScope` descriptor sub-message: name and version.
struct ScopeMarshaler<'a> {
    name: &'a str,
    version: &'a str,
    size: usize,
}

impl<'a> ScopeMarshaler<'a> {
    fn new(scope: &'a InstrumentationScope) -> Self {
        let version = scope.version.as_deref().unwrap_or("");
        let size = field::string_len(tags::scope::NAME, &scope.name)
            + field::string_len(tags::scope::VERSION, version);
        Self {
            name: &scope.name,
            version,
            size,
        }
    }
}

impl Marshal for ScopeMarshaler<'_> {
    fn encoded_len(&self) -> usize {
        self.size
    }

    fn write<W: Write>(&self, out: &mut FieldWriter<W>) -> io::Result<()> {
        out.string_field(tags::scope::NAME, self.name)?;
        out.string_field(tags::scope::VERSION, self.version)
    }
}
