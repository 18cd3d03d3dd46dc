//! Span, event, link, and status marshalers
//!
//! One marshaler per record, built eagerly with its exact encoded length.
//! Identifier bytes are resolved through the batch's [`IdBytesCache`] so a
//! trace id shared by many links is converted once.

use std::io::{self, Write};

use bytes::Bytes;

use crate::encode::attribute::AttributeMarshaler;
use crate::encode::cache::IdBytesCache;
use crate::encode::field::{self, FieldWriter};
use crate::encode::marshal::{self, Marshal};
use crate::encode::tags;
use crate::model::{SpanEvent, SpanKind, SpanLink, SpanRecord, Status};

/// One `Span` message.
pub(crate) struct SpanMarshaler<'a> {
    trace_id: Bytes,
    span_id: Bytes,
    parent_span_id: Bytes,
    name: &'a str,
    kind: i32,
    start_unix_nano: u64,
    end_unix_nano: u64,
    attributes: Vec<AttributeMarshaler<'a>>,
    dropped_attributes_count: u32,
    events: Vec<SpanEventMarshaler<'a>>,
    dropped_events_count: u32,
    links: Vec<SpanLinkMarshaler<'a>>,
    dropped_links_count: u32,
    status: Option<SpanStatusMarshaler<'a>>,
    size: usize,
}

impl<'a> SpanMarshaler<'a> {
    pub(crate) fn new(record: &'a SpanRecord, cache: &mut IdBytesCache) -> Self {
        let attributes = AttributeMarshaler::create_repeated(&record.attributes);
        let events = SpanEventMarshaler::create_repeated(&record.events);
        let links = SpanLinkMarshaler::create_repeated(&record.links, cache);

        let trace_id = cache.bytes_for(&record.context.trace_id, || {
            record.context.trace_id_bytes()
        });
        let span_id = cache.bytes_for(&record.context.span_id, || record.context.span_id_bytes());
        let parent_span_id = match &record.parent {
            Some(parent) => cache.bytes_for(&parent.span_id, || parent.span_id_bytes()),
            None => Bytes::new(),
        };

        let kind = proto_span_kind(record.kind);
        let status = SpanStatusMarshaler::create(&record.status);
        let dropped_attributes_count = dropped(record.total_attribute_count, record.attributes.len());
        let dropped_events_count = dropped(record.total_event_count, record.events.len());
        let dropped_links_count = dropped(record.total_link_count, record.links.len());

        let size = field::bytes_len(tags::span::TRACE_ID, &trace_id)
            + field::bytes_len(tags::span::SPAN_ID, &span_id)
            + field::bytes_len(tags::span::PARENT_SPAN_ID, &parent_span_id)
            + field::string_len(tags::span::NAME, &record.name)
            + field::enum_len(tags::span::KIND, kind)
            + field::fixed64_len(tags::span::START_TIME_UNIX_NANO, record.start_unix_nano)
            + field::fixed64_len(tags::span::END_TIME_UNIX_NANO, record.end_unix_nano)
            + marshal::repeated_len(tags::span::ATTRIBUTES, &attributes)
            + field::uint32_len(tags::span::DROPPED_ATTRIBUTES_COUNT, dropped_attributes_count)
            + marshal::repeated_len(tags::span::EVENTS, &events)
            + field::uint32_len(tags::span::DROPPED_EVENTS_COUNT, dropped_events_count)
            + marshal::repeated_len(tags::span::LINKS, &links)
            + field::uint32_len(tags::span::DROPPED_LINKS_COUNT, dropped_links_count)
            + status
                .as_ref()
                .map_or(0, |s| marshal::message_len(tags::span::STATUS, s));

        Self {
            trace_id,
            span_id,
            parent_span_id,
            name: &record.name,
            kind,
            start_unix_nano: record.start_unix_nano,
            end_unix_nano: record.end_unix_nano,
            attributes,
            dropped_attributes_count,
            events,
            dropped_events_count,
            links,
            dropped_links_count,
            status,
            size,
        }
    }
}

impl Marshal for SpanMarshaler<'_> {
    fn encoded_len(&self) -> usize {
        self.size
    }

    fn write<W: Write>(&self, out: &mut FieldWriter<W>) -> io::Result<()> {
        out.bytes_field(tags::span::TRACE_ID, &self.trace_id)?;
        out.bytes_field(tags::span::SPAN_ID, &self.span_id)?;
        out.bytes_field(tags::span::PARENT_SPAN_ID, &self.parent_span_id)?;
        out.string_field(tags::span::NAME, self.name)?;
        out.enum_field(tags::span::KIND, self.kind)?;
        out.fixed64_field(tags::span::START_TIME_UNIX_NANO, self.start_unix_nano)?;
        out.fixed64_field(tags::span::END_TIME_UNIX_NANO, self.end_unix_nano)?;
        marshal::write_repeated(tags::span::ATTRIBUTES, &self.attributes, out)?;
        out.uint32_field(
            tags::span::DROPPED_ATTRIBUTES_COUNT,
            self.dropped_attributes_count,
        )?;
        marshal::write_repeated(tags::span::EVENTS, &self.events, out)?;
        out.uint32_field(tags::span::DROPPED_EVENTS_COUNT, self.dropped_events_count)?;
        marshal::write_repeated(tags::span::LINKS, &self.links, out)?;
        out.uint32_field(tags::span::DROPPED_LINKS_COUNT, self.dropped_links_count)?;
        if let Some(status) = &self.status {
            marshal::write_message(tags::span::STATUS, status, out)?;
        }
        Ok(())
    }
}

/// One `Span.Event` message.
pub(crate) struct SpanEventMarshaler<'a> {
    time_unix_nano: u64,
    name: &'a str,
    attributes: Vec<AttributeMarshaler<'a>>,
    dropped_attributes_count: u32,
    size: usize,
}

impl<'a> SpanEventMarshaler<'a> {
    fn create_repeated(events: &'a [SpanEvent]) -> Vec<SpanEventMarshaler<'a>> {
        events.iter().map(SpanEventMarshaler::new).collect()
    }

    fn new(event: &'a SpanEvent) -> Self {
        let attributes = AttributeMarshaler::create_repeated(&event.attributes);
        let dropped_attributes_count = dropped(event.total_attribute_count, event.attributes.len());
        let size = field::fixed64_len(tags::event::TIME_UNIX_NANO, event.time_unix_nano)
            + field::string_len(tags::event::NAME, &event.name)
            + marshal::repeated_len(tags::event::ATTRIBUTES, &attributes)
            + field::uint32_len(
                tags::event::DROPPED_ATTRIBUTES_COUNT,
                dropped_attributes_count,
            );
        Self {
            time_unix_nano: event.time_unix_nano,
            name: &event.name,
            attributes,
            dropped_attributes_count,
            size,
        }
    }
}

impl Marshal for SpanEventMarshaler<'_> {
    fn encoded_len(&self) -> usize {
        self.size
    }

    fn write<W: Write>(&self, out: &mut FieldWriter<W>) -> io::Result<()> {
        out.fixed64_field(tags::event::TIME_UNIX_NANO, self.time_unix_nano)?;
        out.string_field(tags::event::NAME, self.name)?;
        marshal::write_repeated(tags::event::ATTRIBUTES, &self.attributes, out)?;
        out.uint32_field(
            tags::event::DROPPED_ATTRIBUTES_COUNT,
            self.dropped_attributes_count,
        )
    }
}

/// One `Span.Link` message.
pub(crate) struct SpanLinkMarshaler<'a> {
    trace_id: Bytes,
    span_id: Bytes,
    attributes: Vec<AttributeMarshaler<'a>>,
    dropped_attributes_count: u32,
    size: usize,
}

impl<'a> SpanLinkMarshaler<'a> {
    fn create_repeated(links: &'a [SpanLink], cache: &mut IdBytesCache) -> Vec<SpanLinkMarshaler<'a>> {
        links.iter().map(|link| SpanLinkMarshaler::new(link, cache)).collect()
    }

    fn new(link: &'a SpanLink, cache: &mut IdBytesCache) -> Self {
        let trace_id = cache.bytes_for(&link.context.trace_id, || link.context.trace_id_bytes());
        let span_id = cache.bytes_for(&link.context.span_id, || link.context.span_id_bytes());
        let attributes = AttributeMarshaler::create_repeated(&link.attributes);
        let dropped_attributes_count = dropped(link.total_attribute_count, link.attributes.len());
        let size = field::bytes_len(tags::link::TRACE_ID, &trace_id)
            + field::bytes_len(tags::link::SPAN_ID, &span_id)
            + marshal::repeated_len(tags::link::ATTRIBUTES, &attributes)
            + field::uint32_len(
                tags::link::DROPPED_ATTRIBUTES_COUNT,
                dropped_attributes_count,
            );
        Self {
            trace_id,
            span_id,
            attributes,
            dropped_attributes_count,
            size,
        }
    }
}

impl Marshal for SpanLinkMarshaler<'_> {
    fn encoded_len(&self) -> usize {
        self.size
    }

    fn write<W: Write>(&self, out: &mut FieldWriter<W>) -> io::Result<()> {
        out.bytes_field(tags::link::TRACE_ID, &self.trace_id)?;
        out.bytes_field(tags::link::SPAN_ID, &self.span_id)?;
        marshal::write_repeated(tags::link::ATTRIBUTES, &self.attributes, out)?;
        out.uint32_field(
            tags::link::DROPPED_ATTRIBUTES_COUNT,
            self.dropped_attributes_count,
        )
    }
}

/// One `Status` message.
///
/// The deprecated code field is kept for consumers of the old schema: it is
/// written only when the status is an error, and carries the legacy
/// UNKNOWN_ERROR code. `Unset` carries no information on the wire, so no
/// marshaler is built for it and the status field is absent entirely.
pub(crate) struct SpanStatusMarshaler<'a> {
    code: i32,
    deprecated_code: i32,
    description: &'a str,
    size: usize,
}

impl<'a> SpanStatusMarshaler<'a> {
    fn create(status: &'a Status) -> Option<Self> {
        let (code, deprecated_code, description) = match status {
            Status::Unset => return None,
            Status::Ok => (tags::status::code::OK, 0, ""),
            Status::Error { description } => (
                tags::status::code::ERROR,
                tags::status::deprecated_code::UNKNOWN_ERROR,
                description.as_str(),
            ),
        };
        let size = field::enum_len(tags::status::DEPRECATED_CODE, deprecated_code)
            + field::string_len(tags::status::MESSAGE, description)
            + field::enum_len(tags::status::CODE, code);
        Some(Self {
            code,
            deprecated_code,
            description,
            size,
        })
    }
}

impl Marshal for SpanStatusMarshaler<'_> {
    fn encoded_len(&self) -> usize {
        self.size
    }

    fn write<W: Write>(&self, out: &mut FieldWriter<W>) -> io::Result<()> {
        out.enum_field(tags::status::DEPRECATED_CODE, self.deprecated_code)?;
        out.string_field(tags::status::MESSAGE, self.description)?;
        out.enum_field(tags::status::CODE, self.code)
    }
}

fn proto_span_kind(kind: SpanKind) -> i32 {
    match kind {
        SpanKind::Internal => tags::span::kind::INTERNAL,
        SpanKind::Server => tags::span::kind::SERVER,
        SpanKind::Client => tags::span::kind::CLIENT,
        SpanKind::Producer => tags::span::kind::PRODUCER,
        SpanKind::Consumer => tags::span::kind::CONSUMER,
    }
}

// Anomalous inputs where retained exceeds total wrap like the two's
// complement subtraction they came from; interpreting them is out of scope.
fn dropped(total: u32, retained: usize) -> u32 {
    total.wrapping_sub(retained as u32)
}
