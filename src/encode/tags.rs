//! OTLP trace v1 field numbers and enum values
//!
//! Declared once so the size and write passes share a single source of
//! truth. Numbers follow `opentelemetry.proto.trace.v1` and
//! `opentelemetry.proto.common.v1`.

pub(crate) mod export_trace_request {
    pub(crate) const RESOURCE_SPANS: u32 = 1;
}

pub(crate) mod resource_spans {
    pub(crate) const RESOURCE: u32 = 1;
    pub(crate) const SCOPE_SPANS: u32 = 2;
    pub(crate) const SCHEMA_URL: u32 = 3;
}

pub(crate) mod scope_spans {
    pub(crate) const SCOPE: u32 = 1;
    pub(crate) const SPANS: u32 = 2;
    pub(crate) const SCHEMA_URL: u32 = 3;
}

pub(crate) mod resource {
    pub(crate) const ATTRIBUTES: u32 = 1;
}

pub(crate) mod scope {
    pub(crate) const NAME: u32 = 1;
    pub(crate) const VERSION: u32 = 2;
}

pub(crate) mod span {
    pub(crate) const TRACE_ID: u32 = 1;
    pub(crate) const SPAN_ID: u32 = 2;
    // Field 3 is trace_state, which SpanRecord does not carry.
    pub(crate) const PARENT_SPAN_ID: u32 = 4;
    pub(crate) const NAME: u32 = 5;
    pub(crate) const KIND: u32 = 6;
    pub(crate) const START_TIME_UNIX_NANO: u32 = 7;
    pub(crate) const END_TIME_UNIX_NANO: u32 = 8;
    pub(crate) const ATTRIBUTES: u32 = 9;
    pub(crate) const DROPPED_ATTRIBUTES_COUNT: u32 = 10;
    pub(crate) const EVENTS: u32 = 11;
    pub(crate) const DROPPED_EVENTS_COUNT: u32 = 12;
    pub(crate) const LINKS: u32 = 13;
    pub(crate) const DROPPED_LINKS_COUNT: u32 = 14;
    pub(crate) const STATUS: u32 = 15;

    pub(crate) mod kind {
        pub(crate) const INTERNAL: i32 = 1;
        pub(crate) const SERVER: i32 = 2;
        pub(crate) const CLIENT: i32 = 3;
        pub(crate) const PRODUCER: i32 = 4;
        pub(crate) const CONSUMER: i32 = 5;
    }
}

pub(crate) mod event {
    pub(crate) const TIME_UNIX_NANO: u32 = 1;
    pub(crate) const NAME: u32 = 2;
    pub(crate) const ATTRIBUTES: u32 = 3;
    pub(crate) const DROPPED_ATTRIBUTES_COUNT: u32 = 4;
}

pub(crate) mod link {
    pub(crate) const TRACE_ID: u32 = 1;
    pub(crate) const SPAN_ID: u32 = 2;
    // Field 3 is trace_state, which SpanLink does not carry.
    pub(crate) const ATTRIBUTES: u32 = 4;
    pub(crate) const DROPPED_ATTRIBUTES_COUNT: u32 = 5;
}

pub(crate) mod status {
    pub(crate) const DEPRECATED_CODE: u32 = 1;
    pub(crate) const MESSAGE: u32 = 2;
    pub(crate) const CODE: u32 = 3;

    pub(crate) mod code {
        pub(crate) const OK: i32 = 1;
        pub(crate) const ERROR: i32 = 2;
    }

    pub(crate) mod deprecated_code {
        pub(crate) const UNKNOWN_ERROR: i32 = 2;
    }
}

pub(crate) mod key_value {
    pub(crate) const KEY: u32 = 1;
    pub(crate) const VALUE: u32 = 2;
}

pub(crate) mod any_value {
    pub(crate) const STRING_VALUE: u32 = 1;
    pub(crate) const BOOL_VALUE: u32 = 2;
    pub(crate) const INT_VALUE: u32 = 3;
    pub(crate) const DOUBLE_VALUE: u32 = 4;
    pub(crate) const ARRAY_VALUE: u32 = 5;
}

pub(crate) mod array_value {
    pub(crate) const VALUES: u32 = 1;
}
