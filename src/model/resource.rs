//! Resource and instrumentation-scope descriptors
//!
//! Both act as grouping keys: equality and hashing are by value, so any
//! number of distinct instances describing the same logical resource or
//! scope collapse into one group.

use crate::model::attribute::KeyValue;

/// The entity that produced a batch of spans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Resource {
    /// Attributes describing the resource (service name, host, ...).
    pub attributes: Vec<KeyValue>,
    /// URL of the schema the resource attributes follow, if any.
    pub schema_url: Option<String>,
}

impl Resource {
    /// Create a resource from its attribute set.
    pub fn new(attributes: Vec<KeyValue>) -> Self {
        Self {
            attributes,
            schema_url: None,
        }
    }

    /// Attach a schema URL.
    pub fn with_schema_url(mut self, schema_url: impl Into<String>) -> Self {
        self.schema_url = Some(schema_url.into());
        self
    }
}

/// The instrumentation library that recorded a span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct InstrumentationScope {
    /// Scope name, typically the instrumentation library path.
    pub name: String,
    /// Scope version, if known.
    pub version: Option<String>,
    /// URL of the schema the scope follows, if any.
    pub schema_url: Option<String>,
}

impl InstrumentationScope {
    /// Create a scope from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            schema_url: None,
        }
    }

    /// Attach a version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Attach a schema URL.
    pub fn with_schema_url(mut self, schema_url: impl Into<String>) -> Self {
        self.schema_url = Some(schema_url.into());
        self
    }
}
