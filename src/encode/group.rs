//! Grouping stage
//!
//! Partitions a flat batch into resource groups and scope sub-groups in a
//! single pass. Both map levels preserve first-seen insertion order, and
//! keys compare by value, so distinct descriptor instances describing the
//! same resource or scope collapse into one group.

use indexmap::IndexMap;

use crate::encode::cache::IdBytesCache;
use crate::encode::span::SpanMarshaler;
use crate::model::{InstrumentationScope, Resource, SpanRecord};

pub(crate) type ScopeGroups<'a> = IndexMap<&'a InstrumentationScope, Vec<SpanMarshaler<'a>>>;

/// Group a batch by (resource, scope), building span marshalers in input
/// order within each scope. O(n) over the batch; one map entry per distinct
/// key, one slot per record.
pub(crate) fn by_resource_and_scope<'a>(
    spans: &'a [SpanRecord],
    cache: &mut IdBytesCache,
) -> IndexMap<&'a Resource, ScopeGroups<'a>> {
    let mut groups: IndexMap<&Resource, ScopeGroups<'a>> = IndexMap::new();
    for record in spans {
        groups
            .entry(&record.resource)
            .or_default()
            .entry(&record.scope)
            .or_default()
            .push(SpanMarshaler::new(record, cache));
    }
    groups
}
