use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use otlp_trace_encoder::model::{
    InstrumentationScope, KeyValue, Resource, SpanContext, SpanEvent, SpanKind, SpanLink,
    SpanRecord, Status,
};
use otlp_trace_encoder::{IdBytesCache, TraceRequestMarshaler};

fn build_batch(spans: usize) -> Vec<SpanRecord> {
    (0..spans)
        .map(|i| {
            let trace_id = format!("{:032x}", (i / 8) + 1);
            SpanRecord {
                context: SpanContext::new(&trace_id, format!("{:016x}", i + 1)),
                parent: (i % 8 != 0).then(|| SpanContext::new(&trace_id, format!("{:016x}", i))),
                name: format!("operation-{}", i % 16),
                kind: SpanKind::Server,
                start_unix_nano: 1_700_000_000_000_000_000 + i as u64,
                end_unix_nano: 1_700_000_000_000_500_000 + i as u64,
                attributes: vec![
                    KeyValue::new("http.method", "GET"),
                    KeyValue::new("http.status_code", 200i64),
                    KeyValue::new("retry", false),
                ],
                total_attribute_count: 3,
                events: vec![SpanEvent {
                    time_unix_nano: 1_700_000_000_000_250_000,
                    name: "handler.start".to_string(),
                    attributes: vec![KeyValue::new("queue_depth", 4i64)],
                    total_attribute_count: 1,
                }],
                total_event_count: 1,
                links: vec![SpanLink {
                    context: SpanContext::new(&trace_id, format!("{:016x}", i + 100_000)),
                    attributes: Vec::new(),
                    total_attribute_count: 0,
                }],
                total_link_count: 1,
                status: Status::Ok,
                resource: Resource::new(vec![KeyValue::new(
                    "service.name",
                    if i % 2 == 0 { "api" } else { "worker" },
                )]),
                scope: InstrumentationScope::new("bench").with_version("1.0.0"),
            }
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_request");
    for &spans in &[64usize, 512, 4096] {
        let batch = build_batch(spans);
        group.throughput(Throughput::Elements(spans as u64));
        group.bench_with_input(BenchmarkId::from_parameter(spans), &batch, |b, batch| {
            let mut cache = IdBytesCache::new();
            b.iter(|| {
                let request = TraceRequestMarshaler::new(batch, &mut cache);
                black_box(request.encode_to_vec())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
