use std::time::Duration;

use cosmic_time::Instant;
use cosmic_transit::{TransitError, build_snapshot, fetch_transits_for, parse_remote_payload};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn snapshot_bench(c: &mut Criterion) {
    let instant = Instant::from_calendar(2024, 6, 1, 0, 0).unwrap();
    c.bench_function("build_snapshot", |b| {
        b.iter(|| build_snapshot(black_box(&instant)))
    });
}

fn payload_bench(c: &mut Criterion) {
    let instant = Instant::from_calendar(2024, 6, 1, 0, 0).unwrap();
    let payload = serde_json::to_string(&build_snapshot(&instant)).unwrap();

    let mut group = c.benchmark_group("remote");
    group.bench_function("parse_remote_payload", |b| {
        b.iter(|| parse_remote_payload(black_box(&payload)))
    });
    group.bench_function("fetch_with_failing_source", |b| {
        let failing =
            |_: &Instant, _: Duration| -> Result<String, TransitError> { Err(TransitError::Status(503)) };
        b.iter(|| fetch_transits_for(Some(instant), Some(&failing), Duration::from_secs(5)))
    });
    group.finish();
}

criterion_group!(benches, snapshot_bench, payload_bench);
criterion_main!(benches);
