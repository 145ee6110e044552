use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use park_proto::{CommandRef, Reply, StatusRow, VehicleKind};

// Baseline throughput for the per-line work a session does: tokenize the
// command, then render the reply. Lot state is left out so the numbers
// isolate protocol overhead from registry bookkeeping.

fn command_tokenize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    let raw = "park KA-01-HH-1234 White Mobil\n";
    group.throughput(Throughput::Bytes(raw.len() as u64));

    group.bench_function("tokenize_park", |b| {
        b.iter(|| CommandRef::parse(raw).unwrap())
    });

    group.finish();
}

fn reply_render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let rows: Vec<StatusRow> = (1..=6)
        .map(|slot| StatusRow {
            slot,
            registration: format!("KA-01-HH-{slot:04}"),
            color: "White".to_string(),
            vehicle: VehicleKind::Mobil,
        })
        .collect();

    group.bench_function("render_status_six_rows", |b| {
        b.iter(|| Reply::Status { rows: rows.clone() }.to_string())
    });

    group.finish();
}

criterion_group!(benches, command_tokenize_benchmark, reply_render_benchmark);
criterion_main!(benches);
