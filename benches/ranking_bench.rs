use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mico::health::score_health;
use mico::ranking::{SortKey, rank_processes};
use mico::report::{Style, render_processes};
use mico::system::{ProcessMemory, ProcessRecord, SystemMetrics};
use std::hint::black_box;

fn make_processes(n: usize) -> Vec<ProcessRecord> {
    (0..n)
        .map(|i| {
            let rss = ((i * 7919) % n) as u64 * 1024 * 1024;
            ProcessRecord::new(
                i as u32 + 1,
                format!("proc_{}", i % 97),
                ProcessMemory {
                    resident_bytes: rss,
                    virtual_bytes: rss * 3,
                    percent: (i % 100) as f64 / 10.0,
                },
            )
            .with_owner(Some(format!("u{}", i % 8)))
        })
        .collect()
}

fn bench_rank_by_key(c: &mut Criterion) {
    for key in [SortKey::Memory, SortKey::Name, SortKey::Pid] {
        let mut group = c.benchmark_group(format!(
            "rank_{}_500_1000_2000",
            key.label().to_lowercase()
        ));

        for size in [500usize, 1000, 2000] {
            let processes = make_processes(size);
            group.bench_with_input(
                BenchmarkId::from_parameter(size),
                &processes,
                |b, processes| {
                    b.iter(|| {
                        let ranked = rank_processes(black_box(processes), "", key, true, 10);
                        black_box(ranked.len());
                    })
                },
            );
        }

        group.finish();
    }
}

fn bench_filtered_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_filtered_render_500_1000_2000");

    for size in [500usize, 1000, 2000] {
        let processes = make_processes(size);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &processes,
            |b, processes| {
                b.iter(|| {
                    let ranked =
                        rank_processes(black_box(processes), "proc_1", SortKey::Memory, true, 25);
                    black_box(render_processes(&ranked, &Style::plain()));
                })
            },
        );
    }

    group.finish();
}

fn bench_score_health(c: &mut Criterion) {
    let metrics = SystemMetrics {
        cpu_percent: 72.5,
        memory_percent: 81.0,
        disk_percent: 88.0,
        memory_total_gb: 32.0,
        memory_used_gb: 25.9,
        disk_total_gb: 1000.0,
        disk_used_gb: 880.0,
    };
    c.bench_function("score_health", |b| {
        b.iter(|| black_box(score_health(black_box(&metrics))))
    });
}

criterion_group!(
    benches,
    bench_rank_by_key,
    bench_filtered_pipeline,
    bench_score_health
);
criterion_main!(benches);
