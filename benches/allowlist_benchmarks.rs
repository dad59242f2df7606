use criterion::{black_box, criterion_group, criterion_main, Criterion};
use github_repo_auditor::allowlist::{is_allowed, AllowedSet};

fn allowlist_parsing_benchmark(c: &mut Criterion) {
    let raw: String = (0..500)
        .map(|i| format!("service-{} ", i))
        .collect();

    c.bench_function("AllowedSet::parse", |b| {
        b.iter(|| black_box(AllowedSet::parse(black_box(&raw))))
    });
}

fn allowlist_lookup_benchmark(c: &mut Criterion) {
    let raw: String = (0..500)
        .map(|i| format!("service-{} ", i))
        .collect();
    let allowed = AllowedSet::parse(&raw);
    let names = vec![
        "service-0",
        "service-250",
        "service-499",
        "service-500",
        "Service-1",
        "website",
    ];

    c.bench_function("is_allowed", |b| {
        b.iter(|| {
            for name in &names {
                black_box(is_allowed(black_box(name), &allowed));
            }
        })
    });
}

criterion_group!(benches, allowlist_parsing_benchmark, allowlist_lookup_benchmark);
criterion_main!(benches);
