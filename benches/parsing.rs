use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    let cases = [
        "+12015550123",
        "+6433316005",
        "+541187654321",
        "+441212345678",
        "+4930123456",
        "+390236618300",
        "+5511912345678",
        "+81312345678",
        "+1 201 555 0123",
        "+1-201-555-0123",
    ];

    for case in cases {
        c.bench_with_input(BenchmarkId::new("parse", case), &case, |b, case| {
            b.iter(|| {
                let pn = black_box(case);
                phonekit::parse(pn, "ZZ")
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
