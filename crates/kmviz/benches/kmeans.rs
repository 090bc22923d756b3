use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kmviz::kmeans::init::{self, InitMethod};
use kmviz::{dataset, rng, Point, Renderer, Session};

fn blob_points(n: usize) -> dataset::Dataset {
    let centers = [
        Point::new(-3.0, -3.0),
        Point::new(3.0, -3.0),
        Point::new(-3.0, 3.0),
        Point::new(3.0, 3.0),
    ];
    dataset::make_blobs(&mut rng::new(), n, &centers, 0.8)
}

fn bench(c: &mut Criterion) {
    let sizes = [("300", 300usize), ("3k", 3_000), ("30k", 30_000)];
    let datasets: Vec<(&str, dataset::Dataset)> =
        sizes.iter().map(|&(label, n)| (label, blob_points(n))).collect();

    for method in [
        InitMethod::Random,
        InitMethod::FarthestFirst,
        InitMethod::PlusPlus,
    ] {
        let mut group = c.benchmark_group(format!("init/{method:?}"));
        for (label, data) in &datasets {
            group.bench_with_input(BenchmarkId::from_parameter(label), data, |b, data| {
                b.iter_with_large_drop(|| {
                    let rng = &mut rng::new();
                    init::initialize(rng, &data.points, 4, method).unwrap()
                })
            });
        }
        group.finish();
    }

    let mut group = c.benchmark_group("run_to_convergence");
    for (label, data) in &datasets {
        group.bench_with_input(BenchmarkId::from_parameter(label), data, |b, data| {
            b.iter_with_large_drop(|| {
                let mut session = Session::with_rng(data.clone(), 4, rng::new())
                    .unwrap()
                    .with_renderer(Renderer::new(64, 64));
                session.initialize(InitMethod::PlusPlus).unwrap();
                session.run_bounded(300).unwrap();
                session
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
