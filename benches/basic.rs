use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;
use num_rational::BigRational;
use vd3d::vd::decompose;
use vd3d::Plane;
use vd3d::Point3D;

fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn p(x: i64, y: i64, z: i64) -> Point3D {
    Point3D::new(rat(x), rat(y), rat(z))
}

fn three_plane_arrangement() -> Vec<Plane> {
    vec![
        Plane::from_points(&p(0, 0, 0), &p(1, 0, 0), &p(0, 1, 0)).unwrap(),
        Plane::from_points(&p(0, 0, 0), &p(1, 0, 1), &p(0, 1, 0)).unwrap(),
        Plane::from_points(&p(0, 0, 0), &p(1, 0, 0), &p(0, 1, 1)).unwrap(),
    ]
}

fn basic_benchmark(c: &mut Criterion) {
    let planes = three_plane_arrangement();
    c.bench_function("three plane decomposition", |b| {
        b.iter(|| decompose(black_box(&planes)))
    });
}

criterion_group!(benches, basic_benchmark);
criterion_main!(benches);
