use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use refcurve::{double_scalar_mul, secp384r1, Affine, FieldElement, Group, Jacobian, RandomField};

fn random_scalar(rng: &mut ChaCha20Rng) -> BigUint {
    FieldElement::random(&secp384r1::scalars(), rng).value().clone()
}

fn blinded_generator(rng: &mut ChaCha20Rng) -> Jacobian {
    let field = secp384r1::field();
    let z = FieldElement::new(field.random(rng, 1, -1), field);
    Jacobian::blind(&secp384r1::generator(), &z)
}

fn bench_affine_double(c: &mut Criterion) {
    let g = secp384r1::generator();
    c.bench_function("affine_double", |bencher| {
        bencher.iter(|| black_box(black_box(&g).double()))
    });
}

fn bench_jacobian_double(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let g = blinded_generator(&mut rng);
    c.bench_function("jacobian_double", |bencher| {
        bencher.iter(|| black_box(black_box(&g).double()))
    });
}

fn bench_affine_add(c: &mut Criterion) {
    let g = secp384r1::generator();
    let h = g.double();
    c.bench_function("affine_add", |bencher| {
        bencher.iter(|| black_box(black_box(&g) + black_box(&h)))
    });
}

fn bench_jacobian_add(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let g = blinded_generator(&mut rng);
    let h = g.double();
    c.bench_function("jacobian_add", |bencher| {
        bencher.iter(|| black_box(black_box(&g) + black_box(&h)))
    });
}

fn bench_mixed_add(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let g = blinded_generator(&mut rng);
    let h: Affine = secp384r1::generator().double();
    c.bench_function("mixed_add", |bencher| {
        bencher.iter(|| black_box(black_box(&g).add_affine(black_box(&h))))
    });
}

fn bench_jacobian_scalar_mul(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let g = blinded_generator(&mut rng);
    let scalar = random_scalar(&mut rng);

    c.bench_function("jacobian_scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&g).scalar_mul(black_box(&scalar))))
    });
}

fn bench_double_base_mul(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(12345);
    let g = Jacobian::from_affine(&secp384r1::generator());
    let p = Jacobian::from_affine(&secp384r1::curve().random_point(&mut rng));
    let u = random_scalar(&mut rng);
    let v = random_scalar(&mut rng);

    c.bench_function("double_base_mul", |bencher| {
        bencher.iter(|| black_box(double_scalar_mul(&u, &g, &v, &p)))
    });
}

criterion_group!(
    benches,
    bench_affine_double,
    bench_jacobian_double,
    bench_affine_add,
    bench_jacobian_add,
    bench_mixed_add,
    bench_jacobian_scalar_mul,
    bench_double_base_mul
);
criterion_main!(benches);
