use super::*;
use num_bigint::{BigInt, BigUint};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_fermat_on_p384() {
    let field = secp384r1::field();
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let p_minus_one = BigInt::from(field.modulus() - 1u32);

    for _ in 0..16 {
        let x = FieldElement::new(field.random(&mut rng, 1, -1), field.clone());
        assert_eq!(x.pow(&p_minus_one), 1u64);
    }
}

#[test]
fn test_sqrt_on_p384() {
    let field = secp384r1::field();
    let mut rng = ChaCha20Rng::seed_from_u64(43);
    let mut residues = 0;
    let mut non_residues = 0;

    for _ in 0..32 {
        let x = FieldElement::random(&field, &mut rng);
        match x.sqrt(&mut rng) {
            Ok(r) => {
                assert_eq!(r.square(), x);
                residues += 1;
            }
            Err(FieldError::SqrtNonResidue(_)) => {
                assert_eq!(field.legendre(x.value()), field.modulus() - 1u32);
                non_residues += 1;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert!(residues > 0);
    assert!(non_residues > 0);
}

#[test]
fn test_square_always_has_root() {
    let field = secp384r1::field();
    let mut rng = ChaCha20Rng::seed_from_u64(44);

    for _ in 0..8 {
        let x = FieldElement::random(&field, &mut rng).square();
        let r = x.sqrt(&mut rng).expect("a square has a root");
        assert_eq!(r.square(), x);
    }
}

#[test]
fn test_jacobian_round_trip() {
    let curve = secp384r1::curve();
    let mut rng = ChaCha20Rng::seed_from_u64(45);

    let inf = Affine::infinity(curve.clone());
    assert_eq!(Jacobian::from_affine(&inf).to_affine(), inf);

    for _ in 0..8 {
        let p = curve.random_point(&mut rng);
        assert_eq!(Jacobian::from_affine(&p).to_affine(), p);
    }
}

#[test]
fn test_jacobian_scalar_mul_matches_repeated_addition() {
    let gj = Jacobian::from_affine(&secp384r1::generator());
    let mut acc = Jacobian::infinity(secp384r1::curve());

    for k in 0u64..20 {
        assert_eq!(gj.mul_u64(k), acc, "k = {k}");
        acc = &acc + &gj;
    }
}

#[test]
fn test_scalar_mul_operator_forms() {
    let g = secp384r1::generator();
    let k = BigUint::from(9u32);
    assert_eq!(&g * &k, 9u64 * &g);
    assert_eq!(&k * &g, g.mul_u64(9));
}

#[test]
fn test_double_base_mul_cancels() {
    let gj = Jacobian::from_affine(&secp384r1::generator());
    let k = (BigUint::from(1u32) << 100) - 1u32;

    // (2^100 - 1)G + (2^100 - 1)(-G)
    let result = double_scalar_mul(&k, &gj, &k, &(-&gj));
    assert!(result.is_infinity());
}
