// NIST P-384 / secp384r1 : y^2 = x^3 - 3x + b over GF(p)
// p = 2^384 - 2^128 - 2^96 + 2^32 - 1
// Curve prime order n (cofactor 1)

use std::sync::Arc;

use num_bigint::BigUint;
use num_traits::{Num, One};
use once_cell::sync::Lazy;

use crate::{Affine, Curve, Field, FieldElement};

const B_HEX: &str = "\
    B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE814112\
    0314088F5013875AC656398D8A2ED19D2A85C8EDD3EC2AEF";

const GX_HEX: &str = "\
    AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B98\
    59F741E082542A385502F25DBF55296C3A545E3872760AB7";

const GY_HEX: &str = "\
    3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147C\
    E9DA3113B5F0B8C00A60B1CE1D7E819D7A431D7C90EA0E5F";

const ORDER_HEX: &str = "\
    FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF\
    C7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973";

fn hex(s: &str) -> BigUint {
    BigUint::from_str_radix(s, 16).expect("valid hex constant")
}

static FIELD: Lazy<Arc<Field>> = Lazy::new(|| {
    let one = BigUint::one();
    let p = (&one << 384) - (&one << 128) - (&one << 96) + (&one << 32) - 1u32;
    Arc::new(Field::new(p).expect("secp384r1 prime is odd"))
});

static SCALARS: Lazy<Arc<Field>> =
    Lazy::new(|| Arc::new(Field::new(hex(ORDER_HEX)).expect("secp384r1 order is odd")));

static CURVE: Lazy<Arc<Curve>> = Lazy::new(|| {
    let b = hex(B_HEX);
    Arc::new(Curve::new(-3, b, FIELD.clone()).expect("integer coefficients coerce"))
});

static GENERATOR: Lazy<Affine> = Lazy::new(|| {
    let field = FIELD.clone();
    Affine::new(
        FieldElement::new(hex(GX_HEX), field.clone()),
        FieldElement::new(hex(GY_HEX), field),
        CURVE.clone(),
    )
});

/// The base field GF(p).
pub fn field() -> Arc<Field> {
    FIELD.clone()
}

/// The scalar field GF(n), n the order of the base point.
pub fn scalars() -> Arc<Field> {
    SCALARS.clone()
}

pub fn curve() -> Arc<Curve> {
    CURVE.clone()
}

/// The standard base point G.
pub fn generator() -> Affine {
    GENERATOR.clone()
}

/// #E(GF(p)), which is also the order of G.
pub fn order() -> &'static BigUint {
    SCALARS.modulus()
}
