use std::sync::Arc;

use serde::Serialize;

use crate::affine::Affine;
use crate::group::impl_group_ops;
use crate::{Curve, FieldElement, Group};

/// Jacobian point on the elliptic curve.
/// Represents a point (X:Y:Z) where (x,y) = (X/Z^2, Y/Z^3).
/// The point at infinity is any point with Z = 0; the canonical one is (0:1:0).
#[derive(Clone, Debug, Serialize)]
pub struct Jacobian {
    pub x: FieldElement,
    pub y: FieldElement,
    pub z: FieldElement,
    #[serde(skip)]
    curve: Arc<Curve>,
}

impl Jacobian {
    /// The point at infinity (identity element): (0:1:0)
    pub fn infinity(curve: Arc<Curve>) -> Self {
        let field = curve.field().clone();
        Jacobian {
            x: FieldElement::zero(field.clone()),
            y: FieldElement::one(field.clone()),
            z: FieldElement::zero(field),
            curve,
        }
    }

    /// Create a new Jacobian point. Coordinates are moved into the curve's field.
    pub fn new(x: FieldElement, y: FieldElement, z: FieldElement, curve: Arc<Curve>) -> Self {
        let field = curve.field();
        Jacobian {
            x: x.to_field(field),
            y: y.to_field(field),
            z: z.to_field(field),
            curve,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> Affine {
        if self.is_infinity() {
            return Affine::infinity(self.curve.clone());
        }

        let z_inv = self.z.inverse();
        let z_inv2 = z_inv.square();
        let x = &self.x * &z_inv2;
        let y = &self.y * (z_inv2 * z_inv);

        Affine::new(x, y, self.curve.clone())
    }

    /// Convert from affine coordinates with Z = 1, or Z = 0 for the identity.
    pub fn from_affine(point: &Affine) -> Self {
        if point.is_infinity() {
            return Self::infinity(point.curve().clone());
        }

        let one = FieldElement::one(point.curve().field().clone());
        Jacobian::new(point.x.clone(), point.y.clone(), one, point.curve().clone())
    }

    /// Represent an affine point with an arbitrary nonzero Z: (x*z^2, y*z^3, z).
    pub fn blind(point: &Affine, z: &FieldElement) -> Self {
        if point.is_infinity() {
            return Self::infinity(point.curve().clone());
        }

        let z2 = z.square();
        let z3 = &z2 * z;
        Jacobian::new(&point.x * z2, &point.y * z3, z.clone(), point.curve().clone())
    }

    /// Point doubling: 2*P.
    ///
    /// delta = Z^2, gamma = Y^2, beta = X*gamma, alpha = 3(X - delta)(X + delta)
    pub fn double(&self) -> Self {
        if self.is_infinity() {
            return Self::infinity(self.curve.clone());
        }

        let delta = self.z.square();
        let gamma = self.y.square();
        let beta = &self.x * &gamma;
        let alpha = 3u64 * (&self.x - &delta) * (&self.x + &delta);

        let x3 = alpha.square() - 8u64 * &beta;
        let z3 = (&self.y + &self.z).square() - &gamma - &delta;
        let y3 = &alpha * (4u64 * &beta - &x3) - 8u64 * gamma.square();

        Jacobian::new(x3, y3, z3, self.curve.clone())
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        Jacobian {
            x: self.x.clone(),
            y: -&self.y,
            z: self.z.clone(),
            curve: self.curve.clone(),
        }
    }

    /// Mixed addition with an affine point.
    pub fn add_affine(&self, other: &Affine) -> Self {
        self.add_point(&Jacobian::from_affine(other))
    }
}

impl Group for Jacobian {
    #[inline]
    fn identity(curve: &Arc<Curve>) -> Self {
        Self::infinity(curve.clone())
    }

    #[inline]
    fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    fn add_point(&self, other: &Self) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = &self.x * &z2z2;
        let u2 = &other.x * &z1z1;
        let s1 = &self.y * &other.z * &z2z2;
        let s2 = &other.y * &self.z * &z1z1;

        // Same affine point: the chord formula would divide by zero.
        if u1 == u2 && s1 == s2 {
            return self.double();
        }

        let h = &u2 - &u1;
        let i = (2u64 * &h).square();
        let j = &h * &i;
        let r = 2u64 * (&s2 - &s1);
        let v = &u1 * &i;

        let x3 = r.square() - &j - 2u64 * &v;
        let y3 = &r * (&v - &x3) - 2u64 * &s1 * &j;
        let z3 = ((&self.z + &other.z).square() - &z1z1 - &z2z2) * &h;

        Jacobian::new(x3, y3, z3, self.curve.clone())
    }
}

/// Two Jacobian points are equal when they represent the same affine point.
impl PartialEq for Jacobian {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => true,
            (true, false) | (false, true) => false,
            (false, false) => {
                let z1z1 = self.z.square();
                let z2z2 = other.z.square();
                &self.x * &z2z2 == &other.x * &z1z1
                    && &self.y * &z2z2 * &other.z == &other.y * &z1z1 * &self.z
            }
        }
    }
}

impl_group_ops!(Jacobian);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{secp384r1, RandomField};
    use num_bigint::BigUint;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn random_z(rng: &mut ChaCha20Rng) -> FieldElement {
        let field = secp384r1::field();
        FieldElement::new(field.random(rng, 1, -1), field)
    }

    fn infinity() -> Jacobian {
        Jacobian::infinity(secp384r1::curve())
    }

    #[test]
    fn test_infinity() {
        let inf = infinity();
        assert!(inf.is_infinity());
        assert_eq!(inf.x, 0u64);
        assert_eq!(inf.y, 1u64);
        assert_eq!(inf.z, 0u64);
        assert!(inf.to_affine().is_infinity());
    }

    #[test]
    fn test_conversion_affine_jacobian() {
        let g = secp384r1::generator();
        let gj = Jacobian::from_affine(&g);
        assert_eq!(gj.to_affine(), g);

        let inf = Affine::infinity(secp384r1::curve());
        let infj = Jacobian::from_affine(&inf);
        assert!(infj.is_infinity());
        assert_eq!(infj.to_affine(), inf);
    }

    #[test]
    fn test_blinding_preserves_point() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let g = secp384r1::generator();
        let z = random_z(&mut rng);
        let gj = Jacobian::blind(&g, &z);

        assert_eq!(gj.z, z);
        assert_eq!(gj.to_affine(), g);
        assert_eq!(gj, Jacobian::from_affine(&g));
    }

    #[test]
    fn test_point_addition_with_infinity() {
        let g = Jacobian::from_affine(&secp384r1::generator());
        let inf = infinity();

        assert_eq!(&g + &inf, g);
        assert_eq!(&inf + &g, g);
        assert!((&inf + &inf).is_infinity());
    }

    #[test]
    fn test_add_same_point_dispatches_to_double() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let g = secp384r1::generator();
        let a = Jacobian::blind(&g, &random_z(&mut rng));
        let b = Jacobian::blind(&g, &random_z(&mut rng));

        assert_eq!(&a + &b, a.double());
        assert_eq!((&a + &b).to_affine(), g.double());
    }

    #[test]
    fn test_add_inverse_is_infinity() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let g = Jacobian::blind(&secp384r1::generator(), &random_z(&mut rng));
        assert!((&g + &(-&g)).is_infinity());
        assert!((&g - &g).is_infinity());
    }

    #[test]
    fn test_affine_jacobian_addition_consistency() {
        let curve = secp384r1::curve();
        let mut rng = ChaCha20Rng::seed_from_u64(4);

        for _ in 0..8 {
            let p = curve.random_point(&mut rng);
            let q = curve.random_point(&mut rng);
            let pj = Jacobian::blind(&p, &random_z(&mut rng));
            let qj = Jacobian::blind(&q, &random_z(&mut rng));

            assert_eq!((&pj + &qj).to_affine(), &p + &q);
            assert_eq!(pj.double().to_affine(), p.double());
            assert_eq!(pj.add_affine(&q).to_affine(), &p + &q);
        }
    }

    #[test]
    fn test_affine_jacobian_scalar_mul_consistency() {
        let g = secp384r1::generator();
        let gj = Jacobian::from_affine(&g);
        for k in [0u64, 1, 2, 3, 7, 26, 255] {
            assert_eq!(gj.mul_u64(k).to_affine(), g.mul_u64(k), "k = {k}");
        }
    }

    #[test]
    fn test_order_times_generator_is_infinity() {
        let gj = Jacobian::from_affine(&secp384r1::generator());
        let n = secp384r1::order();

        assert!(gj.scalar_mul(n).is_infinity());

        let n_minus_one = n - 1u32;
        let almost = gj.scalar_mul(&n_minus_one);
        assert_eq!(almost, -&gj);
        assert!((&almost + &gj).is_infinity());
    }

    #[test]
    fn test_equality_is_representation_independent() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let g = secp384r1::generator();
        let h = g.double();
        let gj = Jacobian::blind(&g, &random_z(&mut rng));
        let hj = Jacobian::blind(&h, &random_z(&mut rng));

        assert_ne!(gj, hj);
        assert_ne!(gj, infinity());
        assert_eq!(gj, Jacobian::blind(&g, &random_z(&mut rng)));
    }

    #[test]
    fn test_random_element_blinding() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let g = secp384r1::generator();
        let z = FieldElement::random(&secp384r1::field(), &mut rng);
        if !z.is_zero() {
            assert_eq!(Jacobian::blind(&g, &z).to_affine(), g);
        }
        assert_eq!(
            Jacobian::from_affine(&g).scalar_mul(&BigUint::from(13u32)).double(),
            Jacobian::from_affine(&g).mul_u64(26)
        );
    }
}
