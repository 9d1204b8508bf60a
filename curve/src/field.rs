//! Prime field arithmetic over an arbitrary odd modulus.
//!
//! Values are plain `BigUint`s in `[0, p)`. [`FieldElement`](crate::FieldElement)
//! wraps them together with the field they belong to; this module only knows
//! about the modulus.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

use crate::error::{FieldError, Result};
use crate::random::random_between;

/// A prime field GF(p) for odd p.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    p: BigUint,
    p_signed: BigInt,
    hex_width: usize,
}

impl Field {
    /// Create the field with modulus `p`.
    ///
    /// Primality is not checked; the modulus must be odd and greater than 2.
    pub fn new(p: BigUint) -> Result<Self> {
        if p.is_even() || p <= BigUint::from(2u32) {
            return Err(FieldError::EvenModulus(p.to_string()));
        }

        let hex_width = p.bits().div_ceil(4) as usize;
        let p_signed = BigInt::from_biguint(Sign::Plus, p.clone());

        Ok(Field {
            p,
            p_signed,
            hex_width,
        })
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Number of hex digits needed for any canonical element.
    #[inline]
    pub fn hex_width(&self) -> usize {
        self.hex_width
    }

    /// Map any integer into `[0, p)`.
    pub fn reduce(&self, x: &BigInt) -> BigUint {
        let (_, magnitude) = x.mod_floor(&self.p_signed).into_parts();
        magnitude
    }

    #[inline]
    pub fn reduce_unsigned(&self, x: &BigUint) -> BigUint {
        x % &self.p
    }

    #[inline]
    pub fn add(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x + y) % &self.p
    }

    #[inline]
    pub fn neg(&self, x: &BigUint) -> BigUint {
        let x = x % &self.p;
        if x.is_zero() {
            x
        } else {
            &self.p - x
        }
    }

    #[inline]
    pub fn sub(&self, x: &BigUint, y: &BigUint) -> BigUint {
        self.add(x, &self.neg(y))
    }

    #[inline]
    pub fn mul(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x * y) % &self.p
    }

    /// `x^e mod p`. Negative exponents invert first.
    pub fn pow(&self, x: &BigUint, e: &BigInt) -> BigUint {
        let (sign, magnitude) = e.clone().into_parts();
        match sign {
            Sign::Minus => self.inv(x).modpow(&magnitude, &self.p),
            _ => x.modpow(&magnitude, &self.p),
        }
    }

    /// Multiplicative inverse via Fermat, `x^(p-2)`. Zero maps to zero.
    pub fn inv(&self, x: &BigUint) -> BigUint {
        let e = &self.p - 2u32;
        x.modpow(&e, &self.p)
    }

    /// Legendre symbol as a field value: 1, p-1 or 0.
    pub fn legendre(&self, x: &BigUint) -> BigUint {
        let e = (&self.p - 1u32) >> 1;
        x.modpow(&e, &self.p)
    }

    /// Uniform sample from the inclusive range `[low, high]`, both bounds
    /// reduced into the field first, so `high = -1` means `p - 1`.
    pub fn random<R, L, H>(&self, rng: &mut R, low: L, high: H) -> BigUint
    where
        R: Rng + ?Sized,
        L: Into<BigInt>,
        H: Into<BigInt>,
    {
        let low = self.reduce(&low.into());
        let high = self.reduce(&high.into());
        random_between(rng, &low, &high)
    }

    /// Uniform sample from the whole field.
    pub fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> BigUint {
        self.random(rng, 0, -1)
    }

    /// Square root by Tonelli–Shanks.
    ///
    /// Returns [`FieldError::SqrtNonResidue`] when `x` is not a square. The
    /// random stream supplies the auxiliary non-residue.
    pub fn sqrt<R: Rng + ?Sized>(&self, x: &BigUint, rng: &mut R) -> Result<BigUint> {
        let x = self.reduce_unsigned(x);
        if x.is_zero() {
            return Ok(x);
        }

        if !self.legendre(&x).is_one() {
            return Err(FieldError::SqrtNonResidue(x.to_string()));
        }

        let p_minus_one = &self.p - 1u32;
        let s = p_minus_one.trailing_zeros().unwrap_or(0);
        let q = &p_minus_one >> s;

        let z = loop {
            let z = self.random(rng, 2, -1);
            if self.legendre(&z) == p_minus_one {
                break z;
            }
        };

        let mut m = s;
        let mut c = z.modpow(&q, &self.p);
        let mut t = x.modpow(&q, &self.p);
        let mut r = x.modpow(&((&q + 1u32) >> 1), &self.p);

        while t > BigUint::one() {
            // least i in [1, m) with t^(2^i) = 1
            let mut i = 0;
            let mut tt = t.clone();
            while !tt.is_one() {
                i += 1;
                assert!(
                    i < m,
                    "tonelli-shanks: no exponent for residue {} mod {}",
                    x,
                    self.p
                );
                tt = self.mul(&tt, &tt);
            }

            let mut b = c.clone();
            for _ in 0..(m - i - 1) {
                b = self.mul(&b, &b);
            }

            m = i;
            c = self.mul(&b, &b);
            t = self.mul(&t, &c);
            r = self.mul(&r, &b);
        }

        if t.is_zero() {
            return Ok(BigUint::zero());
        }

        Ok(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(p: u64) -> Field {
        Field::new(BigUint::from(p)).unwrap()
    }

    #[test]
    fn test_rejects_even_modulus() {
        assert!(matches!(
            Field::new(BigUint::from(96u32)),
            Err(FieldError::EvenModulus(_))
        ));
        assert!(Field::new(BigUint::from(2u32)).is_err());
    }

    #[test]
    fn test_reduce_negative() {
        let f = field(97);
        assert_eq!(f.reduce(&BigInt::from(-1)), BigUint::from(96u32));
        assert_eq!(f.reduce(&BigInt::from(-97)), BigUint::zero());
        assert_eq!(f.reduce(&BigInt::from(195)), BigUint::from(1u32));
    }

    #[test]
    fn test_add_neg_sub() {
        let f = field(97);
        let a = BigUint::from(90u32);
        let b = BigUint::from(10u32);
        assert_eq!(f.add(&a, &b), BigUint::from(3u32));
        assert_eq!(f.neg(&BigUint::zero()), BigUint::zero());
        assert_eq!(f.neg(&b), BigUint::from(87u32));
        assert_eq!(f.sub(&b, &a), BigUint::from(17u32));
    }

    #[test]
    fn test_fermat_little_theorem() {
        let f = field(65537);
        let e = BigInt::from(65536);
        for x in 1u32..500 {
            assert!(f.pow(&BigUint::from(x), &e).is_one());
        }
    }

    #[test]
    fn test_negative_exponent_is_inverse() {
        let f = field(97);
        for x in 1u32..97 {
            let x = BigUint::from(x);
            let inv = f.pow(&x, &BigInt::from(-1));
            assert!(f.mul(&x, &inv).is_one());
            assert_eq!(f.pow(&x, &BigInt::from(-3)), f.inv(&f.pow(&x, &BigInt::from(3))));
        }
    }

    #[test]
    fn test_legendre() {
        let f = field(97);
        assert!(f.legendre(&BigUint::zero()).is_zero());
        assert!(f.legendre(&BigUint::from(4u32)).is_one());
        // 5 is a non-residue mod 97
        assert_eq!(f.legendre(&BigUint::from(5u32)), BigUint::from(96u32));
    }

    #[test]
    fn test_sqrt_of_zero() {
        let f = field(97);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(f.sqrt(&BigUint::zero(), &mut rng).unwrap().is_zero());
    }

    #[test]
    fn test_sqrt_squares_back_high_two_adicity() {
        // 97 - 1 = 3 * 2^5, 65537 - 1 = 2^16
        for p in [17u64, 97, 7681, 65537] {
            let f = field(p);
            let mut rng = StdRng::seed_from_u64(p);
            for x in 1..p.min(600) {
                let x = BigUint::from(x);
                match f.sqrt(&x, &mut rng) {
                    Ok(r) => assert_eq!(f.mul(&r, &r), x, "p = {p}"),
                    Err(FieldError::SqrtNonResidue(_)) => {
                        assert!(!f.legendre(&x).is_one());
                    }
                    Err(e) => panic!("unexpected error {e}"),
                }
            }
        }
    }

    #[test]
    fn test_sqrt_rejects_every_non_residue() {
        let f = field(97);
        let mut rng = StdRng::seed_from_u64(11);
        let squares: Vec<BigUint> = (1u32..97)
            .map(|x| f.mul(&BigUint::from(x), &BigUint::from(x)))
            .collect();

        for x in 1u32..97 {
            let x = BigUint::from(x);
            let result = f.sqrt(&x, &mut rng);
            assert_eq!(result.is_ok(), squares.contains(&x));
        }
    }

    #[test]
    fn test_random_bounds_are_reduced() {
        let f = field(11);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let x = f.random(&mut rng, 1, -1);
            assert!(x >= BigUint::one() && x <= BigUint::from(10u32));
        }
    }

    #[test]
    fn test_hex_width() {
        assert_eq!(field(97).hex_width(), 2);
        assert_eq!(field(65537).hex_width(), 5);
    }
}
