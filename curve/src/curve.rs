use std::sync::Arc;

use rand::Rng;

use crate::error::Result;
use crate::{Affine, Field, FieldElement, RandomField, ToFieldElement};

/// Short Weierstrass curve y^2 = x^3 + a*x + b over a prime field.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    a: FieldElement,
    b: FieldElement,
    field: Arc<Field>,
}

impl Curve {
    /// Build a curve, coercing `a` and `b` into `field`.
    pub fn new<A, B>(a: A, b: B, field: Arc<Field>) -> Result<Self>
    where
        A: ToFieldElement,
        B: ToFieldElement,
    {
        Ok(Curve {
            a: a.to_field_element(&field)?,
            b: b.to_field_element(&field)?,
            field,
        })
    }

    #[inline]
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    #[inline]
    pub fn field(&self) -> &Arc<Field> {
        &self.field
    }

    /// x^3 + a*x + b
    pub fn rhs(&self, x: &FieldElement) -> FieldElement {
        x.pow_u64(3) + &self.a * x + &self.b
    }

    /// A square root of x^3 + a*x + b, or `None` when x is not on the curve.
    pub fn get_y<R: Rng + ?Sized>(&self, x: &FieldElement, rng: &mut R) -> Option<FieldElement> {
        self.rhs(x).sqrt(rng).ok()
    }

    /// Check a point against the curve equation. The identity is on every curve.
    pub fn contains(&self, point: &Affine) -> bool {
        point.is_infinity() || point.y.square() == self.rhs(&point.x)
    }

    /// Rejection-sample x until it lands on the curve.
    pub fn random_point<R: Rng + ?Sized>(self: &Arc<Self>, rng: &mut R) -> Affine {
        loop {
            let x = FieldElement::random(&self.field, rng);
            if let Some(y) = self.get_y(&x, rng) {
                return Affine::new(x, y, self.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldError;
    use num_bigint::BigUint;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    // y^2 = x^3 + 2x + 3 over GF(97)
    fn toy_curve() -> Arc<Curve> {
        let field = Arc::new(Field::new(BigUint::from(97u32)).unwrap());
        Arc::new(Curve::new(2, 3, field).unwrap())
    }

    #[test]
    fn test_coefficients_are_coerced() {
        let field = Arc::new(Field::new(BigUint::from(97u32)).unwrap());
        let curve = Curve::new(-3, 100u64, field).unwrap();
        assert_eq!(*curve.a(), 94u64);
        assert_eq!(*curve.b(), 3u64);
    }

    #[test]
    fn test_unsupported_coefficient() {
        let field = Arc::new(Field::new(BigUint::from(97u32)).unwrap());
        let err = Curve::new(json!(null), 3, field).unwrap_err();
        assert!(matches!(err, FieldError::TypeMismatch { found: "null", .. }));
    }

    #[test]
    fn test_get_y() {
        let curve = toy_curve();
        let mut rng = StdRng::seed_from_u64(0);

        // x = 3: 27 + 6 + 3 = 36 = 6^2
        let x = FieldElement::new(3, curve.field().clone());
        let y = curve.get_y(&x, &mut rng).unwrap();
        assert_eq!(y.square(), 36u64);

        let on_curve = (0u32..97)
            .filter(|&x| {
                let x = FieldElement::new(x, curve.field().clone());
                curve.get_y(&x, &mut rng).is_some()
            })
            .count();
        assert!(on_curve > 0 && on_curve < 97);
    }

    #[test]
    fn test_random_point_on_curve() {
        let curve = toy_curve();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let p = curve.random_point(&mut rng);
            assert!(curve.contains(&p));
            assert!(!p.is_infinity());
        }
    }
}
