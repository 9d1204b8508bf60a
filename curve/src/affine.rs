use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::group::impl_group_ops;
use crate::{Curve, FieldElement, Group, ToFieldElement};

/// Affine point on a short Weierstrass curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
#[derive(Clone, Debug, Serialize)]
pub struct Affine {
    /// The x-coordinate of the point
    pub x: FieldElement,
    /// The y-coordinate of the point
    pub y: FieldElement,
    /// Whether this point is the point at infinity (identity element)
    #[serde(rename = "zero")]
    pub is_infinity: bool,
    #[serde(skip)]
    curve: Arc<Curve>,
}

impl Affine {
    /// The point at infinity (identity element).
    pub fn infinity(curve: Arc<Curve>) -> Self {
        let field = curve.field().clone();
        Affine {
            x: FieldElement::zero(field.clone()),
            y: FieldElement::zero(field),
            is_infinity: true,
            curve,
        }
    }

    /// Create a new affine point. Coordinates are moved into the curve's field.
    pub fn new(x: FieldElement, y: FieldElement, curve: Arc<Curve>) -> Self {
        Affine {
            x: x.to_field(curve.field()),
            y: y.to_field(curve.field()),
            is_infinity: false,
            curve,
        }
    }

    /// Create a point from anything coercible into field elements.
    pub fn from_coords<X, Y>(x: X, y: Y, curve: Arc<Curve>) -> Result<Self>
    where
        X: ToFieldElement,
        Y: ToFieldElement,
    {
        let x = x.to_field_element(curve.field())?;
        let y = y.to_field_element(curve.field())?;
        Ok(Affine::new(x, y, curve))
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self) -> bool {
        self.curve.contains(self)
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity {
            return self.clone();
        }

        // If y = 0, then 2P = O
        if self.y.is_zero() {
            return Self::infinity(self.curve.clone());
        }

        // λ = (3x^2 + a) / (2y)
        let numerator = 3u64 * self.x.square() + self.curve.a();
        let denominator = 2u64 * &self.y;
        let lambda = numerator / denominator;

        self.chord(&lambda, &self.x)
    }

    /// Negate a point. The identity flag is preserved.
    pub fn negate(&self) -> Self {
        Affine {
            x: self.x.clone(),
            y: -&self.y,
            is_infinity: self.is_infinity,
            curve: self.curve.clone(),
        }
    }

    /// Third intersection through `self` and a point with x-coordinate `x2`,
    /// reflected: x3 = λ^2 - x1 - x2, y3 = λ(x1 - x3) - y1.
    fn chord(&self, lambda: &FieldElement, x2: &FieldElement) -> Self {
        let x_r = lambda.square() - &self.x - x2;
        let y_r = lambda * (&self.x - &x_r) - &self.y;
        Affine::new(x_r, y_r, self.curve.clone())
    }
}

impl Group for Affine {
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
        self.is_infinity
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
        // Handle infinity cases
        if self.is_infinity {
            return other.clone();
        }
        if other.is_infinity {
            return self.clone();
        }

        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            }
            // Points are inverses
            return Self::infinity(self.curve.clone());
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = (&other.y - &self.y) / (&other.x - &self.x);
        self.chord(&lambda, &other.x)
    }
}

impl PartialEq for Affine {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_infinity, other.is_infinity) {
            (true, true) => true,
            (true, false) | (false, true) => false,
            (false, false) => self.x == other.x && self.y == other.y,
        }
    }
}

impl_group_ops!(Affine);
