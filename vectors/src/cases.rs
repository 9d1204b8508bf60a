use num_bigint::BigUint;
use refcurve::{double_scalar_mul, secp384r1, Affine, FieldElement, Jacobian};
use serde::Serialize;

use crate::errors::{Result, VectorError};

pub const JACOBIAN_ADD: &str = "jacobian-add";
pub const MIXED_ADD: &str = "mixed-add";
pub const DOUBLE_BASE_MUL: &str = "double-base-mul";

/// `lhs + rhs = result`, all three in Jacobian coordinates.
#[derive(Debug, Clone, Serialize)]
pub struct JacobianAddCase {
    pub id: u64,
    pub name: String,
    pub lhs: Jacobian,
    pub rhs: Jacobian,
    pub result: Jacobian,
}

/// `lhs + rhs = result` with an affine right operand.
#[derive(Debug, Clone, Serialize)]
pub struct MixedAddCase {
    pub id: u64,
    pub name: String,
    pub lhs: Jacobian,
    pub rhs: Affine,
    pub result: Jacobian,
}

/// `u·G + v·p = result`, with `u` and `v` in the scalar field.
#[derive(Debug, Clone, Serialize)]
pub struct DoubleBaseMulCase {
    pub id: u64,
    pub name: String,
    pub p: Affine,
    pub u: FieldElement,
    pub v: FieldElement,
    pub result: Jacobian,
}

fn ensure(holds: bool, category: &'static str, id: u64, name: &str) -> Result<()> {
    if holds {
        Ok(())
    } else {
        Err(VectorError::Mismatch {
            category,
            id,
            name: name.to_string(),
        })
    }
}

impl JacobianAddCase {
    pub fn check(&self) -> Result<()> {
        ensure(&self.lhs + &self.rhs == self.result, JACOBIAN_ADD, self.id, &self.name)
    }
}

impl MixedAddCase {
    pub fn check(&self) -> Result<()> {
        ensure(self.lhs.add_affine(&self.rhs) == self.result, MIXED_ADD, self.id, &self.name)
    }
}

impl DoubleBaseMulCase {
    /// Recompute `u·G + v·p` by interleaved double-and-add, independently of
    /// how `result` was produced, and compare affine forms.
    pub fn check(&self) -> Result<()> {
        let expected = double_base_mul(self.u.value(), self.v.value(), &self.p);
        ensure(expected == self.result.to_affine(), DOUBLE_BASE_MUL, self.id, &self.name)
    }
}

fn double_base_mul(u: &BigUint, v: &BigUint, p: &Affine) -> Affine {
    let g = Jacobian::from_affine(&secp384r1::generator());
    double_scalar_mul(u, &g, v, &Jacobian::from_affine(p)).to_affine()
}
