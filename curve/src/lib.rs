//! Reference prime-field and elliptic-curve arithmetic.
//!
//! This crate provides prime fields over an arbitrary odd modulus, field
//! elements bound to their field, and affine and Jacobian points on short
//! Weierstrass curves. Everything is exact big-integer arithmetic with no
//! attempt at constant time: it is an oracle for checking faster code, not a
//! replacement for it. The `secp384r1` module fixes the NIST P-384 parameters.

mod affine;
mod curve;
mod element;
mod error;
mod field;
mod group;
mod jacobian;
mod msm;
mod random;
pub mod secp384r1;

#[cfg(test)]
mod tests;

pub use affine::Affine;
pub use curve::Curve;
pub use element::{FieldElement, ToFieldElement};
pub use error::FieldError;
pub use field::Field;
pub use group::Group;
pub use jacobian::Jacobian;
pub use msm::double_scalar_mul;
pub use random::{random_between, RandomField};
