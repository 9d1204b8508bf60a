//! Regression vectors for secp384r1 point arithmetic.
//!
//! [`generate`] produces jacobian-add, mixed-add and double-base-mul cases
//! from a seeded stream using the exact arithmetic in `refcurve`.
//! [`TestVectors::decode`] and [`TestVectors::verify`] audit an existing
//! document against the same arithmetic.

mod cases;
mod config;
mod encode;
mod errors;
mod generator;


pub use cases::{DoubleBaseMulCase, JacobianAddCase, MixedAddCase, DOUBLE_BASE_MUL, JACOBIAN_ADD, MIXED_ADD};
pub use config::{GeneratorConfig, DEFAULT_SEED, SEED_ENV};
pub use encode::TestVectors;
pub use errors::{Result, VectorError};
pub use generator::{generate, Generator};
