use std::sync::Arc;

use num_bigint::BigUint;
use rand::Rng;

use crate::{Field, FieldElement};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(field: &Arc<Field>, rng: &mut R) -> Self;
}

impl RandomField for FieldElement {
    #[inline]
    fn random<R: Rng + ?Sized>(field: &Arc<Field>, rng: &mut R) -> Self {
        FieldElement::from_reduced(field.random_element(rng), field.clone())
    }
}

/// Draw a uniform integer from the inclusive range `[low, high]`.
///
/// Candidates are built from random bytes masked to the bit length of the
/// range and rejected until one falls inside it. Reversed bounds are swapped.
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, low: &BigUint, high: &BigUint) -> BigUint {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    let span = high - low + 1u32;
    let bits = span.bits();
    let len = bits.div_ceil(8) as usize;
    let top_mask = match bits % 8 {
        0 => 0xff,
        rem => (1u8 << rem) - 1,
    };

    let mut bytes = vec![0u8; len];
    loop {
        rng.fill(&mut bytes[..]);
        if let Some(last) = bytes.last_mut() {
            *last &= top_mask;
        }

        let candidate = BigUint::from_bytes_le(&bytes);
        if candidate < span {
            return low + candidate;
        }
    }
}
