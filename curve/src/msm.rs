use num_bigint::BigUint;

use crate::Group;

/// Compute u * G + v * P with a single interleaved double-and-add pass.
///
/// The sum G + P is precomputed so each bit position costs at most one
/// addition. Scalars are used as given.
pub fn double_scalar_mul<G: Group>(u: &BigUint, g: &G, v: &BigUint, p: &G) -> G {
    let both = g.add_point(p);
    let mut result = G::identity(g.curve());

    for i in (0..u.bits().max(v.bits())).rev() {
        result = result.double();

        match (u.bit(i), v.bit(i)) {
            (true, true) => result = result.add_point(&both),
            (true, false) => result = result.add_point(g),
            (false, true) => result = result.add_point(p),
            (false, false) => {}
        }
    }

    result
}
