//! Deterministic secp384r1 point-arithmetic vectors.
//!
//! Each category starts with fixed edge cases around the identity, doubling
//! and the group order, followed by random cases drawn from one seeded
//! ChaCha stream. Every case is checked as it is registered.

use std::sync::Arc;

use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use refcurve::{secp384r1, Affine, Curve, Field, FieldElement, Jacobian};

use crate::cases::{DoubleBaseMulCase, JacobianAddCase, MixedAddCase, DOUBLE_BASE_MUL, JACOBIAN_ADD, MIXED_ADD};
use crate::encode::TestVectors;
use crate::errors::{Result, VectorError};
use crate::GeneratorConfig;

pub struct Generator {
    config: GeneratorConfig,
    rng: ChaCha20Rng,
    field: Arc<Field>,
    scalars: Arc<Field>,
    curve: Arc<Curve>,
    order: BigUint,
    g: Affine,
    /// G under a random Z, used wherever a case takes a Jacobian G.
    gj: Jacobian,
    last_id: u64,
    vectors: TestVectors,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(config.seed);
        let field = secp384r1::field();
        let g = secp384r1::generator();
        let z = random_z(&field, &mut rng);
        let gj = Jacobian::blind(&g, &z);

        Self {
            config,
            rng,
            field,
            scalars: secp384r1::scalars(),
            curve: secp384r1::curve(),
            order: secp384r1::order().clone(),
            g,
            gj,
            last_id: 0,
            vectors: TestVectors::default(),
        }
    }

    pub fn generate(mut self) -> Result<TestVectors> {
        log::info!("generating secp384r1 vectors with seed {}", self.config.seed);

        let zero = Jacobian::infinity(self.curve.clone());
        if &self.gj + &zero != self.gj {
            return Err(VectorError::Mismatch {
                category: JACOBIAN_ADD,
                id: 0,
                name: "G + 𝕆 (self-check)".to_string(),
            });
        }

        self.jacobian_add()?;
        self.mixed_add()?;
        self.double_base_mul()?;

        Ok(self.vectors)
    }

    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    fn random_point(&mut self) -> Affine {
        self.curve.random_point(&mut self.rng)
    }

    fn add_jacobian(&mut self, name: impl Into<String>, lhs: Jacobian, rhs: Jacobian, result: Jacobian) -> Result<()> {
        let case = JacobianAddCase {
            id: self.next_id(),
            name: name.into(),
            lhs,
            rhs,
            result,
        };
        case.check()?;
        self.vectors.jacobian_add.push(case);
        Ok(())
    }

    fn add_mixed(&mut self, name: impl Into<String>, lhs: Jacobian, rhs: Affine, result: Jacobian) -> Result<()> {
        let case = MixedAddCase {
            id: self.next_id(),
            name: name.into(),
            lhs,
            rhs,
            result,
        };
        case.check()?;
        self.vectors.mixed_add.push(case);
        Ok(())
    }

    fn add_double_base(
        &mut self,
        name: impl Into<String>,
        p: Affine,
        u: impl Into<BigUint>,
        v: impl Into<BigUint>,
        result: Jacobian,
    ) -> Result<()> {
        let case = DoubleBaseMulCase {
            id: self.next_id(),
            name: name.into(),
            p,
            u: FieldElement::new(u.into(), self.scalars.clone()),
            v: FieldElement::new(v.into(), self.scalars.clone()),
            result,
        };
        case.check()?;
        self.vectors.double_base_mul.push(case);
        Ok(())
    }

    fn jacobian_add(&mut self) -> Result<()> {
        let zero = Jacobian::infinity(self.curve.clone());
        let gj = self.gj.clone();
        let n = self.order.clone();

        self.add_jacobian("𝕆 + 𝕆", zero.clone(), zero.clone(), zero.clone())?;
        self.add_jacobian("𝕆 + G", zero.clone(), gj.clone(), gj.clone())?;
        self.add_jacobian("G + 𝕆", gj.clone(), zero.clone(), gj.clone())?;
        self.add_jacobian("G + G", gj.clone(), gj.clone(), &gj + &gj)?;
        self.add_jacobian("2G + 3G", 2u64 * &gj, 3u64 * &gj, 5u64 * &gj)?;
        self.add_jacobian("13G + 13G", 13u64 * &gj, 13u64 * &gj, 26u64 * &gj)?;
        self.add_jacobian("G + -G", gj.clone(), -&gj, zero)?;
        self.add_jacobian("(#E(GF(p)) - 1)G + G", &gj * &(&n - 1u32), gj.clone(), &gj * &n)?;

        for i in 0..self.config.jacobian_add_cases {
            let p = self.random_point();
            let q = self.random_point();
            let z = random_z(&self.field, &mut self.rng);
            let pj = Jacobian::blind(&p, &z);
            let qj = Jacobian::blind(&q, &z);
            let sum = &pj + &qj;
            self.add_jacobian(format!("Random {}", i + 1), pj, qj, sum)?;
        }

        log::debug!("{JACOBIAN_ADD}: {} cases", self.vectors.jacobian_add.len());
        Ok(())
    }

    fn mixed_add(&mut self) -> Result<()> {
        let zeroj = Jacobian::infinity(self.curve.clone());
        let zero = Affine::infinity(self.curve.clone());
        let g = self.g.clone();
        let gj = self.gj.clone();

        self.add_mixed("𝕆 + 𝕆", zeroj.clone(), zero.clone(), zeroj.clone())?;
        self.add_mixed("𝕆 + G", zeroj, g.clone(), gj.clone())?;
        self.add_mixed("G + 𝕆", gj.clone(), zero, gj.clone())?;
        self.add_mixed("G + G", gj.clone(), g.clone(), Jacobian::from_affine(&(&g + &g)))?;
        self.add_mixed("3G + 42G", 3u64 * &gj, 42u64 * &g, 45u64 * &gj)?;

        for i in 0..self.config.mixed_add_cases {
            let p = self.random_point();
            let q = self.random_point();
            let z = random_z(&self.field, &mut self.rng);
            let pj = Jacobian::blind(&p, &z);
            let sum = pj.add_affine(&q);
            self.add_mixed(format!("Random {}", i + 1), pj, q, sum)?;
        }

        log::debug!("{MIXED_ADD}: {} cases", self.vectors.mixed_add.len());
        Ok(())
    }

    fn double_base_mul(&mut self) -> Result<()> {
        let zero = Jacobian::infinity(self.curve.clone());
        let g = self.g.clone();
        let gj = self.gj.clone();
        let n = self.order.clone();
        let big = (BigUint::from(1u32) << 100u32) - 1u32;

        self.add_double_base("G + G", g.clone(), 1u32, 1u32, &gj + &gj)?;
        self.add_double_base("3G + 12G", g.clone(), 3u32, 12u32, 15u64 * &gj)?;
        self.add_double_base("(#E(GF(p)) - 10)G + 10G", g.clone(), &n - 10u32, 10u32, zero.clone())?;
        self.add_double_base("(2¹⁰⁰ - 1)G + (2¹⁰⁰ - 1)(-G)", -&g, big.clone(), big, zero)?;

        for i in 0..self.config.double_base_mul_cases {
            let p = self.random_point();
            let u = self.field.random_element(&mut self.rng);
            let v = self.field.random_element(&mut self.rng);
            // Drawn from GF(p) and reduced into GF(n) on registration.
            let result = &gj * &u + &Jacobian::from_affine(&p) * &v;
            self.add_double_base(format!("Random {}", i + 1), p, u, v, result)?;
        }

        log::debug!("{DOUBLE_BASE_MUL}: {} cases", self.vectors.double_base_mul.len());
        Ok(())
    }
}

/// Nonzero blinding factor in `[1, p - 1]`.
fn random_z(field: &Arc<Field>, rng: &mut ChaCha20Rng) -> FieldElement {
    FieldElement::new(field.random(rng, 1, -1), field.clone())
}

/// Generate the full document for `config`.
pub fn generate(config: GeneratorConfig) -> Result<TestVectors> {
    Generator::new(config).generate()
}
