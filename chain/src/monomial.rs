use core::fmt::{self, Display, Formatter};

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Exponents at or above this render in hex.
const HEX_EXPONENT_THRESHOLD: u32 = 1024;

/// A product of variables raised to integer powers, kept in the order each
/// variable first appeared. Zero exponents are dropped, so the empty product
/// is the identity.
#[derive(Debug, Clone, Default)]
pub struct Monomial {
    terms: Vec<(String, BigInt)>,
}

impl Monomial {
    pub fn one() -> Self {
        Self::default()
    }

    pub fn var(name: &str) -> Self {
        Self {
            terms: vec![(name.to_string(), BigInt::one())],
        }
    }

    pub fn is_one(&self) -> bool {
        self.terms.is_empty()
    }

    /// Exponent of `name`, zero if absent.
    pub fn exponent(&self, name: &str) -> BigInt {
        self.terms
            .iter()
            .find(|(var, _)| var == name)
            .map(|(_, exp)| exp.clone())
            .unwrap_or_default()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &BigInt)> {
        self.terms.iter().map(|(var, exp)| (var.as_str(), exp))
    }

    fn accumulate(&mut self, name: &str, exp: &BigInt) {
        match self.terms.iter_mut().find(|(var, _)| var == name) {
            Some((_, current)) => *current += exp,
            None => self.terms.push((name.to_string(), exp.clone())),
        }
    }

    fn normalized(mut self) -> Self {
        self.terms.retain(|(_, exp)| !exp.is_zero());
        self
    }

    pub fn mul(&self, other: &Monomial) -> Monomial {
        let mut result = self.clone();
        for (var, exp) in &other.terms {
            result.accumulate(var, exp);
        }
        result.normalized()
    }

    pub fn div(&self, other: &Monomial) -> Monomial {
        let mut result = self.clone();
        for (var, exp) in &other.terms {
            result.accumulate(var, &-exp);
        }
        result.normalized()
    }

    pub fn pow(&self, n: &BigInt) -> Monomial {
        Monomial {
            terms: self
                .terms
                .iter()
                .map(|(var, exp)| (var.clone(), exp * n))
                .collect(),
        }
        .normalized()
    }

    pub fn square(&self) -> Monomial {
        self.pow(&BigInt::from(2))
    }

    /// Raise to `2^count`.
    pub fn repeated_square(&self, count: u64) -> Monomial {
        self.pow(&(BigInt::one() << count))
    }
}

/// Same variables with the same exponents, in any order.
impl PartialEq for Monomial {
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len()
            && self
                .terms
                .iter()
                .all(|(var, exp)| other.exponent(var) == *exp)
    }
}

impl Eq for Monomial {}

impl Display for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "1");
        }

        for (i, (var, exp)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " * ")?;
            }
            write!(f, "{var}")?;
            if exp.is_one() {
                continue;
            }
            if *exp < BigInt::from(HEX_EXPONENT_THRESHOLD) {
                write!(f, "**{exp}")?;
            } else {
                write!(f, "**0x{exp:x}")?;
            }
        }
        Ok(())
    }
}
