//! Field elements bound to their field.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use num_traits::{Num, Zero};
use rand::Rng;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{FieldError, Result};
use crate::Field;

/// An element of a prime field, always stored reduced.
#[derive(Clone)]
pub struct FieldElement {
    value: BigUint,
    field: Arc<Field>,
}

impl FieldElement {
    /// Create an element from any integer, reducing it into the field.
    pub fn new<T: Into<BigInt>>(x: T, field: Arc<Field>) -> Self {
        let value = field.reduce(&x.into());
        FieldElement { value, field }
    }

    /// Wrap a value already known to be in `[0, p)`.
    #[inline]
    pub(crate) fn from_reduced(value: BigUint, field: Arc<Field>) -> Self {
        debug_assert!(&value < field.modulus());
        FieldElement { value, field }
    }

    pub fn zero(field: Arc<Field>) -> Self {
        Self::from_reduced(BigUint::zero(), field)
    }

    pub fn one(field: Arc<Field>) -> Self {
        Self::from_reduced(BigUint::from(1u32), field)
    }

    /// Parse a hexadecimal string (spaces and newlines allowed).
    pub fn from_hex(hex: &str, field: Arc<Field>) -> Result<Self> {
        let value = parse_hex(hex)?;
        Ok(FieldElement {
            value: field.reduce_unsigned(&value),
            field,
        })
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    pub fn field(&self) -> &Arc<Field> {
        &self.field
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Re-home an element in another field by reducing its value there.
    pub fn to_field(&self, field: &Arc<Field>) -> FieldElement {
        if same_field(&self.field, field) {
            return self.clone();
        }
        FieldElement {
            value: field.reduce_unsigned(&self.value),
            field: field.clone(),
        }
    }

    pub fn pow(&self, e: &BigInt) -> FieldElement {
        self.with_value(self.field.pow(&self.value, e))
    }

    pub fn pow_u64(&self, e: u64) -> FieldElement {
        self.pow(&BigInt::from(e))
    }

    pub fn square(&self) -> FieldElement {
        self.with_value(self.field.mul(&self.value, &self.value))
    }

    /// Multiplicative inverse; the inverse of zero is zero.
    pub fn inverse(&self) -> FieldElement {
        self.with_value(self.field.inv(&self.value))
    }

    pub fn sqrt<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<FieldElement> {
        let root = self.field.sqrt(&self.value, rng)?;
        Ok(self.with_value(root))
    }

    /// Zero-padded hex string of the canonical value.
    pub fn to_hex(&self) -> String {
        format!("{:0width$x}", self.value, width = self.field.hex_width())
    }

    #[inline]
    fn with_value(&self, value: BigUint) -> FieldElement {
        FieldElement {
            value,
            field: self.field.clone(),
        }
    }

    fn binary(&self, other: &FieldElement, op: impl Fn(&Field, &BigUint, &BigUint) -> BigUint) -> FieldElement {
        let other = other.to_field(&self.field);
        self.with_value(op(&self.field, &self.value, &other.value))
    }
}

fn same_field(a: &Arc<Field>, b: &Arc<Field>) -> bool {
    Arc::ptr_eq(a, b) || a == b
}

fn parse_hex(hex: &str) -> Result<BigUint> {
    let digits: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = digits.strip_prefix("0x").unwrap_or(&digits);
    if digits.is_empty() {
        return Err(FieldError::InvalidHex(hex.to_string()));
    }
    BigUint::from_str_radix(digits, 16).map_err(|_| FieldError::InvalidHex(hex.to_string()))
}

/// Coercion of raw integers, foreign elements and decoded values into a field.
pub trait ToFieldElement {
    fn to_field_element(&self, field: &Arc<Field>) -> Result<FieldElement>;
}

macro_rules! impl_to_field_element_int {
    ($($t:ty),*) => {
        $(
            impl ToFieldElement for $t {
                #[inline]
                fn to_field_element(&self, field: &Arc<Field>) -> Result<FieldElement> {
                    Ok(FieldElement::new(self.clone(), field.clone()))
                }
            }
        )*
    };
}

impl_to_field_element_int!(u32, u64, i32, i64, BigUint, BigInt);

impl ToFieldElement for FieldElement {
    #[inline]
    fn to_field_element(&self, field: &Arc<Field>) -> Result<FieldElement> {
        Ok(self.to_field(field))
    }
}

impl<T: ToFieldElement + ?Sized> ToFieldElement for &T {
    #[inline]
    fn to_field_element(&self, field: &Arc<Field>) -> Result<FieldElement> {
        (**self).to_field_element(field)
    }
}

/// Numbers are taken as integers, strings as hex. Anything else is a
/// type mismatch.
impl ToFieldElement for Value {
    fn to_field_element(&self, field: &Arc<Field>) -> Result<FieldElement> {
        let mismatch = |found| FieldError::TypeMismatch {
            expected: "integer or hex string",
            found,
        };

        match self {
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    u.to_field_element(field)
                } else if let Some(i) = n.as_i64() {
                    i.to_field_element(field)
                } else {
                    Err(mismatch("float"))
                }
            }
            Value::String(s) => FieldElement::from_hex(s, field.clone()),
            Value::Null => Err(mismatch("null")),
            Value::Bool(_) => Err(mismatch("bool")),
            Value::Array(_) => Err(mismatch("array")),
            Value::Object(_) => Err(mismatch("object")),
        }
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.to_field(&self.field).value
    }
}

impl PartialEq<u64> for FieldElement {
    fn eq(&self, other: &u64) -> bool {
        self.value == self.field.reduce_unsigned(&BigUint::from(*other))
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({} % {})", self.value, self.field.modulus())
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl Serialize for FieldElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $method(self, other: &FieldElement) -> FieldElement {
                self.binary(other, $op)
            }
        }

        impl $trait<FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $method(self, other: FieldElement) -> FieldElement {
                self.binary(&other, $op)
            }
        }

        impl $trait<&FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $method(self, other: &FieldElement) -> FieldElement {
                self.binary(other, $op)
            }
        }

        impl $trait<FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $method(self, other: FieldElement) -> FieldElement {
                self.binary(&other, $op)
            }
        }

        impl $trait<&FieldElement> for u64 {
            type Output = FieldElement;

            #[inline]
            fn $method(self, other: &FieldElement) -> FieldElement {
                FieldElement::new(self, other.field.clone()).binary(other, $op)
            }
        }

        impl $trait<FieldElement> for u64 {
            type Output = FieldElement;

            #[inline]
            fn $method(self, other: FieldElement) -> FieldElement {
                FieldElement::new(self, other.field.clone()).binary(&other, $op)
            }
        }
    };
}

impl_binary_op!(Add, add, |f: &Field, x: &BigUint, y: &BigUint| f.add(x, y));
impl_binary_op!(Sub, sub, |f: &Field, x: &BigUint, y: &BigUint| f.sub(x, y));
impl_binary_op!(Mul, mul, |f: &Field, x: &BigUint, y: &BigUint| f.mul(x, y));
impl_binary_op!(Div, div, |f: &Field, x: &BigUint, y: &BigUint| f.mul(x, &f.inv(y)));

impl Neg for &FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        self.with_value(self.field.neg(&self.value))
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    #[inline]
    fn neg(self) -> FieldElement {
        -&self
    }
}
