//! JSON form of the vectors.
//!
//! Field elements are zero-padded hex strings, affine points `{x, y, zero}`
//! and Jacobian points `{x, y, z}`. Decoding goes through
//! [`serde_json::Value`] and the field coercion rules, so integers are
//! accepted wherever hex strings are.

use std::io::Write;
use std::sync::Arc;

use refcurve::{secp384r1, Affine, Curve, Field, FieldElement, FieldError, Jacobian, ToFieldElement};
use serde::Serialize;
use serde_json::Value;

use crate::cases::{DoubleBaseMulCase, JacobianAddCase, MixedAddCase, DOUBLE_BASE_MUL, JACOBIAN_ADD, MIXED_ADD};
use crate::errors::{Result, VectorError};

/// The three categories, serialised in this order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestVectors {
    #[serde(rename = "jacobian-add")]
    pub jacobian_add: Vec<JacobianAddCase>,
    #[serde(rename = "mixed-add")]
    pub mixed_add: Vec<MixedAddCase>,
    #[serde(rename = "double-base-mul")]
    pub double_base_mul: Vec<DoubleBaseMulCase>,
}

impl TestVectors {
    pub fn len(&self) -> usize {
        self.jacobian_add.len() + self.mixed_add.len() + self.double_base_mul.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pretty-printed with two-space indentation, no trailing newline.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::decode(&value)
    }

    /// Rebuild secp384r1 vectors from a parsed document. Points are checked
    /// against the curve; the arithmetic itself is left to [`verify`].
    ///
    /// [`verify`]: TestVectors::verify
    pub fn decode(value: &Value) -> Result<Self> {
        let decoder = Decoder {
            field: secp384r1::field(),
            scalars: secp384r1::scalars(),
            curve: secp384r1::curve(),
        };

        Ok(Self {
            jacobian_add: decoder.category(value, JACOBIAN_ADD, Decoder::jacobian_add)?,
            mixed_add: decoder.category(value, MIXED_ADD, Decoder::mixed_add)?,
            double_base_mul: decoder.category(value, DOUBLE_BASE_MUL, Decoder::double_base_mul)?,
        })
    }

    /// Recompute every case, stopping at the first that does not hold.
    pub fn verify(&self) -> Result<()> {
        for case in &self.jacobian_add {
            case.check()?;
        }
        for case in &self.mixed_add {
            case.check()?;
        }
        for case in &self.double_base_mul {
            case.check()?;
        }
        log::info!("verified {} cases", self.len());
        Ok(())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(expected: &'static str, value: &Value) -> VectorError {
    FieldError::TypeMismatch {
        expected,
        found: kind(value),
    }
    .into()
}

fn get<'a>(object: &'a Value, key: &str) -> Result<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| VectorError::MissingField(key.to_string()))
}

struct Decoder {
    field: Arc<Field>,
    scalars: Arc<Field>,
    curve: Arc<Curve>,
}

impl Decoder {
    fn category<T>(&self, document: &Value, key: &str, case: fn(&Self, &Value) -> Result<T>) -> Result<Vec<T>> {
        let entries = get(document, key)?;
        let entries = entries.as_array().ok_or_else(|| mismatch("array", entries))?;
        entries.iter().map(|entry| case(self, entry)).collect()
    }

    fn id(&self, object: &Value) -> Result<u64> {
        let id = get(object, "id")?;
        id.as_u64().ok_or_else(|| mismatch("integer", id))
    }

    fn name(&self, object: &Value) -> Result<String> {
        let name = get(object, "name")?;
        name.as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("string", name))
    }

    fn element(&self, object: &Value, key: &str, field: &Arc<Field>) -> Result<FieldElement> {
        Ok(get(object, key)?.to_field_element(field)?)
    }

    fn affine(&self, object: &Value, key: &str) -> Result<Affine> {
        let point = get(object, key)?;
        let zero = get(point, "zero")?;
        if zero.as_bool().ok_or_else(|| mismatch("bool", zero))? {
            return Ok(Affine::infinity(self.curve.clone()));
        }

        let x = self.element(point, "x", &self.field)?;
        let y = self.element(point, "y", &self.field)?;
        let affine = Affine::new(x, y, self.curve.clone());
        if !affine.is_on_curve() {
            return Err(VectorError::Curve(format!("{key} = ({}, {})", affine.x.to_hex(), affine.y.to_hex())));
        }
        Ok(affine)
    }

    fn jacobian(&self, object: &Value, key: &str) -> Result<Jacobian> {
        let point = get(object, key)?;
        let x = self.element(point, "x", &self.field)?;
        let y = self.element(point, "y", &self.field)?;
        let z = self.element(point, "z", &self.field)?;
        let jacobian = Jacobian::new(x, y, z, self.curve.clone());
        if !jacobian.to_affine().is_on_curve() {
            return Err(VectorError::Curve(format!(
                "{key} = ({}, {}, {})",
                jacobian.x.to_hex(),
                jacobian.y.to_hex(),
                jacobian.z.to_hex()
            )));
        }
        Ok(jacobian)
    }

    fn jacobian_add(&self, object: &Value) -> Result<JacobianAddCase> {
        Ok(JacobianAddCase {
            id: self.id(object)?,
            name: self.name(object)?,
            lhs: self.jacobian(object, "lhs")?,
            rhs: self.jacobian(object, "rhs")?,
            result: self.jacobian(object, "result")?,
        })
    }

    fn mixed_add(&self, object: &Value) -> Result<MixedAddCase> {
        Ok(MixedAddCase {
            id: self.id(object)?,
            name: self.name(object)?,
            lhs: self.jacobian(object, "lhs")?,
            rhs: self.affine(object, "rhs")?,
            result: self.jacobian(object, "result")?,
        })
    }

    fn double_base_mul(&self, object: &Value) -> Result<DoubleBaseMulCase> {
        Ok(DoubleBaseMulCase {
            id: self.id(object)?,
            name: self.name(object)?,
            p: self.affine(object, "p")?,
            u: self.element(object, "u", &self.scalars)?,
            v: self.element(object, "v", &self.scalars)?,
            result: self.jacobian(object, "result")?,
        })
    }
}
