use core::fmt::{self, Display, Formatter};
use std::collections::HashMap;

use crate::{Instruction, Monomial};

/// Variable bindings, remembered in the order they were first made.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    order: Vec<String>,
    values: HashMap<String, Monomial>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name`, binding it to itself first if it is not yet known.
    pub fn get_or_insert(&mut self, name: &str) -> Monomial {
        if let Some(value) = self.values.get(name) {
            return value.clone();
        }
        log::trace!("input variable {name}");
        let value = Monomial::var(name);
        self.assign(name, value.clone());
        value
    }

    /// Bind `name`. A rebinding keeps its original position.
    pub fn assign(&mut self, name: &str, value: Monomial) {
        if self.values.insert(name.to_string(), value).is_none() {
            self.order.push(name.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&Monomial> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Monomial)> {
        self.order
            .iter()
            .map(move |name| (name.as_str(), &self.values[name]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Run one instruction. Operands are read before the destination is
    /// written, so `dst` may alias a source.
    pub fn execute(&mut self, instruction: &Instruction) {
        let value = match instruction {
            Instruction::Multiply { lhs, rhs, .. } => {
                let lhs = self.get_or_insert(lhs);
                lhs.mul(&self.get_or_insert(rhs))
            }
            Instruction::Divide { lhs, rhs, .. } => {
                let lhs = self.get_or_insert(lhs);
                lhs.div(&self.get_or_insert(rhs))
            }
            Instruction::Square { src, .. } => self.get_or_insert(src).square(),
            Instruction::RepeatedSquare { src, count, .. } => {
                self.get_or_insert(src).repeated_square(*count)
            }
            Instruction::Zero { .. } => Monomial::one(),
        };
        log::trace!("{} = {}", instruction.dst(), value);
        self.assign(instruction.dst(), value);
    }
}

/// One `name = monomial` line per binding.
impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}

/// Evaluate a whole program from an empty environment.
pub fn evaluate(instructions: &[Instruction]) -> Environment {
    let mut env = Environment::new();
    for instruction in instructions {
        env.execute(instruction);
    }
    log::debug!(
        "evaluated {} instructions, {} bindings",
        instructions.len(),
        env.len()
    );
    env
}
