//! Combination Enumerator
//!
//! Walks the Cartesian product of field states lazily, like an odometer:
//! text fields first, then binary fields, the last field turning fastest.
//! Only the combinations actually requested are ever built.

use num_bigint::BigUint;

use crate::domain::field_model::{
    FieldModel, FieldState, StateAssignment, BINARY_STATES, TEXT_STATES,
};

/// Theoretical number of combinations: 3^text * 2^binary, exact.
pub fn total_combinations(model: &FieldModel) -> BigUint {
    let text = BigUint::from(TEXT_STATES.len()).pow(model.text_fields.len() as u32);
    let binary = BigUint::from(BINARY_STATES.len()).pow(model.binary_fields.len() as u32);
    text * binary
}

/// Lazily yields every [`StateAssignment`] of a model in a fixed order.
///
/// A model without fields yields exactly one empty assignment.
pub struct Combinations<'a> {
    fields: Vec<(&'a str, &'static [FieldState])>,
    digits: Vec<usize>,
    exhausted: bool,
}

impl<'a> Combinations<'a> {
    pub fn new(model: &'a FieldModel) -> Self {
        let fields: Vec<(&'a str, &'static [FieldState])> = model
            .text_fields
            .iter()
            .map(|name| (name.as_str(), &TEXT_STATES[..]))
            .chain(
                model
                    .binary_fields
                    .iter()
                    .map(|name| (name.as_str(), &BINARY_STATES[..])),
            )
            .collect();
        let digits = vec![0; fields.len()];
        Self {
            fields,
            digits,
            exhausted: false,
        }
    }

    fn current(&self) -> StateAssignment {
        self.fields
            .iter()
            .zip(&self.digits)
            .map(|((name, states), &digit)| (*name, states[digit]))
            .collect()
    }

    /// Moves to the next combination; returns false once every one was seen.
    fn advance(&mut self) -> bool {
        for position in (0..self.digits.len()).rev() {
            self.digits[position] += 1;
            if self.digits[position] < self.fields[position].1.len() {
                return true;
            }
            self.digits[position] = 0;
        }
        false
    }
}

impl Iterator for Combinations<'_> {
    type Item = StateAssignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let assignment = self.current();
        if !self.advance() {
            self.exhausted = true;
        }
        Some(assignment)
    }
}

/// The first `max_cases` combinations, in enumeration order.
pub fn enumerate_combinations(
    model: &FieldModel,
    max_cases: usize,
) -> impl Iterator<Item = StateAssignment> + '_ {
    Combinations::new(model).take(max_cases)
}
