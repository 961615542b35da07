use crate::literal::*;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// The exact value of a literal together with the width of its type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedValue {
    pub magnitude: BigUint,
    /// The literal is the operand of a unary minus.
    pub negated: bool,
    pub bit_width: u32,
}

impl TypedValue {
    pub fn new<M: Into<BigUint>>(magnitude: M, bit_width: u32) -> TypedValue {
        TypedValue {
            magnitude: magnitude.into(),
            negated: false,
            bit_width,
        }
    }

    pub fn negate(self) -> TypedValue {
        TypedValue {
            negated: !self.negated,
            ..self
        }
    }

    pub fn unsigned_max(&self) -> BigUint {
        (BigUint::one() << self.bit_width as usize) - 1u32
    }

    pub fn signed_max(&self) -> BigUint {
        self.signed_min_magnitude() - 1u32
    }

    /// Magnitude of the most negative signed value, `2^(w-1)`.
    pub fn signed_min_magnitude(&self) -> BigUint {
        BigUint::one() << self.bit_width.saturating_sub(1) as usize
    }
}

/// Independent facts about a literal's value. No priority among them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Predicates {
    pub is_max: bool,
    pub is_max_minus_one: bool,
    pub is_min: bool,
    pub represents_zero: bool,
    pub has_leading_zero: bool,
}

pub fn classify(value: &TypedValue, normalized: &NormalizedLiteral) -> Predicates {
    let unsigned_max = value.unsigned_max();
    let represents_zero = value.magnitude.is_zero();

    Predicates {
        is_max: value.magnitude == unsigned_max || value.magnitude == value.signed_max(),
        is_max_minus_one: &value.magnitude + 1u32 == unsigned_max,
        is_min: represents_zero
            || (value.negated && value.magnitude == value.signed_min_magnitude()),
        represents_zero,
        has_leading_zero: normalized.first_digit() == '0',
    }
}
