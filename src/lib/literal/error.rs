use thiserror::Error;

/// Reasons a literal cannot be classified.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// The spelling does not start with a digit, as happens for literals
    /// recovered from macro arguments. Not a fault; the occurrence is skipped.
    #[error("literal spelling `{0}` does not start with a digit")]
    Skippable(String),

    /// The caller paired a spelling with a value or width it cannot have.
    #[error("malformed integer literal: {0}")]
    Malformed(MalformedReason),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("`{0}` has no digits after its prefix")]
    EmptyDigitRun(String),

    #[error("declared bit width is zero")]
    ZeroBitWidth,

    #[error("most significant bit {msb_bit} lies beyond the bit width {bit_width}")]
    MsbBeyondWidth { msb_bit: usize, bit_width: u32 },
}

impl LiteralError {
    pub fn is_skippable(&self) -> bool {
        matches!(self, LiteralError::Skippable(_))
    }
}

impl From<MalformedReason> for LiteralError {
    fn from(reason: MalformedReason) -> Self {
        LiteralError::Malformed(reason)
    }
}
