//! Classification of integer literals that spell out platform-dependent bit
//! patterns.
//!
//! A literal flows through four stages: its spelling is normalized into a
//! digit run, the digit run yields an approximate bit shape, the exact value
//! is compared against the extremes of its type, and the facts are combined
//! into a [`Verdict`]. Every stage is a pure function; nothing is retained
//! between literals.

mod error;
pub use self::error::*;

mod normalizer;
pub use self::normalizer::*;

mod analyzer;
pub use self::analyzer::*;

mod classifier;
pub use self::classifier::*;

mod selector;
pub use self::selector::*;

/// Runs the whole pipeline for one literal.
///
/// An empty verdict means the literal is portable. Spellings that do not
/// start with a digit yield [`LiteralError::Skippable`]; a value whose type is
/// too narrow for the spelling yields [`LiteralError::Malformed`].
pub fn classify_literal(
    text: &LiteralText,
    value: &TypedValue,
    mode: ReportMode,
) -> Result<Verdict, LiteralError> {
    let normalized = normalize(text)?;

    if value.bit_width == 0 {
        return Err(MalformedReason::ZeroBitWidth.into());
    }

    let estimate = analyze(&normalized);
    if estimate.msb_bit > value.bit_width as usize {
        return Err(MalformedReason::MsbBeyondWidth {
            msb_bit: estimate.msb_bit,
            bit_width: value.bit_width,
        }
        .into());
    }

    let predicates = classify(value, &normalized);
    Ok(select(estimate, predicates, value.bit_width, mode))
}
