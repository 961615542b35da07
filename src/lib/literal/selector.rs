use crate::literal::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoStaticStr;

/// A portability concern attributed to a literal, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, IntoStaticStr)]
pub enum Reason {
    MaxValue,
    MinValue,
    LeadingZero,
    MSBBitUsed,
    MSBByteUsed,
}

impl Reason {
    pub fn message(self) -> &'static str {
        match self {
            Reason::MaxValue => "hardcoded platform-specific maximum value",
            Reason::MinValue => "hardcoded platform-specific minimum value",
            Reason::LeadingZero => "integer literal has leading zeroes",
            Reason::MSBBitUsed => "should not rely on the most significant bit",
            Reason::MSBByteUsed => "should not rely on bits of the most significant byte",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// How many reasons a verdict keeps when several rules match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportMode {
    /// Only the highest-priority reason.
    FirstMatch,
    /// Every matching reason, in priority order.
    AllReasons,
}

impl Default for ReportMode {
    fn default() -> Self {
        ReportMode::FirstMatch
    }
}

impl FromStr for ReportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-match" => Ok(ReportMode::FirstMatch),
            "all-reasons" => Ok(ReportMode::AllReasons),
            other => Err(format!("unknown report mode `{}`", other)),
        }
    }
}

/// The outcome of classifying one literal. An empty verdict is clean.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Verdict {
    reasons: Vec<Reason>,
}

impl Verdict {
    pub fn reasons(&self) -> &[Reason] {
        self.reasons.as_slice()
    }

    pub fn is_clean(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn contains(&self, reason: Reason) -> bool {
        self.reasons.contains(&reason)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "non-portable integer literal: ")?;
        for (i, reason) in self.reasons.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", reason)?;
        }
        Ok(())
    }
}

pub fn select(
    estimate: BitEstimate,
    predicates: Predicates,
    bit_width: u32,
    mode: ReportMode,
) -> Verdict {
    let bit_width = bit_width as usize;

    // The byte bound can exceed the width, e.g. UCHAR_MAX spelled 0377.
    let msb_bit_used = estimate.msb_bit == bit_width;
    let msb_byte_used = estimate.msb_byte >= bit_width;

    let rules = [
        (
            Reason::MaxValue,
            predicates.is_max || predicates.is_max_minus_one,
        ),
        (
            Reason::MinValue,
            predicates.is_min && !predicates.represents_zero,
        ),
        (
            Reason::LeadingZero,
            predicates.has_leading_zero && !predicates.represents_zero,
        ),
        (Reason::MSBBitUsed, msb_bit_used),
        (Reason::MSBByteUsed, msb_byte_used),
    ];

    let matching = rules
        .iter()
        .filter(|(_, holds)| *holds)
        .map(|(reason, _)| *reason);

    let reasons = match mode {
        ReportMode::FirstMatch => matching.take(1).collect(),
        ReportMode::AllReasons => matching.collect(),
    };

    Verdict { reasons }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all() -> Predicates {
        Predicates {
            is_max: true,
            is_max_minus_one: false,
            is_min: true,
            represents_zero: false,
            has_leading_zero: true,
        }
    }

    fn full_estimate() -> BitEstimate {
        BitEstimate {
            msb_bit: 32,
            msb_byte: 32,
        }
    }

    #[test]
    fn first_match_keeps_the_highest_priority() {
        let verdict = select(full_estimate(), all(), 32, ReportMode::FirstMatch);
        assert_eq!(verdict.reasons(), &[Reason::MaxValue]);
    }

    #[test]
    fn all_reasons_keeps_priority_order() {
        let verdict = select(full_estimate(), all(), 32, ReportMode::AllReasons);
        assert_eq!(
            verdict.reasons(),
            &[
                Reason::MaxValue,
                Reason::MinValue,
                Reason::LeadingZero,
                Reason::MSBBitUsed,
                Reason::MSBByteUsed,
            ]
        );
    }

    #[test]
    fn zero_suppresses_minimum_and_leading_zero() {
        let predicates = Predicates {
            is_min: true,
            represents_zero: true,
            has_leading_zero: true,
            ..Predicates::default()
        };
        let verdict = select(BitEstimate::default(), predicates, 32, ReportMode::AllReasons);
        assert!(verdict.is_clean());
    }

    #[test]
    fn byte_bound_may_exceed_the_width() {
        let estimate = BitEstimate {
            msb_bit: 8,
            msb_byte: 9,
        };
        let verdict = select(estimate, Predicates::default(), 8, ReportMode::AllReasons);
        assert_eq!(verdict.reasons(), &[Reason::MSBBitUsed, Reason::MSBByteUsed]);
    }

    #[test]
    fn renders_reasons_under_one_message() {
        let verdict = select(full_estimate(), Predicates::default(), 32, ReportMode::AllReasons);
        assert_eq!(
            verdict.to_string(),
            "non-portable integer literal: should not rely on the most significant bit; \
             should not rely on bits of the most significant byte"
        );
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("first-match".parse::<ReportMode>(), Ok(ReportMode::FirstMatch));
        assert_eq!("all-reasons".parse::<ReportMode>(), Ok(ReportMode::AllReasons));
        assert!("loud".parse::<ReportMode>().is_err());
    }
}
