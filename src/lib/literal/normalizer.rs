use crate::literal::*;
use std::fmt;

/// Suffix letters that may trail an integer literal (`u`, `l`, `ll`, `z`).
const SUFFIX_LETTERS: &[char] = &['u', 'l', 'z'];

/// Lower-cased source spelling of a single integer literal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LiteralText(String);

impl LiteralText {
    pub fn new<S: AsRef<str>>(spelling: S) -> LiteralText {
        LiteralText(spelling.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Spellings recovered from macro arguments or template parameters
    /// may be empty or start with a name rather than a digit.
    pub fn is_classifiable(&self) -> bool {
        self.0
            .chars()
            .next()
            .map(|c| c.is_ascii_digit())
            .unwrap_or(false)
    }
}

impl fmt::Display for LiteralText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Decimal digits do not map onto a whole number of bits.
    pub fn bits_per_digit(self) -> Option<usize> {
        match self {
            Radix::Binary => Some(1),
            Radix::Octal => Some(3),
            Radix::Hexadecimal => Some(4),
            Radix::Decimal => None,
        }
    }

    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.base())
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Radix::Binary => write!(f, "binary"),
            Radix::Octal => write!(f, "octal"),
            Radix::Decimal => write!(f, "decimal"),
            Radix::Hexadecimal => write!(f, "hexadecimal"),
        }
    }
}

/// The digit run of a literal with separators, prefix and suffix removed.
/// `stripped_digits` is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedLiteral {
    pub stripped_digits: String,
    pub radix: Radix,
}

impl NormalizedLiteral {
    pub fn first_digit(&self) -> char {
        self.stripped_digits.chars().next().unwrap_or('0')
    }

    pub fn digit_count(&self) -> usize {
        self.stripped_digits.len()
    }
}

pub fn normalize(text: &LiteralText) -> Result<NormalizedLiteral, LiteralError> {
    if !text.is_classifiable() {
        return Err(LiteralError::Skippable(text.to_string()));
    }

    let spelling: String = text.as_str().chars().filter(|c| *c != '\'').collect();
    let body = spelling.trim_end_matches(SUFFIX_LETTERS);

    let (radix, digits) = if let Some(rest) = body.strip_prefix("0b") {
        (Radix::Binary, rest)
    } else if let Some(rest) = body.strip_prefix("0x") {
        (Radix::Hexadecimal, rest)
    } else if body != "0" && body.starts_with('0') {
        (Radix::Octal, &body[1..])
    } else {
        (Radix::Decimal, body)
    };

    let stripped_digits: String = digits.chars().take_while(|c| radix.is_digit(*c)).collect();
    if stripped_digits.is_empty() {
        return Err(MalformedReason::EmptyDigitRun(text.to_string()).into());
    }

    Ok(NormalizedLiteral {
        stripped_digits,
        radix,
    })
}
