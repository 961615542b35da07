use crate::literal::Radix;
use num_bigint::BigUint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntegerSuffix {
    Unsuffixed,
    U,
    L,
    UL,
    LL,
    ULL,
    Z,
    UZ,
}

impl IntegerSuffix {
    /// Parses a lower-cased suffix spelling.
    pub fn parse(suffix: &str) -> Option<IntegerSuffix> {
        match suffix {
            "" => Some(IntegerSuffix::Unsuffixed),
            "u" => Some(IntegerSuffix::U),
            "l" => Some(IntegerSuffix::L),
            "ul" | "lu" => Some(IntegerSuffix::UL),
            "ll" => Some(IntegerSuffix::LL),
            "ull" | "llu" => Some(IntegerSuffix::ULL),
            "z" => Some(IntegerSuffix::Z),
            "uz" | "zu" => Some(IntegerSuffix::UZ),
            _ => None,
        }
    }
}

/// An integer literal evaluated from its spelling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub radix: Radix,
    pub value: BigUint,
    pub suffix: IntegerSuffix,
}

impl IntegerLiteral {
    /// Evaluates a preprocessing number. Floating literals yield `Ok(None)`.
    pub fn parse(spelling: &str) -> Result<Option<IntegerLiteral>, String> {
        let lower = spelling
            .chars()
            .filter(|c| *c != '\'')
            .collect::<String>()
            .to_lowercase();

        let (radix, rest) = if let Some(rest) = lower.strip_prefix("0x") {
            (Radix::Hexadecimal, rest)
        } else if let Some(rest) = lower.strip_prefix("0b") {
            (Radix::Binary, rest)
        } else {
            (Radix::Decimal, lower.as_str())
        };

        let floating = rest.contains('.')
            || match radix {
                Radix::Hexadecimal => rest.contains('p'),
                Radix::Decimal => rest.contains('e'),
                _ => false,
            };
        if floating {
            return Ok(None);
        }

        let digits_end = rest
            .find(|c: char| match radix {
                Radix::Hexadecimal => !c.is_ascii_hexdigit(),
                _ => !c.is_ascii_digit(),
            })
            .unwrap_or_else(|| rest.len());
        let (mut digits, suffix) = rest.split_at(digits_end);

        let suffix = IntegerSuffix::parse(suffix)
            .ok_or_else(|| format!("invalid suffix '{}' on integer constant", suffix))?;

        if digits.is_empty() {
            return Err(format!("invalid {} constant '{}'", radix, spelling));
        }

        let radix = if radix == Radix::Decimal && digits.len() > 1 && digits.starts_with('0') {
            digits = &digits[1..];
            Radix::Octal
        } else {
            radix
        };

        if let Some(invalid) = digits.chars().find(|c| !radix.is_digit(*c)) {
            return Err(format!("invalid digit '{}' in {} constant", invalid, radix));
        }

        let value = BigUint::parse_bytes(digits.as_bytes(), radix.base())
            .ok_or_else(|| format!("invalid {} constant '{}'", radix, spelling))?;

        Ok(Some(IntegerLiteral {
            radix,
            value,
            suffix,
        }))
    }
}
