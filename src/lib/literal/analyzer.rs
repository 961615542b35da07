use crate::literal::*;

/// Approximate shape of the bit pattern a literal spells out.
///
/// Both positions are derived from the spelling alone: the leading digit and
/// the number of digits. Padding zero digits count towards `msb_byte` only;
/// a zero leading digit puts `msb_bit` at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitEstimate {
    /// Bit index reached by the leading digit.
    pub msb_bit: usize,
    /// Bit index reached if the leading digit used all of its bits.
    pub msb_byte: usize,
}

/// Number of bits the leading digit occupies, bucketed by magnitude.
pub fn leading_digit_bits(digit: char) -> usize {
    if digit == '0' {
        0
    } else if digit <= '1' {
        1
    } else if digit <= '3' {
        2
    } else if digit <= '7' {
        3
    } else {
        4
    }
}

pub fn analyze(literal: &NormalizedLiteral) -> BitEstimate {
    let bits_per_digit = match literal.radix.bits_per_digit() {
        None => return BitEstimate::default(),
        Some(bits) => bits,
    };
    let digits = literal.digit_count();

    let msb_bit = match literal.first_digit() {
        '0' => 0,
        first => digits.saturating_sub(1) * bits_per_digit + leading_digit_bits(first),
    };

    BitEstimate {
        msb_bit,
        msb_byte: digits * bits_per_digit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(spelling: &str) -> BitEstimate {
        analyze(&normalize(&LiteralText::new(spelling)).unwrap())
    }

    #[test]
    fn digit_buckets() {
        assert_eq!(leading_digit_bits('0'), 0);
        assert_eq!(leading_digit_bits('1'), 1);
        assert_eq!(leading_digit_bits('2'), 2);
        assert_eq!(leading_digit_bits('3'), 2);
        assert_eq!(leading_digit_bits('4'), 3);
        assert_eq!(leading_digit_bits('7'), 3);
        assert_eq!(leading_digit_bits('8'), 4);
        assert_eq!(leading_digit_bits('a'), 4);
        assert_eq!(leading_digit_bits('f'), 4);
    }

    #[test]
    fn decimal_has_no_shape() {
        assert_eq!(estimate("2147483648"), BitEstimate::default());
        assert_eq!(estimate("0"), BitEstimate::default());
    }

    #[test]
    fn hexadecimal() {
        assert_eq!(
            estimate("0x80000000"),
            BitEstimate {
                msb_bit: 32,
                msb_byte: 32
            }
        );
        assert_eq!(
            estimate("0x10000000"),
            BitEstimate {
                msb_bit: 29,
                msb_byte: 32
            }
        );
        assert_eq!(
            estimate("0x7fffffff"),
            BitEstimate {
                msb_bit: 31,
                msb_byte: 32
            }
        );
    }

    #[test]
    fn octal() {
        // 0377 is UCHAR_MAX; nine bits of room for an eight bit value.
        assert_eq!(
            estimate("0377"),
            BitEstimate {
                msb_bit: 8,
                msb_byte: 9
            }
        );
        assert_eq!(
            estimate("020000000000"),
            BitEstimate {
                msb_bit: 32,
                msb_byte: 33
            }
        );
    }

    #[test]
    fn binary() {
        assert_eq!(
            estimate("0b1000"),
            BitEstimate {
                msb_bit: 4,
                msb_byte: 4
            }
        );
        assert_eq!(
            estimate("0b0111"),
            BitEstimate {
                msb_bit: 0,
                msb_byte: 4
            }
        );
    }

    #[test]
    fn padding_zeroes_only_widen_the_byte_bound() {
        assert_eq!(
            estimate("0x00001000"),
            BitEstimate {
                msb_bit: 0,
                msb_byte: 32
            }
        );
        assert_eq!(
            estimate("0x0000000000000001"),
            BitEstimate {
                msb_bit: 0,
                msb_byte: 64
            }
        );
        assert_eq!(
            estimate("0000000000000644"),
            BitEstimate {
                msb_bit: 0,
                msb_byte: 45
            }
        );
    }

    #[test]
    fn byte_bound_never_falls_below_bit() {
        for spelling in &[
            "0b1", "0b0", "0b1010", "07", "0100", "0777", "0x8", "0xf0", "0x0", "0x7f",
            "0x3fffffff", "0xff51afd7ed558ccd",
        ] {
            let estimate = estimate(spelling);
            assert!(estimate.msb_byte >= estimate.msb_bit, "{}", spelling);
        }
    }
}
