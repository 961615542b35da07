use crate::literal::Radix;
use crate::syntax::*;
use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Widths of the standard integer types on a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataModel {
    ILP32,
    LP64,
    LLP64,
}

impl DataModel {
    pub fn int_width(self) -> u32 {
        32
    }

    pub fn long_width(self) -> u32 {
        match self {
            DataModel::LP64 => 64,
            DataModel::ILP32 | DataModel::LLP64 => 32,
        }
    }

    pub fn long_long_width(self) -> u32 {
        64
    }

    pub fn pointer_width(self) -> u32 {
        match self {
            DataModel::ILP32 => 32,
            DataModel::LP64 | DataModel::LLP64 => 64,
        }
    }
}

impl Default for DataModel {
    fn default() -> Self {
        DataModel::LP64
    }
}

impl FromStr for DataModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ilp32" => Ok(DataModel::ILP32),
            "lp64" => Ok(DataModel::LP64),
            "llp64" => Ok(DataModel::LLP64),
            other => Err(format!("unknown data model `{}`", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntegerType {
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    SignedSize,
    Size,
}

/// The type an integer literal takes on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeResolution {
    Typed(IntegerType),
    /// No signed candidate holds the value; it is read as unsigned instead.
    ImplicitlyUnsigned(IntegerType),
    TooLarge,
}

impl IntegerType {
    pub fn is_signed(self) -> bool {
        use IntegerType::*;

        matches!(self, Int | Long | LongLong | SignedSize)
    }

    pub fn to_unsigned(self) -> IntegerType {
        use IntegerType::*;

        match self {
            Int | UnsignedInt => UnsignedInt,
            Long | UnsignedLong => UnsignedLong,
            LongLong | UnsignedLongLong => UnsignedLongLong,
            SignedSize | Size => Size,
        }
    }

    pub fn bit_width(self, model: DataModel) -> u32 {
        use IntegerType::*;

        match self {
            Int | UnsignedInt => model.int_width(),
            Long | UnsignedLong => model.long_width(),
            LongLong | UnsignedLongLong => model.long_long_width(),
            SignedSize | Size => model.pointer_width(),
        }
    }

    pub fn max_value(self, model: DataModel) -> BigUint {
        let value_bits = if self.is_signed() {
            self.bit_width(model) - 1
        } else {
            self.bit_width(model)
        };
        (BigUint::one() << value_bits as usize) - 1u32
    }

    /// Types a literal may take, in the order they are tried.
    pub fn candidates(radix: Radix, suffix: IntegerSuffix) -> &'static [IntegerType] {
        use IntegerType::*;

        let decimal = radix == Radix::Decimal;
        match suffix {
            IntegerSuffix::Unsuffixed if decimal => &[Int, Long, LongLong],
            IntegerSuffix::Unsuffixed => &[
                Int,
                UnsignedInt,
                Long,
                UnsignedLong,
                LongLong,
                UnsignedLongLong,
            ],
            IntegerSuffix::U => &[UnsignedInt, UnsignedLong, UnsignedLongLong],
            IntegerSuffix::L if decimal => &[Long, LongLong],
            IntegerSuffix::L => &[Long, UnsignedLong, LongLong, UnsignedLongLong],
            IntegerSuffix::UL => &[UnsignedLong, UnsignedLongLong],
            IntegerSuffix::LL if decimal => &[LongLong],
            IntegerSuffix::LL => &[LongLong, UnsignedLongLong],
            IntegerSuffix::ULL => &[UnsignedLongLong],
            IntegerSuffix::Z if decimal => &[SignedSize],
            IntegerSuffix::Z => &[SignedSize, Size],
            IntegerSuffix::UZ => &[Size],
        }
    }

    pub fn of_literal(literal: &IntegerLiteral, model: DataModel) -> TypeResolution {
        let candidates = Self::candidates(literal.radix, literal.suffix);

        if let Some(type_) = candidates
            .iter()
            .find(|t| literal.value <= t.max_value(model))
        {
            return TypeResolution::Typed(*type_);
        }

        match candidates.last().map(|t| t.to_unsigned()) {
            Some(unsigned) if literal.value <= unsigned.max_value(model) => {
                TypeResolution::ImplicitlyUnsigned(unsigned)
            }
            _ => TypeResolution::TooLarge,
        }
    }
}

impl fmt::Display for IntegerType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use IntegerType::*;

        match self {
            Int => write!(f, "int"),
            UnsignedInt => write!(f, "unsigned int"),
            Long => write!(f, "long"),
            UnsignedLong => write!(f, "unsigned long"),
            LongLong => write!(f, "long long"),
            UnsignedLongLong => write!(f, "unsigned long long"),
            SignedSize => write!(f, "signed size_t"),
            Size => write!(f, "size_t"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use IntegerType::*;

    fn resolve(spelling: &str, model: DataModel) -> TypeResolution {
        let literal = IntegerLiteral::parse(spelling).unwrap().unwrap();
        IntegerType::of_literal(&literal, model)
    }

    #[test]
    fn decimal_stays_signed() {
        assert_eq!(resolve("2147483647", DataModel::LP64), TypeResolution::Typed(Int));
        assert_eq!(resolve("2147483648", DataModel::LP64), TypeResolution::Typed(Long));
        assert_eq!(resolve("4294967294", DataModel::LP64), TypeResolution::Typed(Long));
        assert_eq!(
            resolve("2147483648", DataModel::LLP64),
            TypeResolution::Typed(LongLong)
        );
    }

    #[test]
    fn non_decimal_admits_unsigned() {
        assert_eq!(
            resolve("0x80000000", DataModel::LP64),
            TypeResolution::Typed(UnsignedInt)
        );
        assert_eq!(
            resolve("0x8000000000000000", DataModel::LP64),
            TypeResolution::Typed(UnsignedLong)
        );
        assert_eq!(
            resolve("0x8000000000000000", DataModel::ILP32),
            TypeResolution::Typed(UnsignedLongLong)
        );
    }

    #[test]
    fn suffixes_narrow_the_candidates() {
        assert_eq!(resolve("1u", DataModel::LP64), TypeResolution::Typed(UnsignedInt));
        assert_eq!(resolve("1l", DataModel::LP64), TypeResolution::Typed(Long));
        assert_eq!(resolve("1ull", DataModel::LP64), TypeResolution::Typed(UnsignedLongLong));
        assert_eq!(resolve("1uz", DataModel::ILP32), TypeResolution::Typed(Size));
    }

    #[test]
    fn decimal_too_large_for_signed_reads_as_unsigned() {
        assert_eq!(
            resolve("9223372036854775808", DataModel::LP64),
            TypeResolution::ImplicitlyUnsigned(UnsignedLongLong)
        );
        assert_eq!(
            resolve("9223372036854775808ll", DataModel::LP64),
            TypeResolution::ImplicitlyUnsigned(UnsignedLongLong)
        );
    }

    #[test]
    fn too_large_for_every_type() {
        assert_eq!(
            resolve("0x1'0000'0000'0000'0000", DataModel::LP64),
            TypeResolution::TooLarge
        );
    }

    #[test]
    fn widths_follow_the_data_model() {
        assert_eq!(Long.bit_width(DataModel::LP64), 64);
        assert_eq!(Long.bit_width(DataModel::LLP64), 32);
        assert_eq!(Size.bit_width(DataModel::ILP32), 32);
        assert_eq!("LLP64".parse::<DataModel>(), Ok(DataModel::LLP64));
    }
}
