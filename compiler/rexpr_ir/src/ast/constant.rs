//! Integer constant widths and values.

use std::fmt;

/// Width and signedness of a constant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
}

impl ConstType {
    /// Registration order.
    pub const ALL: [ConstType; 8] = [
        Self::U8,
        Self::I8,
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::U64,
        Self::I64,
    ];

    pub const fn bits(self) -> u32 {
        match self {
            Self::U8 | Self::I8 => 8,
            Self::U16 | Self::I16 => 16,
            Self::U32 | Self::I32 => 32,
            Self::U64 | Self::I64 => 64,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Registry name of the constant kind with this width.
    pub const fn kind_name(self) -> &'static str {
        match self {
            Self::U8 => "ConstantU8",
            Self::I8 => "ConstantI8",
            Self::U16 => "ConstantU16",
            Self::I16 => "ConstantI16",
            Self::U32 => "ConstantU32",
            Self::I32 => "ConstantI32",
            Self::U64 => "ConstantU64",
            Self::I64 => "ConstantI64",
        }
    }
}

/// A typed constant value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstValue {
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
}

impl ConstValue {
    pub const fn ty(self) -> ConstType {
        match self {
            Self::U8(_) => ConstType::U8,
            Self::I8(_) => ConstType::I8,
            Self::U16(_) => ConstType::U16,
            Self::I16(_) => ConstType::I16,
            Self::U32(_) => ConstType::U32,
            Self::I32(_) => ConstType::I32,
            Self::U64(_) => ConstType::U64,
            Self::I64(_) => ConstType::I64,
        }
    }

    /// Bit pattern, zero-extended to 64 bits.
    ///
    /// `I8(-1)` gives `0xFF`, not `u64::MAX`.
    #[allow(clippy::cast_sign_loss)]
    pub const fn to_bits(self) -> u64 {
        match self {
            Self::U8(v) => v as u64,
            Self::I8(v) => v as u8 as u64,
            Self::U16(v) => v as u64,
            Self::I16(v) => v as u16 as u64,
            Self::U32(v) => v as u64,
            Self::I32(v) => v as u32 as u64,
            Self::U64(v) => v,
            Self::I64(v) => v as u64,
        }
    }

    /// Rebuild a value from its bit pattern. Bits above the width of `ty`
    /// are discarded.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub const fn from_bits(ty: ConstType, bits: u64) -> Self {
        match ty {
            ConstType::U8 => Self::U8(bits as u8),
            ConstType::I8 => Self::I8(bits as u8 as i8),
            ConstType::U16 => Self::U16(bits as u16),
            ConstType::I16 => Self::I16(bits as u16 as i16),
            ConstType::U32 => Self::U32(bits as u32),
            ConstType::I32 => Self::I32(bits as u32 as i32),
            ConstType::U64 => Self::U64(bits),
            ConstType::I64 => Self::I64(bits as i64),
        }
    }

    /// The value as `i64`, or `None` for a `U64` above `i64::MAX`.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Self::U8(v) => Some(i64::from(v)),
            Self::I8(v) => Some(i64::from(v)),
            Self::U16(v) => Some(i64::from(v)),
            Self::I16(v) => Some(i64::from(v)),
            Self::U32(v) => Some(i64::from(v)),
            Self::I32(v) => Some(i64::from(v)),
            Self::U64(v) => i64::try_from(v).ok(),
            Self::I64(v) => Some(v),
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::U8(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
        }
    }
}
