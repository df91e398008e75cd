//! Binary and unary operators.
//!
//! Each operator is its own registry kind, so the order of [`BinaryOp::ALL`]
//! and [`UnaryOp::ALL`] is part of the serialized format.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,

    // Bitwise
    Or,
    Xor,
    And,
    Shl,
    Shr,
}

impl BinaryOp {
    /// Registration order.
    pub const ALL: [BinaryOp; 10] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Pow,
        Self::Or,
        Self::Xor,
        Self::And,
        Self::Shl,
        Self::Shr,
    ];

    /// Source-level symbol, without surrounding whitespace.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
            Self::Or => "|",
            Self::Xor => "^",
            Self::And => "&",
            Self::Shl => "<<",
            Self::Shr => ">>",
        }
    }

    /// Registry name of the node kind carrying this operator.
    pub const fn kind_name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Subtract",
            Self::Mul => "Multiply",
            Self::Div => "Divide",
            Self::Pow => "Power",
            Self::Or => "Or",
            Self::Xor => "Xor",
            Self::And => "And",
            Self::Shl => "ShiftLeft",
            Self::Shr => "ShiftRight",
        }
    }

    /// Precedence level; higher numbers bind less tightly.
    ///
    /// - 1: `**`
    /// - 2: `*` `/`
    /// - 3: `+` `-`
    /// - 4: `<<` `>>`
    /// - 5: `&`
    /// - 6: `^`
    /// - 7: `|`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 1,
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 3,
            Self::Shl | Self::Shr => 4,
            Self::And => 5,
            Self::Xor => 6,
            Self::Or => 7,
        }
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// `+x`
    Identity,
    /// `-x`
    Negate,
    /// `~x`
    BitNot,
    /// `!x`
    LogicalNot,
}

impl UnaryOp {
    /// Registration order.
    pub const ALL: [UnaryOp; 4] = [Self::Identity, Self::Negate, Self::BitNot, Self::LogicalNot];

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Identity => "+",
            Self::Negate => "-",
            Self::BitNot => "~",
            Self::LogicalNot => "!",
        }
    }

    pub const fn kind_name(self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Negate => "Negate",
            Self::BitNot => "BitNot",
            Self::LogicalNot => "LogicalNot",
        }
    }
}
