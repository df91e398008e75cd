//! Operator matching for the current token.

use rexpr_ir::{BinaryOp, UnaryOp};
use rexpr_lexer::TokenKind;

use crate::Parser;

impl Parser<'_> {
    /// The binary operator under the cursor, if it binds at `precedence`.
    pub(crate) fn match_binary_op(&self, precedence: u8) -> Option<BinaryOp> {
        let op = match self.kind() {
            TokenKind::Pipe => BinaryOp::Or,
            TokenKind::Caret => BinaryOp::Xor,
            TokenKind::Ampersand => BinaryOp::And,
            TokenKind::Shl => BinaryOp::Shl,
            TokenKind::Shr => BinaryOp::Shr,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Power => BinaryOp::Pow,
            _ => return None,
        };
        (op.precedence() == precedence).then_some(op)
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.kind() {
            TokenKind::Plus => Some(UnaryOp::Identity),
            TokenKind::Minus => Some(UnaryOp::Negate),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            TokenKind::Bang => Some(UnaryOp::LogicalNot),
            _ => None,
        }
    }
}
