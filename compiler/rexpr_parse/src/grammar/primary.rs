//! Prefix operators and primary expressions.

use rexpr_ir::{ConstValue, ExtensionNode, Node};
use rexpr_lexer::TokenKind;

use super::Grammar;
use crate::constant::parse_constant;
use crate::error::{ParseError, ParseErrorKind};
use crate::Parser;

/// `('+' | '-' | '~' | '!') primary | primary`
///
/// A prefix operator applies to a primary only, so `--1` is rejected.
pub fn unary_expr<X, G>(g: &G, p: &mut Parser<'_>) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    let Some(op) = p.match_unary_op() else {
        return g.primary(p);
    };
    let token = p.advance();
    let operand = g.primary(p)?;
    p.set_height(p.height() + 1, token.offset)?;
    Ok(g.unary(op, token.display, operand))
}

/// Names, calls, constants and parenthesized expressions.
pub fn primary<X, G>(g: &G, p: &mut Parser<'_>) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    match p.kind() {
        TokenKind::Name => {
            let name = p.advance();
            let Some(left) = p.eat(TokenKind::LParen) else {
                p.set_height(1, name.offset)?;
                return Ok(g.name(name.text, name.display));
            };
            let args = if p.check(TokenKind::RParen) {
                p.set_height(1, left.offset)?;
                g.list(Vec::new())
            } else {
                g.expression_list(p)?
            };
            let right = p.expect(TokenKind::RParen)?;
            p.set_height(p.height() + 1, name.offset)?;
            Ok(g.call(name.display, name.text, left.display, args, right.display))
        }
        TokenKind::Constant => {
            let token = p.advance();
            let value = parse_constant(token.text).map_err(|reason| {
                ParseError::new(
                    ParseErrorKind::InvalidConstant {
                        text: token.text.to_owned(),
                        reason,
                    },
                    token.offset,
                )
            })?;
            p.set_height(1, token.offset)?;
            Ok(g.constant(ConstValue::I64(value), token.display))
        }
        TokenKind::LParen => {
            let left = p.advance();
            let inner = g.expression(p)?;
            let right = p.expect(TokenKind::RParen)?;
            p.set_height(p.height() + 1, left.offset)?;
            Ok(g.parens(left.display, inner, right.display))
        }
        _ => Err(p.unexpected()),
    }
}
