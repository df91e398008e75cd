//! Expression lists and the binary operator precedence chain.

use rexpr_ir::{ensure_sufficient_stack, BinaryOp, ExtensionNode, ListEntry, Node};
use rexpr_lexer::TokenKind;

use super::Grammar;
use crate::{ParseError, Parser};

/// `expression (',' expression)*`
///
/// A single expression is returned as is; two or more are wrapped in an
/// expression list.
pub fn expression_list<X, G>(g: &G, p: &mut Parser<'_>) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    let start = p.offset();
    let first = g.expression(p)?;
    if !p.check(TokenKind::Comma) {
        return Ok(first);
    }

    let mut height = p.height();
    let mut entries = vec![ListEntry {
        separator: String::new(),
        node: first,
    }];
    while let Some(comma) = p.eat(TokenKind::Comma) {
        let node = g.expression(p)?;
        height = height.max(p.height());
        entries.push(ListEntry {
            separator: comma.display.to_owned(),
            node,
        });
    }
    p.set_height(height + 1, start)?;
    Ok(g.list(entries))
}

/// Entry point for one expression, nested at most
/// [`MAX_NESTING`](rexpr_ir::MAX_NESTING) deep.
pub fn expression<X, G>(g: &G, p: &mut Parser<'_>) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    p.enter()?;
    let result = ensure_sufficient_stack(|| g.or_expr(p));
    p.leave();
    result
}

/// `|`, the loosest binary operator.
pub fn or_expr<X, G>(g: &G, p: &mut Parser<'_>) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    binary_level(g, p, BinaryOp::Or.precedence(), |g, p| g.xor_expr(p))
}

/// `^`
pub fn xor_expr<X, G>(g: &G, p: &mut Parser<'_>) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    binary_level(g, p, BinaryOp::Xor.precedence(), |g, p| g.and_expr(p))
}

/// `&`
pub fn and_expr<X, G>(g: &G, p: &mut Parser<'_>) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    binary_level(g, p, BinaryOp::And.precedence(), |g, p| g.shift_expr(p))
}

/// `<<` `>>`
pub fn shift_expr<X, G>(g: &G, p: &mut Parser<'_>) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    binary_level(g, p, BinaryOp::Shl.precedence(), |g, p| g.add_expr(p))
}

/// `+` `-`
pub fn add_expr<X, G>(g: &G, p: &mut Parser<'_>) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    binary_level(g, p, BinaryOp::Add.precedence(), |g, p| g.mul_expr(p))
}

/// `*` `/`
pub fn mul_expr<X, G>(g: &G, p: &mut Parser<'_>) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    binary_level(g, p, BinaryOp::Mul.precedence(), |g, p| g.pow_expr(p))
}

/// `**`, the tightest binary operator. Left-associative like the others:
/// `2 ** 3 ** 2` is `(2 ** 3) ** 2`.
pub fn pow_expr<X, G>(g: &G, p: &mut Parser<'_>) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    binary_level(g, p, BinaryOp::Pow.precedence(), |g, p| g.unary_expr(p))
}

/// One left-associative level: `operand (op operand)*` over the operators
/// of one precedence level.
///
/// Every operator wraps the tree built so far, so a long flat chain is as
/// tall as it is long and counts against the height limit.
#[inline]
fn binary_level<X, G>(
    g: &G,
    p: &mut Parser<'_>,
    precedence: u8,
    operand: impl Fn(&G, &mut Parser<'_>) -> Result<Node<X>, ParseError>,
) -> Result<Node<X>, ParseError>
where
    X: ExtensionNode,
    G: Grammar<X> + ?Sized,
{
    let mut left = operand(g, p)?;
    let mut height = p.height();
    while let Some(op) = p.match_binary_op(precedence) {
        let token = p.advance();
        let right = operand(g, p)?;
        height = height.max(p.height()) + 1;
        p.set_height(height, token.offset)?;
        left = g.binary(op, left, token.display, right);
    }
    Ok(left)
}
