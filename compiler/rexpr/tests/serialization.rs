//! Wire format through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use rexpr::{
    base_registry, Expression, ExpressionError, LoadError, Node, NodeRegistry, RegistryBuilder,
};

fn save(expr: &Expression) -> Vec<u8> {
    let mut bytes = Vec::new();
    expr.save(base_registry(), &mut bytes).unwrap();
    bytes
}

fn load(registry: &NodeRegistry, bytes: &[u8]) -> Result<Expression, ExpressionError> {
    let mut expr = Expression::new();
    let mut input = bytes;
    expr.load(registry, &mut input)?;
    Ok(expr)
}

#[test]
fn layout_of_a_small_expression() {
    let expr = Expression::parse("a+1").unwrap();
    assert_eq!(
        save(&expr),
        vec![
            1, // root present
            9, // Add
            8, 1, b'a', 1, b'a', // Name "a"
            1, b'+', // operator display
            7, 1, 0, 1, b'1', // ConstantI64 1
        ]
    );
}

#[test]
fn whitespace_is_persisted() {
    let text = "  f ( x ,\ty )  ";
    let expr = Expression::parse(text).unwrap();
    let loaded = load(base_registry(), &save(&expr)).unwrap();
    assert_eq!(loaded.to_string(), text);
}

#[test]
fn large_constants_use_wide_varints() {
    let expr = Expression::parse("$DEADBEEF").unwrap();
    let bytes = save(&expr);
    assert_eq!(&bytes[..8], &[1, 7, 255, 0xEF, 0xBE, 0xAD, 0xDE, 0]);
    let loaded = load(base_registry(), &bytes).unwrap();
    assert_eq!(loaded.to_string(), "$DEADBEEF");
}

#[test]
fn streams_of_base_kinds_survive_registry_extension() {
    let expr = Expression::parse("(lo(x) << 8) | hi(y)").unwrap();
    let bytes = save(&expr);

    let mut builder: RegistryBuilder = RegistryBuilder::new();
    builder
        .register("Unused", |_, _| {
            Err(LoadError::Malformed {
                what: "unused kind",
                offset: 0,
            })
        })
        .unwrap();
    let extended = builder.build();

    let loaded = load(&extended, &bytes).unwrap();
    assert_eq!(loaded, expr);
}

#[test]
fn unknown_tag() {
    let err = load(base_registry(), &[1, 200]).unwrap_err();
    assert!(matches!(
        err,
        ExpressionError::Load(LoadError::UnknownTag { tag: 200, .. })
    ));
}

#[test]
fn truncated_stream() {
    let bytes = save(&Expression::parse("1 + 2").unwrap());
    for cut in 0..bytes.len() {
        let err = load(base_registry(), &bytes[..cut]).unwrap_err();
        assert!(
            matches!(err, ExpressionError::Load(LoadError::UnexpectedEof { .. })),
            "cut at {cut}: {err}"
        );
    }
}

#[test]
fn loaded_tree_is_independent_of_text() {
    // A tree that no parse could produce: a bare Name whose display differs
    // from its name.
    let bytes = [1, 8, 1, b'a', 1, b'b'];
    let expr = load(base_registry(), &bytes).unwrap();
    assert!(matches!(expr.root(), Some(Node::Name(n)) if n.name == "a"));
    assert_eq!(expr.to_string(), "b");
}
