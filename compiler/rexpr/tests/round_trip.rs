//! Rendering and save/load round trips over generated expressions.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use rexpr::{base_registry, Expression, ParseOptions};

fn ws() -> impl Strategy<Value = String> {
    "[ \t]{0,3}"
}

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z_][A-Za-z0-9_]{0,7}",
        "[0-9][0-9_]{0,6}",
        "\\$[0-9A-Fa-f][0-9A-Fa-f_]{0,7}",
        "%[01][01_]{0,15}",
    ]
}

fn binary_op() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("**"),
        Just("|"),
        Just("^"),
        Just("&"),
        Just("<<"),
        Just(">>"),
    ]
}

fn unary_op() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-"), Just("~"), Just("!")]
}

/// Well-formed expressions with random spacing.
fn expression() -> impl Strategy<Value = String> {
    leaf().prop_recursive(5, 48, 4, |inner| {
        let operand = prop_oneof![
            leaf(),
            (ws(), inner.clone(), ws()).prop_map(|(a, e, b)| format!("({a}{e}{b})")),
        ];
        prop_oneof![
            (inner.clone(), ws(), binary_op(), ws(), inner.clone())
                .prop_map(|(l, a, op, b, r)| format!("{l}{a}{op}{b}{r}")),
            (unary_op(), ws(), operand).prop_map(|(op, a, e)| format!("{op}{a}{e}")),
            (ws(), inner.clone(), ws()).prop_map(|(a, e, b)| format!("({a}{e}{b})")),
            (
                "[a-z]{1,4}",
                ws(),
                ws(),
                prop::collection::vec((inner, ws()), 0..4),
            )
                .prop_map(|(name, a, b, args)| {
                    let args: Vec<String> =
                        args.into_iter().map(|(arg, pad)| format!("{arg}{pad}")).collect();
                    format!("{name}{a}({b}{})", args.join(","))
                }),
        ]
    })
}

/// One or more comma-separated expressions, as accepted at the top level.
fn source() -> impl Strategy<Value = String> {
    (ws(), prop::collection::vec((expression(), ws()), 1..4), ws()).prop_map(
        |(lead, items, trail)| {
            let items: Vec<String> = items.into_iter().map(|(e, pad)| format!("{e}{pad}")).collect();
            format!("{lead}{}{trail}", items.join(","))
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn render_reproduces_source(text in source()) {
        let mut expr = Expression::new();
        let options = ParseOptions::default().with_verify_round_trip(false);
        expr.parse_with(base_registry(), &text, &options).unwrap();
        prop_assert_eq!(expr.to_string(), text.clone());
        prop_assert!(expr.verify_round_trip().is_ok());
    }

    #[test]
    fn load_of_save_renders_identically(text in source()) {
        let expr = Expression::parse(&text).unwrap();
        let mut bytes = Vec::new();
        expr.save(base_registry(), &mut bytes).unwrap();

        let mut loaded = Expression::new();
        loaded.load(base_registry(), &mut bytes.as_slice()).unwrap();
        prop_assert_eq!(loaded.to_string(), expr.to_string());
        prop_assert_eq!(loaded.root(), expr.root());

        // Re-saving the loaded tree gives the same bytes.
        let mut again = Vec::new();
        loaded.save(base_registry(), &mut again).unwrap();
        prop_assert_eq!(again, bytes);
    }
}
