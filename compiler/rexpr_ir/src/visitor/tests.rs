#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::ast::{BinaryOp, ConstValue, UnaryOp};
use crate::registry::{base_registry, NodeFactory};
use pretty_assertions::assert_eq;

/// `f(a, (b + 1), -c)`
fn sample() -> Node {
    let r = base_registry();
    let sum = r.binary(
        BinaryOp::Add,
        r.name("b", "b "),
        "+ ",
        r.constant(ConstValue::I64(1), "1"),
    );
    let args = r.list(vec![
        crate::ListEntry {
            separator: String::new(),
            node: r.name("a", "a"),
        },
        crate::ListEntry {
            separator: ", ".to_owned(),
            node: r.parens("(", sum, ")"),
        },
        crate::ListEntry {
            separator: ", ".to_owned(),
            node: r.unary(UnaryOp::Negate, "-", r.name("c", "c")),
        },
    ]);
    r.call("f", "f", "(", args, ")")
}

struct CollectNames<'ast>(Vec<&'ast str>);

impl<'ast> Visitor<'ast> for CollectNames<'ast> {
    fn visit_name(&mut self, name: &'ast Name) {
        self.0.push(&name.name);
    }
}

#[test]
fn visits_names_left_to_right() {
    let tree = sample();
    let mut names = CollectNames(Vec::new());
    names.visit_node(&tree);
    assert_eq!(names.0, vec!["a", "b", "c"]);
}

#[test]
fn skipping_walk_stops_descent() {
    struct OutsideParens<'ast>(Vec<&'ast str>);

    impl<'ast> Visitor<'ast> for OutsideParens<'ast> {
        fn visit_name(&mut self, name: &'ast Name) {
            self.0.push(&name.name);
        }

        fn visit_parens(&mut self, _parens: &'ast Parens) {}
    }

    let tree = sample();
    let mut names = OutsideParens(Vec::new());
    names.visit_node(&tree);
    assert_eq!(names.0, vec!["a", "c"]);
}

#[test]
fn counts_every_node_kind() {
    #[derive(Default)]
    struct Count {
        nodes: usize,
        constants: usize,
    }

    impl<'ast> Visitor<'ast> for Count {
        fn visit_node(&mut self, node: &'ast Node) {
            self.nodes += 1;
            walk_node(self, node);
        }

        fn visit_constant(&mut self, _constant: &'ast Constant) {
            self.constants += 1;
        }
    }

    let tree = sample();
    let mut count = Count::default();
    count.visit_node(&tree);
    // call, list, a, parens, +, b, 1, -, c
    assert_eq!(count.nodes, 9);
    assert_eq!(count.constants, 1);
}
