//! Base node kinds: registration order, payload writers and loaders.
//!
//! Tags (the wire contract):
//!
//! | tag    | kind                                                      |
//! |--------|-----------------------------------------------------------|
//! | 0..=7  | constants `u8 i8 u16 i16 u32 i32 u64 i64`                 |
//! | 8      | `Name`                                                    |
//! | 9..=18 | binary `+ - * / ** \| ^ & << >>`                          |
//! | 19..=22| unary `+ - ~ !`                                           |
//! | 23     | `FunctionCall`                                            |
//! | 24     | `ExpressionList`                                          |
//! | 25     | `Parens`                                                  |
//!
//! Payloads:
//!
//! - constant: bit pattern (8/16/32-bit widths as one varint, 64-bit widths
//!   as low word then high word), display
//! - name: name, display
//! - binary: left, display, right
//! - unary: display, operand
//! - call: display name, name, left paren, args, right paren
//! - list: count, then separator and node per entry
//! - parens: left, inner, right

use crate::ast::{BinaryOp, ConstType, ConstValue, ListEntry, Node, UnaryOp};
use crate::codec::{LoadError, Reader, SaveError, Writer};
use crate::extension::ExtensionNode;
use crate::registry::{LoadFn, NodeFactory, NodeRegistry};

const LOW_WORD: u64 = 0xFFFF_FFFF;

/// Base kinds in tag order.
pub(super) fn entries<X: ExtensionNode>() -> Vec<(&'static str, LoadFn<X>)> {
    let constants: [LoadFn<X>; 8] = [
        load_constant::<X, 0>,
        load_constant::<X, 1>,
        load_constant::<X, 2>,
        load_constant::<X, 3>,
        load_constant::<X, 4>,
        load_constant::<X, 5>,
        load_constant::<X, 6>,
        load_constant::<X, 7>,
    ];
    let binaries: [LoadFn<X>; 10] = [
        load_binary::<X, 0>,
        load_binary::<X, 1>,
        load_binary::<X, 2>,
        load_binary::<X, 3>,
        load_binary::<X, 4>,
        load_binary::<X, 5>,
        load_binary::<X, 6>,
        load_binary::<X, 7>,
        load_binary::<X, 8>,
        load_binary::<X, 9>,
    ];
    let unaries: [LoadFn<X>; 4] = [
        load_unary::<X, 0>,
        load_unary::<X, 1>,
        load_unary::<X, 2>,
        load_unary::<X, 3>,
    ];

    let mut out: Vec<(&'static str, LoadFn<X>)> = Vec::with_capacity(26);
    out.extend(
        ConstType::ALL
            .iter()
            .zip(constants)
            .map(|(ty, load)| (ty.kind_name(), load)),
    );
    out.push(("Name", load_name::<X>));
    out.extend(
        BinaryOp::ALL
            .iter()
            .zip(binaries)
            .map(|(op, load)| (op.kind_name(), load)),
    );
    out.extend(
        UnaryOp::ALL
            .iter()
            .zip(unaries)
            .map(|(op, load)| (op.kind_name(), load)),
    );
    out.push(("FunctionCall", load_call::<X>));
    out.push(("ExpressionList", load_list::<X>));
    out.push(("Parens", load_parens::<X>));
    out
}

/// Write everything after `node`'s tag.
pub(super) fn save_payload<X: ExtensionNode>(
    node: &Node<X>,
    writer: &mut Writer<'_>,
    registry: &NodeRegistry<X>,
) -> Result<(), SaveError> {
    match node {
        Node::Constant(c) => {
            let bits = c.value.to_bits();
            if c.value.ty().bits() == 64 {
                writer.write_varint(bits & LOW_WORD)?;
                writer.write_varint(bits >> 32)?;
            } else {
                writer.write_varint(bits)?;
            }
            writer.write_str(&c.display)
        }
        Node::Name(n) => {
            writer.write_str(&n.name)?;
            writer.write_str(&n.display)
        }
        Node::Parens(p) => {
            writer.write_str(&p.left)?;
            registry.save(&p.inner, writer)?;
            writer.write_str(&p.right)
        }
        Node::Binary(b) => {
            registry.save(&b.left, writer)?;
            writer.write_str(&b.display)?;
            registry.save(&b.right, writer)
        }
        Node::Unary(u) => {
            writer.write_str(&u.display)?;
            registry.save(&u.operand, writer)
        }
        Node::Call(c) => {
            writer.write_str(&c.display_name)?;
            writer.write_str(&c.name)?;
            writer.write_str(&c.left_paren)?;
            registry.save(&c.args, writer)?;
            writer.write_str(&c.right_paren)
        }
        Node::List(list) => {
            writer.write_varint(list.len() as u64)?;
            for entry in &list.entries {
                writer.write_str(&entry.separator)?;
                registry.save(&entry.node, writer)?;
            }
            Ok(())
        }
        Node::Extension(x) => x.save_payload(writer, registry),
    }
}

fn load_constant<X: ExtensionNode, const I: usize>(
    reader: &mut Reader<'_>,
    registry: &NodeRegistry<X>,
) -> Result<Node<X>, LoadError> {
    let ty = ConstType::ALL[I];
    let offset = reader.position();
    let bits = if ty.bits() == 64 {
        let low = u64::from(reader.read_varint()?);
        let high = u64::from(reader.read_varint()?);
        low | (high << 32)
    } else {
        let bits = u64::from(reader.read_varint()?);
        if bits >> ty.bits() != 0 {
            return Err(LoadError::Malformed {
                what: "constant wider than its type",
                offset,
            });
        }
        bits
    };
    let display = reader.read_string()?;
    Ok(registry.constant(ConstValue::from_bits(ty, bits), &display))
}

fn load_name<X: ExtensionNode>(
    reader: &mut Reader<'_>,
    registry: &NodeRegistry<X>,
) -> Result<Node<X>, LoadError> {
    let name = reader.read_string()?;
    let display = reader.read_string()?;
    Ok(registry.name(&name, &display))
}

fn load_binary<X: ExtensionNode, const I: usize>(
    reader: &mut Reader<'_>,
    registry: &NodeRegistry<X>,
) -> Result<Node<X>, LoadError> {
    let left = registry.load(reader)?;
    let display = reader.read_string()?;
    let right = registry.load(reader)?;
    Ok(registry.binary(BinaryOp::ALL[I], left, &display, right))
}

fn load_unary<X: ExtensionNode, const I: usize>(
    reader: &mut Reader<'_>,
    registry: &NodeRegistry<X>,
) -> Result<Node<X>, LoadError> {
    let display = reader.read_string()?;
    let operand = registry.load(reader)?;
    Ok(registry.unary(UnaryOp::ALL[I], &display, operand))
}

fn load_call<X: ExtensionNode>(
    reader: &mut Reader<'_>,
    registry: &NodeRegistry<X>,
) -> Result<Node<X>, LoadError> {
    let display_name = reader.read_string()?;
    let name = reader.read_string()?;
    let left_paren = reader.read_string()?;
    let args = registry.load(reader)?;
    let right_paren = reader.read_string()?;
    Ok(registry.call(&display_name, &name, &left_paren, args, &right_paren))
}

fn load_list<X: ExtensionNode>(
    reader: &mut Reader<'_>,
    registry: &NodeRegistry<X>,
) -> Result<Node<X>, LoadError> {
    let count = reader.read_varint()?;
    // The count is untrusted; grow as entries actually arrive.
    let mut entries = Vec::with_capacity(count.min(16) as usize);
    for _ in 0..count {
        let separator = reader.read_string()?;
        let node = registry.load(reader)?;
        entries.push(ListEntry { separator, node });
    }
    Ok(registry.list(entries))
}

fn load_parens<X: ExtensionNode>(
    reader: &mut Reader<'_>,
    registry: &NodeRegistry<X>,
) -> Result<Node<X>, LoadError> {
    let left = reader.read_string()?;
    let inner = registry.load(reader)?;
    let right = reader.read_string()?;
    Ok(registry.parens(&left, inner, &right))
}
