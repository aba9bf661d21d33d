//! **(internal)** Simple export functions for printing formulas as indented trees.
//!
//! The tree is printed "sideways": the right subtree of a node comes first (above the node),
//! then the node itself, then its left subtree. A node at depth `d > 0` is prefixed by
//! `d - 1` vertical guides and a connector: `├---` for right children and `└---` for left
//! (or only) children.

use super::BinaryOp::*;
use super::Formula;
use super::Formula::*;
use std::io::Write;

impl Formula {
    /// Write the syntax tree of this formula into the output buffer.
    pub fn write_tree(&self, output: &mut dyn Write) -> Result<(), std::io::Error> {
        write_node(output, self, 0, false)
    }

    /// Converts the syntax tree of this formula into a string.
    ///
    /// See also: [write_tree](#method.write_tree)
    pub fn to_tree_string(&self) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_tree(&mut buffer)
            .expect("Cannot write formula tree to string.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in formula tree.")
    }

    /// **(internal)** Text used for this node in the tree.
    fn tree_label(&self) -> String {
        match self {
            Variable(name) => format!("VAR('{}')", name),
            Not(_) => "NOT(~)".to_string(),
            Binary(And, _, _) => "AND(&)".to_string(),
            Binary(Or, _, _) => "OR(|)".to_string(),
            Binary(Xor, _, _) => "XOR(^)".to_string(),
            Binary(Imp, _, _) => "IMPLY(>)".to_string(),
            Binary(Iff, _, _) => "EQUAL(=)".to_string(),
        }
    }
}

fn write_node(
    output: &mut dyn Write,
    node: &Formula,
    depth: usize,
    is_left: bool,
) -> Result<(), std::io::Error> {
    if let Binary(_, _, right) = node {
        write_node(output, right, depth + 1, false)?;
    }

    for _ in 1..depth {
        output.write_all("│   ".as_bytes())?;
    }
    if depth > 0 {
        output.write_all(if is_left { "└---" } else { "├---" }.as_bytes())?;
    }
    output.write_all(node.tree_label().as_bytes())?;
    output.write_all(b"\n")?;

    match node {
        Variable(_) => Ok(()),
        Not(inner) => write_node(output, inner, depth + 1, true),
        Binary(_, left, _) => write_node(output, left, depth + 1, true),
    }
}
