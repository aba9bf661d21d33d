//! Formulas are simple recursive structures that represent propositional formulas explicitly.
//!
//! They can be parsed from a string representation (using `TryFrom` or `FromStr`),
//! evaluated in a `Valuation` of their variables and printed as a syntax tree:
//!
//! ```rust
//! use proptable::*;
//! use std::convert::TryFrom;
//!
//! let formula = Formula::try_from("a & b | c").unwrap();
//! assert_eq!("((a & b) | c)", formula.to_string());
//!
//! let variables = formula.variables();
//! let valuation = Valuation::new(vec![false, true, true]);
//! assert!(formula.eval_in(&variables, &valuation).unwrap());
//! ```

pub use _impl_parser::{parse_formula, parse_tokens};
pub use _impl_tokenizer::tokenize;

/// **(internal)** Construction, printing and evaluation of formulas.
mod _impl_formula;

/// **(internal)** Precedence climbing parser for formulas.
mod _impl_parser;

/// **(internal)** Conversion of formula strings into `Token` sequences.
mod _impl_tokenizer;

/// **(internal)** Plain text export of formula syntax trees.
mod _impl_tree_printer;

/// Binary logical operators, listed from the strongest to the weakest binding.
///
/// Negation (`~`) is the only unary operator and binds stronger than all of these.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOp {
    And, // '&'
    Xor, // '^'
    Or,  // '|'
    Imp, // '>'
    Iff, // '='
}

/// Recursive type for the formula syntax tree.
///
/// Every node owns its children and the tree is never modified after parsing.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Formula {
    Variable(char),
    Not(Box<Formula>),
    Binary(BinaryOp, Box<Formula>, Box<Formula>),
}

/// Tokens that can appear in a formula string.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExprToken {
    And,            // '&'
    Or,             // '|'
    Not,            // '~'
    Xor,            // '^'
    Imp,            // '>'
    Iff,            // '='
    LParen,         // '('
    RParen,         // ')'
    End,            // end of input
    Variable(char), // any alphabetic character
}

/// An `ExprToken` together with the character offset where it starts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    pub kind: ExprToken,
    pub position: usize,
}
