//! # Proptable
//!
//! This crate turns small propositional formulas written in a compact ASCII notation into
//! explicit syntax trees and exhaustive [truth tables](https://en.wikipedia.org/wiki/Truth_table).
//!
//! The notation uses single letters as variables and one character per operator:
//!
//!  - `~a` negation (binds the strongest),
//!  - `a & b` conjunction,
//!  - `a ^ b` exclusive or,
//!  - `a | b` disjunction,
//!  - `a > b` implication,
//!  - `a = b` equivalence (binds the weakest).
//!
//! Binary operators are left-associative, parentheses can be used for grouping and whitespace
//! is ignored.
//!
//! The processing pipeline is intentionally simple: the string is tokenized, parsed into
//! a `Formula` tree, the free variables are collected into a `VariableSet` (in the order of
//! their first occurrence) and finally every one of the `2^n` valuations is evaluated to
//! obtain a `TruthTable`. Both the table and the syntax tree can be printed in a plain
//! text layout.
//!
//! ```rust
//! use proptable::*;
//! use std::convert::TryFrom;
//!
//! let formula = Formula::try_from("a & ~b > c").unwrap();
//! let table = TruthTable::new(&formula, &TableOptions::default()).unwrap();
//!
//! assert_eq!(3, table.variables().num_vars());
//! assert_eq!(8, table.num_rows());
//! assert_eq!(7, table.count_true());
//!
//! for valuation in table.satisfying_valuations() {
//!     assert!(formula.eval_in(table.variables(), &valuation).unwrap());
//! }
//! ```
//!

pub mod formula;

pub use formula::{BinaryOp, Formula};

/// **(internal)** Implementation of the `FormulaError`.
mod _impl_formula_error;

/// **(internal)** Implementation of the `FormulaVariable`.
mod _impl_formula_variable;

/// **(internal)** Implementation of the `VariableSet`.
mod _impl_variable_set;

/// **(internal)** Implementation of the `Valuation`.
mod _impl_valuation;

/// **(internal)** Implementation of the `ValuationIterator`.
mod _impl_valuation_iterator;

/// **(internal)** Implementation of the `TableOptions`.
mod _impl_table_options;

/// **(internal)** Implementation of the `TruthTable` and its row iterator.
mod _impl_truth_table;

/// **(internal)** Plain text export of `TruthTable`s.
mod _impl_table_printer;

/// **(internal)** Several complex test scenarios for formulas and truth tables.
#[cfg(test)]
mod _test_formula;

/// Several basic utility methods for testing formulas.
#[cfg(test)]
mod _test_util;

/// The largest number of variables a `TruthTable` can ever be built for, regardless
/// of `TableOptions`. The table has `2^n` rows, so this already means a billion rows.
pub const MAX_TABLE_VARIABLES: u16 = 30;

/// The deepest `Formula` tree (and the deepest `~`/`(` nesting) the parser accepts.
///
/// Evaluation, printing and dropping of a formula all recurse over its tree, so parsing
/// rejects deeper input with `FormulaError::FormulaTooDeep` instead of letting a later
/// stage exhaust the stack. A chain `a | b | c | ...` is a left-leaning tree, so it counts
/// one level per operator.
pub const MAX_FORMULA_DEPTH: usize = 512;

/// Every way in which processing of a single formula can fail.
///
/// All errors are final: there is no partial result and no attempt to recover. Positions
/// are character offsets into the original formula string (counted in `char`s, starting
/// from zero).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum FormulaError {
    /// A character outside of the formula alphabet.
    InvalidCharacter { character: char, position: usize },
    /// An operand was expected, but an operator, `)` or end of input was found.
    ExpectedExpression { position: usize },
    /// An unclosed `(` or an extra `)`.
    MismatchedParentheses { position: usize },
    /// A complete formula was parsed, but some tokens remain.
    TrailingInput { position: usize },
    /// The formula nests deeper than `MAX_FORMULA_DEPTH`. The position points at the
    /// operator or parenthesis where the limit was crossed.
    FormulaTooDeep { position: usize, limit: usize },
    /// A variable of the formula is not part of the `VariableSet` used for evaluation.
    UnknownVariable { name: char },
    /// The truth table would exceed the configured variable limit.
    TooManyVariables { count: usize, limit: u16 },
    /// Memory for the truth table could not be reserved.
    AllocationFailure,
}

/// Identifies one of the variables of a `VariableSet` (i.e. one column of a `TruthTable`).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FormulaVariable(usize);

/// Maintains the ordered set of distinct variables that appear in a `Formula`.
///
/// The order of variables is the order of their first occurrence in the formula, and it
/// determines the column order of a `TruthTable`.
#[derive(Clone, Debug, Default)]
pub struct VariableSet {
    var_names: Vec<char>,
    var_index_mapping: fxhash::FxHashMap<char, usize>,
}

/// Exactly describes one assignment of boolean values to the variables of a `VariableSet`.
///
/// Each row of a `TruthTable` corresponds to one valuation.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Valuation(Vec<bool>);

/// Exhaustively iterates over all valuations with a certain number of variables, in the
/// order of truth table rows (the first variable is the most significant bit).
///
/// Be aware of the exponential time complexity of such operation!
#[derive(Clone)]
pub struct ValuationIterator(Option<Valuation>);

/// Runtime configuration of truth table construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TableOptions {
    max_variables: u16,
}

/// Result of evaluating a `Formula` in every valuation of its variables.
///
/// The table has `num_vars + 1` columns and `2^num_vars` rows. Row `i` assigns to the
/// variable in column `j` the bit `num_vars - 1 - j` of `i`.
#[derive(Clone, Debug)]
pub struct TruthTable {
    variables: VariableSet,
    results: Vec<bool>,
}

/// One row of a `TruthTable`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTableRow {
    pub index: usize,
    pub valuation: Valuation,
    pub result: bool,
}

/// An iterator over all rows of a `TruthTable`, in increasing index order.
pub struct TruthTableRows<'a> {
    table: &'a TruthTable,
    next_index: usize,
}
