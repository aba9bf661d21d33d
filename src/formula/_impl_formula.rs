use super::BinaryOp::*;
use super::Formula::*;
use super::_impl_parser::parse_formula;
use super::{BinaryOp, Formula};
use crate::{FormulaError, Valuation, VariableSet};
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

impl TryFrom<&str> for Formula {
    type Error = FormulaError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_formula(value)
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let symbol = match self {
            And => "&",
            Xor => "^",
            Or => "|",
            Imp => ">",
            Iff => "=",
        };
        write!(f, "{}", symbol)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Variable(name) => write!(f, "{}", name),
            Not(inner) => write!(f, "~{}", inner),
            Binary(op, l, r) => write!(f, "({} {} {})", l, op, r),
        }
    }
}

impl BinaryOp {
    /// Apply the operator to two values. Both values are always computed by the caller,
    /// there is no short-circuiting.
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            And => left & right,
            Xor => left ^ right,
            Or => left | right,
            Imp => !left | right,
            Iff => left == right,
        }
    }
}

impl Formula {
    pub fn mk_var(name: char) -> Formula {
        Variable(name)
    }

    pub fn mk_not(inner: Formula) -> Formula {
        Not(Box::new(inner))
    }

    pub fn mk_binary(op: BinaryOp, left: Formula, right: Formula) -> Formula {
        Binary(op, Box::new(left), Box::new(right))
    }

    /// The ordered set of free variables of this formula.
    ///
    /// Variables are ordered by their first occurrence when visiting a node, then its left
    /// (or only) child, then its right child. This is the column order of truth tables.
    pub fn variables(&self) -> VariableSet {
        VariableSet::from_formula(self)
    }

    /// **(internal)** Append the variables of this formula which are not in `into` yet.
    pub(crate) fn collect_variables(&self, into: &mut VariableSet) {
        match self {
            Variable(name) => {
                into.insert(*name);
            }
            Not(inner) => inner.collect_variables(into),
            Binary(_, l, r) => {
                l.collect_variables(into);
                r.collect_variables(into);
            }
        }
    }

    /// Evaluate this formula in the given `valuation` of the given `variables`.
    ///
    /// Returns `FormulaError::UnknownVariable` if the formula uses a variable which is not
    /// in `variables` (or which has no value in `valuation`).
    ///
    /// The evaluation recurses over the tree. Parsed formulas are at most
    /// `MAX_FORMULA_DEPTH` deep; trees built with `mk_*` should stay within the same limit.
    ///
    /// With `shields_up`, panics if `valuation` does not match `variables`.
    pub fn eval_in(
        &self,
        variables: &VariableSet,
        valuation: &Valuation,
    ) -> Result<bool, FormulaError> {
        if cfg!(feature = "shields_up") && valuation.num_vars() != variables.num_vars() {
            panic!(
                "Variable set has {} variables, but valuation has {}.",
                variables.num_vars(),
                valuation.num_vars()
            )
        }
        match self {
            Variable(name) => variables
                .var_by_name(*name)
                .and_then(|var| valuation.get(var))
                .ok_or(FormulaError::UnknownVariable { name: *name }),
            Not(inner) => Ok(!inner.eval_in(variables, valuation)?),
            Binary(op, l, r) => {
                let left = l.eval_in(variables, valuation)?;
                let right = r.eval_in(variables, valuation)?;
                Ok(op.apply(left, right))
            }
        }
    }

    /// Number of nodes in the syntax tree.
    pub fn size(&self) -> usize {
        match self {
            Variable(_) => 1,
            Not(inner) => 1 + inner.size(),
            Binary(_, l, r) => 1 + l.size() + r.size(),
        }
    }
}
