use super::FormulaError;
use super::FormulaError::*;
use std::collections::TryReserveError;
use std::fmt::{Display, Error, Formatter};

impl FormulaError {
    /// Character offset in the formula string where the error was detected, if the error
    /// is tied to a specific location.
    pub fn position(&self) -> Option<usize> {
        match self {
            InvalidCharacter { position, .. }
            | ExpectedExpression { position }
            | MismatchedParentheses { position }
            | TrailingInput { position }
            | FormulaTooDeep { position, .. } => Some(*position),
            UnknownVariable { .. } | TooManyVariables { .. } | AllocationFailure => None,
        }
    }
}

impl Display for FormulaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Illegal character '{}' at position {}, expected a token.",
                character, position
            ),
            ExpectedExpression { position } => {
                write!(f, "Expected an expression at position {}.", position)
            }
            MismatchedParentheses { position } => {
                write!(f, "Mismatched parentheses at position {}.", position)
            }
            TrailingInput { position } => write!(
                f,
                "Unexpected input at position {} after a complete formula.",
                position
            ),
            FormulaTooDeep { position, limit } => write!(
                f,
                "Formula nests deeper than {} levels at position {}.",
                limit, position
            ),
            UnknownVariable { name } => write!(f, "Unknown variable '{}'.", name),
            TooManyVariables { count, limit } => write!(
                f,
                "Formula has {} variables, but truth tables are limited to {}.",
                count, limit
            ),
            AllocationFailure => write!(f, "Unable to allocate memory for the truth table."),
        }
    }
}

impl std::error::Error for FormulaError {}

impl From<TryReserveError> for FormulaError {
    fn from(_: TryReserveError) -> Self {
        AllocationFailure
    }
}
