//!
//! Formulas are parsed using precedence climbing. The parser reads one operand (a variable,
//! a negated operand or a parenthesised formula) and then keeps absorbing binary operators
//! as long as their precedence is at least the current minimum. The right operand of each
//! operator is parsed with minimum precedence raised by one, so operators of equal
//! precedence associate to the left.
//!
//! Every parsed subtree carries its height, and the parser counts the open `~` and `(`
//! it is nested in. Both are kept within `MAX_FORMULA_DEPTH`, so neither the parser nor
//! the later tree walks can run out of stack.

use super::BinaryOp::*;
use super::Formula::*;
use super::{BinaryOp, ExprToken, Formula, Token};
use crate::{FormulaError, MAX_FORMULA_DEPTH};
use tracing::debug;

/// Takes a `&str` and turns it into a `Formula`, or `FormulaError` if the string is not valid.
pub fn parse_formula(from: &str) -> Result<Formula, FormulaError> {
    let tokens = super::tokenize(from)?;
    debug!(tokens = tokens.len(), "Formula tokenized.");
    let formula = parse_tokens(&tokens)?;
    debug!(formula = %formula, size = formula.size(), "Formula parsed.");
    Ok(formula)
}

/// Parse a complete `Token` sequence (as produced by `tokenize`) into a `Formula`.
///
/// The whole sequence must be consumed: a stray `)` results in
/// `FormulaError::MismatchedParentheses` and any other unused token in
/// `FormulaError::TrailingInput`. Formulas nested deeper than `MAX_FORMULA_DEPTH` result
/// in `FormulaError::FormulaTooDeep`.
pub fn parse_tokens(tokens: &[Token]) -> Result<Formula, FormulaError> {
    let mut parser = Parser::new(tokens);
    let (formula, _) = parser.expression(0)?;
    let next = parser.peek();
    match next.kind {
        ExprToken::End => Ok(formula),
        ExprToken::RParen => Err(FormulaError::MismatchedParentheses {
            position: next.position,
        }),
        _ => Err(FormulaError::TrailingInput {
            position: next.position,
        }),
    }
}

impl BinaryOp {
    /// Binding strength of the operator: `&` 5, `^` 4, `|` 3, `>` 2, `=` 1.
    /// (Negation would be 6, but it is handled as a part of the operand.)
    pub fn precedence(&self) -> u8 {
        match self {
            And => 5,
            Xor => 4,
            Or => 3,
            Imp => 2,
            Iff => 1,
        }
    }
}

/// **(internal)** Cursor over a token slice. `nesting` counts the `~` and `(` operands
/// which are currently being parsed.
struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    nesting: usize,
}

/// **(internal)** A parsed subtree together with its height (a variable has height 1).
type Parsed = (Formula, usize);

/// **(internal)** Fail if a subtree of the given `height` is too deep.
fn check_height(height: usize, position: usize) -> Result<usize, FormulaError> {
    if height > MAX_FORMULA_DEPTH {
        Err(FormulaError::FormulaTooDeep {
            position,
            limit: MAX_FORMULA_DEPTH,
        })
    } else {
        Ok(height)
    }
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            tokens,
            cursor: 0,
            nesting: 0,
        }
    }

    /// Current token. Past the end of the slice (which only happens for hand-made slices
    /// without a final `End`), this is always an `End` token.
    fn peek(&self) -> Token {
        self.tokens.get(self.cursor).copied().unwrap_or_else(|| Token {
            kind: ExprToken::End,
            position: self.tokens.last().map(|t| t.position + 1).unwrap_or(0),
        })
    }

    fn advance(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
    }

    /// Consume the `~` or `(` at `position` and go one nesting level deeper.
    fn open(&mut self, position: usize) -> Result<(), FormulaError> {
        if self.nesting >= MAX_FORMULA_DEPTH {
            return Err(FormulaError::FormulaTooDeep {
                position,
                limit: MAX_FORMULA_DEPTH,
            });
        }
        self.nesting += 1;
        self.advance();
        Ok(())
    }

    /// Parse an operand followed by all binary operators of precedence at least
    /// `min_precedence`.
    fn expression(&mut self, min_precedence: u8) -> Result<Parsed, FormulaError> {
        let (mut left, mut height) = self.operand()?;
        while let Some(op) = self.peek().kind.binary_op() {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            let position = self.peek().position;
            self.advance();
            let (right, right_height) = self.expression(precedence + 1)?;
            height = check_height(1 + height.max(right_height), position)?;
            left = Formula::mk_binary(op, left, right);
        }
        Ok((left, height))
    }

    /// Parse a variable, a negation or a parenthesised formula.
    fn operand(&mut self) -> Result<Parsed, FormulaError> {
        let token = self.peek();
        match token.kind {
            ExprToken::Variable(name) => {
                self.advance();
                Ok((Variable(name), 1))
            }
            ExprToken::Not => {
                self.open(token.position)?;
                let (inner, height) = self.operand()?;
                self.nesting -= 1;
                let height = check_height(height + 1, token.position)?;
                Ok((Formula::mk_not(inner), height))
            }
            ExprToken::LParen => {
                self.open(token.position)?;
                let inner = self.expression(0)?;
                let closing = self.peek();
                if closing.kind != ExprToken::RParen {
                    return Err(FormulaError::MismatchedParentheses {
                        position: closing.position,
                    });
                }
                self.advance();
                self.nesting -= 1;
                Ok(inner)
            }
            _ => Err(FormulaError::ExpectedExpression {
                position: token.position,
            }),
        }
    }
}
