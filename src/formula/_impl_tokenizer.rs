use super::{BinaryOp, ExprToken, Token};
use crate::FormulaError;

/// Split a formula string into `Token`s. The result always ends with `ExprToken::End`,
/// positioned right after the last character of the input.
///
/// Whitespace is skipped and every alphabetic character is a variable. Any other character
/// outside of `&|^~>=()` is an error, in which case no tokens are returned at all.
pub fn tokenize(formula: &str) -> Result<Vec<Token>, FormulaError> {
    let mut output = Vec::with_capacity(formula.len() + 1);
    let mut end = 0;
    for (position, c) in formula.chars().enumerate() {
        end = position + 1;
        let kind = match c {
            c if c.is_whitespace() => continue,
            '&' => ExprToken::And,
            '|' => ExprToken::Or,
            '^' => ExprToken::Xor,
            '~' => ExprToken::Not,
            '>' => ExprToken::Imp,
            '=' => ExprToken::Iff,
            '(' => ExprToken::LParen,
            ')' => ExprToken::RParen,
            c if c.is_alphabetic() => ExprToken::Variable(c),
            character => {
                return Err(FormulaError::InvalidCharacter {
                    character,
                    position,
                })
            }
        };
        output.push(Token { kind, position });
    }
    output.push(Token {
        kind: ExprToken::End,
        position: end,
    });
    Ok(output)
}

impl ExprToken {
    /// The binary operator represented by this token, if any.
    pub fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            ExprToken::And => Some(BinaryOp::And),
            ExprToken::Xor => Some(BinaryOp::Xor),
            ExprToken::Or => Some(BinaryOp::Or),
            ExprToken::Imp => Some(BinaryOp::Imp),
            ExprToken::Iff => Some(BinaryOp::Iff),
            _ => None,
        }
    }
}
