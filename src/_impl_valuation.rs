use super::{FormulaVariable, Valuation};
use std::fmt::{Display, Error, Formatter};

impl Valuation {
    /// Create a new valuation from a vector of values (one per variable, in column order).
    pub fn new(values: Vec<bool>) -> Valuation {
        Valuation(values)
    }

    /// Create a valuation with all variables set to false.
    pub fn all_false(num_vars: usize) -> Valuation {
        Valuation(vec![false; num_vars])
    }

    /// Decode the valuation of a truth table row: variable `j` receives the bit
    /// `num_vars - 1 - j` of `index`, i.e. the first variable is the most significant bit.
    ///
    /// *Panics:* `num_vars` must be at most the number of bits in `usize`.
    pub fn from_row_index(index: usize, num_vars: usize) -> Valuation {
        assert!(
            num_vars <= usize::BITS as usize,
            "Row index has only {} bits, but {} variables were requested.",
            usize::BITS,
            num_vars
        );
        Valuation(
            (0..num_vars)
                .map(|j| (index >> (num_vars - 1 - j)) & 1 == 1)
                .collect(),
        )
    }

    /// Inverse of `from_row_index`: the index of the truth table row with this valuation.
    pub fn row_index(&self) -> usize {
        self.0
            .iter()
            .fold(0, |index, value| (index << 1) | usize::from(*value))
    }

    /// Convert the valuation to its underlying vector.
    pub fn vector(self) -> Vec<bool> {
        self.0
    }

    /// Values of all variables, in column order.
    pub fn values(&self) -> &[bool] {
        &self.0
    }

    /// Get a value of a specific variable in this valuation, or `None` when the valuation
    /// is too short to contain it.
    pub fn get(&self, variable: FormulaVariable) -> Option<bool> {
        self.0.get(variable.to_index()).cloned()
    }

    /// Number of variables in this valuation (used mostly for consistency checks).
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// **(internal)** "Increment" this valuation if possible. Interpret the valuation as
    /// a bit-vector with the *last* variable being the least significant bit and perform
    /// a standard increment. This visits valuations in the order of truth table rows.
    pub(crate) fn next(&self) -> Option<Valuation> {
        let mut next_vec = self.0.clone();
        let mut carry = true; // initially, we want to increment
        for bit in next_vec.iter_mut().rev() {
            let new_value = *bit ^ carry;
            let new_carry = *bit && carry;
            *bit = new_value;
            carry = new_carry;
            if !new_carry {
                break;
            }
        }

        if carry {
            None
        } else {
            Some(Valuation(next_vec))
        }
    }
}

impl Display for Valuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.0.is_empty() {
            write!(f, "[]")?;
        } else {
            write!(f, "[{}", u8::from(self.0[0]))?;
            for value in &self.0[1..] {
                write!(f, ",{}", u8::from(*value))?
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
