use super::*;

impl FormulaVariable {
    /// Column of this variable in a `TruthTable`.
    pub fn to_index(self) -> usize {
        self.0
    }
}
