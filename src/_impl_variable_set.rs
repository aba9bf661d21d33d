use super::*;
use std::fmt::{Display, Formatter};
use tracing::trace;

impl VariableSet {
    /// Create a new `VariableSet` with the given variables in the given order. Repeated
    /// names are ignored (only the first occurrence counts).
    pub fn new(vars: &[char]) -> VariableSet {
        let mut result = VariableSet::empty();
        for name in vars {
            result.insert(*name);
        }
        result
    }

    /// Create a `VariableSet` without any variables.
    pub fn empty() -> VariableSet {
        VariableSet {
            var_names: Vec::new(),
            var_index_mapping: fxhash::FxHashMap::default(),
        }
    }

    /// Collect the free variables of the given `formula`, in the order of their first
    /// occurrence.
    pub fn from_formula(formula: &Formula) -> VariableSet {
        let mut result = VariableSet::empty();
        formula.collect_variables(&mut result);
        result
    }

    /// **(internal)** Add a variable to the end of this set, unless it is already present.
    /// In both cases, return the `FormulaVariable` identifying the name.
    ///
    /// The set is unbounded: limits on the number of variables are enforced by the
    /// consumers (see `TableOptions`).
    pub(crate) fn insert(&mut self, name: char) -> FormulaVariable {
        if let Some(id) = self.var_index_mapping.get(&name) {
            return FormulaVariable(*id);
        }
        let id = self.var_names.len();
        trace!(name = %name, id, "New variable.");
        self.var_names.push(name);
        self.var_index_mapping.insert(name, id);
        FormulaVariable(id)
    }

    /// Return the number of variables in this set.
    pub fn num_vars(&self) -> usize {
        self.var_names.len()
    }

    /// Find the `FormulaVariable` for the given name. If the name does not appear
    /// in this set, return `None`.
    pub fn var_by_name(&self, name: char) -> Option<FormulaVariable> {
        self.var_index_mapping.get(&name).cloned().map(FormulaVariable)
    }

    /// Obtain the name of a specific `FormulaVariable`.
    ///
    /// *Panics:* `variable` must belong to this set.
    pub fn name_of(&self, variable: FormulaVariable) -> char {
        self.var_names[variable.to_index()]
    }

    /// Names of all variables, in column order.
    pub fn names(&self) -> &[char] {
        &self.var_names
    }
}

impl PartialEq for VariableSet {
    fn eq(&self, other: &Self) -> bool {
        // The mapping is fully determined by the name vector.
        self.var_names == other.var_names
    }
}

impl Eq for VariableSet {}

impl Display for VariableSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        if self.var_names.is_empty() {
            write!(f, "[]")?;
        } else {
            write!(f, "[{}", self.var_names[0])?;
            for name in &self.var_names[1..] {
                write!(f, ",{}", name)?
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
