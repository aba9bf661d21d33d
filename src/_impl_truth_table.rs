use super::*;
use std::convert::TryFrom;
use tracing::{debug, trace};

impl TruthTable {
    /// Evaluate `formula` in every valuation of its free variables.
    ///
    /// Fails with `FormulaError::TooManyVariables` when the formula has more variables than
    /// `options` allow, or with `FormulaError::AllocationFailure` when the results do not
    /// fit into memory.
    pub fn new(formula: &Formula, options: &TableOptions) -> Result<TruthTable, FormulaError> {
        let variables = formula.variables();
        let count = variables.num_vars();
        if count > usize::from(options.max_variables()) {
            return Err(FormulaError::TooManyVariables {
                count,
                limit: options.max_variables(),
            });
        }
        let num_rows = 1usize << count;
        debug!(variables = %variables, rows = num_rows, "Building truth table.");
        let results = evaluate_rows(formula, &variables, num_rows)?;
        Ok(TruthTable { variables, results })
    }

    /// Parse `formula` and build its truth table with default `TableOptions`.
    pub fn from_formula_string(formula: &str) -> Result<TruthTable, FormulaError> {
        let formula = Formula::try_from(formula)?;
        TruthTable::new(&formula, &TableOptions::default())
    }

    /// The variables of the table, in column order.
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// Number of rows, i.e. `2^num_vars`.
    pub fn num_rows(&self) -> usize {
        self.results.len()
    }

    /// Number of columns, i.e. one per variable plus the result column.
    pub fn num_columns(&self) -> usize {
        self.variables.num_vars() + 1
    }

    /// Result column, in row order.
    pub fn results(&self) -> &[bool] {
        &self.results
    }

    /// The result of the row with the given index.
    ///
    /// *Panics:* `index` must be smaller than `num_rows`.
    pub fn result(&self, index: usize) -> bool {
        self.results[index]
    }

    /// The row with the given index, or `None` if there is no such row.
    pub fn row(&self, index: usize) -> Option<TruthTableRow> {
        let result = *self.results.get(index)?;
        Some(TruthTableRow {
            index,
            valuation: Valuation::from_row_index(index, self.variables.num_vars()),
            result,
        })
    }

    /// All `num_columns` values of one row: the valuation followed by the result.
    pub fn row_values(&self, index: usize) -> Option<Vec<bool>> {
        self.row(index).map(|row| {
            let mut values = row.valuation.vector();
            values.push(row.result);
            values
        })
    }

    /// Iterate over all rows in increasing index order.
    pub fn rows(&self) -> TruthTableRows<'_> {
        TruthTableRows {
            table: self,
            next_index: 0,
        }
    }

    /// Number of rows where the formula is true.
    pub fn count_true(&self) -> usize {
        self.results.iter().filter(|it| **it).count()
    }

    /// True if the formula is true in every row.
    pub fn is_tautology(&self) -> bool {
        self.results.iter().all(|it| *it)
    }

    /// True if the formula is false in every row.
    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    /// True if the formula is true in at least one row.
    pub fn is_satisfiable(&self) -> bool {
        self.results.iter().any(|it| *it)
    }

    /// Valuations of all rows where the formula is true, in row order.
    pub fn satisfying_valuations(&self) -> impl Iterator<Item = Valuation> + '_ {
        self.rows().filter(|row| row.result).map(|row| row.valuation)
    }
}

/// **(internal)** Compute the result column. The vector is reserved up front so that a table
/// which does not fit into memory fails with an error instead of aborting.
#[cfg(not(feature = "parallel"))]
fn evaluate_rows(
    formula: &Formula,
    variables: &VariableSet,
    num_rows: usize,
) -> Result<Vec<bool>, FormulaError> {
    let mut results = Vec::new();
    results.try_reserve_exact(num_rows)?;
    for valuation in ValuationIterator::new(variables.num_vars()) {
        let result = formula.eval_in(variables, &valuation)?;
        trace!(valuation = %valuation, result, "Row evaluated.");
        results.push(result);
    }
    Ok(results)
}

/// **(internal)** Same as the sequential version, but rows are evaluated on the rayon thread
/// pool. Every row writes only its own slot, so the row order is kept.
#[cfg(feature = "parallel")]
fn evaluate_rows(
    formula: &Formula,
    variables: &VariableSet,
    num_rows: usize,
) -> Result<Vec<bool>, FormulaError> {
    use rayon::prelude::*;
    let mut results = Vec::new();
    results.try_reserve_exact(num_rows)?;
    results.resize(num_rows, false);
    results
        .par_iter_mut()
        .enumerate()
        .try_for_each(|(index, slot)| {
            let valuation = Valuation::from_row_index(index, variables.num_vars());
            *slot = formula.eval_in(variables, &valuation)?;
            trace!(valuation = %valuation, result = *slot, "Row evaluated.");
            Ok::<(), FormulaError>(())
        })?;
    Ok(results)
}

impl Iterator for TruthTableRows<'_> {
    type Item = TruthTableRow;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.table.row(self.next_index)?;
        self.next_index += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.num_rows().saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TruthTableRows<'_> {}
