use super::*;
use std::convert::TryFrom;

/// Parse a formula which is known to be valid.
pub fn mk_formula(formula: &str) -> Formula {
    Formula::try_from(formula).unwrap()
}

/// Result column of the truth table of a formula which is known to be valid.
pub fn mk_results(formula: &str) -> Vec<bool> {
    TruthTable::from_formula_string(formula)
        .unwrap()
        .results()
        .to_vec()
}

/// Evaluate a formula (over the given variables) in a valuation given as `0`/`1` values.
pub fn eval_bits(formula: &str, variables: &[char], bits: &[u8]) -> bool {
    let variables = VariableSet::new(variables);
    let valuation = Valuation::new(bits.iter().map(|bit| *bit == 1).collect());
    mk_formula(formula).eval_in(&variables, &valuation).unwrap()
}

pub fn load_expected_results(test_name: &str) -> String {
    std::fs::read_to_string(format!("res/test_results/{test_name}"))
        .expect("Cannot open result file.")
}
