use crate::_test_util::{eval_bits, mk_formula, mk_results};
use crate::*;

#[test]
fn formula_iff_reflexive() {
    assert!(TruthTable::from_formula_string("A=A")
        .unwrap()
        .is_tautology());
}

#[test]
fn formula_xor_self_is_false() {
    assert!(TruthTable::from_formula_string("A^A")
        .unwrap()
        .is_contradiction());
}

#[test]
fn formula_implication() {
    let vars = ['A', 'B'];
    assert!(eval_bits("A>B", &vars, &[0, 0]));
    assert!(eval_bits("A>B", &vars, &[0, 1]));
    assert!(!eval_bits("A>B", &vars, &[1, 0]));
    assert!(eval_bits("A>B", &vars, &[1, 1]));
}

#[test]
fn formula_and_binds_stronger_than_or() {
    assert_eq!(mk_results("A & B | C"), mk_results("(A & B) | C"));
    assert_ne!(mk_results("A & (B | C)"), mk_results("(A & B) | C"));
    let vars = ['A', 'B', 'C'];
    assert!(!eval_bits("A & (B | C)", &vars, &[0, 1, 1]));
    assert!(eval_bits("(A & B) | C", &vars, &[0, 1, 1]));
}

#[test]
fn formula_left_associativity() {
    assert_eq!(mk_formula("(A = B) = C"), mk_formula("A = B = C"));
    assert_ne!(mk_formula("A = (B = C)"), mk_formula("A = B = C"));
    // Implication is not associative, so the grouping is visible in the results.
    let vars = ['A', 'B', 'C'];
    assert!(!eval_bits("A > B > C", &vars, &[0, 0, 0]));
    assert!(eval_bits("A > (B > C)", &vars, &[0, 0, 0]));
    assert_eq!(mk_results("(A > B) > C"), mk_results("A > B > C"));
}

#[test]
fn formula_de_morgan() {
    assert!(TruthTable::from_formula_string("~(a & b) = (~a | ~b)")
        .unwrap()
        .is_tautology());
    assert!(TruthTable::from_formula_string("~(a | b) = ~a & ~b")
        .unwrap()
        .is_tautology());
}

#[test]
fn formula_operator_identities() {
    let identities = [
        "(a > b) = (~a | b)",
        "(a = b) = ((a > b) & (b > a))",
        "(a ^ b) = ~(a = b)",
        "a & (b | c) = a & b | a & c",
        "~~a = a",
        "a | ~a",
    ];
    for identity in identities.iter() {
        let table = TruthTable::from_formula_string(identity).unwrap();
        assert!(table.is_tautology(), "{} is not a tautology", identity);
    }
}

#[test]
fn truth_table_shape() {
    let cases = [
        ("a", 1usize),
        ("a | b", 2),
        ("a ^ b ^ c = d", 4),
        ("a & a & a", 1),
    ];
    for &(formula, num_vars) in cases.iter() {
        let table = TruthTable::from_formula_string(formula).unwrap();
        assert_eq!(num_vars, table.variables().num_vars());
        assert_eq!(1usize << num_vars, table.num_rows());
        assert_eq!(num_vars + 1, table.num_columns());
        for row in table.rows() {
            assert_eq!(row.index, row.valuation.row_index());
            assert_eq!(
                Some(num_vars + 1),
                table.row_values(row.index).map(|values| values.len())
            );
        }
    }
}

#[test]
fn truth_table_examples() {
    let table = TruthTable::from_formula_string("A&B").unwrap();
    assert_eq!(&['A', 'B'], table.variables().names());
    assert_eq!(vec![false, false, false, true], table.results().to_vec());

    let table = TruthTable::from_formula_string("~A").unwrap();
    assert_eq!(&['A'], table.variables().names());
    assert_eq!(vec![true, false], table.results().to_vec());
}

#[test]
fn truth_table_column_order_is_first_occurrence() {
    let table = TruthTable::from_formula_string("c & (a | ~c) > b").unwrap();
    assert_eq!(&['c', 'a', 'b'], table.variables().names());
    // Row 4 is c=1, a=0, b=0.
    let row = table.row(4).unwrap();
    assert_eq!(Valuation::new(vec![true, false, false]), row.valuation);
    assert!(row.result);
    // Row 6 is c=1, a=1, b=0.
    assert!(!table.result(6));
}

#[test]
fn malformed_formulas_are_rejected() {
    assert!(matches!(
        TruthTable::from_formula_string("A &"),
        Err(FormulaError::ExpectedExpression { .. })
    ));
    assert!(matches!(
        TruthTable::from_formula_string("(A&B"),
        Err(FormulaError::MismatchedParentheses { .. })
    ));
    assert_eq!(
        FormulaError::InvalidCharacter {
            character: '#',
            position: 1
        },
        TruthTable::from_formula_string("A#B").unwrap_err()
    );
    assert!(matches!(
        TruthTable::from_formula_string("A B"),
        Err(FormulaError::TrailingInput { position: 2 })
    ));
}
