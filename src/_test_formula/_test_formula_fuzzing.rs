//!
//! Here, we have a small toolbox for fuzzing the formula pipeline.
//! It creates random formula trees, where each leaf is a random letter and each inner
//! node is a negation or one of the binary operators.
//!
//! Each tree is printed and parsed again (the result must be the same tree), then its truth
//! table is compared with a reference evaluation which looks up variable values directly
//! in the bits of the row index. To get predictable test cases, we use a predefined set
//! of randomness seeds.

use crate::*;
use rand::prelude::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::convert::TryFrom;

const LETTERS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'F', 'G', 'H'];
const OPS: [BinaryOp; 5] = [
    BinaryOp::And,
    BinaryOp::Or,
    BinaryOp::Xor,
    BinaryOp::Imp,
    BinaryOp::Iff,
];

/// Create a new random formula with at most `height` levels, using the first `num_letters`
/// entries of `LETTERS` as variables.
fn mk_random_formula(rand: &mut StdRng, height: u8, num_letters: usize) -> Formula {
    if height == 0 || rand.gen_bool(0.15) {
        let letter = LETTERS[(rand.next_u32() as usize) % num_letters];
        return Formula::mk_var(letter);
    }
    if rand.gen_bool(0.2) {
        return Formula::mk_not(mk_random_formula(rand, height - 1, num_letters));
    }
    let op = OPS[(rand.next_u32() as usize) % OPS.len()];
    let left = mk_random_formula(rand, height - 1, num_letters);
    let right = mk_random_formula(rand, height - 1, num_letters);
    Formula::mk_binary(op, left, right)
}

/// Evaluate `formula` without `VariableSet` or `Valuation`: the value of a variable is the
/// bit of `row` which belongs to its column.
fn reference_eval(formula: &Formula, names: &[char], row: usize) -> bool {
    match formula {
        Formula::Variable(name) => {
            let column = names.iter().position(|it| it == name).unwrap();
            (row >> (names.len() - 1 - column)) & 1 == 1
        }
        Formula::Not(inner) => !reference_eval(inner, names, row),
        Formula::Binary(op, l, r) => {
            let l = reference_eval(l, names, row);
            let r = reference_eval(r, names, row);
            match op {
                BinaryOp::And => l && r,
                BinaryOp::Or => l || r,
                BinaryOp::Xor => l != r,
                BinaryOp::Imp => !l || r,
                BinaryOp::Iff => l == r,
            }
        }
    }
}

/// Letters of `formula` in the order in which they appear in its printed form.
fn letters_in_text_order(formula: &Formula) -> Vec<char> {
    let mut result = Vec::new();
    for c in formula.to_string().chars() {
        if c.is_alphabetic() && !result.contains(&c) {
            result.push(c);
        }
    }
    result
}

fn fuzz_test(height: u8, num_letters: usize, seed: u64) {
    let mut rand = StdRng::seed_from_u64(seed);
    let formula = mk_random_formula(&mut rand, height, num_letters);

    let printed = formula.to_string();
    let parsed = Formula::try_from(printed.as_str()).unwrap();
    assert_eq!(formula, parsed, "Formula {} was parsed differently.", printed);

    let table = TruthTable::new(&parsed, &TableOptions::default()).unwrap();
    let names = table.variables().names().to_vec();
    assert_eq!(letters_in_text_order(&formula), names);
    assert_eq!(1 << names.len(), table.num_rows());
    for row in table.rows() {
        assert_eq!(
            reference_eval(&formula, &names, row.index),
            row.result,
            "Formula {} differs in row {}.",
            printed,
            row.valuation
        );
    }

    let tree = formula.to_tree_string();
    assert_eq!(formula.size(), tree.lines().count());
}

#[test]
fn fuzz_small_formulas() {
    for seed in 0..100 {
        fuzz_test(3, 3, seed);
    }
}

#[test]
fn fuzz_medium_formulas() {
    for seed in 0..50 {
        fuzz_test(6, 5, seed);
    }
}

#[test]
fn fuzz_large_formulas() {
    for seed in 0..10 {
        fuzz_test(9, 8, seed);
    }
}
