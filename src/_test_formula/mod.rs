/// **(internal)** Explicitly test different logical identities and parser properties.
mod _test_formula_logic_basic;

/// **(internal)** Generate pseudo-random formula trees, print and re-parse them and
/// exhaustively verify their truth tables.
mod _test_formula_fuzzing;
