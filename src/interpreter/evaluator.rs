/// Entry points and shared result type of the evaluator.
///
/// Primes the lexer, runs the grammar from its lowest precedence level and
/// checks that the whole input was consumed.
pub mod core;

/// Binary operator levels.
///
/// Folds `+`/`-` over terms and `*`/`/` over factors, both left to right.
pub mod binary;

/// The factor level.
///
/// Numbers, parenthesized expressions, unary signs and the `quit` request.
pub mod unary;
