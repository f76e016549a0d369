/// Evaluation errors.
///
/// Defines every way a calculation can stop before producing a value: lexical
/// failures, tokens out of place, text left over after a complete expression,
/// and the `quit` request that ends an interactive session.
pub mod eval_error;

pub use eval_error::EvalError;
