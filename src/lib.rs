//! A small integer expression language.
//!
//! Source text is lexed, parsed into an [`Expression`] tree and evaluated
//! against an [`Environment`] of variable bindings:
//!
//! ```
//! let env = [("A", 3), ("B", 4)].into_iter().collect();
//! let expr = tally::parse("SUM(A, B, 2^3)").unwrap();
//! assert_eq!(tally::evaluate(&expr, &env), Ok(15));
//! ```
//!
//! A parsed tree holds no state of its own and can be evaluated any number of
//! times with different bindings.

mod error;
mod runtime;
mod syntax;

pub use error::{ErrorKind, PResult};
pub use runtime::{Environment, Interpreter};
pub use syntax::{
    Expression, Function, Operator, Spanned, Token, MAX_NESTING_DEPTH, MAX_TREE_HEIGHT,
};

use syntax::{Lexer, Parser};

/// Splits `src` into tokens, skipping whitespace.
pub fn tokenize(src: &str) -> PResult<Vec<Spanned<'_>>> {
    Lexer::tokenize(src)
}

/// Parses `src` into an expression tree.
pub fn parse(src: &str) -> PResult<Expression<'_>> {
    let expr = Parser::new(src)?.parse()?;
    log::debug!("parsed `{src}` as {expr}");
    Ok(expr)
}

/// Evaluates a parsed expression against `env`.
pub fn evaluate(expr: &Expression, env: &Environment) -> PResult<i64> {
    let value = Interpreter::new(env).eval_expr(expr)?;
    log::debug!("{expr} = {value}");
    Ok(value)
}

/// Parses and evaluates `src` in one go.
pub fn eval_str(src: &str, env: &Environment) -> PResult<i64> {
    evaluate(&parse(src)?, env)
}
