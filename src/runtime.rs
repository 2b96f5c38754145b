mod builtin;
mod env;
mod eval;

pub use env::Environment;
pub use eval::Interpreter;
