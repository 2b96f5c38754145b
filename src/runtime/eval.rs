use super::{builtin::native, env::Environment};
use crate::{
    error::{ErrorKind, PResult},
    syntax::{Expression, Function, Operator, Parser},
};

/// Evaluates expressions against a fixed set of bindings.
///
/// Sub-expressions are evaluated left to right, depth first, so the leftmost
/// failing operand decides which error is reported.
pub struct Interpreter<'env> {
    env: &'env Environment,
}

impl<'env> Interpreter<'env> {
    pub fn new(env: &'env Environment) -> Self {
        Self { env }
    }

    pub fn eval(&self, src: &str) -> PResult<i64> {
        let expr = Parser::new(src)?.parse()?;
        self.eval_expr(&expr)
    }

    pub fn eval_expr(&self, expr: &Expression) -> PResult<i64> {
        match expr {
            Expression::Number(v) => Ok(*v),
            Expression::VarRef(id) => match self.env.get(id) {
                Some(value) => Ok(value),
                None => Err(ErrorKind::UndefinedVariable(id.to_string())),
            },
            Expression::Neg(expr) => self
                .eval_expr(expr)?
                .checked_neg()
                .ok_or(ErrorKind::Overflow),
            Expression::Binary { lhs, op, rhs } => {
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                Self::eval_binary(lhs, *op, rhs)
            }
            Expression::Call { func, args } => {
                let values = args
                    .iter()
                    .map(|arg| self.eval_expr(arg))
                    .collect::<PResult<Vec<_>>>()?;

                let value = match func {
                    Function::Sum => native::sum(&values),
                    Function::Average => native::average(&values),
                }?;
                log::trace!("{func}{values:?} = {value}");
                Ok(value)
            }
        }
    }

    fn eval_binary(lhs: i64, op: Operator, rhs: i64) -> PResult<i64> {
        match op {
            Operator::Plus => lhs.checked_add(rhs).ok_or(ErrorKind::Overflow),
            Operator::Minus => lhs.checked_sub(rhs).ok_or(ErrorKind::Overflow),
            Operator::Mul => lhs.checked_mul(rhs).ok_or(ErrorKind::Overflow),
            Operator::Div => {
                if rhs == 0 {
                    return Err(ErrorKind::DivisionByZero);
                }
                lhs.checked_div(rhs).ok_or(ErrorKind::Overflow)
            }
            // Computed in floating point; the cast saturates and maps NaN to 0.
            Operator::Pow => Ok((lhs as f64).powf(rhs as f64) as i64),
        }
    }
}
