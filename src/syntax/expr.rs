use std::fmt;

use super::token::Operator;

/// The built-in aggregate functions callable from an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sum,
    Average,
}

impl Function {
    pub const ALL: [Function; 2] = [Function::Sum, Function::Average];

    /// Case-sensitive lookup of a call-site name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "SUM",
            Self::Average => "AVERAGE",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression<'src> {
    Number(i64),
    VarRef(&'src str),
    Call {
        func: Function,
        args: Vec<Expression<'src>>,
    },
    Neg(Box<Expression<'src>>),
    Binary {
        lhs: Box<Expression<'src>>,
        op: Operator,
        rhs: Box<Expression<'src>>,
    },
}

impl<'src> Expression<'src> {
    pub fn binary(lhs: Expression<'src>, op: Operator, rhs: Expression<'src>) -> Self {
        Self::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    fn binding(&self) -> Option<u8> {
        match self {
            Self::Binary { op, .. } => Some(op.precedence()),
            Self::Number(_) | Self::VarRef(_) | Self::Call { .. } | Self::Neg(_) => None,
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expression, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

// Parentheses only where precedence or left associativity needs them, so the
// output parses back to the same tree without extra nesting.
impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::VarRef(id) => f.write_str(id),
            Self::Call { func, args } => {
                write!(f, "{func}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Self::Neg(expr) => {
                f.write_str("-")?;
                let primary = matches!(
                    **expr,
                    Self::Number(_) | Self::VarRef(_) | Self::Call { .. }
                );
                write_operand(f, expr, !primary)
            }
            Self::Binary { lhs, op, rhs } => {
                let prec = op.precedence();
                write_operand(f, lhs, lhs.binding().is_some_and(|p| p < prec))?;
                write!(f, " {op} ")?;
                write_operand(f, rhs, rhs.binding().is_some_and(|p| p <= prec))
            }
        }
    }
}
