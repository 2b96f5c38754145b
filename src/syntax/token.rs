use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Mul,
    Div,
    Pow,
}

pub type Precedence = u8;

impl Operator {
    /// Binding strength; every operator is left-associative.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Plus | Self::Minus => 10,
            Self::Mul | Self::Div => 20,
            Self::Pow => 30,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    Number(i64),
    Op(Operator),
    Id(&'src str),

    LParen,
    RParen,

    Comma,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "`{v}`"),
            Self::Op(op) => write!(f, "`{op}`"),
            Self::Id(id) => write!(f, "`{id}`"),
            Self::LParen => f.write_str("`(`"),
            Self::RParen => f.write_str("`)`"),
            Self::Comma => f.write_str("`,`"),
        }
    }
}

/// A token together with the byte offset it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned<'src> {
    pub token: Token<'src>,
    pub offset: usize,
}
