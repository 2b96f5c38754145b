use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    #[error("unrecognized character at offset {position}")]
    LexError { position: usize },

    #[error("integer literal at offset {position} does not fit in 64 bits")]
    LiteralOutOfRange { position: usize },

    #[error("at offset {position}: expected {}, found {found}", .expected.join(" or "))]
    ParseError {
        position: usize,
        found: String,
        expected: Vec<&'static str>,
    },

    /// Too many nested parentheses or calls, or a tree too tall. A long flat
    /// operator chain such as `1+1+...+1` also counts toward the height.
    #[error("expression nested too deeply at offset {position}")]
    NestingTooDeep { position: usize },

    #[error("unknown function `{name}` at offset {position}")]
    UnknownFunction { name: String, position: usize },

    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("AVERAGE called without arguments")]
    EmptyArgumentList,

    #[error("integer overflow")]
    Overflow,
}

impl ErrorKind {
    /// Whether the error was raised before evaluation started.
    pub fn is_syntax(&self) -> bool {
        match self {
            Self::LexError { .. }
            | Self::LiteralOutOfRange { .. }
            | Self::ParseError { .. }
            | Self::NestingTooDeep { .. }
            | Self::UnknownFunction { .. } => true,
            Self::UndefinedVariable(_)
            | Self::DivisionByZero
            | Self::EmptyArgumentList
            | Self::Overflow => false,
        }
    }
}

pub type PResult<T> = Result<T, ErrorKind>;
