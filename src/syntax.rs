mod cursor;
mod expr;
mod expr_parser;
mod lexer;
mod parser;
mod token;

pub use expr::{Expression, Function};
pub use parser::{MAX_NESTING_DEPTH, MAX_TREE_HEIGHT};
pub use token::{Operator, Spanned, Token};

pub(crate) use lexer::Lexer;
pub(crate) use parser::Parser;

use crate::error::PResult;
use parser::Height;
use token::Precedence;

/// A parsed subtree and its height.
pub(crate) type Node<'src> = (Expression<'src>, Height);

pub(crate) trait ExprParser<'src> {
    fn parse_expr(&mut self) -> PResult<Node<'src>>;
    fn parse_expr_with_precedence(&mut self, min_prec: Precedence) -> PResult<Node<'src>>;
    fn parse_term(&mut self) -> PResult<Node<'src>>;
    fn parse_primary(&mut self, expected: &[&'static str]) -> PResult<Node<'src>>;
    fn parse_grouping_expr(&mut self) -> PResult<Node<'src>>;
    fn try_parse_call_expr(&mut self) -> PResult<Option<Node<'src>>>;
}
