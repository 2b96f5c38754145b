use crate::{
    error::{ErrorKind, PResult},
    syntax::{cursor::TokenStream, lexer::Lexer, token::Token, ExprParser, Expression},
};

/// Deepest allowed nesting of parentheses and call argument lists.
pub const MAX_NESTING_DEPTH: usize = 128;
/// Tallest allowed expression tree.
pub const MAX_TREE_HEIGHT: usize = 1024;

pub(crate) type Height = usize;

pub(crate) struct Parser<'src> {
    pub(super) tokens: TokenStream<'src>,
    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str) -> PResult<Self> {
        Ok(Self {
            tokens: TokenStream::new(Lexer::tokenize(src)?, src.len()),
            depth: 0,
        })
    }

    /// Parses a complete expression; every token has to be consumed.
    pub fn parse(&mut self) -> PResult<Expression<'src>> {
        let (expr, _) = self.parse_expr()?;

        if !self.tokens.is_at_end() {
            return Err(self.unexpected(&["operator", "end of input"]));
        }
        Ok(expr)
    }

    pub(super) fn unexpected(&self, expected: &[&'static str]) -> ErrorKind {
        let found = match self.tokens.peek() {
            None => "end of input".to_string(),
            Some(token) => token.to_string(),
        };

        ErrorKind::ParseError {
            position: self.tokens.offset(),
            found,
            expected: expected.to_vec(),
        }
    }

    pub(super) fn expect(&mut self, expected: Token<'src>, names: &[&'static str]) -> PResult<()> {
        match self.tokens.peek() {
            Some(token) if token == expected => {
                self.eat();
                Ok(())
            }
            _ => Err(self.unexpected(names)),
        }
    }

    #[inline(always)]
    pub(super) fn eat(&mut self) {
        let _ = self.tokens.next();
    }

    pub(super) fn enter(&mut self) -> PResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ErrorKind::NestingTooDeep {
                position: self.tokens.offset(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn leave(&mut self) {
        self.depth -= 1;
    }

    pub(super) fn check_height(&self, height: Height) -> PResult<Height> {
        if height > MAX_TREE_HEIGHT {
            return Err(ErrorKind::NestingTooDeep {
                position: self.tokens.offset(),
            });
        }
        Ok(height)
    }
}

#[cfg(test)]
mod test {
    use super::{Parser, MAX_NESTING_DEPTH, MAX_TREE_HEIGHT};
    use crate::{error::ErrorKind, syntax::Expression};

    fn parse(src: &str) -> Result<Expression, ErrorKind> {
        Parser::new(src)?.parse()
    }

    #[test]
    fn trailing_tokens() {
        assert_eq!(
            parse("1 2"),
            Err(ErrorKind::ParseError {
                position: 2,
                found: "`2`".into(),
                expected: vec!["operator", "end of input"],
            })
        );
    }

    #[test]
    fn premature_end() {
        assert_eq!(
            parse("1+"),
            Err(ErrorKind::ParseError {
                position: 2,
                found: "end of input".into(),
                expected: vec!["integer", "identifier", "`(`", "`-`"],
            })
        );
    }

    #[test]
    fn unclosed_group() {
        assert_eq!(
            parse("(1+2"),
            Err(ErrorKind::ParseError {
                position: 4,
                found: "end of input".into(),
                expected: vec!["operator", "`)`"],
            })
        );
    }

    #[test]
    fn lex_error_surfaces() {
        assert_eq!(parse("1 # 2"), Err(ErrorKind::LexError { position: 2 }));
    }

    #[test]
    fn deep_parentheses() {
        let ok = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
        assert_eq!(parse(&ok), Ok(Expression::Number(1)));

        let depth = MAX_NESTING_DEPTH + 1;
        let too_deep = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(
            parse(&too_deep),
            Err(ErrorKind::NestingTooDeep {
                position: MAX_NESTING_DEPTH
            })
        );
    }

    #[test]
    fn long_operator_chain() {
        let ok = format!("{}1", "1+".repeat(MAX_TREE_HEIGHT - 1));
        assert!(parse(&ok).is_ok());

        let too_tall = format!("{}1", "1+".repeat(MAX_TREE_HEIGHT));
        assert!(matches!(
            parse(&too_tall),
            Err(ErrorKind::NestingTooDeep { .. })
        ));
    }
}
