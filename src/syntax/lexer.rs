use std::{iter::Peekable, str::CharIndices};

use crate::error::{ErrorKind, PResult};

use super::token::{Operator, Spanned, Token};

pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    failed: bool,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = PResult<Spanned<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let (off, c) = loop {
            match self.chars.next()? {
                (_, c) if c.is_whitespace() => continue,
                next => break next,
            }
        };
        let token = match c {
            '+' => Token::Op(Operator::Plus),
            '-' => Token::Op(Operator::Minus),
            '*' => Token::Op(Operator::Mul),
            '/' => Token::Op(Operator::Div),
            '^' => Token::Op(Operator::Pow),
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            c if c.is_ascii_digit() => match self.read_number(off) {
                Ok(token) => token,
                Err(why) => return Some(self.fail(why)),
            },
            c if c.is_ascii_alphabetic() => self.read_id(off),
            _ => return Some(self.fail(ErrorKind::LexError { position: off })),
        };

        log::trace!("{off}: {token:?}");
        Some(Ok(Spanned { token, offset: off }))
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            failed: false,
        }
    }

    /// Lexes the whole input, stopping at the first error.
    pub fn tokenize(src: &'src str) -> PResult<Vec<Spanned<'src>>> {
        Self::new(src).collect()
    }

    fn fail(&mut self, why: ErrorKind) -> PResult<Spanned<'src>> {
        self.failed = true;
        Err(why)
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn read_number(&mut self, from_off: usize) -> PResult<Token<'src>> {
        let s = self.slice_until(from_off, |c| !c.is_ascii_digit());
        s.parse::<i64>()
            .map(Token::Number)
            .map_err(|_| ErrorKind::LiteralOutOfRange { position: from_off })
    }

    fn read_id(&mut self, from_off: usize) -> Token<'src> {
        Token::Id(self.slice_until(from_off, |c| !c.is_ascii_alphabetic()))
    }
}

#[cfg(test)]
mod test {
    use super::{
        super::token::{Operator, Token},
        Lexer,
    };
    use crate::error::ErrorKind;

    fn tokenize_str(s: &str) -> Vec<Token> {
        Lexer::tokenize(s)
            .unwrap()
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn read_number() {
        let tokens = tokenize_str("48 7 1024 \n9\n8");
        let expected = &[
            Token::Number(48),
            Token::Number(7),
            Token::Number(1024),
            Token::Number(9),
            Token::Number(8),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn read_call() {
        let tokens = tokenize_str("SUM(A,12)^-b");
        let expected = &[
            Token::Id("SUM"),
            Token::LParen,
            Token::Id("A"),
            Token::Comma,
            Token::Number(12),
            Token::RParen,
            Token::Op(Operator::Pow),
            Token::Op(Operator::Minus),
            Token::Id("b"),
        ];

        assert_eq!(tokens, expected);
    }

    #[test]
    fn digits_split_identifiers() {
        let tokens = tokenize_str("ab12cd");
        assert_eq!(tokens, &[Token::Id("ab"), Token::Number(12), Token::Id("cd")]);
    }

    #[test]
    fn offsets() {
        let offsets: Vec<usize> = Lexer::tokenize("  12 +\tX")
            .unwrap()
            .into_iter()
            .map(|spanned| spanned.offset)
            .collect();
        assert_eq!(offsets, &[2, 5, 7]);
    }

    #[test]
    fn invalid_char() {
        assert_eq!(
            Lexer::tokenize("1 + $"),
            Err(ErrorKind::LexError { position: 4 })
        );
        assert_eq!(
            Lexer::tokenize("a_b"),
            Err(ErrorKind::LexError { position: 1 })
        );
        assert_eq!(
            Lexer::tokenize("é"),
            Err(ErrorKind::LexError { position: 0 })
        );
    }

    #[test]
    fn stops_after_error() {
        let mut lexer = Lexer::new("$1");
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn literal_out_of_range() {
        assert_eq!(
            Lexer::tokenize("1 + 99999999999999999999"),
            Err(ErrorKind::LiteralOutOfRange { position: 4 })
        );
    }
}
