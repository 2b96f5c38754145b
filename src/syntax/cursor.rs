use super::token::{Spanned, Token};

/// Position in a [`TokenStream`] that can be returned to with [`TokenStream::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Mark(usize);

pub(crate) struct TokenStream<'src> {
    tokens: Vec<Spanned<'src>>,
    pos: usize,
    src_len: usize,
}

impl<'src> TokenStream<'src> {
    pub fn new(tokens: Vec<Spanned<'src>>, src_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            src_len,
        }
    }

    pub fn peek(&self) -> Option<Token<'src>> {
        self.tokens.get(self.pos).map(|spanned| spanned.token)
    }

    pub fn next(&mut self) -> Option<Token<'src>> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Byte offset of the next token, or the input length once exhausted.
    pub fn offset(&self) -> usize {
        self.tokens
            .get(self.pos)
            .map_or(self.src_len, |spanned| spanned.offset)
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    pub fn reset(&mut self, mark: Mark) {
        self.pos = mark.0;
    }
}
