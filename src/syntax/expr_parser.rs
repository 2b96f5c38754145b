use crate::error::{ErrorKind, PResult};

use super::{
    token::{Operator, Precedence, Token},
    ExprParser, Expression, Function, Node, Parser,
};

const TERM_START: &[&str] = &["integer", "identifier", "`(`", "`-`"];
const PRIMARY_START: &[&str] = &["integer", "identifier", "`(`"];

impl<'src> ExprParser<'src> for Parser<'src> {
    fn parse_expr(&mut self) -> PResult<Node<'src>> {
        self.parse_expr_with_precedence(1)
    }

    fn parse_expr_with_precedence(&mut self, min_prec: Precedence) -> PResult<Node<'src>> {
        let (mut lhs, mut height) = self.parse_term()?;

        while let Some(Token::Op(op)) = self.tokens.peek() {
            let prec = op.precedence();

            if prec < min_prec {
                break;
            }
            self.eat();

            // All operators are left-associative.
            let (rhs, rhs_height) = self.parse_expr_with_precedence(prec + 1)?;

            height = self.check_height(height.max(rhs_height) + 1)?;
            lhs = Expression::binary(lhs, op, rhs);
        }

        Ok((lhs, height))
    }

    // Negation binds to a single primary, so `-A^2` is `(-A)^2` and `--A` is rejected.
    fn parse_term(&mut self) -> PResult<Node<'src>> {
        if self.tokens.peek() != Some(Token::Op(Operator::Minus)) {
            return self.parse_primary(TERM_START);
        }
        self.eat();

        let (expr, height) = self.parse_primary(PRIMARY_START)?;
        let height = self.check_height(height + 1)?;
        Ok((Expression::Neg(Box::new(expr)), height))
    }

    fn parse_primary(&mut self, expected: &[&'static str]) -> PResult<Node<'src>> {
        if let Some(call) = self.try_parse_call_expr()? {
            return Ok(call);
        }

        match self.tokens.peek() {
            Some(Token::Number(v)) => {
                self.eat();
                Ok((Expression::Number(v), 1))
            }
            Some(Token::Id(id)) => {
                self.eat();
                Ok((Expression::VarRef(id), 1))
            }
            Some(Token::LParen) => {
                self.enter()?;
                self.eat();
                let group = self.parse_grouping_expr();
                self.leave();
                group
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn parse_grouping_expr(&mut self) -> PResult<Node<'src>> {
        let expr = self.parse_expr()?;
        self.expect(Token::RParen, &["operator", "`)`"])?;
        Ok(expr)
    }

    fn try_parse_call_expr(&mut self) -> PResult<Option<Node<'src>>> {
        let mark = self.tokens.mark();
        let position = self.tokens.offset();

        let id = match (self.tokens.next(), self.tokens.next()) {
            (Some(Token::Id(id)), Some(Token::LParen)) => id,
            _ => {
                self.tokens.reset(mark);
                return Ok(None);
            }
        };

        let func = Function::from_name(id).ok_or_else(|| ErrorKind::UnknownFunction {
            name: id.to_string(),
            position,
        })?;
        log::trace!("{position}: call to {func}");

        self.enter()?;
        let args = self.parse_call_args();
        self.leave();

        let (args, arg_height) = args?;
        let height = self.check_height(arg_height + 1)?;
        Ok(Some((Expression::Call { func, args }, height)))
    }
}

impl<'src> Parser<'src> {
    fn parse_call_args(&mut self) -> PResult<(Vec<Expression<'src>>, usize)> {
        let mut args = vec![];
        let mut height = 0;

        if self.tokens.peek() == Some(Token::RParen) {
            self.eat();
            return Ok((args, height));
        }

        loop {
            let (arg, arg_height) = self.parse_expr()?;
            args.push(arg);
            height = height.max(arg_height);

            match self.tokens.peek() {
                Some(Token::RParen) => break,
                Some(Token::Comma) => self.eat(),
                _ => return Err(self.unexpected(&["operator", "`,`", "`)`"])),
            }
        }
        self.eat();

        Ok((args, height))
    }
}
