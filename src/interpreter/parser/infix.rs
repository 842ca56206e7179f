use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a binary operator application onto an already parsed left
    /// operand. The right operand is parsed at the operator's own
    /// precedence, which makes every binary operator left-associative:
    /// `a + b + c` groups as `((a + b) + c)`.
    pub(crate) fn parse_binary_expression(&mut self,
                                          left: Expr,
                                          op: BinaryOperator)
                                          -> ParseResult<Expr> {
        let precedence = Precedence::of(self.cur.kind());
        self.next_token();

        let right = self.parse_expression(precedence)?;

        Ok(Expr::BinaryOp { left: Box::new(left),
                            op,
                            right: Box::new(right), })
    }

    /// Parses a call expression. Registered at `Call` precedence for the
    /// `(` token, so a call binds tighter than any operator and the callee
    /// may be any expression, including a function literal.
    pub(crate) fn parse_call_expression(&mut self, callee: Expr) -> ParseResult<Expr> {
        let arguments = self.parse_call_arguments()?;

        Ok(Expr::Call { callee: Box::new(callee),
                        arguments })
    }

    /// Parses a comma-separated argument list up to the closing `)`. Each
    /// argument is a full expression parsed at `Lowest`.
    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut arguments = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Ok(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(TokenKind::RParen)?;

        Ok(arguments)
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators; the `(` of a
/// call expression is handled separately.
#[must_use]
pub(crate) const fn infix_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Lt => Some(BinaryOperator::Less),
        TokenKind::Gt => Some(BinaryOperator::Greater),
        TokenKind::Eq => Some(BinaryOperator::Equal),
        TokenKind::NotEq => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
