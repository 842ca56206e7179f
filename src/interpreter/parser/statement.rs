use crate::{
    ast::{Block, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// A trailing semicolon is consumed when present; semicolons are
    /// separators, never required.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cur.kind() {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a binding of the form `let <identifier> = <expression>`.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = self.current_identifier()?;

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Let { name, value })
    }

    /// Parses `return <expression>`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Return { value })
    }

    /// Parses an expression in statement position.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Ok(Statement::Expression { expr })
    }

    /// Parses a brace-delimited block. The current token is the opening
    /// brace on entry and the closing brace (or `EOF`, defensively, for
    /// unterminated input) on exit.
    ///
    /// Statements that fail to parse are recorded and dropped, exactly as
    /// at top level, so the rest of the block and the construct enclosing
    /// it still parse.
    pub(crate) fn parse_block(&mut self) -> Block {
        let mut statements = Vec::new();

        self.next_token();

        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(error) => self.record_error(error),
            }
            self.next_token();
        }

        Block { statements }
    }

    fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
