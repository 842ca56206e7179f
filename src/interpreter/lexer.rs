use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,

    /// Identifier tokens; variable or function names such as `x` or `add`.
    /// `!` and `?` are identifier characters past the first, so names like
    /// `empty?` are a single identifier.
    #[regex(r"[A-Za-z_][A-Za-z_!?]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// Integer literal tokens, such as `42`, `0x2a` or `0o52`.
    ///
    /// The raw slice is kept; the parser performs base auto-detection and
    /// reports unparseable spellings.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    #[regex(r"0[xX][0-9A-Fa-f]*", |lex| lex.slice().to_string())]
    #[regex(r"0[oO][0-7]*", |lex| lex.slice().to_string())]
    Int(String),
    /// Float literal tokens, such as `3.14`. Recognized by the lexer but
    /// rejected by the parser, which keeps the value domain integer-only.
    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().to_string())]
    Float(String),

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,

    /// A byte sequence the lexer does not recognize. Carried through the
    /// token stream so the parser reports it instead of halting lexing.
    Illegal(String),
    /// End of input. Produced forever once the source is exhausted.
    Eof,
}

/// The payload-free projection of a [`Token`], used for lookahead
/// comparisons and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Illegal,
    Eof,
    Ident,
    Int,
    Float,
    Assign,
    Plus,
    Minus,
    Bang,
    Asterisk,
    Slash,
    Lt,
    Gt,
    Eq,
    NotEq,
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Token {
    /// Returns the kind of this token, discarding any payload.
    ///
    /// # Example
    /// ```
    /// use moss::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Ident("x".to_string()).kind(), TokenKind::Ident);
    /// assert_eq!(Token::Plus.kind(), TokenKind::Plus);
    /// ```
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Illegal(_) => TokenKind::Illegal,
            Self::Eof => TokenKind::Eof,
            Self::Ident(_) => TokenKind::Ident,
            Self::Int(_) => TokenKind::Int,
            Self::Float(_) => TokenKind::Float,
            Self::Assign => TokenKind::Assign,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Bang => TokenKind::Bang,
            Self::Asterisk => TokenKind::Asterisk,
            Self::Slash => TokenKind::Slash,
            Self::Lt => TokenKind::Lt,
            Self::Gt => TokenKind::Gt,
            Self::Eq => TokenKind::Eq,
            Self::NotEq => TokenKind::NotEq,
            Self::Comma => TokenKind::Comma,
            Self::Semicolon => TokenKind::Semicolon,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::LBrace => TokenKind::LBrace,
            Self::RBrace => TokenKind::RBrace,
            Self::Function => TokenKind::Function,
            Self::Let => TokenKind::Let,
            Self::True => TokenKind::True,
            Self::False => TokenKind::False,
            Self::If => TokenKind::If,
            Self::Else => TokenKind::Else,
            Self::Return => TokenKind::Return,
            Self::Ignored => unreachable!("whitespace is skipped during lexing"),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        };
        write!(f, "{name}")
    }
}

/// A pull-based lexer over a source string.
///
/// Each call to [`Lexer::next_token`] yields the next token; once the input
/// is exhausted every further call yields [`Token::Eof`]. Input the lexer
/// does not recognize is surfaced as [`Token::Illegal`] rather than
/// stopping the stream, so the parser decides how to report it.
///
/// # Example
/// ```
/// use moss::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// assert_eq!(lexer.next_token(), Token::Let);
/// assert_eq!(lexer.next_token(), Token::Ident("five".to_string()));
/// assert_eq!(lexer.next_token(), Token::Assign);
/// assert_eq!(lexer.next_token(), Token::Int("5".to_string()));
/// assert_eq!(lexer.next_token(), Token::Semicolon);
/// assert_eq!(lexer.next_token(), Token::Eof);
/// assert_eq!(lexer.next_token(), Token::Eof);
/// ```
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner: Token::lexer(source), }
    }

    /// Returns the next token, advancing the cursor.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Illegal(self.inner.slice().to_string()),
            None => Token::Eof,
        }
    }
}
