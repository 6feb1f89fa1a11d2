use crate::dsl::ast::{DslDocument, Node, Prop, Value};
use crate::dsl::error::ParseError;
use crate::dsl::lexer::{Lexer, Spanned, Token};

// ── Parser ────────────────────────────────────────────────────────────────

/// Recursive-descent parser over a spanned token stream.
///
/// Grammar:
///
/// ```text
/// document := node EOF
/// node     := IDENT ( "{" prop* "}" )?
/// prop     := IDENT ":" value ","?
/// value    := STR | NUMBER | COLOR | IDENT
/// ```
pub struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map_or(&Token::Eof, |s| &s.token)
    }

    fn peek_second(&self) -> &Token {
        self.tokens.get(self.pos + 1).map_or(&Token::Eof, |s| &s.token)
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    /// Error positioned at the next unconsumed token.
    fn error(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self
            .tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or((1, 1), |s| (s.line, s.col));
        ParseError::new(msg, line, col)
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ParseError> {
        if self.peek() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!("expected {expected:?}, got {:?}", self.peek())))
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<DslDocument, ParseError> {
        let root = self.parse_node()?;
        if self.peek() != &Token::Eof {
            return Err(self.error(format!("unexpected {:?} after root widget", self.peek())));
        }
        Ok(DslDocument { root })
    }

    // ── Node ──────────────────────────────────────────────────────────────

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        let widget = match self.peek() {
            Token::Ident(s) => s.clone(),
            tok => return Err(self.error(format!("expected widget name, got {tok:?}"))),
        };
        self.advance();

        let mut props = Vec::new();
        if self.peek() == &Token::LBrace {
            self.advance();
            loop {
                match (self.peek(), self.peek_second()) {
                    (Token::RBrace, _) => {
                        self.advance();
                        break;
                    }
                    (Token::Eof, _) => return Err(self.error(format!("unclosed `{{` block in {widget}"))),
                    (Token::Ident(_), Token::Colon) => props.push(self.parse_prop()?),
                    (tok, _) => {
                        return Err(self.error(format!("expected `key: value` in {widget}, got {tok:?}")));
                    }
                }
            }
        }

        Ok(Node { widget, props })
    }

    fn parse_prop(&mut self) -> Result<Prop, ParseError> {
        let Token::Ident(key) = self.advance() else {
            return Err(self.error("expected property name"));
        };
        self.expect(&Token::Colon)?;
        let value = self.parse_value()?;
        if self.peek() == &Token::Comma {
            self.advance();
        }
        Ok(Prop { key, value })
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let value = match self.peek() {
            Token::Str(s) => Value::Str(s.clone()),
            Token::Number(n) => Value::Number(*n),
            Token::Color(c) => Value::Color(*c),
            Token::Ident(s) => Value::Ident(s.clone()),
            tok => return Err(self.error(format!("expected value, got {tok:?}"))),
        };
        self.advance();
        Ok(value)
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a `.mkml` source string into a [`DslDocument`].
pub fn parse_str(src: &str) -> Result<DslDocument, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
