use starbar_engine::paint::Color;

use crate::dsl::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    Str(String),
    Number(f32),
    Color(Color),
    // Punctuation
    Colon,
    Comma,
    LBrace,
    RBrace,
    // Sentinel
    Eof,
}

/// A token with the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub line: u32,
    pub col: u32,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<Spanned>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            let (line, col) = (self.line, self.col);
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(Spanned { token, line, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn error(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.line, self.col)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            let rest = &self.src[self.pos..];
            if rest.starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else if rest.starts_with("/*") {
                let err = self.error("unterminated block comment");
                self.advance();
                self.advance();
                loop {
                    if self.src[self.pos..].starts_with("*/") {
                        self.advance();
                        self.advance();
                        break;
                    }
                    if self.advance().is_none() {
                        return Err(err);
                    }
                }
            } else {
                return Ok(());
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            ':' => { self.advance(); Ok(Token::Colon) }
            ',' => { self.advance(); Ok(Token::Comma) }
            '{' => { self.advance(); Ok(Token::LBrace) }
            '}' => { self.advance(); Ok(Token::RBrace) }
            '"' => self.lex_string(),
            '#' => self.lex_color(),
            c if c.is_ascii_digit() || c == '-' || c == '.' => self.lex_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.lex_ident()),
            other => Err(self.error(format!("unexpected character {other:?}"))),
        }
    }

    fn lex_string(&mut self) -> Result<Token, ParseError> {
        let start = self.error("unterminated string literal");
        self.advance(); // opening `"`
        let mut s = String::new();
        loop {
            match self.advance() {
                None => return Err(start),
                Some('"') => break,
                Some('\\') => match self.advance() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some(c) => s.push(c),
                    None => return Err(start),
                },
                Some(c) => s.push(c),
            }
        }
        Ok(Token::Str(s))
    }

    fn lex_color(&mut self) -> Result<Token, ParseError> {
        let err_at = (self.line, self.col);
        self.advance(); // `#`
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
            self.advance();
        }
        let hex = &self.src[start..self.pos];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        let alpha = match hex.len() {
            6 => 255,
            8 => channel(6),
            n => {
                return Err(ParseError::new(
                    format!("color literal must be #rrggbb or #rrggbbaa, got {n} hex digits"),
                    err_at.0,
                    err_at.1,
                ));
            }
        };
        Ok(Token::Color(Color::from_srgb_u8(channel(0), channel(2), channel(4), alpha)))
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let err = self.error("invalid number");
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let s = &self.src[start..self.pos];
        s.parse::<f32>()
            .map(Token::Number)
            .map_err(|_| ParseError { message: format!("invalid number {s:?}"), ..err })
    }

    fn lex_ident(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        Token::Ident(self.src[start..self.pos].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn punctuation_and_literals() {
        assert_eq!(
            tokens("RatingBar { rating: 2.5, on_change: rated }"),
            vec![
                Token::Ident("RatingBar".into()),
                Token::LBrace,
                Token::Ident("rating".into()),
                Token::Colon,
                Token::Number(2.5),
                Token::Comma,
                Token::Ident("on_change".into()),
                Token::Colon,
                Token::Ident("rated".into()),
                Token::RBrace,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn colors_with_and_without_alpha() {
        assert_eq!(tokens("#ff0000")[0], Token::Color(Color::from_srgb_u8(255, 0, 0, 255)));
        assert_eq!(tokens("#00ff0080")[0], Token::Color(Color::from_srgb_u8(0, 255, 0, 128)));
    }

    #[test]
    fn bad_color_length() {
        let err = Lexer::new("\n  #fff").tokenize().unwrap_err();
        assert_eq!((err.line, err.col), (2, 3));
        assert!(err.message.contains("3 hex digits"));
    }

    #[test]
    fn negative_and_fractional_numbers() {
        assert_eq!(tokens("-4 .5")[..2], [Token::Number(-4.0), Token::Number(0.5)]);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            tokens("// line\n/* block\n comment */ x"),
            vec![Token::Ident("x".into()), Token::Eof]
        );
    }

    #[test]
    fn unterminated_inputs() {
        assert!(Lexer::new("\"abc").tokenize().is_err());
        assert!(Lexer::new("/* abc").tokenize().is_err());
    }

    #[test]
    fn positions_are_tracked() {
        let spans = Lexer::new("a\n  b").tokenize().unwrap();
        assert_eq!((spans[0].line, spans[0].col), (1, 1));
        assert_eq!((spans[1].line, spans[1].col), (2, 3));
    }

    #[test]
    fn unexpected_character() {
        let err = Lexer::new("a @").tokenize().unwrap_err();
        assert_eq!(err.col, 3);
    }
}
