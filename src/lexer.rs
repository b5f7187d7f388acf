// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::iter::Iterator;
use std::iter::Peekable;
use std::str::Chars;

use crate::keyword::Keyword;
use crate::literal::*;

/// CQL Tokens
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// Type of this token, as defined in `TokenType`.
    pub token_type: TokenType,
    /// Position in bytes in original CQL from the beginning.
    pub offset: usize,
    /// Length of token in bytes.
    pub length: usize,
}

impl Token {
    /// Create new Token with given type, offset and length.
    ///
    /// `offset` is a position in bytes in original CQL from the beginning.
    /// `length` is a length of token in bytes.
    pub fn new(token_type: TokenType, offset: usize, length: usize) -> Self {
        Token {
            token_type,
            offset,
            length,
        }
    }

    /// return true if this token's type is given `token_type`
    pub fn is_type(&self, token_type: &TokenType) -> bool {
        &self.token_type == token_type
    }
}

/// Token types. Only the punctuation and literal classes the CQL3 grammar
/// in spec §4 needs; comments are not recognized (spec §4.1: "Comments are
/// not recognized").
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenType {
    /// A reserved keyword, matched case-insensitively (`crate::keyword::Keyword`).
    Keyword(Keyword),

    /// `'...'`, doubled `''` decodes to a single `'`. Not to be confused
    /// with a double-quoted `QuotedName`.
    StringLiteral,

    /// `[a-zA-Z_][a-zA-Z0-9_]*`, not a reserved keyword.
    Identifier,

    /// `"..."`, doubled `""` decodes to a single `"`, case preserved.
    QuotedName,

    /// `-?[0-9]+`
    Integer,
    /// `-?[0-9]+ '.' [0-9]* ([eE][+-]?[0-9]+)?` or `[0-9]+[eE][+-]?[0-9]+`.
    Float,
    /// `true` / `false`, case-insensitive.
    Boolean,
    /// `hex{8}-hex{4}-hex{4}-hex{4}-hex{12}`, case-insensitive.
    UUID,
    /// `(' ' | '\t' | '\n' | '\r')+`
    Whitespace,
    /// '='
    Equal,
    /// '>'
    Gt,
    /// '>='
    Gte,
    /// '<'
    Lt,
    /// '<='
    Lte,
    /// '-' (also the leading sign of a negative numeric literal)
    Minus,
    /// '*'
    Asterisk,
    /// '.'
    Dot,
    /// ';'
    SemiColon,
    /// ':', the map-literal key/value separator.
    Colon,
    /// ','
    Comma,
    /// Left parenthesis `(`
    LParen,
    /// Right parenthesis `)`
    RParen,
    /// Left bracket `[`
    LBracket,
    /// Right bracket `]`
    RBracket,
    /// Question mark `?`, the bind placeholder.
    Qmark,
    /// Left brace `{`
    LBrace,
    /// Right brace `}`
    RBrace,
    /// Error token: the lexer could not classify or terminate this run.
    Error,
}

/// CQL Lexer
///
/// Tokenizes CQL3 source. Implements `Iterator`, producing `(text, Token)`
/// pairs over the borrowed input; whitespace is emitted as its own token
/// rather than skipped here, mirroring how a hand-rolled recursive-descent
/// grammar typically separates scanning from skipping (the `Parser` skips
/// `Whitespace` tokens before matching a terminal, per spec §4.1).
#[derive(Debug)]
pub struct Lexer<'a> {
    original: &'a str,
    cql: Peekable<Chars<'a>>,
    token_start: usize,
    token_end: usize,
}

impl<'a> Lexer<'a> {
    /// Create new lexer for given CQL string.
    pub fn new(cql: &'a str) -> Self {
        Lexer {
            original: cql,
            cql: cql.chars().peekable(),
            token_start: 0,
            token_end: 0,
        }
    }

    fn consume_and_create_token(&mut self, token_type: TokenType) -> (&'a str, Token) {
        self.advance();
        self.create_token(token_type)
    }

    fn create_token(&self, token_type: TokenType) -> (&'a str, Token) {
        (
            self.original
                .get(self.token_start..self.token_end)
                .unwrap_or_default(),
            Token::new(
                token_type,
                self.token_start,
                self.token_end - self.token_start,
            ),
        )
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.cql.next();
        if let Some(ch) = c {
            self.token_end += ch.len_utf8();
        }
        c
    }

    // String literal: '...', doubled '' is an escaped quote.
    fn string_literal(&mut self) -> (&'a str, Token) {
        self.advance();
        let mut in_string = true;
        while let Some(c) = self.advance() {
            if c == '\'' {
                if let Some(&n) = self.cql.peek() {
                    if n != '\'' {
                        in_string = false;
                        break;
                    } else {
                        self.advance();
                    }
                } else {
                    in_string = false;
                    break;
                }
            }
        }
        let token_type = if in_string {
            TokenType::Error
        } else {
            TokenType::StringLiteral
        };
        self.create_token(token_type)
    }

    // Catch all for a token that begins with an ASCII letter or underscore.
    //
    // Can be a UUID, a reserved keyword, a boolean constant, or a plain identifier.
    fn parse_alphabet(&mut self) -> (&'a str, Token) {
        let mut uuid = UUIDParser::new();
        let mut uuid_accepting = true;
        let mut uuid_len = 0usize;
        let mut ident_accepting = true;
        let mut ident_len = 0usize;

        while let Some(&c) = self.cql.peek() {
            if uuid_accepting {
                uuid_accepting = uuid.accept(&c);
                if uuid_accepting {
                    uuid_len += c.len_utf8();
                }
            }
            if ident_accepting {
                ident_accepting = matches!(c, '0'..='9' | 'A'..='Z' | 'a'..='z' | '_');
                if ident_accepting {
                    ident_len += c.len_utf8();
                }
            }
            if !uuid_accepting && !ident_accepting {
                break;
            }
            self.advance();
        }

        // Both scans ran in lockstep, so whichever kept accepting longest
        // consumed exactly `self.token_end - self.token_start` bytes; only a
        // scanner tied for that length is eligible to win (spec §4.1: UUID
        // is tried before identifier).
        let scanned = self.token_end - self.token_start;
        if uuid.is_valid() && uuid_len == scanned {
            return self.create_token(TokenType::UUID);
        }
        if ident_len != scanned {
            return self.create_token(TokenType::Error);
        }

        let token_type = match self
            .original
            .get(self.token_start..self.token_end)
            .map(str::to_ascii_uppercase)
        {
            Some(s) => match s.as_str() {
                "TRUE" | "FALSE" => TokenType::Boolean,
                _ => Keyword::from_str(&s)
                    .map(TokenType::Keyword)
                    .unwrap_or(TokenType::Identifier),
            },
            None => TokenType::Error,
        };
        self.create_token(token_type)
    }

    // Quoted name: "...", doubled "" is an escaped double quote.
    fn quoted_identifier(&mut self) -> (&'a str, Token) {
        self.advance();
        let mut in_quote = true;
        while let Some(c) = self.advance() {
            if c == '"' {
                match self.cql.peek() {
                    Some('"') => {
                        self.advance();
                    }
                    _ => {
                        in_quote = false;
                        break;
                    }
                }
            }
        }
        let token_type = if in_quote {
            TokenType::Error
        } else {
            TokenType::QuotedName
        };
        self.create_token(token_type)
    }

    // Catch all for a token that begins with an ASCII digit: integer, float, or UUID.
    fn parse_digit(&mut self) -> (&'a str, Token) {
        let mut uuid = UUIDParser::new();
        let mut uuid_accepting = true;
        let mut uuid_len = 0usize;
        let mut numeric = NumberParser::new();
        let mut numeric_accepting = true;
        let mut numeric_len = 0usize;

        while let Some(&c) = self.cql.peek() {
            if uuid_accepting {
                uuid_accepting = uuid.accept(&c);
                if uuid_accepting {
                    uuid_len += c.len_utf8();
                }
            }
            if numeric_accepting {
                numeric_accepting = numeric.accept(&c);
                if numeric_accepting {
                    numeric_len += c.len_utf8();
                }
            }
            if !uuid_accepting && !numeric_accepting {
                break;
            }
            self.advance();
        }

        // Same tie-break discipline as `parse_alphabet`: only the scanner
        // that consumed the full run is eligible.
        let scanned = self.token_end - self.token_start;
        if uuid.is_valid() && uuid_len == scanned {
            return self.create_token(TokenType::UUID);
        }
        if numeric.is_valid() && numeric_len == scanned {
            return if numeric.is_float() {
                self.create_token(TokenType::Float)
            } else {
                self.create_token(TokenType::Integer)
            };
        }
        self.create_token(TokenType::Error)
    }

    // Whitespace: (' ' | '\t' | '\n' | '\r')+
    fn whitespace(&mut self) -> (&'a str, Token) {
        while let Some(&c) = self.cql.peek() {
            match c {
                ' ' | '\t' | '\n' | '\r' => {
                    self.advance();
                }
                _ => break,
            }
        }
        self.create_token(TokenType::Whitespace)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (&'a str, Token);

    fn next(&mut self) -> Option<(&'a str, Token)> {
        self.token_start = self.token_end;
        let c = *self.cql.peek()?;
        Some(match c {
            ' ' | '\t' | '\n' | '\r' => self.whitespace(),
            '*' => self.consume_and_create_token(TokenType::Asterisk),
            '=' => self.consume_and_create_token(TokenType::Equal),
            ';' => self.consume_and_create_token(TokenType::SemiColon),
            ':' => self.consume_and_create_token(TokenType::Colon),
            ',' => self.consume_and_create_token(TokenType::Comma),
            '(' => self.consume_and_create_token(TokenType::LParen),
            ')' => self.consume_and_create_token(TokenType::RParen),
            '[' => self.consume_and_create_token(TokenType::LBracket),
            ']' => self.consume_and_create_token(TokenType::RBracket),
            '{' => self.consume_and_create_token(TokenType::LBrace),
            '}' => self.consume_and_create_token(TokenType::RBrace),
            '?' => self.consume_and_create_token(TokenType::Qmark),
            '.' => self.consume_and_create_token(TokenType::Dot),
            '>' => {
                self.advance();
                match self.cql.peek() {
                    Some('=') => {
                        self.advance();
                        self.create_token(TokenType::Gte)
                    }
                    _ => self.create_token(TokenType::Gt),
                }
            }
            '<' => {
                self.advance();
                match self.cql.peek() {
                    Some('=') => {
                        self.advance();
                        self.create_token(TokenType::Lte)
                    }
                    _ => self.create_token(TokenType::Lt),
                }
            }
            '-' => {
                self.advance();
                self.create_token(TokenType::Minus)
            }
            '\'' => self.string_literal(),
            '"' => self.quoted_identifier(),
            c if c.is_ascii_digit() => self.parse_digit(),
            c if c.is_ascii_alphabetic() || c == '_' => self.parse_alphabet(),
            _ => self.consume_and_create_token(TokenType::Error),
        })
    }
}
