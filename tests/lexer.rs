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

use cqlparser::{Keyword, Lexer, Token, TokenType};

macro_rules! test_tokenize {
    ($input:literal, $expected_token:expr) => {
        let input = $input;
        let mut lexer = Lexer::new(input);
        let (s, token) = lexer.next().unwrap();
        assert_eq!(s, input);
        assert_eq!(token, Token::new($expected_token, 0, input.len()));
    };
}

#[test]
fn tokenize_string_literal() {
    test_tokenize!("'test'", TokenType::StringLiteral);
    test_tokenize!("'te''st'", TokenType::StringLiteral);
    // Unclosed string literal.
    test_tokenize!("'test", TokenType::Error);
}

#[test]
fn tokenize_ident() {
    test_tokenize!("c", TokenType::Identifier);
    test_tokenize!("col_1", TokenType::Identifier);
    test_tokenize!("_leading_underscore", TokenType::Identifier);
    test_tokenize!("\"Quoted ident\"", TokenType::QuotedName);
    // Empty quoted identifier.
    test_tokenize!("\"\"", TokenType::QuotedName);
    // Escaped double quote.
    test_tokenize!("\"escaped \"\" quotes \"\"\"", TokenType::QuotedName);
    // Unclosed quoted identifier.
    test_tokenize!("\"Quoted ident", TokenType::Error);
}

#[test]
fn tokenize_reserved_keywords_case_insensitively() {
    for (text, kw) in [
        ("SELECT", Keyword::Select),
        ("select", Keyword::Select),
        ("Select", Keyword::Select),
        ("FROM", Keyword::From),
        ("where", Keyword::Where),
        ("Insert", Keyword::Insert),
    ] {
        test_tokenize!(text, TokenType::Keyword(kw));
    }
}

#[test]
fn tokenize_numbers() {
    test_tokenize!("0", TokenType::Integer);
    test_tokenize!("100", TokenType::Integer);
    // Leading zeros are permitted (spec §4.1).
    test_tokenize!("007", TokenType::Integer);
    test_tokenize!("100.0", TokenType::Float);
    test_tokenize!("100e10", TokenType::Float);
    test_tokenize!("100E+1", TokenType::Float);
    test_tokenize!("100E-1", TokenType::Float);
    test_tokenize!("100.0e+1", TokenType::Float);
    // The alternate no-dot exponent form (spec §9 open question: accepted).
    test_tokenize!("1e10", TokenType::Float);
}

#[test]
fn tokenize_boolean() {
    test_tokenize!("true", TokenType::Boolean);
    test_tokenize!("TRUE", TokenType::Boolean);
    test_tokenize!("False", TokenType::Boolean);
}

#[test]
fn tokenize_uuid() {
    test_tokenize!("cbad2f6e-3fba-a2b1-bd0a-bd31bb0d0b40", TokenType::UUID);
    test_tokenize!("CBAD2F6E-3FBA-A2B1-BD0A-BD31BB0D0B40", TokenType::UUID);
    test_tokenize!("99b914b5-1382-4d84-a4b4-f244f40b833c", TokenType::UUID);
    // Incomplete UUID groups fall back to Error since they are also not
    // valid identifiers (digits can't start an identifier).
    test_tokenize!("cbad2f6e-3fba", TokenType::Error);
}

#[test]
fn tokenize_punctuation() {
    test_tokenize!("*", TokenType::Asterisk);
    test_tokenize!("=", TokenType::Equal);
    test_tokenize!(">", TokenType::Gt);
    test_tokenize!(">=", TokenType::Gte);
    test_tokenize!("<", TokenType::Lt);
    test_tokenize!("<=", TokenType::Lte);
    test_tokenize!("-", TokenType::Minus);
    test_tokenize!(".", TokenType::Dot);
    test_tokenize!(";", TokenType::SemiColon);
    test_tokenize!(":", TokenType::Colon);
    test_tokenize!(",", TokenType::Comma);
    test_tokenize!("(", TokenType::LParen);
    test_tokenize!(")", TokenType::RParen);
    test_tokenize!("[", TokenType::LBracket);
    test_tokenize!("]", TokenType::RBracket);
    test_tokenize!("?", TokenType::Qmark);
    test_tokenize!("{", TokenType::LBrace);
    test_tokenize!("}", TokenType::RBrace);
}

#[test]
fn tokenize_whitespace_is_its_own_token() {
    let mut lexer = Lexer::new("  \t\n SELECT");
    let (text, token) = lexer.next().unwrap();
    assert_eq!(text, "  \t\n ");
    assert!(token.is_type(&TokenType::Whitespace));
    let (text, token) = lexer.next().unwrap();
    assert_eq!(text, "SELECT");
    assert!(token.is_type(&TokenType::Keyword(Keyword::Select)));
}

#[test]
fn offsets_track_byte_position_through_the_stream() {
    let lexer = Lexer::new("a = 1");
    let tokens: Vec<_> = lexer.collect();
    // "a", " ", "=", " ", "1"
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[2].1.offset, 2);
    assert_eq!(tokens[4].1.offset, 4);
}

#[test]
fn full_select_statement_tokenizes_without_error_tokens() {
    let lexer = Lexer::new(
        "SELECT * FROM table WHERE key = 'tacos' AND k2 >= 0 ORDER BY sort_key DESC LIMIT 10",
    );
    for (_, token) in lexer {
        assert_ne!(token.token_type, TokenType::Error);
    }
}
