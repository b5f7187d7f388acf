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

//! Recursive-descent parser over `crate::lexer::Lexer`.
//!
//! `parse(input, rule)` is the library entry point; `Parser` itself exposes
//! one public method per grammar rule for callers that already know which
//! rule they want.
//!
//! ```
//! use cqlparser::{parse, Rule};
//!
//! let stmt = parse("SELECT * FROM table", Rule::Select).unwrap();
//! ```

use crate::ast::{
    AllKeyspaces, AllPermissions, AllowFiltering, Assignment, Batch, BatchChild, Column,
    CollectionItem, ColumnOrSubscript, CreateIndex, CreateKeyspace, CreateUser, AlterKeyspace,
    AlterUser, Delete, Drop, DropTarget, Function, Grant, Index, Insert, Keyspace, Limit, List,
    ListTarget, Name, OrderBy, Permission, PermissionSet, Properties, Property, Reference,
    Relation, RelationLhs, RelationRhs, Resource, Revoke, Select, Selector, SelectorExpr,
    Selectors, Statement, Table, Term, Timestamp, Ttl, Truncate, Update, Use, User, Users,
};
use crate::ast::Token as TokenFn;
use crate::error::ParseError;
use crate::keyword::{a_keyspace, a_table, Keyword};
use crate::lexer::{Lexer, Token, TokenType};

/// The grammar rule to parse `input` against. `Statement` dispatches on the
/// leading keyword, the way `Parser::statement` does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Select,
    Insert,
    Update,
    Delete,
    Truncate,
    Use,
    Batch,
    CreateKeyspace,
    AlterKeyspace,
    Drop,
    CreateIndex,
    CreateUser,
    AlterUser,
    Grant,
    Revoke,
    ListUsers,
    Statement,
}

/// Parses `input` against `rule`, requiring the rule to consume the entire
/// input (after whitespace). The sole entry point for callers that don't
/// need `Parser`'s finer-grained, per-rule methods.
pub fn parse(input: &str, rule: Rule) -> Result<Statement, ParseError> {
    log::trace!("parsing {} byte(s) against rule {:?}", input.len(), rule);
    let mut parser = Parser::new(input);
    let stmt = parser.parse_rule(rule)?;
    parser.expect_end()?;
    Ok(stmt)
}

fn decode_string(raw: &str) -> String {
    raw[1..raw.len() - 1].replace("''", "'")
}

fn decode_quoted(raw: &str) -> String {
    raw[1..raw.len() - 1].replace("\"\"", "\"")
}

fn parse_int_token(text: &str, tok: &Token) -> Result<i64, ParseError> {
    text.parse()
        .map_err(|_| ParseError::new(tok.offset, "integer literal", text.to_string()))
}

fn parse_float_token(text: &str, tok: &Token) -> Result<f64, ParseError> {
    text.parse()
        .map_err(|_| ParseError::new(tok.offset, "float literal", text.to_string()))
}

/// CQL3 parser, driven token-by-token over a pre-tokenized, whitespace-free
/// stream (the lexer's `Whitespace` tokens are dropped up front; every other
/// token, including an unrecognized `Error` token, is kept so the parser can
/// report it at the right position).
pub struct Parser<'a> {
    input: &'a str,
    tokens: Vec<(&'a str, Token)>,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        let tokens: Vec<(&'a str, Token)> = Lexer::new(input)
            .filter(|(_, tok)| !tok.is_type(&TokenType::Whitespace))
            .collect();
        Parser {
            input,
            tokens,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&(&'a str, Token)> {
        self.tokens.get(self.pos)
    }

    fn peek_type(&self) -> Option<&TokenType> {
        self.peek().map(|(_, tok)| &tok.token_type)
    }

    fn peek_nth_type(&self, n: usize) -> Option<&TokenType> {
        self.tokens
            .get(self.pos + n)
            .map(|(_, tok)| &tok.token_type)
    }

    fn advance(&mut self) -> Option<(&'a str, Token)> {
        let item = self.tokens.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn expect(
        &mut self,
        token_type: TokenType,
        expected: &str,
    ) -> Result<(&'a str, Token), ParseError> {
        match self.peek_type() {
            Some(t) if *t == token_type => Ok(self.advance().unwrap()),
            _ => Err(self.error(expected)),
        }
    }

    fn expect_keyword(&mut self, kw: Keyword) -> Result<(), ParseError> {
        match self.peek_type() {
            Some(TokenType::Keyword(k)) if *k == kw => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error(kw.text())),
        }
    }

    fn expect_a_keyspace(&mut self) -> Result<(), ParseError> {
        match self.peek_type() {
            Some(TokenType::Keyword(kw)) if a_keyspace(*kw).is_some() => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error("KEYSPACE or SCHEMA")),
        }
    }

    fn error(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some((text, tok)) if tok.token_type == TokenType::Error => {
                ParseError::new(tok.offset, expected, format!("invalid token '{text}'"))
            }
            Some((text, tok)) => ParseError::new(tok.offset, expected, format!("'{text}'")),
            None => ParseError::new(self.input.len(), expected, "<eof>"),
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        if self.pos == self.tokens.len() {
            Ok(())
        } else {
            Err(self.error("end of input"))
        }
    }

    fn parse_rule(&mut self, rule: Rule) -> Result<Statement, ParseError> {
        match rule {
            Rule::Select => Ok(Statement::Select(self.select()?)),
            Rule::Insert => Ok(Statement::Insert(self.insert()?)),
            Rule::Update => Ok(Statement::Update(self.update()?)),
            Rule::Delete => Ok(Statement::Delete(self.delete()?)),
            Rule::Truncate => Ok(Statement::Truncate(self.truncate()?)),
            Rule::Use => Ok(Statement::Use(self.use_statement()?)),
            Rule::Batch => Ok(Statement::Batch(self.batch()?)),
            Rule::CreateKeyspace => Ok(Statement::CreateKeyspace(self.create_keyspace()?)),
            Rule::AlterKeyspace => Ok(Statement::AlterKeyspace(self.alter_keyspace()?)),
            Rule::Drop => Ok(Statement::Drop(self.drop_statement()?)),
            Rule::CreateIndex => Ok(Statement::CreateIndex(self.create_index()?)),
            Rule::CreateUser => Ok(Statement::CreateUser(self.create_user()?)),
            Rule::AlterUser => Ok(Statement::AlterUser(self.alter_user()?)),
            Rule::Grant => Ok(Statement::Grant(self.grant()?)),
            Rule::Revoke => Ok(Statement::Revoke(self.revoke()?)),
            Rule::ListUsers => Ok(Statement::List(self.list_users()?)),
            Rule::Statement => self.statement(),
        }
    }

    /// Dispatches on the leading keyword, the way a one-statement-at-a-time
    /// CQL shell would.
    pub fn statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek_type() {
            Some(TokenType::Keyword(Keyword::Select)) => Ok(Statement::Select(self.select()?)),
            Some(TokenType::Keyword(Keyword::Insert)) => Ok(Statement::Insert(self.insert()?)),
            Some(TokenType::Keyword(Keyword::Update)) => Ok(Statement::Update(self.update()?)),
            Some(TokenType::Keyword(Keyword::Delete)) => Ok(Statement::Delete(self.delete()?)),
            Some(TokenType::Keyword(Keyword::Truncate)) => {
                Ok(Statement::Truncate(self.truncate()?))
            }
            Some(TokenType::Keyword(Keyword::Use)) => Ok(Statement::Use(self.use_statement()?)),
            Some(TokenType::Keyword(Keyword::Begin)) => Ok(Statement::Batch(self.batch()?)),
            Some(TokenType::Keyword(Keyword::Create)) => self.create_statement(),
            Some(TokenType::Keyword(Keyword::Alter)) => self.alter_statement(),
            Some(TokenType::Keyword(Keyword::Drop)) => Ok(Statement::Drop(self.drop_statement()?)),
            Some(TokenType::Keyword(Keyword::Grant)) => Ok(Statement::Grant(self.grant()?)),
            Some(TokenType::Keyword(Keyword::Revoke)) => Ok(Statement::Revoke(self.revoke()?)),
            Some(TokenType::Keyword(Keyword::List)) => Ok(Statement::List(self.list_users()?)),
            _ => Err(self.error("a statement")),
        }
    }

    fn create_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek_nth_type(1) {
            Some(TokenType::Keyword(kw)) if a_keyspace(*kw).is_some() => {
                Ok(Statement::CreateKeyspace(self.create_keyspace()?))
            }
            Some(TokenType::Keyword(Keyword::Index)) => {
                Ok(Statement::CreateIndex(self.create_index()?))
            }
            Some(TokenType::Keyword(Keyword::User)) => {
                Ok(Statement::CreateUser(self.create_user()?))
            }
            _ => {
                self.advance();
                Err(self.error("KEYSPACE, SCHEMA, INDEX or USER"))
            }
        }
    }

    fn alter_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek_nth_type(1) {
            Some(TokenType::Keyword(kw)) if a_keyspace(*kw).is_some() => {
                Ok(Statement::AlterKeyspace(self.alter_keyspace()?))
            }
            Some(TokenType::Keyword(Keyword::User)) => {
                Ok(Statement::AlterUser(self.alter_user()?))
            }
            _ => {
                self.advance();
                Err(self.error("KEYSPACE, SCHEMA or USER"))
            }
        }
    }

    // ---- names and references (spec 4.3) ----

    // Any keyword, reserved or not, is accepted here: the original grammar's
    // identifier rule matches any word, and every grammar production that
    // needs a specific keyword to follow a name position consumes that
    // keyword explicitly (`expect_keyword`) before ever calling into this
    // rule, so there is no ambiguity to arbitrate.
    fn identifier(&mut self) -> Result<Name, ParseError> {
        match self.peek_type() {
            Some(TokenType::Identifier) => {
                let (text, _) = self.advance().unwrap();
                Ok(Name::Identifier(text.to_ascii_lowercase()))
            }
            Some(TokenType::QuotedName) => {
                let (text, _) = self.advance().unwrap();
                Ok(Name::QuotedName(decode_quoted(text)))
            }
            Some(TokenType::Keyword(kw)) => {
                let kw = *kw;
                self.advance();
                Ok(Name::Identifier(kw.text().to_ascii_lowercase()))
            }
            _ => Err(self.error("identifier")),
        }
    }

    fn keyspace(&mut self) -> Result<Keyspace, ParseError> {
        Ok(Keyspace(self.identifier()?))
    }

    fn table(&mut self) -> Result<Table, ParseError> {
        let first = self.identifier()?;
        if let Some(TokenType::Dot) = self.peek_type() {
            self.advance();
            let name = self.identifier()?;
            Ok(Table(name, Some(Keyspace(first))))
        } else {
            Ok(Table(first, None))
        }
    }

    fn index(&mut self) -> Result<Index, ParseError> {
        Ok(Index(self.identifier()?))
    }

    fn column(&mut self) -> Result<Column, ParseError> {
        Ok(Column(self.identifier()?))
    }

    fn user(&mut self) -> Result<User, ParseError> {
        match self.peek_type() {
            Some(TokenType::StringLiteral) => {
                let (text, _) = self.advance().unwrap();
                Ok(User::Literal(decode_string(text)))
            }
            _ => Ok(User::Named(self.identifier()?)),
        }
    }

    fn reference(&mut self) -> Result<Reference, ParseError> {
        match self.peek_type() {
            Some(TokenType::Keyword(Keyword::Token)) => {
                Ok(Reference::Token(self.token_function()?))
            }
            // WRITETIME/TTL are also unreserved keywords usable as bare
            // column names (spec §6); only treat them as a function call
            // when an LParen actually follows.
            Some(TokenType::Keyword(Keyword::Writetime))
                if matches!(self.peek_nth_type(1), Some(TokenType::LParen)) =>
            {
                self.advance();
                self.expect(TokenType::LParen, "(")?;
                let col = self.column()?;
                self.expect(TokenType::RParen, ")")?;
                Ok(Reference::Function(Function(
                    Keyword::Writetime.text().to_string(),
                    col,
                )))
            }
            Some(TokenType::Keyword(Keyword::Ttl))
                if matches!(self.peek_nth_type(1), Some(TokenType::LParen)) =>
            {
                self.advance();
                self.expect(TokenType::LParen, "(")?;
                let col = self.column()?;
                self.expect(TokenType::RParen, ")")?;
                Ok(Reference::Function(Function(
                    Keyword::Ttl.text().to_string(),
                    col,
                )))
            }
            _ => {
                let col = self.column()?;
                if let Some(TokenType::LBracket) = self.peek_type() {
                    self.advance();
                    let key = self.term()?;
                    self.expect(TokenType::RBracket, "]")?;
                    Ok(Reference::CollectionItem(CollectionItem(col, key)))
                } else {
                    Ok(Reference::Column(col))
                }
            }
        }
    }

    /// `TOKEN(column, …)`, the only form valid as a relation's left-hand
    /// side and, more generally, wherever a `Token` reference is allowed.
    fn token_function(&mut self) -> Result<TokenFn, ParseError> {
        self.expect_keyword(Keyword::Token)?;
        self.expect(TokenType::LParen, "(")?;
        let mut columns = vec![self.column()?];
        while let Some(TokenType::Comma) = self.peek_type() {
            self.advance();
            columns.push(self.column()?);
        }
        self.expect(TokenType::RParen, ")")?;
        Ok(TokenFn(columns))
    }

    /// `TOKEN(term, …)`, the right-hand-side form of a token relation.
    fn token_term_args(&mut self) -> Result<Vec<Term>, ParseError> {
        self.expect_keyword(Keyword::Token)?;
        self.expect(TokenType::LParen, "(")?;
        let mut terms = vec![self.term()?];
        while let Some(TokenType::Comma) = self.peek_type() {
            self.advance();
            terms.push(self.term()?);
        }
        self.expect(TokenType::RParen, ")")?;
        Ok(terms)
    }

    // ---- terms, collections (spec 4.4) ----

    fn term(&mut self) -> Result<Term, ParseError> {
        match self.peek_type() {
            Some(TokenType::Qmark) => {
                self.advance();
                Ok(Term::Binding(None))
            }
            Some(TokenType::Minus) => {
                self.advance();
                match self.peek_type() {
                    Some(TokenType::Integer) => {
                        let (text, tok) = self.advance().unwrap();
                        Ok(Term::Integer(-parse_int_token(text, &tok)?))
                    }
                    Some(TokenType::Float) => {
                        let (text, tok) = self.advance().unwrap();
                        Ok(Term::Float(-parse_float_token(text, &tok)?))
                    }
                    _ => Err(self.error("integer or float")),
                }
            }
            Some(TokenType::Integer) => {
                let (text, tok) = self.advance().unwrap();
                Ok(Term::Integer(parse_int_token(text, &tok)?))
            }
            Some(TokenType::Float) => {
                let (text, tok) = self.advance().unwrap();
                Ok(Term::Float(parse_float_token(text, &tok)?))
            }
            Some(TokenType::Boolean) => {
                let (text, _) = self.advance().unwrap();
                Ok(Term::Boolean(text.eq_ignore_ascii_case("true")))
            }
            Some(TokenType::UUID) => {
                let (text, _) = self.advance().unwrap();
                Ok(Term::Uuid(text.to_ascii_lowercase()))
            }
            Some(TokenType::StringLiteral) => {
                let (text, _) = self.advance().unwrap();
                Ok(Term::String(decode_string(text)))
            }
            Some(TokenType::LBrace) => self.brace_literal(),
            Some(TokenType::LBracket) => self.list_literal(),
            _ => Ok(Term::Reference(self.reference()?)),
        }
    }

    fn list_literal(&mut self) -> Result<Term, ParseError> {
        self.expect(TokenType::LBracket, "[")?;
        let mut items = Vec::new();
        if !matches!(self.peek_type(), Some(TokenType::RBracket)) {
            items.push(self.term()?);
            while let Some(TokenType::Comma) = self.peek_type() {
                self.advance();
                items.push(self.term()?);
            }
        }
        self.expect(TokenType::RBracket, "]")?;
        Ok(Term::List(items))
    }

    /// `{ ... }`: a map when entries are `term : term`, a set when they are
    /// bare terms, and a map when empty (spec §9: map wins the ambiguity).
    fn brace_literal(&mut self) -> Result<Term, ParseError> {
        self.expect(TokenType::LBrace, "{")?;
        if matches!(self.peek_type(), Some(TokenType::RBrace)) {
            self.advance();
            return Ok(Term::Map(Vec::new()));
        }
        let first = self.term()?;
        if let Some(TokenType::Colon) = self.peek_type() {
            self.advance();
            let first_value = self.term()?;
            let mut entries = vec![(first, first_value)];
            while let Some(TokenType::Comma) = self.peek_type() {
                self.advance();
                let key = self.term()?;
                self.expect(TokenType::Colon, ":")?;
                let value = self.term()?;
                entries.push((key, value));
            }
            self.expect(TokenType::RBrace, "}")?;
            Ok(Term::Map(entries))
        } else {
            let mut items = vec![first];
            while let Some(TokenType::Comma) = self.peek_type() {
                self.advance();
                items.push(self.term()?);
            }
            self.expect(TokenType::RBrace, "}")?;
            Ok(Term::Set(items))
        }
    }

    // ---- properties (spec 4.5) ----

    fn property(&mut self) -> Result<Property, ParseError> {
        let key = self.identifier()?;
        self.expect(TokenType::Equal, "=")?;
        let value = self.term()?;
        Ok(Property(key, value))
    }

    fn properties(&mut self) -> Result<Properties, ParseError> {
        let mut props = vec![self.property()?];
        while let Some(TokenType::Keyword(Keyword::And)) = self.peek_type() {
            self.advance();
            props.push(self.property()?);
        }
        Ok(Properties(props))
    }

    // ---- relations (spec 4.6) ----

    fn comparison_operator(&mut self) -> Result<String, ParseError> {
        match self.peek_type() {
            Some(TokenType::Equal) => {
                self.advance();
                Ok("=".to_string())
            }
            Some(TokenType::Lt) => {
                self.advance();
                Ok("<".to_string())
            }
            Some(TokenType::Lte) => {
                self.advance();
                Ok("<=".to_string())
            }
            Some(TokenType::Gt) => {
                self.advance();
                Ok(">".to_string())
            }
            Some(TokenType::Gte) => {
                self.advance();
                Ok(">=".to_string())
            }
            _ => Err(self.error("a comparison operator")),
        }
    }

    fn relation(&mut self) -> Result<Relation, ParseError> {
        if let Some(TokenType::Keyword(Keyword::Token)) = self.peek_type() {
            let lhs = RelationLhs::Token(self.token_function()?);
            let op = self.comparison_operator()?;
            let rhs = if let Some(TokenType::Keyword(Keyword::Token)) = self.peek_type() {
                RelationRhs::Token(self.token_term_args()?)
            } else {
                RelationRhs::Term(self.term()?)
            };
            return Ok(Relation(lhs, op, rhs));
        }

        let col = self.column()?;
        if let Some(TokenType::Keyword(Keyword::In)) = self.peek_type() {
            self.advance();
            self.expect(TokenType::LParen, "(")?;
            let mut terms = vec![self.term()?];
            while let Some(TokenType::Comma) = self.peek_type() {
                self.advance();
                terms.push(self.term()?);
            }
            self.expect(TokenType::RParen, ")")?;
            return Ok(Relation(
                RelationLhs::Column(col),
                "in".to_string(),
                RelationRhs::List(terms),
            ));
        }

        let op = self.comparison_operator()?;
        let term = self.term()?;
        Ok(Relation(RelationLhs::Column(col), op, RelationRhs::Term(term)))
    }

    fn relations(&mut self) -> Result<Vec<Relation>, ParseError> {
        let mut rels = vec![self.relation()?];
        while let Some(TokenType::Keyword(Keyword::And)) = self.peek_type() {
            self.advance();
            rels.push(self.relation()?);
        }
        Ok(rels)
    }

    fn using_option(&mut self) -> Result<crate::ast::UsingOption, ParseError> {
        use crate::ast::UsingOption;
        match self.peek_type() {
            Some(TokenType::Keyword(Keyword::Timestamp)) => {
                self.advance();
                let (text, tok) = self.expect(TokenType::Integer, "integer")?;
                Ok(UsingOption::Timestamp(Timestamp(parse_int_token(
                    text, &tok,
                )?)))
            }
            Some(TokenType::Keyword(Keyword::Ttl)) => {
                self.advance();
                let (text, tok) = self.expect(TokenType::Integer, "integer")?;
                Ok(UsingOption::Ttl(Ttl(parse_int_token(text, &tok)?)))
            }
            _ => Err(self.error("TIMESTAMP or TTL")),
        }
    }

    fn using_options(&mut self) -> Result<Vec<crate::ast::UsingOption>, ParseError> {
        self.expect_keyword(Keyword::Using)?;
        let mut opts = vec![self.using_option()?];
        while let Some(TokenType::Keyword(Keyword::And)) = self.peek_type() {
            self.advance();
            opts.push(self.using_option()?);
        }
        Ok(opts)
    }

    // ---- SELECT (spec 4.7) ----

    fn selector(&mut self) -> Result<Selector, ParseError> {
        let expr = match self.peek_type() {
            Some(TokenType::Keyword(Keyword::Writetime))
                if matches!(self.peek_nth_type(1), Some(TokenType::LParen)) =>
            {
                self.advance();
                self.expect(TokenType::LParen, "(")?;
                let col = self.column()?;
                self.expect(TokenType::RParen, ")")?;
                SelectorExpr::Function(Function(Keyword::Writetime.text().to_string(), col))
            }
            Some(TokenType::Keyword(Keyword::Ttl))
                if matches!(self.peek_nth_type(1), Some(TokenType::LParen)) =>
            {
                self.advance();
                self.expect(TokenType::LParen, "(")?;
                let col = self.column()?;
                self.expect(TokenType::RParen, ")")?;
                SelectorExpr::Function(Function(Keyword::Ttl.text().to_string(), col))
            }
            _ => SelectorExpr::Column(self.column()?),
        };
        Ok(Selector(expr))
    }

    fn selectors(&mut self) -> Result<Selectors, ParseError> {
        if let Some(TokenType::Asterisk) = self.peek_type() {
            self.advance();
            return Ok(Selectors::SelectAll);
        }
        if let Some(TokenType::Keyword(Keyword::Count)) = self.peek_type() {
            if let Some(TokenType::LParen) = self.peek_nth_type(1) {
                self.advance();
                self.advance();
                match self.peek_type() {
                    Some(TokenType::Asterisk) | Some(TokenType::Integer) => {
                        self.advance();
                    }
                    _ => return Err(self.error("'*' or '1'")),
                }
                self.expect(TokenType::RParen, ")")?;
                return Ok(Selectors::Count);
            }
        }
        let mut selectors = vec![self.selector()?];
        while let Some(TokenType::Comma) = self.peek_type() {
            self.advance();
            selectors.push(self.selector()?);
        }
        Ok(Selectors::List(selectors))
    }

    fn order_by(&mut self) -> Result<OrderBy, ParseError> {
        self.expect_keyword(Keyword::Order)?;
        self.expect_keyword(Keyword::By)?;
        let col = self.column()?;
        let direction = match self.peek_type() {
            Some(TokenType::Keyword(Keyword::Asc)) => {
                self.advance();
                "ASC".to_string()
            }
            Some(TokenType::Keyword(Keyword::Desc)) => {
                self.advance();
                "DESC".to_string()
            }
            _ => "ASC".to_string(),
        };
        Ok(OrderBy(col, direction))
    }

    fn limit(&mut self) -> Result<Limit, ParseError> {
        self.expect_keyword(Keyword::Limit)?;
        let (text, tok) = self.expect(TokenType::Integer, "integer")?;
        Ok(Limit(parse_int_token(text, &tok)?))
    }

    pub fn select(&mut self) -> Result<Select, ParseError> {
        self.expect_keyword(Keyword::Select)?;
        let selectors = self.selectors()?;
        self.expect_keyword(Keyword::From)?;
        let table = self.table()?;
        let relations = if let Some(TokenType::Keyword(Keyword::Where)) = self.peek_type() {
            self.advance();
            Some(self.relations()?)
        } else {
            None
        };
        let order_by = if let Some(TokenType::Keyword(Keyword::Order)) = self.peek_type() {
            Some(self.order_by()?)
        } else {
            None
        };
        let limit = if let Some(TokenType::Keyword(Keyword::Limit)) = self.peek_type() {
            Some(self.limit()?)
        } else {
            None
        };
        let allow_filtering = if let Some(TokenType::Keyword(Keyword::Allow)) = self.peek_type() {
            self.advance();
            self.expect_keyword(Keyword::Filtering)?;
            Some(AllowFiltering)
        } else {
            None
        };
        Ok(Select(
            selectors,
            table,
            relations,
            order_by,
            limit,
            allow_filtering,
        ))
    }

    // ---- INSERT / UPDATE / DELETE / TRUNCATE / USE (spec 4.7) ----

    pub fn insert(&mut self) -> Result<Insert, ParseError> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;
        let table = self.table()?;
        self.expect(TokenType::LParen, "(")?;
        let mut columns = vec![self.column()?];
        while let Some(TokenType::Comma) = self.peek_type() {
            self.advance();
            columns.push(self.column()?);
        }
        self.expect(TokenType::RParen, ")")?;
        self.expect_keyword(Keyword::Values)?;
        self.expect(TokenType::LParen, "(")?;
        let mut values = vec![self.term()?];
        while let Some(TokenType::Comma) = self.peek_type() {
            self.advance();
            values.push(self.term()?);
        }
        self.expect(TokenType::RParen, ")")?;
        let using = if let Some(TokenType::Keyword(Keyword::Using)) = self.peek_type() {
            self.using_options()?
        } else {
            Vec::new()
        };
        Ok(Insert(table, columns, values, using))
    }

    fn assignment(&mut self) -> Result<Assignment, ParseError> {
        let col = self.column()?;
        if let Some(TokenType::LBracket) = self.peek_type() {
            self.advance();
            let key = self.term()?;
            self.expect(TokenType::RBracket, "]")?;
            self.expect(TokenType::Equal, "=")?;
            let value = self.term()?;
            Ok(Assignment::CollectionItem(CollectionItem(col, key), value))
        } else {
            self.expect(TokenType::Equal, "=")?;
            let value = self.term()?;
            Ok(Assignment::Column(col, value))
        }
    }

    pub fn update(&mut self) -> Result<Update, ParseError> {
        self.expect_keyword(Keyword::Update)?;
        let table = self.table()?;
        let using = if let Some(TokenType::Keyword(Keyword::Using)) = self.peek_type() {
            self.using_options()?
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::Set)?;
        let mut assignments = vec![self.assignment()?];
        while let Some(TokenType::Comma) = self.peek_type() {
            self.advance();
            assignments.push(self.assignment()?);
        }
        self.expect_keyword(Keyword::Where)?;
        let relations = self.relations()?;
        Ok(Update(table, using, assignments, relations))
    }

    fn column_or_subscript(&mut self) -> Result<ColumnOrSubscript, ParseError> {
        let col = self.column()?;
        if let Some(TokenType::LBracket) = self.peek_type() {
            self.advance();
            let key = self.term()?;
            self.expect(TokenType::RBracket, "]")?;
            Ok(ColumnOrSubscript::CollectionItem(CollectionItem(col, key)))
        } else {
            Ok(ColumnOrSubscript::Column(col))
        }
    }

    pub fn delete(&mut self) -> Result<Delete, ParseError> {
        self.expect_keyword(Keyword::Delete)?;
        let columns = if let Some(TokenType::Keyword(Keyword::From)) = self.peek_type() {
            None
        } else {
            let mut cols = vec![self.column_or_subscript()?];
            while let Some(TokenType::Comma) = self.peek_type() {
                self.advance();
                cols.push(self.column_or_subscript()?);
            }
            Some(cols)
        };
        self.expect_keyword(Keyword::From)?;
        let table = self.table()?;
        let using = if let Some(TokenType::Keyword(Keyword::Using)) = self.peek_type() {
            self.using_options()?
        } else {
            Vec::new()
        };
        self.expect_keyword(Keyword::Where)?;
        let relations = self.relations()?;
        Ok(Delete(columns, table, using, relations))
    }

    pub fn truncate(&mut self) -> Result<Truncate, ParseError> {
        self.expect_keyword(Keyword::Truncate)?;
        Ok(Truncate(self.table()?))
    }

    pub fn use_statement(&mut self) -> Result<Use, ParseError> {
        self.expect_keyword(Keyword::Use)?;
        Ok(Use(self.keyspace()?))
    }

    // ---- BATCH (spec 4.7) ----

    fn batch_child(&mut self) -> Result<BatchChild, ParseError> {
        match self.peek_type() {
            Some(TokenType::Keyword(Keyword::Insert)) => Ok(BatchChild::Insert(self.insert()?)),
            Some(TokenType::Keyword(Keyword::Update)) => Ok(BatchChild::Update(self.update()?)),
            Some(TokenType::Keyword(Keyword::Delete)) => Ok(BatchChild::Delete(self.delete()?)),
            _ => Err(self.error("INSERT, UPDATE or DELETE")),
        }
    }

    pub fn batch(&mut self) -> Result<Batch, ParseError> {
        self.expect_keyword(Keyword::Begin)?;
        let logged = if let Some(TokenType::Keyword(Keyword::Unlogged)) = self.peek_type() {
            self.advance();
            false
        } else {
            true
        };
        self.expect_keyword(Keyword::Batch)?;
        let using = if let Some(TokenType::Keyword(Keyword::Using)) = self.peek_type() {
            self.using_options()?
        } else {
            Vec::new()
        };
        let mut children = vec![self.batch_child()?];
        while let Some(TokenType::SemiColon) = self.peek_type() {
            self.advance();
            if let Some(TokenType::Keyword(Keyword::Apply)) = self.peek_type() {
                break;
            }
            children.push(self.batch_child()?);
        }
        self.expect_keyword(Keyword::Apply)?;
        self.expect_keyword(Keyword::Batch)?;
        Ok(Batch(logged, using, children))
    }

    // ---- DDL (spec 4.7) ----

    pub fn create_keyspace(&mut self) -> Result<CreateKeyspace, ParseError> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_a_keyspace()?;
        let ks = self.keyspace()?;
        self.expect_keyword(Keyword::With)?;
        let props = self.properties()?;
        Ok(CreateKeyspace(ks, props))
    }

    pub fn alter_keyspace(&mut self) -> Result<AlterKeyspace, ParseError> {
        self.expect_keyword(Keyword::Alter)?;
        self.expect_a_keyspace()?;
        let ks = self.keyspace()?;
        self.expect_keyword(Keyword::With)?;
        let props = self.properties()?;
        Ok(AlterKeyspace(ks, props))
    }

    pub fn drop_statement(&mut self) -> Result<Drop, ParseError> {
        self.expect_keyword(Keyword::Drop)?;
        match self.peek_type() {
            Some(TokenType::Keyword(kw)) if a_keyspace(*kw).is_some() => {
                self.advance();
                Ok(Drop(DropTarget::Keyspace(self.keyspace()?)))
            }
            Some(TokenType::Keyword(kw)) if a_table(*kw).is_some() => {
                self.advance();
                Ok(Drop(DropTarget::Table(self.table()?)))
            }
            Some(TokenType::Keyword(Keyword::Index)) => {
                self.advance();
                Ok(Drop(DropTarget::Index(self.index()?)))
            }
            Some(TokenType::Keyword(Keyword::User)) => {
                self.advance();
                Ok(Drop(DropTarget::User(self.user()?)))
            }
            _ => Err(self.error("KEYSPACE, TABLE, INDEX or USER")),
        }
    }

    pub fn create_index(&mut self) -> Result<CreateIndex, ParseError> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_keyword(Keyword::Index)?;
        let name = match self.peek_type() {
            Some(TokenType::Keyword(Keyword::On)) => None,
            _ => Some(self.index()?),
        };
        self.expect_keyword(Keyword::On)?;
        let table = self.table()?;
        self.expect(TokenType::LParen, "(")?;
        let col = self.column()?;
        self.expect(TokenType::RParen, ")")?;
        Ok(CreateIndex(name, table, col))
    }

    fn user_options(&mut self) -> Result<(Option<String>, Option<bool>), ParseError> {
        let password = if let Some(TokenType::Keyword(Keyword::With)) = self.peek_type() {
            self.advance();
            self.expect_keyword(Keyword::Password)?;
            let (text, _) = self.expect(TokenType::StringLiteral, "string literal")?;
            Some(decode_string(text))
        } else {
            None
        };
        let superuser = match self.peek_type() {
            Some(TokenType::Keyword(Keyword::Superuser)) => {
                self.advance();
                Some(true)
            }
            Some(TokenType::Keyword(Keyword::Nosuperuser)) => {
                self.advance();
                Some(false)
            }
            _ => None,
        };
        Ok((password, superuser))
    }

    pub fn create_user(&mut self) -> Result<CreateUser, ParseError> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_keyword(Keyword::User)?;
        let user = self.user()?;
        let (password, superuser) = self.user_options()?;
        Ok(CreateUser(user, password, superuser))
    }

    pub fn alter_user(&mut self) -> Result<AlterUser, ParseError> {
        self.expect_keyword(Keyword::Alter)?;
        self.expect_keyword(Keyword::User)?;
        let user = self.user()?;
        let (password, superuser) = self.user_options()?;
        Ok(AlterUser(user, password, superuser))
    }

    // ---- permission DDL (spec 4.7) ----

    fn permission_set(&mut self) -> Result<PermissionSet, ParseError> {
        if let Some(TokenType::Keyword(Keyword::All)) = self.peek_type() {
            self.advance();
            if let Some(TokenType::Keyword(Keyword::Permissions)) = self.peek_type() {
                self.advance();
            }
            return Ok(PermissionSet::All(AllPermissions));
        }
        let name = match self.peek_type() {
            Some(TokenType::Keyword(Keyword::Create)) => Keyword::Create.text(),
            Some(TokenType::Keyword(Keyword::Alter)) => Keyword::Alter.text(),
            Some(TokenType::Keyword(Keyword::Drop)) => Keyword::Drop.text(),
            Some(TokenType::Keyword(Keyword::Select)) => Keyword::Select.text(),
            Some(TokenType::Keyword(Keyword::Modify)) => Keyword::Modify.text(),
            Some(TokenType::Keyword(Keyword::Authorize)) => Keyword::Authorize.text(),
            _ => return Err(self.error("a permission name")),
        };
        self.advance();
        if let Some(TokenType::Keyword(Keyword::Permission)) = self.peek_type() {
            self.advance();
        }
        Ok(PermissionSet::Named(Permission(name.to_string())))
    }

    fn resource(&mut self) -> Result<Resource, ParseError> {
        if let Some(TokenType::Keyword(Keyword::All)) = self.peek_type() {
            self.advance();
            self.expect_keyword(Keyword::Keyspaces)?;
            return Ok(Resource::AllKeyspaces(AllKeyspaces));
        }
        match self.peek_type() {
            Some(TokenType::Keyword(kw)) if a_keyspace(*kw).is_some() => {
                self.advance();
                Ok(Resource::Keyspace(self.keyspace()?))
            }
            Some(TokenType::Keyword(kw)) if a_table(*kw).is_some() => {
                self.advance();
                Ok(Resource::Table(self.table()?))
            }
            _ => Err(self.error("KEYSPACE, TABLE or ALL KEYSPACES")),
        }
    }

    pub fn grant(&mut self) -> Result<Grant, ParseError> {
        self.expect_keyword(Keyword::Grant)?;
        let perms = self.permission_set()?;
        self.expect_keyword(Keyword::On)?;
        let resource = self.resource()?;
        self.expect_keyword(Keyword::To)?;
        let user = self.user()?;
        Ok(Grant(perms, resource, user))
    }

    pub fn revoke(&mut self) -> Result<Revoke, ParseError> {
        self.expect_keyword(Keyword::Revoke)?;
        let perms = self.permission_set()?;
        self.expect_keyword(Keyword::On)?;
        let resource = self.resource()?;
        self.expect_keyword(Keyword::From)?;
        let user = self.user()?;
        Ok(Revoke(perms, resource, user))
    }

    pub fn list_users(&mut self) -> Result<List, ParseError> {
        self.expect_keyword(Keyword::List)?;
        self.expect_keyword(Keyword::Users)?;
        Ok(List(ListTarget::Users(Users)))
    }
}
