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

//! # CQL3 Abstract Syntax Tree
//!
//! When a CQL3 string is parsed, `Parser` produces a `Statement`.
//!
//! ## Identifier
//!
//! In CQL, a name is either an `Identifier` (unquoted, case-folded to
//! lowercase) or a `QuotedName` (double-quoted, case preserved, `""` an
//! escaped `"`). `Name` carries that distinction through every place a name
//! appears: keyspace, table, index, column and user names.
//!
//! ## Term
//!
//! A `Term` is a value as it appears in CQL text: a literal, a collection
//! literal, a bound variable, or a `Reference` to a column, a collection
//! element, `TOKEN(...)`, a function call, or a user name.

mod ddl;
mod dml;
mod query;

pub use ddl::*;
pub use dml::*;
pub use query::*;

/// A CQL name: unquoted identifiers are case-folded, quoted names preserve case.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum Name {
    Identifier(String),
    QuotedName(String),
}

impl Name {
    pub fn text(&self) -> &str {
        match self {
            Name::Identifier(s) => s,
            Name::QuotedName(s) => s,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyspace(pub Name);

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Table(pub Name, pub Option<Keyspace>);

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Index(pub Name);

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Column(pub Name);

/// A subscripted reference into a collection column, e.g. `m['key']`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionItem(pub Column, pub Term);

/// A role/user name: either a plain name or a quoted string literal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum User {
    Named(Name),
    Literal(String),
}

/// `TOKEN(...)` applied to one or more partition key columns.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Token(pub Vec<Column>);

/// A function call applied to a single column, e.g. `writetime(col)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Function(pub String, pub Column);

/// Something a `Term` may refer to besides a literal value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum Reference {
    Column(Column),
    CollectionItem(CollectionItem),
    Token(Token),
    Function(Function),
    User(User),
}

/// A value as it appears in CQL text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum Term {
    /// `?` or `:name` bound variable.
    Binding(Option<String>),
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    /// UUID text, verbatim; not decoded to a 128-bit value.
    Uuid(String),
    Map(Vec<(Term, Term)>),
    List(Vec<Term>),
    Set(Vec<Term>),
    Reference(Reference),
}

/// A native CQL scalar type, e.g. `int`, `text`, `uuid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct NativeType {
    pub keyword: &'static str,
    pub classname: &'static str,
}

/// A single `key = value` entry inside a `WITH`/`properties` clause.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Property(pub Name, pub Term);

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Properties(pub Vec<Property>);

/// The left-hand side of a `WHERE` relation: a column or `TOKEN(...)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationLhs {
    Column(Column),
    Token(Token),
}

/// The right-hand side of a `WHERE` relation.
///
/// A `TOKEN(...)` on the right-hand side takes term arguments (e.g. string
/// literals), unlike the left-hand side's `Token`, which only ever takes
/// column references — so this variant holds `Vec<Term>` rather than the
/// `Token` struct itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationRhs {
    Term(Term),
    List(Vec<Term>),
    Token(Vec<Term>),
}

/// A single `WHERE` clause relation, e.g. `col = 1`, `col IN (1, 2)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Relation(pub RelationLhs, pub String, pub RelationRhs);

/// An `ORDER BY` entry: column and direction (`"ASC"` or `"DESC"`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderBy(pub Column, pub String);

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Limit(pub i64);

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct AllowFiltering;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Ttl(pub i64);

/// An entry of an `INSERT`/`UPDATE`/`DELETE` `USING` clause.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum UsingOption {
    Timestamp(Timestamp),
    Ttl(Ttl),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Permission(pub String);

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct AllPermissions;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct AllKeyspaces;

/// The permission set named by a `GRANT`/`REVOKE` statement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum PermissionSet {
    All(AllPermissions),
    Named(Permission),
}

/// The resource a `GRANT`/`REVOKE` statement applies to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum Resource {
    AllKeyspaces(AllKeyspaces),
    Keyspace(Keyspace),
    Table(Table),
}

/// What a `DROP` statement targets.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum DropTarget {
    Keyspace(Keyspace),
    Table(Table),
    Index(Index),
    User(User),
}

/// A complete, parsed CQL3 statement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    Use(Use),
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Truncate(Truncate),
    CreateKeyspace(CreateKeyspace),
    AlterKeyspace(AlterKeyspace),
    Drop(Drop),
    CreateIndex(CreateIndex),
    CreateUser(CreateUser),
    AlterUser(AlterUser),
    Grant(Grant),
    Revoke(Revoke),
    List(List),
    Batch(Batch),
}
