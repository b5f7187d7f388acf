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

use super::{Column, CollectionItem, Keyspace, Relation, Table, Term, UsingOption};

/// `USE keyspace`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Use(pub Keyspace);

/// `TRUNCATE table`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Truncate(pub Table);

/// `INSERT INTO table (columns) VALUES (values) [USING ...]`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Insert(pub Table, pub Vec<Column>, pub Vec<Term>, pub Vec<UsingOption>);

/// One `SET` clause entry of an `UPDATE` statement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum Assignment {
    Column(Column, Term),
    CollectionItem(CollectionItem, Term),
}

/// `UPDATE table [USING ...] SET assignments WHERE relations`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Update(
    pub Table,
    pub Vec<UsingOption>,
    pub Vec<Assignment>,
    pub Vec<Relation>,
);

/// A target of a `DELETE` statement's column list: a plain column or a
/// collection element (`m['key']`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnOrSubscript {
    Column(Column),
    CollectionItem(CollectionItem),
}

/// `DELETE [columns] FROM table [USING ...] WHERE relations`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Delete(
    pub Option<Vec<ColumnOrSubscript>>,
    pub Table,
    pub Vec<UsingOption>,
    pub Vec<Relation>,
);

/// A statement a `BATCH` is allowed to contain: `INSERT`, `UPDATE` or `DELETE`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum BatchChild {
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

/// `BEGIN [UNLOGGED] BATCH [USING ...] ... APPLY BATCH`
///
/// First field is `true` unless the batch was declared `UNLOGGED`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Batch(pub bool, pub Vec<UsingOption>, pub Vec<BatchChild>);
