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

use super::{AllowFiltering, Column, Function, Limit, OrderBy, Relation, Table};

/// `SELECT` statement.
///
/// Fields, in order: selectors, table, optional `WHERE` relations, optional
/// `ORDER BY`, optional `LIMIT`, optional `ALLOW FILTERING`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Select(
    pub Selectors,
    pub Table,
    pub Option<Vec<Relation>>,
    pub Option<OrderBy>,
    pub Option<Limit>,
    pub Option<AllowFiltering>,
);

/// What a `SELECT` statement projects.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum Selectors {
    /// `SELECT *`
    SelectAll,
    /// `SELECT COUNT(*)` / `SELECT COUNT(1)`
    Count,
    /// An explicit, possibly-aliased column list.
    List(Vec<Selector>),
}

/// What a single entry of a `SELECT` column list projects: a plain column,
/// or a `WRITETIME(col)`/`TTL(col)` function applied to one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectorExpr {
    Column(Column),
    Function(Function),
}

/// A single entry of a `SELECT` column list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Selector(pub SelectorExpr);
