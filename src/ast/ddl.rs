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

use super::{
    Column, DropTarget, Index, Keyspace, PermissionSet, Properties, Resource, Table, User,
};

/// `CREATE KEYSPACE keyspace WITH properties`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateKeyspace(pub Keyspace, pub Properties);

/// `ALTER KEYSPACE keyspace WITH properties`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterKeyspace(pub Keyspace, pub Properties);

/// `DROP KEYSPACE|TABLE|INDEX|USER ...`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Drop(pub DropTarget);

/// `CREATE INDEX [name] ON table (column)`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateIndex(pub Option<Index>, pub Table, pub Column);

/// `CREATE USER user [WITH PASSWORD 'pw'] [SUPERUSER|NOSUPERUSER]`
///
/// The third field is `None` when neither `SUPERUSER` nor `NOSUPERUSER` was
/// given, and `Some(true)`/`Some(false)` otherwise.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateUser(pub User, pub Option<String>, pub Option<bool>);

/// `ALTER USER user [WITH PASSWORD 'pw'] [SUPERUSER|NOSUPERUSER]`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterUser(pub User, pub Option<String>, pub Option<bool>);

/// `GRANT permission ON resource TO user`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Grant(pub PermissionSet, pub Resource, pub User);

/// `REVOKE permission ON resource FROM user`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Revoke(pub PermissionSet, pub Resource, pub User);

/// What a `LIST` statement enumerates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct Users;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub enum ListTarget {
    Users(Users),
}

/// `LIST USERS`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(target_arch = "wasm32", derive(serde::Serialize, serde::Deserialize))]
pub struct List(pub ListTarget);
