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

//! Reserved/unreserved keyword classification and the native-type table.
//!
//! `Keyword` enumerates every reserved word of the grammar. A subset of
//! those are also *unreserved*: they may additionally be matched where an
//! identifier is expected (`is_unreserved()`). Native scalar types are a
//! further subset, each carrying the fully-qualified Cassandra marshaller
//! class name they canonicalize to (`native_type()`).
//!
//! `DOUBLE` is included here even though it is absent from the keyword list
//! otherwise documented; the native-type table requires it and every
//! native-type keyword must also be a reserved keyword for `native_type`
//! lookups to be total. See DESIGN.md.

use crate::ast::NativeType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    Where,
    And,
    Key,
    Insert,
    Update,
    With,
    Limit,
    Using,
    Use,
    Count,
    Set,
    Begin,
    Unlogged,
    Batch,
    Apply,
    Truncate,
    Delete,
    In,
    Create,
    Keyspace,
    Schema,
    Keyspaces,
    Columnfamily,
    Table,
    Index,
    On,
    To,
    Drop,
    Primary,
    Into,
    Values,
    Timestamp,
    Ttl,
    Alter,
    Rename,
    Add,
    Type,
    Compact,
    Storage,
    Order,
    By,
    Asc,
    Desc,
    Allow,
    Filtering,
    Grant,
    All,
    Permission,
    Permissions,
    Of,
    Revoke,
    Modify,
    Authorize,
    Norecursive,
    User,
    Users,
    Superuser,
    Nosuperuser,
    Password,
    Clustering,
    Ascii,
    Bigint,
    Blob,
    Boolean,
    Counter,
    Decimal,
    Double,
    Float,
    Inet,
    Int,
    Text,
    Uuid,
    Varchar,
    Varint,
    Timeuuid,
    Token,
    Writetime,
    Map,
    List,
    True,
    False,
}

impl Keyword {
    /// Case-insensitive lookup by matched text. Returns `None` for anything
    /// that is not a reserved word of the grammar.
    pub fn from_str(s: &str) -> Option<Self> {
        use Keyword::*;
        Some(match s.to_ascii_uppercase().as_str() {
            "SELECT" => Select,
            "FROM" => From,
            "WHERE" => Where,
            "AND" => And,
            "KEY" => Key,
            "INSERT" => Insert,
            "UPDATE" => Update,
            "WITH" => With,
            "LIMIT" => Limit,
            "USING" => Using,
            "USE" => Use,
            "COUNT" => Count,
            "SET" => Set,
            "BEGIN" => Begin,
            "UNLOGGED" => Unlogged,
            "BATCH" => Batch,
            "APPLY" => Apply,
            "TRUNCATE" => Truncate,
            "DELETE" => Delete,
            "IN" => In,
            "CREATE" => Create,
            "KEYSPACE" => Keyspace,
            "SCHEMA" => Schema,
            "KEYSPACES" => Keyspaces,
            "COLUMNFAMILY" => Columnfamily,
            "TABLE" => Table,
            "INDEX" => Index,
            "ON" => On,
            "TO" => To,
            "DROP" => Drop,
            "PRIMARY" => Primary,
            "INTO" => Into,
            "VALUES" => Values,
            "TIMESTAMP" => Timestamp,
            "TTL" => Ttl,
            "ALTER" => Alter,
            "RENAME" => Rename,
            "ADD" => Add,
            "TYPE" => Type,
            "COMPACT" => Compact,
            "STORAGE" => Storage,
            "ORDER" => Order,
            "BY" => By,
            "ASC" => Asc,
            "DESC" => Desc,
            "ALLOW" => Allow,
            "FILTERING" => Filtering,
            "GRANT" => Grant,
            "ALL" => All,
            "PERMISSION" => Permission,
            "PERMISSIONS" => Permissions,
            "OF" => Of,
            "REVOKE" => Revoke,
            "MODIFY" => Modify,
            "AUTHORIZE" => Authorize,
            "NORECURSIVE" => Norecursive,
            "USER" => User,
            "USERS" => Users,
            "SUPERUSER" => Superuser,
            "NOSUPERUSER" => Nosuperuser,
            "PASSWORD" => Password,
            "CLUSTERING" => Clustering,
            "ASCII" => Ascii,
            "BIGINT" => Bigint,
            "BLOB" => Blob,
            "BOOLEAN" => Boolean,
            "COUNTER" => Counter,
            "DECIMAL" => Decimal,
            "DOUBLE" => Double,
            "FLOAT" => Float,
            "INET" => Inet,
            "INT" => Int,
            "TEXT" => Text,
            "UUID" => Uuid,
            "VARCHAR" => Varchar,
            "VARINT" => Varint,
            "TIMEUUID" => Timeuuid,
            "TOKEN" => Token,
            "WRITETIME" => Writetime,
            "MAP" => Map,
            "LIST" => List,
            "TRUE" => True,
            "FALSE" => False,
            _ => return None,
        })
    }

    /// The canonical, uppercase spelling returned by a successful keyword match.
    pub fn text(&self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "SELECT",
            From => "FROM",
            Where => "WHERE",
            And => "AND",
            Key => "KEY",
            Insert => "INSERT",
            Update => "UPDATE",
            With => "WITH",
            Limit => "LIMIT",
            Using => "USING",
            Use => "USE",
            Count => "COUNT",
            Set => "SET",
            Begin => "BEGIN",
            Unlogged => "UNLOGGED",
            Batch => "BATCH",
            Apply => "APPLY",
            Truncate => "TRUNCATE",
            Delete => "DELETE",
            In => "IN",
            Create => "CREATE",
            Keyspace => "KEYSPACE",
            Schema => "SCHEMA",
            Keyspaces => "KEYSPACES",
            Columnfamily => "COLUMNFAMILY",
            Table => "TABLE",
            Index => "INDEX",
            On => "ON",
            To => "TO",
            Drop => "DROP",
            Primary => "PRIMARY",
            Into => "INTO",
            Values => "VALUES",
            Timestamp => "TIMESTAMP",
            Ttl => "TTL",
            Alter => "ALTER",
            Rename => "RENAME",
            Add => "ADD",
            Type => "TYPE",
            Compact => "COMPACT",
            Storage => "STORAGE",
            Order => "ORDER",
            By => "BY",
            Asc => "ASC",
            Desc => "DESC",
            Allow => "ALLOW",
            Filtering => "FILTERING",
            Grant => "GRANT",
            All => "ALL",
            Permission => "PERMISSION",
            Permissions => "PERMISSIONS",
            Of => "OF",
            Revoke => "REVOKE",
            Modify => "MODIFY",
            Authorize => "AUTHORIZE",
            Norecursive => "NORECURSIVE",
            User => "USER",
            Users => "USERS",
            Superuser => "SUPERUSER",
            Nosuperuser => "NOSUPERUSER",
            Password => "PASSWORD",
            Clustering => "CLUSTERING",
            Ascii => "ASCII",
            Bigint => "BIGINT",
            Blob => "BLOB",
            Boolean => "BOOLEAN",
            Counter => "COUNTER",
            Decimal => "DECIMAL",
            Double => "DOUBLE",
            Float => "FLOAT",
            Inet => "INET",
            Int => "INT",
            Text => "TEXT",
            Uuid => "UUID",
            Varchar => "VARCHAR",
            Varint => "VARINT",
            Timeuuid => "TIMEUUID",
            Token => "TOKEN",
            Writetime => "WRITETIME",
            Map => "MAP",
            List => "LIST",
            True => "TRUE",
            False => "FALSE",
        }
    }

    /// Every `Keyword` variant is a reserved word by construction.
    pub fn is_reserved(&self) -> bool {
        true
    }

    /// True for the subset of reserved keywords that may additionally be
    /// matched where an identifier is expected.
    pub fn is_unreserved(&self) -> bool {
        matches!(
            self,
            Keyword::Key
                | Keyword::Clustering
                | Keyword::Count
                | Keyword::Ttl
                | Keyword::Compact
                | Keyword::Storage
                | Keyword::Type
                | Keyword::Values
                | Keyword::Writetime
                | Keyword::Map
                | Keyword::List
                | Keyword::Filtering
                | Keyword::Permission
                | Keyword::Permissions
                | Keyword::Keyspaces
                | Keyword::All
                | Keyword::User
                | Keyword::Users
                | Keyword::Superuser
                | Keyword::Nosuperuser
                | Keyword::Password
        )
    }

    /// True for keywords naming a native CQL scalar type.
    pub fn is_native_type(&self) -> bool {
        self.native_type().is_some()
    }

    /// The `NativeType(keyword, classname)` a native-type keyword canonicalizes to.
    pub fn native_type(&self) -> Option<NativeType> {
        let classname = match self {
            Keyword::Ascii => "org.apache.cassandra.db.marshal.AsciiType",
            Keyword::Bigint => "org.apache.cassandra.db.marshal.LongType",
            Keyword::Blob => "org.apache.cassandra.db.marshal.BytesType",
            Keyword::Boolean => "org.apache.cassandra.db.marshal.BooleanType",
            Keyword::Counter => "org.apache.cassandra.db.marshal.CounterColumnType",
            Keyword::Decimal => "org.apache.cassandra.db.marshal.DecimalType",
            Keyword::Double => "org.apache.cassandra.db.marshal.DoubleType",
            Keyword::Float => "org.apache.cassandra.db.marshal.FloatType",
            Keyword::Inet => "org.apache.cassandra.db.marshal.InetAddressType",
            Keyword::Int => "org.apache.cassandra.db.marshal.Int32Type",
            Keyword::Text => "org.apache.cassandra.db.marshal.UTF8Type",
            Keyword::Timestamp => "org.apache.cassandra.db.marshal.DateType",
            Keyword::Uuid => "org.apache.cassandra.db.marshal.UUIDType",
            Keyword::Varchar => "org.apache.cassandra.db.marshal.UTF8Type",
            Keyword::Varint => "org.apache.cassandra.db.marshal.IntegerType",
            Keyword::Timeuuid => "org.apache.cassandra.db.marshal.TimeUUIDType",
            _ => return None,
        };
        Some(NativeType {
            keyword: self.text(),
            classname,
        })
    }
}

/// `a_keyspace`: accepts `KEYSPACE` or `SCHEMA`, returns `KEYSPACE`.
pub fn a_keyspace(kw: Keyword) -> Option<Keyword> {
    match kw {
        Keyword::Keyspace | Keyword::Schema => Some(Keyword::Keyspace),
        _ => None,
    }
}

/// `a_table`: accepts `TABLE` or `COLUMNFAMILY`, returns `TABLE`.
pub fn a_table(kw: Keyword) -> Option<Keyword> {
    match kw {
        Keyword::Table | Keyword::Columnfamily => Some(Keyword::Table),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const RESERVED: &[&str] = &[
        "SELECT", "FROM", "WHERE", "AND", "KEY", "INSERT", "UPDATE", "WITH", "LIMIT", "USING",
        "USE", "COUNT", "SET", "BEGIN", "UNLOGGED", "BATCH", "APPLY", "TRUNCATE", "DELETE", "IN",
        "CREATE", "KEYSPACE", "SCHEMA", "KEYSPACES", "COLUMNFAMILY", "TABLE", "INDEX", "ON", "TO",
        "DROP", "PRIMARY", "INTO", "VALUES", "TIMESTAMP", "TTL", "ALTER", "RENAME", "ADD", "TYPE",
        "COMPACT", "STORAGE", "ORDER", "BY", "ASC", "DESC", "ALLOW", "FILTERING", "GRANT", "ALL",
        "PERMISSION", "PERMISSIONS", "OF", "REVOKE", "MODIFY", "AUTHORIZE", "NORECURSIVE", "USER",
        "USERS", "SUPERUSER", "NOSUPERUSER", "PASSWORD", "CLUSTERING", "ASCII", "BIGINT", "BLOB",
        "BOOLEAN", "COUNTER", "DECIMAL", "FLOAT", "INET", "INT", "TEXT", "UUID", "VARCHAR",
        "VARINT", "TIMEUUID", "TOKEN", "WRITETIME", "MAP", "LIST", "TRUE", "FALSE",
    ];

    const UNRESERVED: &[&str] = &[
        "KEY",
        "CLUSTERING",
        "COUNT",
        "TTL",
        "COMPACT",
        "STORAGE",
        "TYPE",
        "VALUES",
        "WRITETIME",
        "MAP",
        "LIST",
        "FILTERING",
        "PERMISSION",
        "PERMISSIONS",
        "KEYSPACES",
        "ALL",
        "USER",
        "USERS",
        "SUPERUSER",
        "NOSUPERUSER",
        "PASSWORD",
    ];

    #[test]
    fn every_reserved_keyword_round_trips_case_insensitively() {
        for &k in RESERVED {
            for variant in [k.to_string(), k.to_lowercase(), title_case(k)] {
                let parsed = Keyword::from_str(&variant).unwrap_or_else(|| {
                    panic!("{variant} should parse as a reserved keyword")
                });
                assert_eq!(parsed.text(), k);
            }
        }
    }

    #[test]
    fn unreserved_keywords_are_flagged() {
        for &k in UNRESERVED {
            let kw = Keyword::from_str(k).unwrap();
            assert!(kw.is_unreserved(), "{k} should be unreserved");
        }
    }

    #[test]
    fn native_types_cover_the_table() {
        for (k, class) in [
            ("ASCII", "AsciiType"),
            ("BIGINT", "LongType"),
            ("BLOB", "BytesType"),
            ("BOOLEAN", "BooleanType"),
            ("COUNTER", "CounterColumnType"),
            ("DECIMAL", "DecimalType"),
            ("FLOAT", "FloatType"),
            ("INET", "InetAddressType"),
            ("INT", "Int32Type"),
            ("TEXT", "UTF8Type"),
            ("TIMESTAMP", "DateType"),
            ("UUID", "UUIDType"),
            ("VARCHAR", "UTF8Type"),
            ("VARINT", "IntegerType"),
            ("TIMEUUID", "TimeUUIDType"),
        ] {
            let nt = Keyword::from_str(k).unwrap().native_type().unwrap();
            assert_eq!(nt.keyword, k);
            assert_eq!(
                nt.classname,
                format!("org.apache.cassandra.db.marshal.{class}")
            );
        }
    }

    #[test]
    fn keyspace_and_table_aliases_canonicalize() {
        assert_eq!(a_keyspace(Keyword::Keyspace), Some(Keyword::Keyspace));
        assert_eq!(a_keyspace(Keyword::Schema), Some(Keyword::Keyspace));
        assert_eq!(a_table(Keyword::Table), Some(Keyword::Table));
        assert_eq!(a_table(Keyword::Columnfamily), Some(Keyword::Table));
    }

    #[test]
    fn unknown_word_is_not_a_keyword() {
        assert!(Keyword::from_str("foobar").is_none());
    }

    fn title_case(s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => {
                first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
            }
            None => String::new(),
        }
    }
}
