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

use cqlparser::ast::*;
use cqlparser::{parse, Rule};

fn ident(s: &str) -> Name {
    Name::Identifier(s.to_string())
}

#[test]
fn use_statement() {
    let stmt = parse("USE my_keyspace", Rule::Use).unwrap();
    assert_eq!(
        stmt,
        Statement::Use(Use(Keyspace(ident("my_keyspace"))))
    );
    // Unquoted names are lower-cased.
    let stmt = parse("USE MyKeyspace", Rule::Use).unwrap();
    assert_eq!(stmt, Statement::Use(Use(Keyspace(ident("mykeyspace")))));
}

#[test]
fn truncate_statement() {
    let stmt = parse("TRUNCATE ks.tbl", Rule::Truncate).unwrap();
    assert_eq!(
        stmt,
        Statement::Truncate(Truncate(Table(ident("tbl"), Some(Keyspace(ident("ks"))))))
    );
}

#[test]
fn quoted_name_preserves_case_and_unescapes_doubled_quotes() {
    let stmt = parse("SELECT * FROM \"MyTable\"\"Name\"", Rule::Select).unwrap();
    let Statement::Select(Select(_, Table(name, None), ..)) = stmt else {
        panic!("unexpected statement");
    };
    assert_eq!(name, Name::QuotedName("MyTable\"Name".to_string()));
}

#[test]
fn select_with_function_selectors() {
    let stmt = parse(
        "SELECT WRITETIME(col1), TTL(col2) FROM tbl",
        Rule::Select,
    )
    .unwrap();
    let Statement::Select(Select(Selectors::List(selectors), ..)) = stmt else {
        panic!("unexpected statement");
    };
    assert_eq!(selectors.len(), 2);
    assert_eq!(
        selectors[0],
        Selector(SelectorExpr::Function(Function(
            "WRITETIME".to_string(),
            Column(ident("col1"))
        )))
    );
    assert_eq!(
        selectors[1],
        Selector(SelectorExpr::Function(Function(
            "TTL".to_string(),
            Column(ident("col2"))
        )))
    );
}

#[test]
fn select_count_star_and_count_one_both_canonicalize() {
    let a = parse("SELECT COUNT(*) FROM tbl", Rule::Select).unwrap();
    let b = parse("SELECT COUNT(1) FROM tbl", Rule::Select).unwrap();
    assert!(matches!(a, Statement::Select(Select(Selectors::Count, ..))));
    assert!(matches!(b, Statement::Select(Select(Selectors::Count, ..))));
}

#[test]
fn select_in_relation() {
    let stmt = parse(
        "SELECT * FROM tbl WHERE key IN (1, 2, 3)",
        Rule::Select,
    )
    .unwrap();
    let Statement::Select(Select(_, _, Some(relations), ..)) = stmt else {
        panic!("unexpected statement");
    };
    assert_eq!(relations.len(), 1);
    let Relation(RelationLhs::Column(_), op, RelationRhs::List(terms)) = &relations[0] else {
        panic!("unexpected relation shape");
    };
    assert_eq!(op, "in");
    assert_eq!(
        terms,
        &vec![Term::Integer(1), Term::Integer(2), Term::Integer(3)]
    );
}

#[test]
fn collection_literals_map_list_set() {
    let stmt = parse(
        "INSERT INTO tbl (a, b, c) VALUES ({'k': 'v'}, [1, 2, 3], {1, 2})",
        Rule::Insert,
    )
    .unwrap();
    let Statement::Insert(Insert(_, _, values, _)) = stmt else {
        panic!("unexpected statement");
    };
    assert_eq!(
        values[0],
        Term::Map(vec![(
            Term::String("k".to_string()),
            Term::String("v".to_string())
        )])
    );
    assert_eq!(
        values[1],
        Term::List(vec![Term::Integer(1), Term::Integer(2), Term::Integer(3)])
    );
    assert_eq!(values[2], Term::Set(vec![Term::Integer(1), Term::Integer(2)]));
}

#[test]
fn negative_integer_and_float_terms() {
    let stmt = parse(
        "INSERT INTO tbl (a, b) VALUES (-5, -2.5)",
        Rule::Insert,
    )
    .unwrap();
    let Statement::Insert(Insert(_, _, values, _)) = stmt else {
        panic!("unexpected statement");
    };
    assert_eq!(values, vec![Term::Integer(-5), Term::Float(-2.5)]);
}

#[test]
fn update_with_collection_subscript_assignment() {
    let stmt = parse(
        "UPDATE tbl SET m['key'] = 'value' WHERE k = 1",
        Rule::Update,
    )
    .unwrap();
    let Statement::Update(Update(_, _, assignments, _)) = stmt else {
        panic!("unexpected statement");
    };
    assert_eq!(assignments.len(), 1);
    assert!(matches!(assignments[0], Assignment::CollectionItem(_, _)));
}

#[test]
fn delete_whole_row_has_no_column_list() {
    let stmt = parse("DELETE FROM tbl WHERE k = 1", Rule::Delete).unwrap();
    let Statement::Delete(Delete(columns, ..)) = stmt else {
        panic!("unexpected statement");
    };
    assert_eq!(columns, None);
}

#[test]
fn create_index_with_and_without_explicit_name() {
    let named = parse("CREATE INDEX my_idx ON tbl (col)", Rule::CreateIndex).unwrap();
    let Statement::CreateIndex(CreateIndex(Some(_), ..)) = named else {
        panic!("expected a named index");
    };
    let anon = parse("CREATE INDEX ON tbl (col)", Rule::CreateIndex).unwrap();
    let Statement::CreateIndex(CreateIndex(None, ..)) = anon else {
        panic!("expected an anonymous index");
    };
}

#[test]
fn create_user_with_password_and_superuser_options() {
    let stmt = parse(
        "CREATE USER alice WITH PASSWORD 'secret' SUPERUSER",
        Rule::CreateUser,
    )
    .unwrap();
    assert_eq!(
        stmt,
        Statement::CreateUser(CreateUser(
            User::Named(ident("alice")),
            Some("secret".to_string()),
            Some(true)
        ))
    );
}

#[test]
fn alter_user_with_no_options_leaves_both_fields_none() {
    let stmt = parse("ALTER USER alice", Rule::AlterUser).unwrap();
    assert_eq!(
        stmt,
        Statement::AlterUser(AlterUser(User::Named(ident("alice")), None, None))
    );
}

#[test]
fn user_accepts_a_string_literal_too() {
    let stmt = parse("DROP USER 'alice@example.com'", Rule::Drop).unwrap();
    assert_eq!(
        stmt,
        Statement::Drop(Drop(DropTarget::User(User::Literal(
            "alice@example.com".to_string()
        ))))
    );
}

#[test]
fn grant_named_permission_on_keyspace() {
    let stmt = parse(
        "GRANT SELECT ON KEYSPACE ks TO bob",
        Rule::Grant,
    )
    .unwrap();
    assert_eq!(
        stmt,
        Statement::Grant(Grant(
            PermissionSet::Named(Permission("SELECT".to_string())),
            Resource::Keyspace(Keyspace(ident("ks"))),
            User::Named(ident("bob"))
        ))
    );
}

#[test]
fn grant_all_permissions_keyword_is_optional() {
    let a = parse("GRANT ALL ON ALL KEYSPACES TO bob", Rule::Grant).unwrap();
    let b = parse(
        "GRANT ALL PERMISSIONS ON ALL KEYSPACES TO bob",
        Rule::Grant,
    )
    .unwrap();
    assert_eq!(a, b);
    assert!(matches!(
        a,
        Statement::Grant(Grant(PermissionSet::All(_), Resource::AllKeyspaces(_), _))
    ));
}

#[test]
fn list_users_statement() {
    let stmt = parse("LIST USERS", Rule::ListUsers).unwrap();
    assert_eq!(stmt, Statement::List(List(ListTarget::Users(Users))));
}

#[test]
fn alter_keyspace_with_properties() {
    let stmt = parse(
        "ALTER KEYSPACE ks WITH durable_writes = false",
        Rule::AlterKeyspace,
    )
    .unwrap();
    let Statement::AlterKeyspace(AlterKeyspace(Keyspace(name), Properties(props))) = stmt else {
        panic!("unexpected statement");
    };
    assert_eq!(name, ident("ks"));
    assert_eq!(props[0].1, Term::Boolean(false));
}

#[test]
fn batch_with_mixed_statement_kinds_and_using_timestamp() {
    let stmt = parse(
        "BEGIN BATCH USING TIMESTAMP 42 \
         INSERT INTO t (a) VALUES (1); \
         UPDATE t SET a = 2 WHERE a = 1; \
         DELETE FROM t WHERE a = 3 \
         APPLY BATCH",
        Rule::Batch,
    )
    .unwrap();
    let Statement::Batch(Batch(logged, using, children)) = stmt else {
        panic!("unexpected statement");
    };
    assert!(logged);
    assert_eq!(using, vec![UsingOption::Timestamp(Timestamp(42))]);
    assert_eq!(children.len(), 3);
    assert!(matches!(children[0], BatchChild::Insert(_)));
    assert!(matches!(children[1], BatchChild::Update(_)));
    assert!(matches!(children[2], BatchChild::Delete(_)));
}

#[test]
fn generic_statement_rule_dispatches_on_leading_keyword() {
    for (input, matches_variant) in [
        ("SELECT * FROM t", "select" as &str),
        ("INSERT INTO t (a) VALUES (1)", "insert"),
        ("DELETE FROM t WHERE a = 1", "delete"),
        ("USE ks", "use"),
        ("CREATE KEYSPACE ks WITH r = 1", "create_keyspace"),
        ("DROP TABLE t", "drop"),
        ("LIST USERS", "list"),
    ] {
        let stmt = parse(input, Rule::Statement).unwrap_or_else(|e| {
            panic!("expected {input:?} to parse as a statement, got {e}")
        });
        let kind = match stmt {
            Statement::Select(_) => "select",
            Statement::Insert(_) => "insert",
            Statement::Delete(_) => "delete",
            Statement::Use(_) => "use",
            Statement::CreateKeyspace(_) => "create_keyspace",
            Statement::Drop(_) => "drop",
            Statement::List(_) => "list",
            _ => "other",
        };
        assert_eq!(kind, matches_variant, "for input {input:?}");
    }
}

#[test]
fn unreserved_keyword_usable_as_column_name() {
    // `key`, `count`, `ttl` etc. are unreserved and may appear as identifiers.
    let stmt = parse("SELECT key, count, ttl FROM tbl", Rule::Select).unwrap();
    let Statement::Select(Select(Selectors::List(selectors), ..)) = stmt else {
        panic!("unexpected statement");
    };
    assert_eq!(selectors.len(), 3);
}

#[test]
fn malformed_input_is_a_parse_error_not_a_panic() {
    assert!(parse("SELECT FROM", Rule::Select).is_err());
    assert!(parse("INSERT INTO t (a) VALUES", Rule::Insert).is_err());
    assert!(parse("", Rule::Select).is_err());
}
