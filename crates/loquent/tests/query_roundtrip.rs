//! End-to-end statement building and result shaping against a scripted
//! driver: the markets/cities scenarios.

mod support;

use asupersync::runtime::RuntimeBuilder;
use loquent::prelude::*;
use support::{ScriptedExec, row, unwrap_outcome};

fn markets() -> Table {
    Table::new("markets")
}

fn cities() -> Table {
    Table::new("cities")
        .with_relation("markets", Relation::has_many("markets", "city_id", "id"))
}

#[test]
fn insert_then_select_by_id_round_trip() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = markets();
    let exec = ScriptedExec::new();

    exec.push_insert_id(1);
    exec.push_rows(vec![row(&[
        ("id", Value::Int(1)),
        ("city_id", Value::Int(1)),
        ("title", Value::Text("Test market 1".into())),
    ])]);

    rt.block_on(async {
        let id = unwrap_outcome(
            Query::new(&table, &exec)
                .set("city_id", 1_i64)
                .set("title", "Test market 1")
                .insert(&cx)
                .await,
        );
        assert_eq!(id, 1);

        let found = unwrap_outcome(Query::new(&table, &exec).by_id(id).first(&cx).await)
            .expect("row should be found");
        assert_eq!(found.try_get::<i64>("id").unwrap(), 1);
        assert_eq!(
            found.try_get::<String>("title").unwrap(),
            "Test market 1"
        );
    });

    let calls = exec.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0].0,
        "INSERT INTO markets (\"city_id\", \"title\") VALUES (?, ?)"
    );
    assert_eq!(
        calls[0].1,
        vec![Value::Int(1), Value::Text("Test market 1".into())]
    );
    assert_eq!(calls[1].0, "SELECT * FROM markets WHERE \"id\" = ? LIMIT 1");
    assert_eq!(calls[1].1, vec![Value::Int(1)]);
}

#[test]
fn first_with_no_match_resolves_to_none() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = markets();
    let exec = ScriptedExec::new();
    exec.push_rows(Vec::new());

    rt.block_on(async {
        let found = unwrap_outcome(
            Query::new(&table, &exec)
                .filter("id", "=", 99_i64)
                .first(&cx)
                .await,
        );
        assert!(found.is_none());
    });
}

#[test]
fn ordered_and_limited_select() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = markets();
    let exec = ScriptedExec::new();
    exec.push_rows(vec![
        row(&[("id", Value::Int(4)), ("title", Value::Text("Test market 4".into()))]),
        row(&[("id", Value::Int(3)), ("title", Value::Text("Test market 3".into()))]),
    ]);

    rt.block_on(async {
        let rows = unwrap_outcome(
            Query::new(&table, &exec)
                .select(&["id", "title"])
                .order_by("title", "desc")
                .limit(2)
                .all(&cx)
                .await,
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].try_get::<i64>("id").unwrap(), 4);
    });

    assert_eq!(
        exec.calls()[0].0,
        "SELECT \"id\", \"title\" FROM markets ORDER BY \"title\" desc LIMIT 2"
    );
}

#[test]
fn or_where_and_in_list_bind_all_values() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = markets();
    let exec = ScriptedExec::new();
    exec.push_rows(Vec::new());
    exec.push_rows(Vec::new());

    rt.block_on(async {
        unwrap_outcome(
            Query::new(&table, &exec)
                .filter("id", "=", 3_i64)
                .or_filter("id", "=", 2_i64)
                .order_by("title", "asc")
                .all(&cx)
                .await,
        );
        unwrap_outcome(
            Query::new(&table, &exec)
                .filter_in("id", [2_i64, 3])
                .order_by("title", "asc")
                .all(&cx)
                .await,
        );
    });

    let calls = exec.calls();
    assert_eq!(
        calls[0].0,
        "SELECT * FROM markets WHERE id = ? OR id = ? ORDER BY \"title\" asc"
    );
    assert_eq!(calls[0].1, vec![Value::Int(3), Value::Int(2)]);
    assert_eq!(
        calls[1].0,
        "SELECT * FROM markets WHERE id IN (?,?) ORDER BY \"title\" asc"
    );
    assert_eq!(calls[1].1, vec![Value::Int(2), Value::Int(3)]);
}

#[test]
fn nested_wheres_combined_with_where() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = markets();
    let exec = ScriptedExec::new();
    exec.push_rows(Vec::new());

    rt.block_on(async {
        unwrap_outcome(
            Query::new(&table, &exec)
                .filter("city_id", "=", 1_i64)
                .filter_nested(|q| {
                    q.and("id", "=", 2_i64).or("id", "=", 3_i64);
                })
                .order_by("title", "asc")
                .all(&cx)
                .await,
        );
    });

    let (sql, params) = exec.calls().remove(0);
    assert_eq!(
        sql,
        "SELECT * FROM markets WHERE city_id = ? AND ( id = ? OR id = ? ) \
         ORDER BY \"title\" asc"
    );
    assert_eq!(params, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert_eq!(sql.matches('?').count(), params.len());
}

#[test]
fn aliased_join_selects_qualified_star() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = markets();
    let exec = ScriptedExec::new();
    exec.push_rows(Vec::new());

    rt.block_on(async {
        unwrap_outcome(
            Query::new(&table, &exec)
                .alias("m")
                .join("cities AS c", "c.id", "=", "m.city_id")
                .select(&["m.*"])
                .order_by("m.title", "asc")
                .all(&cx)
                .await,
        );
    });

    assert_eq!(
        exec.calls()[0].0,
        "SELECT \"m\".* FROM markets AS m \
         INNER JOIN cities AS c ON \"c\".\"id\" = \"m\".\"city_id\" \
         ORDER BY \"m\".\"title\" asc"
    );
}

#[test]
fn update_reports_whether_rows_matched() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = markets();
    let exec = ScriptedExec::new();
    exec.push_affected(1);
    exec.push_affected(0);

    rt.block_on(async {
        let hit = unwrap_outcome(
            Query::new(&table, &exec)
                .set("title", "Test market 3 (updated)")
                .filter("id", "=", 3_i64)
                .update(&cx)
                .await,
        );
        assert!(hit);

        // Matching nothing is a successful false, not an error.
        let miss = unwrap_outcome(
            Query::new(&table, &exec)
                .set("title", "Does not exist")
                .filter("id", "=", 6_i64)
                .update(&cx)
                .await,
        );
        assert!(!miss);
    });

    let calls = exec.calls();
    assert_eq!(calls[0].0, "UPDATE markets SET title = ? WHERE id = ?");
    assert_eq!(
        calls[0].1,
        vec![Value::Text("Test market 3 (updated)".into()), Value::Int(3)]
    );
}

#[test]
fn remove_and_empty_shape_results() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = markets();
    let exec = ScriptedExec::new();
    exec.push_affected(1);
    exec.push_affected(4);

    rt.block_on(async {
        let removed = unwrap_outcome(
            Query::new(&table, &exec)
                .filter("id", "=", 3_i64)
                .remove(&cx)
                .await,
        );
        assert!(removed);

        let emptied = unwrap_outcome(Query::new(&table, &exec).empty(&cx).await);
        assert_eq!(emptied, 4);
    });

    let calls = exec.calls();
    assert_eq!(calls[0].0, "DELETE FROM markets WHERE id = ?");
    assert_eq!(calls[1].0, "DELETE FROM markets");
    assert!(calls[1].1.is_empty());
}

#[test]
fn driver_failure_carries_statement_context() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = markets();
    let exec = ScriptedExec::new();
    exec.push_error("database is locked");

    rt.block_on(async {
        let outcome = Query::new(&table, &exec)
            .filter("id", "=", 1_i64)
            .all(&cx)
            .await;
        match outcome {
            Outcome::Err(Error::Execution(e)) => {
                assert_eq!(e.message, "database is locked");
                assert_eq!(e.sql, "SELECT * FROM markets WHERE id = ?");
                assert_eq!(e.params, vec![Value::Int(1)]);
            }
            other => panic!("expected execution error, got {other:?}"),
        }
    });
}

#[test]
fn registered_mutator_transforms_set_values() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();

    fn title_mutator(value: Value) -> Value {
        match value {
            Value::Text(s) => Value::Text(format!("{s} Sven")),
            other => other,
        }
    }

    let table = Table::new("markets").with_mutator("title", title_mutator);
    let exec = ScriptedExec::new();
    exec.push_insert_id(1);

    rt.block_on(async {
        unwrap_outcome(
            Query::new(&table, &exec)
                .set("city_id", 1_i64)
                .set("title", "Test")
                .insert(&cx)
                .await,
        );
    });

    assert_eq!(
        exec.calls()[0].1,
        vec![Value::Int(1), Value::Text("Test Sven".into())]
    );
}

#[test]
fn all_related_hands_back_rows_and_relation_descriptors() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = cities();
    let exec = ScriptedExec::new();
    exec.push_rows(vec![row(&[
        ("id", Value::Int(1)),
        ("title", Value::Text("Rotterdam".into())),
    ])]);

    rt.block_on(async {
        let (rows, relations) = unwrap_outcome(
            Query::new(&table, &exec)
                .include("markets")
                .all_related(&cx)
                .await,
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].kind, RelationKind::HasMany);
        assert_eq!(relations[0].related_table, "markets");
        assert_eq!(relations[0].foreign_key, "city_id");
    });
}

#[test]
fn unknown_relation_fails_before_dispatch() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = cities();
    let exec = ScriptedExec::new();

    rt.block_on(async {
        let outcome = Query::new(&table, &exec)
            .include("owners")
            .all_related(&cx)
            .await;
        match outcome {
            Outcome::Err(Error::Custom(msg)) => assert!(msg.contains("owners")),
            other => panic!("expected custom error, got {other:?}"),
        }
    });

    assert_eq!(exec.call_count(), 0);
}

#[test]
fn raw_bypasses_the_renderer() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = markets();
    let exec = ScriptedExec::new();
    exec.push_rows(Vec::new());

    rt.block_on(async {
        unwrap_outcome(
            Query::new(&table, &exec)
                .raw(
                    &cx,
                    "SELECT COUNT(*) AS n FROM markets WHERE city_id = ?",
                    vec![Value::Int(1)],
                )
                .await,
        );
    });

    let calls = exec.calls();
    assert_eq!(
        calls[0].0,
        "SELECT COUNT(*) AS n FROM markets WHERE city_id = ?"
    );
    assert_eq!(calls[0].1, vec![Value::Int(1)]);
}

#[test]
fn sequential_inserts_run_in_order() {
    let rt = RuntimeBuilder::current_thread().build().expect("runtime");
    let cx = Cx::for_testing();
    let table = markets();
    let exec = ScriptedExec::new();
    exec.push_insert_id(2);
    exec.push_insert_id(3);
    exec.push_insert_id(4);

    rt.block_on(async {
        let titles = ["Test market 2", "Test market 3", "Test market 4"];
        let tasks = titles.map(|title| {
            Query::new(&table, &exec)
                .set("city_id", 1_i64)
                .set("title", title)
                .insert(&cx)
        });

        let ids = unwrap_outcome(run_sequence(tasks).await);
        assert_eq!(ids, vec![2, 3, 4]);
    });

    let titles: Vec<Value> = exec
        .calls()
        .iter()
        .map(|(_, params)| params[1].clone())
        .collect();
    assert_eq!(
        titles,
        vec![
            Value::Text("Test market 2".into()),
            Value::Text("Test market 3".into()),
            Value::Text("Test market 4".into()),
        ]
    );
}
