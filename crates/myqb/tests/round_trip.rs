use myqb::{BuilderConfig, Conditions, QueryBuilder, Row, Statement, UpdateSpec, Value};

fn assert_placeholders_match_binds(stmt: &Statement) {
    let mut in_sql: Vec<&str> = stmt.placeholders();
    in_sql.sort_unstable();
    in_sql.dedup();
    let mut bound: Vec<&str> = stmt.binds().names().collect();
    bound.sort_unstable();
    assert_eq!(in_sql, bound, "sql: {stmt}");
}

fn user_rows(n: i64) -> Vec<Row> {
    (1..=n)
        .map(|i| {
            Row::new()
                .with("name", format!("user {i}"))
                .with("score", i as f64 / 2.0)
                .with("active", i % 2 == 0)
                .with("deleted_at", Option::<&str>::None)
        })
        .collect()
}

#[test]
fn every_operation_binds_exactly_its_placeholders() {
    let mut qb = QueryBuilder::new("shop", "users").unwrap();
    qb.set_data(user_rows(5));
    assert_placeholders_match_binds(&qb.insert().unwrap());

    qb.clear_data()
        .append_column("name")
        .append_column("score")
        .append_to_join("LEFT JOIN `shop`.`orders` ON `orders`.`user_id` = `users`.`id`")
        .append_to_where("active", true)
        .append_to_where("tenant", "acme")
        .append_to_group("`users`.`id`")
        .append_to_having("order_count", 3)
        .append_to_order("`users`.`name` ASC")
        .set_limit(20)
        .set_offset(40);
    assert_placeholders_match_binds(&qb.select());
    assert_placeholders_match_binds(&qb.delete());

    qb.clear_data().append_value("active", false);
    assert_placeholders_match_binds(&qb.update().unwrap());

    qb.clear_data();
    for i in 0..3 {
        qb.append_update(UpdateSpec::new(
            Conditions::new().with("id", i).with("tenant", "acme"),
            Row::new().with("score", i * 10).with("name", format!("n{i}")),
        ));
    }
    assert_placeholders_match_binds(&qb.update_bulk().unwrap());
}

#[test]
fn insert_binds_are_row_major() {
    let mut qb = QueryBuilder::new("shop", "users").unwrap();
    qb.set_data(user_rows(2));
    let stmt = qb.insert().unwrap();
    let names: Vec<&str> = stmt.binds().names().collect();
    assert_eq!(
        names,
        vec![
            ":name_1",
            ":score_1",
            ":active_1",
            ":deleted_at_1",
            ":name_2",
            ":score_2",
            ":active_2",
            ":deleted_at_2",
        ]
    );
    let codes: Vec<u8> = stmt
        .binds()
        .iter()
        .take(4)
        .map(|(_, b)| b.hint.driver_code())
        .collect();
    assert_eq!(codes, vec![2, 1, 2, 2]);
}

#[test]
fn statement_serializes_for_a_driver() {
    let mut qb = QueryBuilder::new("db", "table").unwrap();
    qb.append_to_where("id", 1);
    let stmt = qb.delete();
    let json = serde_json::to_value(&stmt).unwrap();
    assert_eq!(json["kind"], "delete");
    assert_eq!(json["sql"], "DELETE FROM `db`.`table` WHERE `id` = :id");
    assert_eq!(json["binds"][":id"]["value"], 1);
    assert_eq!(json["binds"][":id"]["type"], 1);
}

#[test]
fn skip_missing_never_reuses_values_across_columns() {
    let mut qb = QueryBuilder::new("db", "table")
        .unwrap()
        .with_config(BuilderConfig::new().skip_missing_columns());
    qb.append_update(UpdateSpec::new(
        Conditions::new().with("id", 1),
        Row::new().with("a", "only-a"),
    ))
    .append_update(UpdateSpec::new(
        Conditions::new().with("id", 2),
        Row::new().with("b", "only-b"),
    ));
    let stmt = qb.update_bulk().unwrap();
    assert_eq!(
        stmt.sql(),
        "UPDATE `db`.`table` SET `a` = CASE WHEN `id` = :filter_1 THEN :bind_1 ELSE `a` END, `b` = CASE WHEN `id` = :filter_2 THEN :bind_2 ELSE `b` END"
    );
    let values: Vec<&Value> = stmt.binds().iter().map(|(_, b)| &b.value).collect();
    assert_eq!(
        values,
        vec![
            &Value::Int(1),
            &Value::from("only-a"),
            &Value::Int(2),
            &Value::from("only-b"),
        ]
    );
}
