use indexmap::IndexMap;
use myqb::error::{INCOMPLETE_UPDATE_KEY, NOT_EMPTY_PARAM_KEY};
use myqb::{Conditions, QbError, QueryBuilder, Row, StaticTranslator, UpdateSpec};

fn translator() -> StaticTranslator {
    StaticTranslator::new()
        .with(NOT_EMPTY_PARAM_KEY, "::params:: cannot be empty")
        .with(
            INCOMPLETE_UPDATE_KEY,
            "update #::spec:: does not set ::column::",
        )
}

#[test]
fn construction_error_names_the_field() {
    let err = QueryBuilder::new("", "table").unwrap_err();
    assert_eq!(err.localized(&translator(), None), "database cannot be empty");

    let err = QueryBuilder::new("db", "").unwrap_err();
    assert_eq!(err.localized(&translator(), Some("en")), "table cannot be empty");
}

#[test]
fn missing_data_is_translated() {
    let qb = QueryBuilder::new("db", "table").unwrap();
    let err = qb.insert().unwrap_err();
    assert!(matches!(err, QbError::MissingArgument("data")));
    assert_eq!(err.localized(&translator(), None), "data cannot be empty");
}

#[test]
fn incomplete_bulk_update_is_translated() {
    let mut qb = QueryBuilder::new("db", "table").unwrap();
    qb.append_update(UpdateSpec::new(
        Conditions::new().with("id", 1),
        Row::new().with("a", 1).with("b", 2),
    ))
    .append_update(UpdateSpec::new(
        Conditions::new().with("id", 2),
        Row::new().with("a", 3),
    ));
    let err = qb.update_bulk().unwrap_err();
    assert_eq!(err.localized(&translator(), None), "update #1 does not set b");
}

#[test]
fn closure_translator_sees_locale() {
    let seen = |key: &str, locale: Option<&str>, params: &IndexMap<String, String>| {
        format!("[{}] {} {:?}", locale.unwrap_or("default"), key, params)
    };
    let err = QbError::missing("data");
    assert_eq!(
        err.localized(&seen, Some("fr")),
        r#"[fr] exception.NotEmptyParam {"::params::": "data"}"#
    );
}
