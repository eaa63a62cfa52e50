use chrono::{Local, NaiveDateTime, TimeZone};
use sql_literal::prelude::*;
use sql_literal::sql_format;

#[test]
fn substitutes_placeholders() {
    let sql = format(
        "select * from t where name=? and age=?",
        &[SqlValue::from("t'est"), SqlValue::from(10)],
    );
    assert_eq!(sql, r"select * from t where name='t\'est' and age=10");

    let sql = format("? and ?", &[SqlValue::from("a"), SqlValue::from("b")]);
    assert_eq!(sql, "'a' and 'b'");
}

#[test]
fn mismatched_counts() {
    assert_eq!(format("? and ?", &[SqlValue::from("a")]), "'a' and ?");
    assert_eq!(format("a", &[SqlValue::from("unused")]), "a");
    assert_eq!(format("select ?", &[]), "select ?");
}

#[test]
fn in_clauses() {
    assert_eq!(format("in (?)", &[SqlValue::from(vec![1, 2, 3])]), "in (1,2,3)");
    assert_eq!(
        format("in (?)", &[SqlValue::from(vec!["1", "2", "3"])]),
        "in ('1','2','3')"
    );
    assert_eq!(sql_format!("in (?)", [1, 2]), "in (1,2)");
}

#[test]
fn timestamps_use_local_zone_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let naive = NaiveDateTime::parse_from_str("2021-01-01 15:00:09", "%Y-%m-%d %H:%M:%S")?;
    let local = Local
        .from_local_datetime(&naive)
        .single()
        .ok_or("ambiguous local time")?;

    assert_eq!(format("a=?", &[SqlValue::from(local)]), "a='2021-01-01 15:00:09'");
    Ok(())
}

#[test]
fn zone_applies_to_every_placeholder() -> Result<(), Box<dyn std::error::Error>> {
    let first = chrono::DateTime::parse_from_rfc3339("2021-01-01T00:00:00+01:00")?;
    let second = chrono::DateTime::parse_from_rfc3339("2021-01-01T00:00:00-01:00")?;
    let values = [
        SqlValue::from(first),
        SqlValue::list([SqlValue::from(second), SqlValue::from(Some(first))]),
    ];

    assert_eq!(
        format_in_zone("a=? and b in (?)", Some(Zone::Utc), &values),
        "a='2020-12-31 23:00:00' and b in ('2021-01-01 01:00:00','2020-12-31 23:00:00')"
    );
    assert_eq!(
        format_in_zone("a=?", None, &values),
        "a='2021-01-01 00:00:00'"
    );
    Ok(())
}

#[test]
fn placeholder_counting_matches_substitution() {
    let template = "update t set a=?, b=? where id=?";
    assert_eq!(placeholder_count(template), 3);
    let sql = sql_format!(template, 1, 2, 3);
    assert_eq!(sql, "update t set a=1, b=2 where id=3");
}
