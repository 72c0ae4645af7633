//! End-to-end behaviour of predicate building and clause aggregation.

use model::core::{comparison::ComparisonMode, value::Value, value_kind::ValueKind};
use planner::{
    filter::{
        column::FilterColumn,
        param::SqlParam,
        predicate::{Predicate, build_predicate},
        set::FilterSet,
    },
    query::dialect::{Dialect, SqlServer},
};
use std::sync::Arc;

fn build(
    column: &FilterColumn,
    mode: ComparisonMode,
    value1: impl Into<Value>,
    value2: impl Into<Value>,
) -> Option<Predicate> {
    build_predicate(column, mode, &value1.into(), &value2.into(), &SqlServer)
        .expect("valid filter configuration")
}

/// A non-empty operand of the right shape for `kind`.
fn sample(kind: ValueKind) -> Value {
    match kind {
        ValueKind::Boolean => Value::Boolean(true),
        ValueKind::Date => Value::from("2024-06-30"),
        ValueKind::Number => Value::Int(7),
        ValueKind::Text => Value::from("abc"),
        ValueKind::NumberList => Value::from(vec![1i64, 2]),
        ValueKind::TextList => Value::from(vec!["a", "b"]),
    }
}

#[test]
fn test_number_equal_with_coalesce() {
    let column = FilterColumn::new("age", ValueKind::Number);
    let predicate = build(&column, ComparisonMode::Equal, 30i64, Value::Null).unwrap();

    assert_eq!(predicate.sql, "coalesce(age, 0) = @age1");
    assert_eq!(predicate.params, vec![SqlParam::new("@age1", Value::Int(30))]);
}

#[test]
fn test_text_contains_folds_both_sides() {
    let column = FilterColumn::new("name", ValueKind::Text);
    let predicate = build(&column, ComparisonMode::Contains, "john", Value::Null).unwrap();

    assert_eq!(
        predicate.sql,
        "lower(coalesce(name, '')) like lower(concat('%', @name1, '%'))"
    );
    // The bound value itself is passed through as given.
    assert_eq!(predicate.params, vec![SqlParam::new("@name1", Value::from("john"))]);
}

#[test]
fn test_text_contains_column_only_folding() {
    #[derive(Debug)]
    struct ColumnOnlyFolding;

    impl Dialect for ColumnOnlyFolding {
        fn name(&self) -> String {
            "column-only".into()
        }

        fn param_marker(&self) -> &'static str {
            "@"
        }

        fn fold_bound_parameters(&self) -> bool {
            false
        }
    }

    let column = FilterColumn::new("name", ValueKind::Text);
    let predicate = build_predicate(
        &column,
        ComparisonMode::Contains,
        &"john".into(),
        &Value::Null,
        &ColumnOnlyFolding,
    )
    .unwrap()
    .unwrap();

    assert_eq!(
        predicate.sql,
        "lower(coalesce(name, '')) like concat('%', @name1, '%')"
    );
}

#[test]
fn test_date_between_null_sensitive() {
    let column = FilterColumn::new("created_at", ValueKind::Date).null_sensitive(true);
    let predicate = build(
        &column,
        ComparisonMode::Between,
        "2024-01-01",
        "2024-12-31",
    )
    .unwrap();

    // The underscore is not a letter or digit, so it is dropped from the prefix.
    assert_eq!(predicate.sql, "created_at between @createdat1 and @createdat2");
    assert_eq!(
        predicate.params,
        vec![
            SqlParam::new("@createdat1", Value::from("2024-01-01")),
            SqlParam::new("@createdat2", Value::from("2024-12-31")),
        ]
    );
}

#[test]
fn test_text_list_in() {
    let case_insensitive = FilterColumn::new("status", ValueKind::TextList);
    let predicate = build(
        &case_insensitive,
        ComparisonMode::In,
        vec!["A", "B"],
        Value::Null,
    )
    .unwrap();
    assert_eq!(
        predicate.sql,
        "lower(coalesce(status, '')) in (lower('A'),lower('B'))"
    );
    assert!(predicate.params.is_empty());

    let case_sensitive = case_insensitive.case_sensitive(true);
    let predicate = build(&case_sensitive, ComparisonMode::In, vec!["A", "B"], Value::Null).unwrap();
    assert_eq!(predicate.sql, "coalesce(status, '') in ('A','B')");
}

#[test]
fn test_is_null_is_exempt_from_null_values() {
    let column = FilterColumn::new("note", ValueKind::Text).null_sensitive(true);

    let predicate = build(&column, ComparisonMode::IsNull, Value::Null, Value::Null).unwrap();
    assert_eq!(predicate.sql, "note is null");
    assert!(predicate.params.is_empty());

    let predicate = build(&column, ComparisonMode::IsNotNull, Value::Null, Value::Null).unwrap();
    assert_eq!(predicate.sql, "note is not null");
}

#[test]
fn test_aggregate_skips_inactive_entries() {
    let mut filters = FilterSet::new(Arc::new(SqlServer));
    filters
        .add_column("age", FilterColumn::new("age", ValueKind::Number))
        .set_value1(30i64)
        .unwrap();
    filters.add_column("name", FilterColumn::new("name", ValueKind::Text));

    let clause = filters.aggregate();
    assert_eq!(clause.sql, "coalesce(age, 0) = @age1");
    assert_eq!(clause.params, vec![SqlParam::new("@age1", Value::Int(30))]);
}

#[test]
fn test_every_valid_pair_binds_its_placeholders_once() {
    for kind in ValueKind::ALL {
        let column = FilterColumn::new("col", kind);
        for mode in kind.modes(false) {
            let predicate = build(&column, mode, sample(kind), sample(kind))
                .unwrap_or_else(|| panic!("{kind}/{mode} should be active"));

            if kind.is_list() {
                assert!(predicate.params.is_empty(), "{kind}/{mode}");
                continue;
            }

            assert_eq!(predicate.sql.matches("@col1").count(), 1, "{kind}/{mode}");
            let expected_second = usize::from(mode == ComparisonMode::Between);
            assert_eq!(
                predicate.sql.matches("@col2").count(),
                expected_second,
                "{kind}/{mode}"
            );
            assert_eq!(predicate.params.len(), 1 + expected_second, "{kind}/{mode}");
        }
    }
}

#[test]
fn test_null_result_rule_for_every_kind() {
    for kind in ValueKind::ALL {
        let column = FilterColumn::new("col", kind);
        for mode in kind.modes(false) {
            assert!(build(&column, mode, Value::Null, sample(kind)).is_none());
        }

        if kind.is_list() {
            let empty = Value::List(vec![]);
            assert!(build(&column, ComparisonMode::In, empty.clone(), Value::Null).is_none());
            assert!(build(&column, ComparisonMode::NotIn, empty, Value::Null).is_none());
        }
    }

    for kind in [ValueKind::Date, ValueKind::Number] {
        let column = FilterColumn::new("col", kind);
        assert!(build(&column, ComparisonMode::Between, sample(kind), Value::Null).is_none());
    }
}

#[test]
fn test_case_folding_only_for_insensitive_text() {
    for kind in ValueKind::ALL {
        let mode = kind.default_mode();
        let insensitive = FilterColumn::new("col", kind);
        let sensitive = FilterColumn::new("col", kind).case_sensitive(true);

        let folded = build(&insensitive, mode, sample(kind), Value::Null).unwrap();
        let plain = build(&sensitive, mode, sample(kind), Value::Null).unwrap();

        assert_eq!(folded.sql.contains("lower("), kind.is_textual(), "{kind}");
        assert!(!plain.sql.contains("lower("), "{kind}");
    }
}

#[test]
fn test_coalesce_defaults_match_kind() {
    let expected = [
        (ValueKind::Boolean, "coalesce(col, 0)"),
        (ValueKind::Date, "coalesce(col, '1900-01-01')"),
        (ValueKind::Number, "coalesce(col, 0)"),
        (ValueKind::Text, "coalesce(col, '')"),
        (ValueKind::NumberList, "coalesce(col, 0)"),
        (ValueKind::TextList, "coalesce(col, '')"),
    ];

    for (kind, fragment) in expected {
        let column = FilterColumn::new("col", kind);
        let predicate = build(&column, kind.default_mode(), sample(kind), Value::Null).unwrap();
        assert!(predicate.sql.contains(fragment), "{}", predicate.sql);

        let null_sensitive = column.null_sensitive(true);
        let predicate =
            build(&null_sensitive, kind.default_mode(), sample(kind), Value::Null).unwrap();
        assert!(!predicate.sql.contains("coalesce("), "{}", predicate.sql);
    }
}

#[test]
fn test_aggregate_joins_with_n_minus_one_ands() {
    let mut filters = FilterSet::new(Arc::new(SqlServer));
    for name in ["a", "b", "c", "d"] {
        filters
            .add_column(name, FilterColumn::new(name, ValueKind::Number))
            .set_value1(1i64)
            .unwrap();
    }

    let clause = filters.aggregate();
    assert_eq!(clause.sql.matches(" and ").count(), 3);
    assert!(!clause.sql.starts_with("and "));
    assert!(clause.sql.starts_with("coalesce(a, 0)"));
    assert_eq!(clause.params.len(), 4);
    assert_eq!(filters.aggregate(), clause);
}

#[test]
fn test_reset_reproduces_default_fragment() {
    let mut filters = FilterSet::new(Arc::new(SqlServer));
    let entry = filters
        .add_column("price", FilterColumn::new("price", ValueKind::Number))
        .clone()
        .with_defaults(Some(ComparisonMode::GreaterEqual), 100i64, Value::Null)
        .unwrap();
    filters.insert("price", entry).unwrap();
    let original = filters.aggregate();

    let entry = filters.get_mut("price").unwrap();
    entry.set_mode(Some(ComparisonMode::Between)).unwrap();
    entry.set_values(5i64, 10i64).unwrap();
    assert_ne!(filters.aggregate(), original);

    filters.reset().unwrap();
    assert_eq!(filters.aggregate(), original);
}

#[test]
fn test_empty_column_expression_yields_bare_marker() {
    let column = FilterColumn::new("", ValueKind::Number).null_sensitive(true);
    let predicate = build(&column, ComparisonMode::Equal, 1i64, Value::Null).unwrap();
    assert_eq!(predicate.sql, " = @1");
    assert_eq!(predicate.params[0].name, "@1");
}
