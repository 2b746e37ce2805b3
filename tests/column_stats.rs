use colstats::{ColumnKind, ColumnStats, Value};

fn stats_over(values: &[Value]) -> ColumnStats {
    let mut acc = ColumnStats::new();
    for v in values {
        acc.add(v);
    }
    acc
}

#[test]
fn empty_column_has_zero_count_and_nothing_else() {
    let summary = ColumnStats::new().summary();
    assert_eq!(summary.count, 0);
    assert_eq!(summary.min, None);
    assert_eq!(summary.max, None);
    assert_eq!(summary.sum, None);
    assert_eq!(summary.mean, None);
    assert_eq!(summary.count_non_zero, None);
}

#[test]
fn aggregates_integers() {
    let acc = stats_over(&[Value::Int(1), Value::Int(2), Value::Int(10), Value::Int(11)]);
    let summary = acc.summary();
    assert_eq!(acc.kind(), Some(ColumnKind::Numeric));
    assert_eq!(summary.count, 4);
    assert_eq!(summary.min, Some(1.0));
    assert_eq!(summary.max, Some(11.0));
    assert_eq!(summary.sum, Some(24.0));
    assert_eq!(summary.mean, Some(6.0));
}

#[test]
fn excludes_nulls_from_all_aggregates() {
    let acc = stats_over(&[Value::Int(1), Value::Int(2), Value::Null, Value::Int(11)]);
    let summary = acc.summary();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.sum, Some(14.0));
    assert_eq!(summary.mean, Some(14.0 / 3.0));
}

#[test]
fn coerces_boolean_text_to_zero_one() {
    let acc = stats_over(&[
        Value::from("true"),
        Value::from("false"),
        Value::from("true"),
        Value::from("true"),
    ]);
    let summary = acc.summary();
    assert_eq!(acc.kind(), Some(ColumnKind::Boolean));
    assert_eq!(summary.count, 4);
    assert_eq!(summary.count_non_zero, Some(3));
    assert_eq!(summary.count_zero, Some(1));
    assert_eq!(summary.sum, Some(3.0));
    assert_eq!(summary.min, Some(0.0));
    assert_eq!(summary.max, Some(1.0));
}

#[test]
fn mean_keeps_zeros_but_mean_non_zero_does_not() {
    let acc = stats_over(&[Value::Int(1), Value::Int(2), Value::Int(0), Value::Int(11)]);
    let summary = acc.summary();
    assert_eq!(summary.mean, Some(14.0 / 4.0));
    assert_eq!(summary.mean_non_zero, Some(14.0 / 3.0));
    assert_eq!(summary.count_zero, Some(1));
    assert_eq!(summary.count_non_zero, Some(3));
}

#[test]
fn mean_non_zero_is_absent_when_all_values_are_zero() {
    let acc = stats_over(&[Value::Int(0), Value::Int(0)]);
    let summary = acc.summary();
    assert_eq!(summary.mean, Some(0.0));
    assert_eq!(summary.mean_non_zero, None);
}

#[test]
fn generic_columns_only_count() {
    let acc = stats_over(&[
        Value::from("a1"),
        Value::from("a2"),
        Value::from("3"),
        Value::from("a4"),
    ]);
    let summary = acc.summary();
    assert_eq!(acc.kind(), Some(ColumnKind::Generic));
    assert_eq!(summary.count, 4);
    assert_eq!(summary.count_non_zero, None);
    assert_eq!(summary.count_zero, None);
    assert_eq!(summary.sum, None);
    assert_eq!(summary.min, None);
    assert_eq!(summary.mean, None);
}

#[test]
fn one_boolean_text_among_free_text_stays_generic() {
    let acc = stats_over(&[
        Value::from("a1"),
        Value::from("a2"),
        Value::from("false"),
        Value::from("a4"),
    ]);
    let summary = acc.summary();
    assert_eq!(summary.count, 4);
    assert_eq!(summary.count_non_zero, None);
}

#[test]
fn merge_equals_single_pass() {
    let all = vec![
        Value::Int(1),
        Value::Int(2),
        Value::Null,
        Value::Int(0),
        Value::Int(11),
        Value::float(2.5),
    ];
    let whole = stats_over(&all);

    for split in 0..=all.len() {
        let mut left = stats_over(&all[..split]);
        let right = stats_over(&all[split..]);
        left.merge(right);
        assert_eq!(left, whole, "split at {split}");
    }
}

#[test]
fn empty_accumulator_is_the_merge_identity() {
    let acc = stats_over(&[Value::Int(3), Value::Int(4)]);

    let mut left = acc.clone();
    left.merge(ColumnStats::new());
    assert_eq!(left, acc);

    let mut right = ColumnStats::new();
    right.merge(acc.clone());
    assert_eq!(right, acc);
}

#[test]
fn booleans_then_numbers_merge_to_numeric() {
    let mut acc = stats_over(&[Value::from("true"), Value::from("false")]);
    acc.merge(stats_over(&[Value::Int(5)]));
    let summary = acc.summary();
    assert_eq!(acc.kind(), Some(ColumnKind::Numeric));
    assert_eq!(summary.count, 3);
    assert_eq!(summary.sum, Some(6.0));
    assert_eq!(summary.count_zero, Some(1));
}

#[test]
fn demotion_through_merge_hides_arithmetic_fields() {
    let mut acc = stats_over(&[Value::Int(1), Value::Int(2)]);
    acc.merge(stats_over(&[Value::from("not a number")]));
    let summary = acc.summary();
    assert_eq!(acc.kind(), Some(ColumnKind::Generic));
    assert_eq!(summary.count, 3);
    assert_eq!(summary.sum, None);
    assert_eq!(summary.mean, None);
}
