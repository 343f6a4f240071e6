//! End-to-end checks over small in-memory frames.

use polars::prelude::{DataFrame, NamedFrom, Series};

use dq_model::{ColumnStats, IssueKind, Severity, ValueCount};
use dq_profile::{detect, missing_counts, profile, run_checks};

fn age_city_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("age".into(), vec![Some(25.0), Some(30.0), None, Some(200.0)]).into(),
        Series::new("city".into(), vec![Some("A"), Some("B"), Some("A"), None]).into(),
    ])
    .unwrap()
}

#[test]
fn profiles_numeric_and_categorical_columns() {
    let df = age_city_frame();
    let profile = profile(&df);

    assert_eq!(profile.rows, 4);
    assert_eq!(profile.cols, 2);
    assert_eq!(profile.duplicate_rows, 0);

    let age = &profile.columns[0];
    assert_eq!(age.name, "age");
    assert_eq!(age.missing, 1);
    assert_eq!(age.missing_pct, 25.0);
    assert_eq!(age.unique, 3);
    let stats = age.stats.as_numeric().unwrap();
    assert_eq!(stats.min, Some(25.0));
    assert_eq!(stats.max, Some(200.0));
    assert_eq!(stats.mean, Some(85.0));
    // Linear-interpolation quartiles over [25, 30, 200]: q1=27.5, q3=115,
    // so the capping interval is [-103.75, 246.25] and 200 sits inside it.
    assert_eq!(stats.outliers_iqr, 0);

    let city = &profile.columns[1];
    assert_eq!(city.missing, 1);
    assert_eq!(city.unique, 2);
    match &city.stats {
        ColumnStats::Categorical(stats) => {
            assert_eq!(
                stats.top_values,
                vec![
                    ValueCount {
                        value: "A".to_string(),
                        count: 2
                    },
                    ValueCount {
                        value: "B".to_string(),
                        count: 1
                    },
                ]
            );
        }
        other => panic!("expected categorical stats, got {other:?}"),
    }
}

#[test]
fn flags_a_far_outlier() {
    let df = DataFrame::new(vec![
        Series::new("x".into(), vec![1.0, 2.0, 3.0, 4.0, 100.0]).into(),
    ])
    .unwrap();
    let profile = profile(&df);
    let stats = profile.columns[0].stats.as_numeric().unwrap();
    // q1=2, q3=4, iqr=2 -> bounds [-1, 7]; only 100 falls outside.
    assert_eq!(stats.outliers_iqr, 1);

    let issues = detect(&profile);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::Outliers);
    assert_eq!(issues[0].severity, Severity::Info);
    assert_eq!(issues[0].message, "1 potential outliers in x by IQR rule");
}

#[test]
fn zero_spread_column_has_no_outliers() {
    let df = DataFrame::new(vec![
        Series::new("x".into(), vec![5.0, 5.0, 5.0, 5.0]).into(),
    ])
    .unwrap();
    let profile = profile(&df);
    let stats = profile.columns[0].stats.as_numeric().unwrap();
    assert_eq!(stats.outliers_iqr, 0);
}

#[test]
fn all_missing_numeric_column_has_null_stats() {
    let df = DataFrame::new(vec![
        Series::new("x".into(), vec![None::<f64>, None, None]).into(),
    ])
    .unwrap();
    let profile = profile(&df);
    let column = &profile.columns[0];
    assert_eq!(column.missing, 3);
    assert_eq!(column.missing_pct, 100.0);
    assert_eq!(column.unique, 0);
    let stats = column.stats.as_numeric().unwrap();
    assert_eq!(stats.min, None);
    assert_eq!(stats.mean, None);
    assert_eq!(stats.std, None);
    assert_eq!(stats.p05, None);
    assert_eq!(stats.outliers_iqr, 0);
}

#[test]
fn counts_repeated_rows_as_duplicates() {
    let df = DataFrame::new(vec![
        Series::new("a".into(), vec![1, 1, 1, 1, 2]).into(),
        Series::new("b".into(), vec!["x", "x", "x", "x", "y"]).into(),
    ])
    .unwrap();
    let profile = profile(&df);
    assert_eq!(profile.duplicate_rows, 3);

    let issues = detect(&profile);
    assert_eq!(issues[0].kind, IssueKind::Duplicates);
    assert_eq!(issues[0].message, "3 duplicate rows detected");
}

#[test]
fn string_date_column_profiles_as_temporal() {
    let df = DataFrame::new(vec![
        Series::new(
            "visit".into(),
            vec![Some("2024-02-01"), Some("2023-11-20"), None],
        )
        .into(),
    ])
    .unwrap();
    let profile = profile(&df);
    match &profile.columns[0].stats {
        ColumnStats::Temporal(stats) => {
            assert_eq!(stats.min_date.as_deref(), Some("2023-11-20"));
            assert_eq!(stats.max_date.as_deref(), Some("2024-02-01"));
        }
        other => panic!("expected temporal stats, got {other:?}"),
    }
}

#[test]
fn empty_frame_profiles_without_division_by_zero() {
    let df = DataFrame::new(vec![
        Series::new("a".into(), Vec::<f64>::new()).into(),
        Series::new("b".into(), Vec::<String>::new()).into(),
    ])
    .unwrap();
    let report = run_checks(&df);
    assert_eq!(report.profile.rows, 0);
    assert_eq!(report.profile.duplicate_rows, 0);
    for column in &report.profile.columns {
        assert_eq!(column.missing_pct, 0.0);
    }
    assert!(report.issues.is_empty());
}

#[test]
fn missing_pct_stays_bounded() {
    let df = DataFrame::new(vec![
        Series::new("a".into(), vec![Some(1.0), None, None, None, None]).into(),
        Series::new("b".into(), vec![Some("x"), Some("y"), Some("z"), Some("w"), Some("v")]).into(),
    ])
    .unwrap();
    let profile = profile(&df);
    for column in &profile.columns {
        assert!(column.missing_pct >= 0.0 && column.missing_pct <= 100.0);
        assert_eq!(column.missing_pct == 0.0, column.missing == 0);
    }
}

#[test]
fn missing_counts_follow_column_order() {
    let df = age_city_frame();
    assert_eq!(
        missing_counts(&df),
        vec![("age".to_string(), 1), ("city".to_string(), 1)]
    );
}

#[test]
fn issue_order_is_stable() {
    let df = DataFrame::new(vec![
        Series::new("a".into(), vec![Some(1.0), Some(3.0), None, Some(100.0), Some(2.0)]).into(),
        Series::new("b".into(), vec![Some("x"), Some("x"), Some("x"), None, None]).into(),
    ])
    .unwrap();
    let report = run_checks(&df);
    let kinds: Vec<IssueKind> = report.issues.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            IssueKind::MissingValues,
            IssueKind::Outliers,
            IssueKind::MissingValues,
        ]
    );
    assert_eq!(report.issues[0].column.as_deref(), Some("a"));
    assert_eq!(report.issues[2].column.as_deref(), Some("b"));
}
