use oraq::query::{BuildError, QueryDef, build_select};

fn def(raw: &str) -> QueryDef {
    QueryDef::from_json_str(raw).expect("valid definition JSON")
}

fn build(raw: &str) -> Result<String, BuildError> {
    build_select(&def(raw))
}

#[test]
fn empty_columns_select_all() {
    let sql = build(r#"{"table": "EMPLOYEES", "columns": []}"#).unwrap();
    assert_eq!(sql, "SELECT *\nFROM EMPLOYEES");
}

#[test]
fn missing_table_is_config_error() {
    let err = build(r#"{"columns": ["ID"]}"#).unwrap_err();
    assert!(matches!(err, BuildError::Config(_)), "got: {err}");
}

#[test]
fn empty_table_is_config_error() {
    let err = build(r#"{"table": "", "columns": ["ID"]}"#).unwrap_err();
    assert!(matches!(err, BuildError::Config(_)), "got: {err}");
}

#[test]
fn missing_columns_is_config_error() {
    let err = build(r#"{"table": "EMPLOYEES"}"#).unwrap_err();
    assert!(matches!(err, BuildError::Config(_)), "got: {err}");
}

#[test]
fn scalar_columns_is_config_error() {
    let err = build(r#"{"table": "EMPLOYEES", "columns": "ID"}"#).unwrap_err();
    assert!(matches!(err, BuildError::Config(_)), "got: {err}");
}

#[test]
fn non_string_column_name_is_config_error() {
    let err = build(r#"{"table": "EMPLOYEES", "columns": ["ID", 7]}"#).unwrap_err();
    assert!(matches!(err, BuildError::Config(_)), "got: {err}");
}

#[test]
fn in_with_empty_list_is_filter_error() {
    let err = build(
        r#"{"table": "T", "columns": [],
            "filters": [{"column": "JOB_ID", "operator": "IN", "value": []}]}"#,
    )
    .unwrap_err();
    match err {
        BuildError::Filter { column, .. } => assert_eq!(column, "JOB_ID"),
        other => panic!("expected filter error, got: {other}"),
    }
}

#[test]
fn in_with_scalar_value_is_filter_error() {
    let err = build(
        r#"{"table": "T", "columns": [],
            "filters": [{"column": "JOB_ID", "operator": "IN", "value": "IT_PROG"}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::Filter { .. }), "got: {err}");
}

#[test]
fn in_with_missing_value_is_filter_error() {
    let err = build(
        r#"{"table": "T", "columns": [],
            "filters": [{"column": "JOB_ID", "operator": "IN"}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::Filter { .. }), "got: {err}");
}

#[test]
fn between_needs_exactly_two_values() {
    for value in ["[1]", "[1, 2, 3]", "1"] {
        let raw = format!(
            r#"{{"table": "T", "columns": [],
                "filters": [{{"column": "SALARY", "operator": "BETWEEN", "value": {value}}}]}}"#
        );
        let err = build(&raw).unwrap_err();
        assert!(matches!(err, BuildError::Filter { .. }), "value {value}: {err}");
    }
}

#[test]
fn between_with_two_values_emits_range() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [{"column": "HIRE_DATE", "operator": "BETWEEN",
                         "value": ["2000-01-01", "2005-12-31"]}]}"#,
    )
    .unwrap();
    assert!(
        sql.contains("WHERE HIRE_DATE BETWEEN '2000-01-01' AND '2005-12-31'"),
        "got: {sql}"
    );
}

#[test]
fn in_list_emits_parenthesized_values() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [{"column": "JOB_ID", "operator": "IN", "value": ["IT_PROG", "SA_REP", 10]}]}"#,
    )
    .unwrap();
    assert!(
        sql.contains("WHERE JOB_ID IN ('IT_PROG', 'SA_REP', 10)"),
        "got: {sql}"
    );
}

#[test]
fn nested_group_is_parenthesized() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [
                {"column": "STATUS", "operator": "=", "value": "A"},
                {"logical_operator": "OR", "conditions": [
                    {"column": "REGION", "operator": "=", "value": "EU"},
                    {"column": "REGION", "operator": "=", "value": "US"}
                ]}
            ]}"#,
    )
    .unwrap();
    assert!(
        sql.contains("WHERE STATUS = 'A' AND (REGION = 'EU' OR REGION = 'US')"),
        "got: {sql}"
    );
}

#[test]
fn deeply_nested_groups_reflect_tree_depth() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [
                {"logical_operator": "AND", "conditions": [
                    {"column": "A", "operator": ">", "value": 1},
                    {"logical_operator": "OR", "conditions": [
                        {"column": "B", "operator": "<", "value": 2},
                        {"column": "C", "operator": ">=", "value": 3}
                    ]}
                ]}
            ]}"#,
    )
    .unwrap();
    assert!(sql.contains("WHERE (A > 1 AND (B < 2 OR C >= 3))"), "got: {sql}");
}

#[test]
fn empty_group_contributes_nothing() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [{"logical_operator": "OR", "conditions": []}]}"#,
    )
    .unwrap();
    assert!(!sql.contains("WHERE"), "got: {sql}");
}

#[test]
fn unrecognized_node_shape_is_skipped() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [
                {"frobnicate": true},
                42,
                {"column": "ID", "operator": "=", "value": 1}
            ]}"#,
    )
    .unwrap();
    assert!(sql.contains("WHERE ID = 1"), "got: {sql}");
    assert!(!sql.contains("frobnicate"), "got: {sql}");
}

#[test]
fn unknown_operator_is_skipped() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [
                {"column": "NAME", "operator": "MATCHES", "value": "x"},
                {"column": "ID", "operator": "=", "value": 1}
            ]}"#,
    )
    .unwrap();
    assert_eq!(sql, "SELECT *\nFROM T\nWHERE ID = 1");
}

#[test]
fn all_filters_skipped_means_no_where_clause() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [{"bogus": 1}, {"column": 9}]}"#,
    )
    .unwrap();
    assert_eq!(sql, "SELECT *\nFROM T");
}

#[test]
fn operator_tokens_are_case_insensitive() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [
                {"column": "JOB_ID", "operator": "in", "value": ["X"]},
                {"column": "NOTES", "operator": "is null"}
            ]}"#,
    )
    .unwrap();
    assert!(sql.contains("JOB_ID IN ('X')"), "got: {sql}");
    assert!(sql.contains("NOTES IS NULL"), "got: {sql}");
}

#[test]
fn null_check_operators_ignore_value() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [
                {"column": "A", "operator": "IS NULL", "value": "ignored"},
                {"column": "B", "operator": "IS NOT NULL"}
            ]}"#,
    )
    .unwrap();
    assert!(sql.contains("A IS NULL AND B IS NOT NULL"), "got: {sql}");
    assert!(!sql.contains("ignored"), "got: {sql}");
}

#[test]
fn string_quotes_are_doubled() {
    // Literal inlining is a deliberate trust boundary: values come from the
    // application-controlled definition, and doubling embedded single quotes
    // is the only escaping applied.
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [{"column": "NAME", "operator": "=", "value": "O'Brien"}]}"#,
    )
    .unwrap();
    assert!(sql.contains("NAME = 'O''Brien'"), "got: {sql}");
}

#[test]
fn boolean_and_null_literals() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [
                {"column": "ACTIVE", "operator": "=", "value": true},
                {"column": "DELETED", "operator": "!=", "value": false},
                {"column": "PARENT", "operator": "=", "value": null}
            ]}"#,
    )
    .unwrap();
    assert!(sql.contains("ACTIVE = 1"), "got: {sql}");
    assert!(sql.contains("DELETED != 0"), "got: {sql}");
    assert!(sql.contains("PARENT = NULL"), "got: {sql}");
}

#[test]
fn numeric_literals_keep_their_text_form() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [
                {"column": "SALARY", "operator": ">=", "value": 8000},
                {"column": "RATE", "operator": "<", "value": 0.25}
            ]}"#,
    )
    .unwrap();
    assert!(sql.contains("SALARY >= 8000"), "got: {sql}");
    assert!(sql.contains("RATE < 0.25"), "got: {sql}");
}

#[test]
fn like_operator_takes_scalar_pattern() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "filters": [{"column": "FIRST_NAME", "operator": "LIKE", "value": "S%"}]}"#,
    )
    .unwrap();
    assert!(sql.contains("FIRST_NAME LIKE 'S%'"), "got: {sql}");
}

#[test]
fn scalar_operator_rejects_list_value() {
    let err = build(
        r#"{"table": "T", "columns": [],
            "filters": [{"column": "ID", "operator": "=", "value": [1, 2]}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::Filter { .. }), "got: {err}");
}

#[test]
fn invalid_order_direction_falls_back_to_asc() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "order_by": [{"column": "NAME", "direction": "SIDEWAYS"}]}"#,
    )
    .unwrap();
    assert!(sql.contains("ORDER BY NAME ASC"), "got: {sql}");
}

#[test]
fn order_direction_defaults_to_asc() {
    let sql = build(r#"{"table": "T", "columns": [], "order_by": [{"column": "ID"}]}"#).unwrap();
    assert!(sql.contains("ORDER BY ID ASC"), "got: {sql}");
}

#[test]
fn multiple_order_keys_join_with_commas() {
    let sql = build(
        r#"{"table": "T", "columns": [],
            "order_by": [
                {"column": "SALARY", "direction": "DESC"},
                {"column": "LAST_NAME", "direction": "ASC"}
            ]}"#,
    )
    .unwrap();
    assert!(sql.contains("ORDER BY SALARY DESC, LAST_NAME ASC"), "got: {sql}");
}

#[test]
fn non_positive_limit_is_ignored() {
    for limit in ["0", "-3", "2.5", "\"10\""] {
        let raw = format!(r#"{{"table": "T", "columns": [], "limit": {limit}}}"#);
        let sql = build(&raw).unwrap();
        assert!(!sql.contains("FETCH"), "limit {limit}: {sql}");
    }
}

#[test]
fn positive_limit_emits_fetch_clause() {
    let sql = build(r#"{"table": "T", "columns": [], "limit": 25}"#).unwrap();
    assert!(sql.ends_with("FETCH NEXT 25 ROWS ONLY"), "got: {sql}");
}

#[test]
fn schema_qualified_table_passes_through() {
    let sql = build(r#"{"table": "HR.EMPLOYEES", "columns": ["ID"]}"#).unwrap();
    assert!(sql.contains("FROM HR.EMPLOYEES"), "got: {sql}");
}

#[test]
fn build_is_idempotent() {
    let definition = def(
        r#"{"table": "EMPLOYEES",
            "columns": ["ID", "NAME"],
            "filters": [
                {"column": "SALARY", "operator": ">=", "value": 8000},
                {"logical_operator": "OR", "conditions": [
                    {"column": "JOB_ID", "operator": "IN", "value": ["IT_PROG", "SA_REP"]},
                    {"column": "COMMISSION_PCT", "operator": "IS NOT NULL"}
                ]}
            ],
            "order_by": [{"column": "SALARY", "direction": "DESC"}],
            "limit": 5}"#,
    );
    let first = build_select(&definition).unwrap();
    let second = build_select(&definition).unwrap();
    assert_eq!(first, second);
}

#[test]
fn clauses_appear_in_fixed_order() {
    let sql = build(
        r#"{"table": "EMPLOYEES",
            "columns": ["ID", "NAME"],
            "filters": [{"column": "SALARY", "operator": ">=", "value": 8000}],
            "order_by": [{"column": "SALARY", "direction": "DESC"}],
            "limit": 5}"#,
    )
    .unwrap();
    assert_eq!(
        sql,
        "SELECT ID, NAME\nFROM EMPLOYEES\nWHERE SALARY >= 8000\nORDER BY SALARY DESC\nFETCH NEXT 5 ROWS ONLY"
    );
}
