//! Integration tests for the vacation engine API.
//!
//! This test suite covers:
//! - Entitlement calculation and its fail-soft behaviour
//! - Overlap detection with and without the cross-group-only policy
//! - Overlap detection labelled by the configured grouping attribute
//! - Daily concurrency with filter selections and calendar annotations
//! - Filter group listings
//! - Validation of new requests against the balance
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use vacation_engine::api::{AppState, create_router};
use vacation_engine::config::{ConcurrencyConfig, ConfigLoader, EngineConfig, PolicyConfig};
use vacation_engine::models::GroupAttribute;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/vacation_policy").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn create_router_grouped_by(group_by: GroupAttribute) -> Router {
    let policy = PolicyConfig {
        group_by,
        ..PolicyConfig::default()
    };
    let config = EngineConfig::new(policy, ConcurrencyConfig::default());
    let loader = ConfigLoader::from_config(config).expect("Failed to build config");
    create_router(AppState::new(loader))
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, body.to_string()).await
}

async fn post_raw(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn vacation_request(id: &str, employee_id: &str, start: &str, end: &str, status: &str) -> Value {
    json!({
        "id": id,
        "employee_id": employee_id,
        "start_date": start,
        "end_date": end,
        "status": status
    })
}

fn employee(id: &str, warehouse: Option<&str>, hire_date: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Empleado {}", id),
        "hire_date": hire_date,
        "warehouse": warehouse
    })
}

fn overlapping_ids(result: &Value) -> Vec<String> {
    result["overlapping_ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// SECTION 1: Entitlement
// =============================================================================

#[tokio::test]
async fn test_entitlement_sixth_year() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/entitlement",
        json!({
            "hire_date": "2020-03-15",
            "reference_date": "2026-03-15",
            "used_days": 5
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["years_completed"], 6);
    assert_eq!(result["allotment_days"], 22);
    assert_eq!(result["used_days"], 5);
    assert_eq!(result["remaining_days"], 17);
}

#[tokio::test]
async fn test_entitlement_day_before_anniversary() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/entitlement",
        json!({
            "hire_date": "2020-03-15",
            "reference_date": "2026-03-14"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["years_completed"], 5);
    assert_eq!(result["allotment_days"], 20);
    assert_eq!(result["remaining_days"], 20);
}

#[tokio::test]
async fn test_entitlement_used_days_derived_from_requests() {
    // Approved Mon..Sat (6) + Pending Mon..Tue (2); the rejected one does not count.
    let (status, result) = post_json(
        create_router_for_test(),
        "/entitlement",
        json!({
            "hire_date": "2024-01-10",
            "reference_date": "2026-02-01",
            "requests": [
                vacation_request("r1", "emp_1", "2026-01-05", "2026-01-10", "Aprobado"),
                vacation_request("r2", "emp_1", "2026-01-19", "2026-01-20", "Pendiente"),
                vacation_request("r3", "emp_1", "2026-01-26", "2026-01-30", "Rechazado")
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["allotment_days"], 14);
    assert_eq!(result["used_days"], 8);
    assert_eq!(result["remaining_days"], 6);
}

#[tokio::test]
async fn test_entitlement_over_allocation_floors_at_zero() {
    let (_, result) = post_json(
        create_router_for_test(),
        "/entitlement",
        json!({
            "hire_date": "2025-01-01",
            "reference_date": "2026-01-15",
            "used_days": 40
        }),
    )
    .await;

    assert_eq!(result["allotment_days"], 12);
    assert_eq!(result["remaining_days"], 0);
}

#[tokio::test]
async fn test_entitlement_request_row_with_bad_date_counts_as_zero() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/entitlement",
        json!({
            "hire_date": "2024-01-10",
            "reference_date": "2026-02-01",
            "requests": [
                vacation_request("r1", "emp_1", "2026-01-05", "2026-01-10", "Aprobado"),
                vacation_request("r2", "emp_1", "15/01/2026", "2026-01-16", "Aprobado"),
                vacation_request("r3", "emp_1", "", "2026-01-20", "Pendiente")
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["used_days"], 6);
    assert_eq!(result["remaining_days"], 8);
}

#[tokio::test]
async fn test_entitlement_unparsable_date_fails_soft() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/entitlement",
        json!({
            "hire_date": "not-a-date",
            "reference_date": "2026-03-15"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["years_completed"], 0);
    assert_eq!(result["allotment_days"], 0);
    assert_eq!(result["remaining_days"], 0);
}

// =============================================================================
// SECTION 2: Overlaps
// =============================================================================

#[tokio::test]
async fn test_overlaps_same_group_without_cross_group_policy() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/overlaps",
        json!({
            "cross_group_only": false,
            "requests": [
                { "id": "a", "group_label": "Norte", "start_date": "2026-01-01", "end_date": "2026-01-10" },
                { "id": "b", "group_label": "Norte", "start_date": "2026-01-10", "end_date": "2026-01-20" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(overlapping_ids(&result), vec!["a", "b"]);
    assert_eq!(result["count"], 2);
    assert_eq!(result["cross_group_only"], false);
}

#[tokio::test]
async fn test_overlaps_default_policy_is_cross_group_only() {
    let requests = json!([
        { "id": "a", "group_label": "Norte", "start_date": "2026-01-01", "end_date": "2026-01-10" },
        { "id": "b", "group_label": "Norte", "start_date": "2026-01-10", "end_date": "2026-01-20" },
        { "id": "c", "group_label": "Sur", "start_date": "2026-01-15", "end_date": "2026-01-16" }
    ]);

    let (status, result) = post_json(
        create_router_for_test(),
        "/overlaps",
        json!({ "requests": requests }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["cross_group_only"], true);
    assert_eq!(overlapping_ids(&result), vec!["b", "c"]);
}

#[tokio::test]
async fn test_overlaps_ignore_ungrouped_requests() {
    let (_, result) = post_json(
        create_router_for_test(),
        "/overlaps",
        json!({
            "cross_group_only": false,
            "requests": [
                { "id": "a", "start_date": "2026-01-01", "end_date": "2026-01-31" },
                { "id": "b", "group_label": "Norte", "start_date": "2026-01-05", "end_date": "2026-01-06" }
            ]
        }),
    )
    .await;

    assert!(overlapping_ids(&result).is_empty());
    assert_eq!(result["count"], 0);
}

#[tokio::test]
async fn test_overlaps_skip_rows_with_unusable_dates() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/overlaps",
        json!({
            "requests": [
                { "id": "a", "group_label": "Norte", "start_date": "2026-01-01", "end_date": "2026-01-10" },
                { "id": "b", "group_label": "Sur", "start_date": "2026-01-08", "end_date": "2026-01-09" },
                { "id": "c", "group_label": "Centro", "start_date": "", "end_date": "2026-01-09" },
                { "id": "d", "group_label": "Centro", "start_date": "05/01/2026", "end_date": "2026-01-06" },
                { "id": "e", "group_label": "Centro", "start_date": "2026-01-05" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(overlapping_ids(&result), vec!["a", "b"]);
    assert_eq!(result["count"], 2);
}

// =============================================================================
// SECTION 3: Overlaps labelled by the policy's grouping attribute
// =============================================================================

fn grouped_calendar_body() -> Value {
    json!({
        "requests": [
            vacation_request("r1", "emp_1", "2026-01-05", "2026-01-09", "Aprobado"),
            vacation_request("r2", "emp_2", "2026-01-08", "2026-01-12", "Pendiente"),
            vacation_request("r3", "emp_3", "2026-02-02", "2026-02-03", "Aprobado")
        ],
        "employees": [
            { "id": "emp_1", "nombre": "Ana", "bodega": "Norte", "departamento": "Ventas" },
            { "id": "emp_2", "nombre": "Luis", "bodega": "Norte", "departamento": "Compras" },
            { "id": "emp_3", "nombre": "Eva", "bodega": "Sur", "departamento": "Ventas" }
        ]
    })
}

#[tokio::test]
async fn test_calendar_overlaps_same_warehouse_not_flagged() {
    let (status, result) = post_json(
        create_router_grouped_by(GroupAttribute::Warehouse),
        "/calendar/overlaps",
        grouped_calendar_body(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["group_by"], "warehouse");
    assert!(overlapping_ids(&result).is_empty());
}

#[tokio::test]
async fn test_calendar_overlaps_follow_configured_group_by() {
    let (status, result) = post_json(
        create_router_grouped_by(GroupAttribute::Department),
        "/calendar/overlaps",
        grouped_calendar_body(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["group_by"], "department");
    assert_eq!(overlapping_ids(&result), vec!["r1", "r2"]);
}

#[tokio::test]
async fn test_calendar_overlaps_ignore_rejected_and_unknown_employees() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/calendar/overlaps",
        json!({
            "cross_group_only": false,
            "requests": [
                vacation_request("r1", "emp_1", "2026-01-05", "2026-01-09", "Aprobado"),
                vacation_request("r2", "emp_2", "2026-01-06", "2026-01-07", "Rechazado"),
                vacation_request("r3", "emp_404", "2026-01-06", "2026-01-07", "Aprobado")
            ],
            "employees": [
                employee("emp_1", Some("Norte"), "2020-01-01"),
                employee("emp_2", Some("Sur"), "2020-01-01")
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(overlapping_ids(&result).is_empty());
}

// =============================================================================
// SECTION 4: Concurrency
// =============================================================================

#[tokio::test]
async fn test_concurrency_levels_for_month() {
    let requests: Vec<Value> = (0..5)
        .map(|i| {
            vacation_request(
                &format!("r{}", i),
                &format!("emp_{}", i),
                "2026-01-12",
                "2026-01-13",
                "Aprobado",
            )
        })
        .collect();

    let (status, result) = post_json(
        create_router_for_test(),
        "/concurrency",
        json!({
            "requests": requests,
            "first": "2026-01-01",
            "last": "2026-01-31"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let days = result["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["date"], "2026-01-12");
    assert_eq!(days[0]["level"], "high");
    assert_eq!(days[0]["request_ids"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_concurrency_respects_filter() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/concurrency",
        json!({
            "requests": [
                vacation_request("r1", "emp_1", "2026-01-12", "2026-01-12", "Aprobado"),
                vacation_request("r2", "emp_2", "2026-01-12", "2026-01-12", "Pendiente"),
                vacation_request("r3", "emp_3", "2026-01-12", "2026-01-12", "Pendiente")
            ],
            "employees": [
                employee("emp_1", Some("Norte"), "2020-01-01"),
                employee("emp_2", Some("Sur"), "2020-01-01"),
                employee("emp_3", None, "2020-01-01")
            ],
            "filter": { "warehouse": "ungrouped" },
            "first": "2026-01-01",
            "last": "2026-01-31"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let days = result["days"].as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["request_ids"], json!(["r3"]));
    assert_eq!(days[0]["level"], "low");
}

#[tokio::test]
async fn test_concurrency_marks_holidays_and_marked_periods() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/concurrency",
        json!({
            "requests": [
                vacation_request("r1", "emp_1", "2026-11-15", "2026-11-17", "Aprobado")
            ],
            "holidays": ["2026-11-17", "not a date"],
            "first": "2026-11-01",
            "last": "2026-11-30"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let days = result["days"].as_array().unwrap();
    assert_eq!(days.len(), 3);

    assert_eq!(days[0]["date"], "2026-11-15");
    assert_eq!(days[0]["holiday"], false);
    assert_eq!(days[0]["marked_period"], "Buen Fin");

    assert_eq!(days[1]["date"], "2026-11-16");
    assert_eq!(days[1]["holiday"], true);
    assert_eq!(days[1]["marked_period"], "Buen Fin");

    assert_eq!(days[2]["date"], "2026-11-17");
    assert_eq!(days[2]["holiday"], true);
    assert!(days[2].get("marked_period").is_none());
}

#[tokio::test]
async fn test_concurrency_skips_bad_rows_and_bad_window() {
    let rows = json!([
        vacation_request("r1", "emp_1", "2026-01-12", "2026-01-12", "Aprobado"),
        vacation_request("r2", "emp_2", "12/01/2026", "2026-01-12", "Aprobado")
    ]);

    let (status, result) = post_json(
        create_router_for_test(),
        "/concurrency",
        json!({ "requests": rows.clone(), "first": "2026-01-01", "last": "2026-01-31" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["days"][0]["request_ids"], json!(["r1"]));

    let (status, result) = post_json(
        create_router_for_test(),
        "/concurrency",
        json!({ "requests": rows, "first": "2026-01-01", "last": "31/01/2026" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(result["days"].as_array().unwrap().is_empty());
}

// =============================================================================
// SECTION 5: Groups
// =============================================================================

#[tokio::test]
async fn test_groups_list_buckets_with_ungrouped_last() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/groups",
        json!({
            "employees": [
                { "id": "emp_1", "bodega": "Sur" },
                { "id": "emp_2", "bodega": "Norte" },
                { "id": "emp_3", "bodega": "  " },
                { "nombre": "Sin id", "bodega": "Centro" },
                { "id": "emp_4", "warehouse": "Norte" }
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["attribute"], "warehouse");
    let labels: Vec<&str> = result["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Norte", "Sur", "(Sin bodega)"]);
    assert_eq!(result["groups"][0]["bucket"], json!({ "named": "Norte" }));
    assert_eq!(result["groups"][2]["bucket"], "ungrouped");
}

#[tokio::test]
async fn test_groups_attribute_override() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/groups",
        json!({
            "attribute": "department",
            "employees": [{ "id": "emp_1", "depto": "Ventas", "bodega": "Sur" }]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["attribute"], "department");
    assert_eq!(result["groups"][0]["label"], "Ventas");
}

// =============================================================================
// SECTION 6: Request check
// =============================================================================

#[tokio::test]
async fn test_request_check_accepts_within_balance() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/requests/check",
        json!({
            "employee": employee("emp_1", Some("Norte"), "2023-01-10"),
            "start_date": "2026-02-02",
            "end_date": "2026-02-07",
            "reference_date": "2026-02-01",
            "used_days": 4
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["requested_days"], 6);
    assert_eq!(result["entitlement"]["allotment_days"], 16);
    assert_eq!(result["remaining_after"], 6);
}

#[tokio::test]
async fn test_request_check_rejects_insufficient_balance() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/requests/check",
        json!({
            "employee": employee("emp_1", Some("Norte"), "2025-06-01"),
            "start_date": "2026-01-05",
            "end_date": "2026-01-17",
            "reference_date": "2026-01-01",
            "used_days": 2
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(result["code"], "INSUFFICIENT_BALANCE");
}

#[tokio::test]
async fn test_request_check_rejects_backwards_range() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/requests/check",
        json!({
            "employee": employee("emp_1", Some("Norte"), "2020-01-01"),
            "start_date": "2026-01-10",
            "end_date": "2026-01-05",
            "reference_date": "2026-01-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_request_check_accepts_backend_employee_row() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/requests/check",
        json!({
            "employee": { "id": "emp_9", "nombre": "Ana", "bodega": "Norte", "fecha_ingreso": "2023-01-10" },
            "start_date": "2026-02-02",
            "end_date": "2026-02-03",
            "reference_date": "2026-02-01",
            "requests": [
                vacation_request("r1", "emp_9", "2026-01-05", "2026-01-06", "Aprobado"),
                vacation_request("r2", "emp_9", "bad", "2026-01-08", "Aprobado")
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["requested_days"], 2);
    assert_eq!(result["entitlement"]["used_days"], 2);
    assert_eq!(result["remaining_after"], 12);
}

#[tokio::test]
async fn test_request_check_requires_reference_date() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/requests/check",
        json!({
            "employee": employee("emp_1", Some("Norte"), "2020-01-01"),
            "start_date": "2026-01-05",
            "end_date": "2026-01-06",
            "reference_date": "01/01/2026"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_request_check_rejects_employee_without_id() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/requests/check",
        json!({
            "employee": { "nombre": "Ana", "fecha_ingreso": "2020-01-01" },
            "start_date": "2026-01-05",
            "end_date": "2026-01-06",
            "reference_date": "2026-01-01"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "INVALID_EMPLOYEE");
}

// =============================================================================
// SECTION 7: Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (status, result) = post_raw(
        create_router_for_test(),
        "/overlaps",
        "{ not json".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_field_returns_validation_error() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/overlaps",
        json!({ "requests": [{ "start_date": "2026-01-01", "end_date": "2026-01-02" }] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_status_row_does_not_count() {
    let (status, result) = post_json(
        create_router_for_test(),
        "/entitlement",
        json!({
            "hire_date": "2020-01-01",
            "reference_date": "2026-01-01",
            "requests": [vacation_request("r1", "emp_1", "2026-01-05", "2026-01-06", "Cancelado")]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["allotment_days"], 22);
    assert_eq!(result["used_days"], 0);
    assert_eq!(result["remaining_days"], 22);
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/entitlement")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
