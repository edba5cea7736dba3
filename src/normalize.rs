//! Normalization of raw backend rows.
//!
//! Employee rows arrive with drifting column names (`nombre` vs `name`,
//! `bodega` vs `warehouse`, ...). They are mapped onto the fixed
//! [`Employee`] and [`VacationRequest`] shapes once, here, so the calculators
//! never guess keys.

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::debug;

use crate::calculation::parse_calendar_date;
use crate::error::{VacationError, VacationResult};
use crate::models::{Employee, RequestStatus, VacationRequest};

const ID_KEYS: &[&str] = &["id"];
const NAME_KEYS: &[&str] = &["nombre", "name", "full_name", "display_name", "empleado"];
const WAREHOUSE_KEYS: &[&str] = &["bodega", "warehouse", "almacen", "site"];
const DEPARTMENT_KEYS: &[&str] = &["departamento", "depto", "department"];
const LOCATION_KEYS: &[&str] = &["localizacion", "location", "ubicacion"];
const ROLE_KEYS: &[&str] = &["puesto", "role", "cargo"];
const HIRE_DATE_KEYS: &[&str] = &["fecha_ingreso", "ingreso", "hire_date", "entry_date"];

const EMPLOYEE_REF_KEYS: &[&str] = &["employee_id", "empleado_id"];
const START_KEYS: &[&str] = &["start_date", "fecha_inicio", "start"];
const END_KEYS: &[&str] = &["end_date", "fecha_fin", "end"];
const STATUS_KEYS: &[&str] = &["status", "estado"];
const CREATED_AT_KEYS: &[&str] = &["created_at"];

/// Returns the first candidate key holding a non-blank string or a number.
fn pick_text(row: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match row.get(*key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Maps a raw employee row onto [`Employee`].
///
/// The row must be a JSON object with an `id`. A missing name falls back to
/// `Empleado <first 8 chars of id>`; an unparsable hire date becomes `None`.
///
/// # Example
///
/// ```
/// use vacation_engine::normalize::normalize_employee;
/// use serde_json::json;
///
/// let row = json!({
///     "id": "7f3c2a9e-0000-4000-8000-000000000001",
///     "nombre": "Ana Torres",
///     "bodega": "Norte",
///     "fecha_ingreso": "2020-03-15",
///     "departamento": null
/// });
/// let employee = normalize_employee(&row).unwrap();
/// assert_eq!(employee.name, "Ana Torres");
/// assert_eq!(employee.warehouse.as_deref(), Some("Norte"));
/// assert!(employee.department.is_none());
/// ```
pub fn normalize_employee(row: &Value) -> VacationResult<Employee> {
    if !row.is_object() {
        return Err(VacationError::InvalidEmployee {
            field: "row".to_string(),
            message: "expected a JSON object".to_string(),
        });
    }

    let id = pick_text(row, ID_KEYS).ok_or_else(|| VacationError::InvalidEmployee {
        field: "id".to_string(),
        message: "missing identifier".to_string(),
    })?;

    let name = pick_text(row, NAME_KEYS)
        .unwrap_or_else(|| format!("Empleado {}", id.chars().take(8).collect::<String>()));

    let hire_text = pick_text(row, HIRE_DATE_KEYS);
    let hire_date = hire_text.as_deref().and_then(parse_calendar_date);
    if hire_text.is_some() && hire_date.is_none() {
        debug!(employee_id = %id, value = ?hire_text, "Unparsable hire date");
    }

    Ok(Employee {
        name,
        hire_date,
        warehouse: pick_text(row, WAREHOUSE_KEYS),
        department: pick_text(row, DEPARTMENT_KEYS),
        location: pick_text(row, LOCATION_KEYS),
        role: pick_text(row, ROLE_KEYS),
        id,
    })
}

/// Maps a raw vacation-request row onto [`VacationRequest`].
///
/// `id`, `employee_id`, both dates and a known status are required. A
/// missing or unparsable `created_at` becomes `None`.
pub fn normalize_request(row: &Value) -> VacationResult<VacationRequest> {
    let id = pick_text(row, ID_KEYS).ok_or_else(|| VacationError::InvalidRequest {
        request_id: String::new(),
        message: "missing identifier".to_string(),
    })?;

    let invalid = |message: String| VacationError::InvalidRequest {
        request_id: id.clone(),
        message,
    };

    let employee_id =
        pick_text(row, EMPLOYEE_REF_KEYS).ok_or_else(|| invalid("missing employee_id".to_string()))?;

    let start_date = pick_text(row, START_KEYS)
        .as_deref()
        .and_then(parse_calendar_date)
        .ok_or_else(|| invalid("missing or invalid start date".to_string()))?;
    let end_date = pick_text(row, END_KEYS)
        .as_deref()
        .and_then(parse_calendar_date)
        .ok_or_else(|| invalid("missing or invalid end date".to_string()))?;

    let status_label =
        pick_text(row, STATUS_KEYS).ok_or_else(|| invalid("missing status".to_string()))?;
    let status = RequestStatus::from_label(&status_label)
        .ok_or_else(|| invalid(format!("unknown status '{}'", status_label)))?;

    let created_at = pick_text(row, CREATED_AT_KEYS)
        .and_then(|text| DateTime::parse_from_rfc3339(&text).ok())
        .map(|timestamp| timestamp.with_timezone(&Utc));

    Ok(VacationRequest {
        id,
        employee_id,
        start_date,
        end_date,
        status,
        created_at,
    })
}

/// Normalizes a batch of employee rows.
///
/// Rows that cannot be mapped are skipped and logged, so one bad row never
/// discards the rest of the batch.
pub fn normalize_employees(rows: &[Value]) -> Vec<Employee> {
    rows.iter()
        .filter_map(|row| match normalize_employee(row) {
            Ok(employee) => Some(employee),
            Err(err) => {
                debug!(error = %err, "Skipping employee row");
                None
            }
        })
        .collect()
}

/// Normalizes a batch of request rows, skipping rows that cannot be mapped.
///
/// A skipped row contributes nothing downstream: no used days, no overlap,
/// no calendar load.
///
/// # Example
///
/// ```
/// use vacation_engine::normalize::normalize_requests;
/// use serde_json::json;
///
/// let rows = vec![
///     json!({ "id": "r1", "empleado_id": "e1", "fecha_inicio": "2026-01-05",
///             "fecha_fin": "2026-01-09", "estado": "Aprobado" }),
///     json!({ "id": "r2", "employee_id": "e1", "start_date": "15/01/2026",
///             "end_date": "2026-01-16", "status": "Pendiente" }),
/// ];
/// let requests = normalize_requests(&rows);
/// assert_eq!(requests.len(), 1);
/// assert_eq!(requests[0].id, "r1");
/// ```
pub fn normalize_requests(rows: &[Value]) -> Vec<VacationRequest> {
    rows.iter()
        .filter_map(|row| match normalize_request(row) {
            Ok(request) => Some(request),
            Err(err) => {
                debug!(error = %err, "Skipping request row");
                None
            }
        })
        .collect()
}
