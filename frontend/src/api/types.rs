use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
}

/// Update payload deliberately omits `employee_id`: the business code is
/// immutable after creation and the backend rejects attempts to change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub date_of_joining: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn label_lower(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceUpsert {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Result of `POST /attendance`. The endpoint answers 201 for a new row and
/// 200 when it overwrote the existing record for the same (employee, date),
/// so the caller must phrase its confirmation accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSaved {
    pub record: AttendanceRecord,
    pub updated_existing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentAttendance {
    pub employee_id: i64,
    pub employee_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_employees: i64,
    pub present_today: i64,
    pub absent_today: i64,
    #[serde(default)]
    pub recent_attendance: Vec<RecentAttendance>,
}

use leptos::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.message.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn http(status: u16, msg: impl Into<String>, details: Option<Value>) -> Self {
        Self {
            message: msg.into(),
            code: format!("HTTP_{}", status),
            details,
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn serialize_attendance_upsert_snake_case_fields() {
        let payload = AttendanceUpsert {
            employee_id: 7,
            date: chrono::NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            status: AttendanceStatus::Present,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["employee_id"], serde_json::json!(7));
        assert_eq!(value["date"], serde_json::json!("2026-08-07"));
        assert_eq!(value["status"], serde_json::json!("Present"));
    }

    #[wasm_bindgen_test]
    fn deserialize_recent_attendance_row() {
        let raw = r#"{
            "employee_id": 7,
            "employee_name": "Jane Doe",
            "date": "2026-08-07",
            "status": "Absent"
        }"#;
        let row: RecentAttendance = serde_json::from_str(raw).unwrap();
        assert_eq!(row.employee_name, "Jane Doe");
        assert_eq!(row.status, AttendanceStatus::Absent);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use leptos::IntoView;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let validation = ApiError::validation("invalid payload");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.message, "invalid payload");
        assert!(validation.details.is_none());

        let unknown = ApiError::unknown("something failed");
        assert_eq!(unknown.code, "UNKNOWN");

        let request_failed = ApiError::request_failed("network error");
        assert_eq!(request_failed.code, "REQUEST_FAILED");

        let conflict = ApiError::http(409, "duplicate", None);
        assert_eq!(conflict.code, "HTTP_409");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_message() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn api_error_can_be_converted_to_view() {
        crate::test_support::ssr::with_runtime(|| {
            let _: View = ApiError::request_failed("request failed").into_view();
        });
    }

    #[test]
    fn deserialize_employee_with_iso_date() {
        let raw = json!({
            "id": 7,
            "employee_id": "EMP-007",
            "full_name": "Jane Doe",
            "email": "jane@company.com",
            "department": "Engineering",
            "date_of_joining": "2024-03-01"
        });
        let employee: Employee = serde_json::from_value(raw).unwrap();
        assert_eq!(employee.id, 7);
        assert_eq!(employee.employee_id, "EMP-007");
        assert_eq!(
            employee.date_of_joining,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn serialize_employee_update_omits_employee_code() {
        let payload = EmployeeUpdate {
            full_name: "Jane Doe".into(),
            email: "jane@company.com".into(),
            department: "Engineering".into(),
            date_of_joining: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("employee_id").is_none());
        assert_eq!(value["full_name"], json!("Jane Doe"));
        assert_eq!(value["date_of_joining"], json!("2024-03-01"));
    }

    #[test]
    fn attendance_status_serializes_as_capitalized_literals() {
        assert_eq!(
            serde_json::to_value(AttendanceStatus::Present).unwrap(),
            json!("Present")
        );
        assert_eq!(
            serde_json::to_value(AttendanceStatus::Absent).unwrap(),
            json!("Absent")
        );

        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": 1,
            "employee_id": 7,
            "date": "2026-08-07",
            "status": "Absent"
        }))
        .unwrap();
        assert_eq!(record.status, AttendanceStatus::Absent);
    }

    #[test]
    fn deserialize_dashboard_summary_defaults_recent_to_empty() {
        let summary: DashboardSummary = serde_json::from_value(json!({
            "total_employees": 10,
            "present_today": 6,
            "absent_today": 2
        }))
        .unwrap();
        assert_eq!(summary.total_employees, 10);
        assert!(summary.recent_attendance.is_empty());

        let with_recent: DashboardSummary = serde_json::from_value(json!({
            "total_employees": 1,
            "present_today": 1,
            "absent_today": 0,
            "recent_attendance": [{
                "employee_id": 7,
                "employee_name": "Jane Doe",
                "date": "2026-08-07",
                "status": "Present"
            }]
        }))
        .unwrap();
        assert_eq!(with_recent.recent_attendance.len(), 1);
        assert_eq!(with_recent.recent_attendance[0].employee_name, "Jane Doe");
    }
}
