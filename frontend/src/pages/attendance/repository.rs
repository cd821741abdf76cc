use crate::api::{
    ApiClient, ApiError, AttendanceRecord, AttendanceUpdate, AttendanceUpsert, Employee,
};

#[derive(Clone)]
pub enum AttendanceSavePayload {
    Create(AttendanceUpsert),
    Update(i64, AttendanceUpdate),
}

/// How a save landed on the backend. `UpdatedExisting` is the upsert-by-date
/// case: the create call answered 200 because a record for the same
/// (employee, date) already existed and was overwritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttendanceSaveKind {
    Created,
    UpdatedExisting,
    Edited,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedAttendance {
    pub record: AttendanceRecord,
    pub kind: AttendanceSaveKind,
}

pub async fn fetch_roster(api: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    api.list_employees().await
}

pub async fn fetch_records(
    api: &ApiClient,
    employee_id: i64,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    api.list_attendance(Some(employee_id), None).await
}

pub async fn save_attendance(
    api: &ApiClient,
    payload: AttendanceSavePayload,
) -> Result<SavedAttendance, ApiError> {
    match payload {
        AttendanceSavePayload::Create(create) => {
            let saved = api.create_attendance(&create).await?;
            Ok(SavedAttendance {
                record: saved.record,
                kind: if saved.updated_existing {
                    AttendanceSaveKind::UpdatedExisting
                } else {
                    AttendanceSaveKind::Created
                },
            })
        }
        AttendanceSavePayload::Update(id, update) => {
            let record = api.update_attendance(id, &update).await?;
            Ok(SavedAttendance {
                record,
                kind: AttendanceSaveKind::Edited,
            })
        }
    }
}

/// Returns the removed record so callers can phrase the confirmation.
pub async fn remove_attendance(
    api: &ApiClient,
    record: AttendanceRecord,
) -> Result<AttendanceRecord, ApiError> {
    api.delete_attendance(record.id).await?;
    Ok(record)
}
