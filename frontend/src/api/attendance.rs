use chrono::NaiveDate;
use reqwest::StatusCode;

use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, AttendanceSaved, AttendanceUpdate, AttendanceUpsert},
};

impl ApiClient {
    pub async fn list_attendance(
        &self,
        employee_id: Option<i64>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut url = format!("{}/attendance", base_url);
        let mut query_params = Vec::new();

        if let Some(employee_id) = employee_id {
            query_params.push(format!("employee_id={}", employee_id));
        }
        if let Some(date) = date {
            query_params.push(format!("date={}", date));
        }

        if !query_params.is_empty() {
            url.push('?');
            url.push_str(&query_params.join("&"));
        }

        let response = self
            .http_client()
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response, "Failed to load attendance").await)
        }
    }

    /// `POST /attendance` is create-or-update-by-date: the backend answers
    /// 201 for a new record and 200 when it updated the existing record for
    /// the same (employee, date) in place.
    pub async fn create_attendance(
        &self,
        payload: &AttendanceUpsert,
    ) -> Result<AttendanceSaved, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/attendance", base_url))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let record = response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;
            Ok(AttendanceSaved {
                record,
                updated_existing: status == StatusCode::OK,
            })
        } else {
            Err(Self::error_from_response(response, "Unable to save attendance").await)
        }
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        payload: &AttendanceUpdate,
    ) -> Result<AttendanceRecord, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .put(format!("{}/attendance/{}", base_url, id))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response, "Unable to save attendance").await)
        }
    }

    pub async fn delete_attendance(&self, id: i64) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/attendance/{}", base_url, id))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response, "Failed to delete attendance").await)
        }
    }
}
