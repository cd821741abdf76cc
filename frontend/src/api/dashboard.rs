use super::{
    client::ApiClient,
    types::{ApiError, DashboardSummary},
};

impl ApiClient {
    pub async fn get_dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/dashboard/summary", base_url))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response, "Failed to load dashboard data").await)
        }
    }
}
