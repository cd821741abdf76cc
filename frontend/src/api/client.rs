use reqwest::{Client, Response};
use serde_json::Value;

use crate::{api::types::ApiError, config};

/// Thin wrapper over `reqwest::Client` shared by every page through Leptos
/// context. The base URL is resolved lazily from the runtime config unless a
/// fixed one was injected (tests).
#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Decodes a non-2xx response body into an `ApiError`. The collaborator
    /// is a FastAPI service, so `detail` is checked first; `message` and
    /// `error` cover other deployments, then the caller's fallback.
    pub(crate) async fn error_from_response(response: Response, fallback: &str) -> ApiError {
        let status = response.status().as_u16();
        let body: Option<Value> = response.json().await.ok();
        let message = body
            .as_ref()
            .and_then(extract_error_message)
            .unwrap_or_else(|| fallback.to_string());
        ApiError::http(status, message, body)
    }
}

pub(crate) fn extract_error_message(body: &Value) -> Option<String> {
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_error_message_prefers_detail_over_other_keys() {
        let body = json!({
            "detail": "Employee ID already exists",
            "message": "something else",
            "error": "another"
        });
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("Employee ID already exists")
        );
    }

    #[test]
    fn extract_error_message_falls_back_to_message_then_error() {
        let body = json!({ "message": "backend says no" });
        assert_eq!(
            extract_error_message(&body).as_deref(),
            Some("backend says no")
        );

        let body = json!({ "error": "broken" });
        assert_eq!(extract_error_message(&body).as_deref(), Some("broken"));
    }

    #[test]
    fn extract_error_message_ignores_non_string_fields() {
        // FastAPI 422 bodies carry a structured `detail` array; those fall
        // through to the caller-supplied fallback.
        let body = json!({ "detail": [{ "msg": "field required" }] });
        assert_eq!(extract_error_message(&body), None);
    }
}
