use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::{
    api::types::{
        AnalysisReport, DashboardStats, EmployeesResponse, SampleDataResponse,
    },
    config,
};

pub const EMPLOYEES_FETCH_FALLBACK: &str = "Failed to fetch employees data";
pub const SAMPLE_DATA_FALLBACK: &str = "Failed to generate sample data";
pub const ANALYZE_FALLBACK: &str = "Failed to analyze attendance";
pub const REPORT_FALLBACK: &str = "Failed to fetch attendance report";

/// HTTP client for the attendance analyzer API. Success is decided by
/// the HTTP status alone; error bodies are only consulted for their
/// human-readable message.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
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

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<HttpResponse, String> {
        let request = request
            .build()
            .map_err(|e| format!("Request failed: {}", e))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_transport::lookup(request.url().as_str()) {
            let mocked = responder.respond(&request).map_err(|e| e.error)?;
            let status = StatusCode::from_u16(mocked.status)
                .map_err(|e| format!("Request failed: {}", e))?;
            return Ok(HttpResponse {
                status,
                body: Some(mocked.body),
            });
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        let status = response.status();
        let body = response.json::<Value>().await.ok();
        Ok(HttpResponse { status, body })
    }

    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, String> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(self.client.get(format!("{}/api/dashboard-stats", base_url)))
            .await?;
        if response.status.is_success() {
            response.decode()
        } else {
            Err(format!(
                "Dashboard stats request returned {}",
                response.status
            ))
        }
    }

    pub async fn get_employees(&self) -> Result<EmployeesResponse, String> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(self.client.get(format!("{}/api/employees", base_url)))
            .await?;
        if response.status.is_success() {
            response.decode()
        } else {
            Err(response.error_message("message", EMPLOYEES_FETCH_FALLBACK))
        }
    }

    pub async fn generate_sample_data(&self) -> Result<SampleDataResponse, String> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(self.client.get(format!("{}/api/sample-data", base_url)))
            .await?;
        if response.status.is_success() {
            response.decode()
        } else {
            Err(response.error_message("detail", SAMPLE_DATA_FALLBACK))
        }
    }

    pub async fn analyze_attendance(&self) -> Result<AnalysisReport, String> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(
                self.client
                    .post(format!("{}/api/analyze-attendance", base_url))
                    .json(&json!({})),
            )
            .await?;
        if response.status.is_success() {
            response.decode()
        } else {
            Err(response.error_message("detail", ANALYZE_FALLBACK))
        }
    }

    pub async fn get_attendance_report(&self) -> Result<AnalysisReport, String> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .execute(
                self.client
                    .get(format!("{}/api/attendance-report", base_url)),
            )
            .await?;
        if response.status.is_success() {
            response.decode()
        } else {
            // No structured error body is expected from the read endpoint.
            Err(REPORT_FALLBACK.to_string())
        }
    }
}

struct HttpResponse {
    status: StatusCode,
    body: Option<Value>,
}

impl HttpResponse {
    fn decode<T: DeserializeOwned>(self) -> Result<T, String> {
        let body = self
            .body
            .ok_or_else(|| "Failed to parse response: empty body".to_string())?;
        serde_json::from_value(body).map_err(|e| format!("Failed to parse response: {}", e))
    }

    fn error_message(&self, field: &str, fallback: &str) -> String {
        self.body
            .as_ref()
            .and_then(|body| body.get(field))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};
