use crate::api::{AnalysisReport, ApiClient, DashboardStats, EmployeesResponse, SampleDataResponse};
use std::rc::Rc;

/// Async seam between the dashboard view model and the HTTP client.
#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, String> {
        self.client.get_dashboard_stats().await
    }

    pub async fn fetch_employees(&self) -> Result<EmployeesResponse, String> {
        self.client.get_employees().await
    }

    pub async fn generate_sample_data(&self) -> Result<SampleDataResponse, String> {
        self.client.generate_sample_data().await
    }

    pub async fn run_analysis(&self) -> Result<AnalysisReport, String> {
        self.client.analyze_attendance().await
    }

    pub async fn fetch_report(&self) -> Result<AnalysisReport, String> {
        self.client.get_attendance_report().await
    }
}
