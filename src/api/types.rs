use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Counters shown on the dashboard tab. The threshold fields only exist
/// once the server has at least one stored analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub employees_count: i64,
    pub records_count: i64,
    #[serde(default)]
    pub analysis_count: i64,
    #[serde(default)]
    pub has_analysis: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_threshold: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below_threshold: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_attendance: Option<f64>,
}

/// Server-computed classification against the 70% attendance cutoff.
/// Anything the server sends that is not `meets_threshold` renders as
/// below-threshold rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThresholdStatus {
    MeetsThreshold,
    BelowThreshold,
}

impl From<String> for ThresholdStatus {
    fn from(raw: String) -> Self {
        if raw == "meets_threshold" {
            Self::MeetsThreshold
        } else {
            Self::BelowThreshold
        }
    }
}

impl From<ThresholdStatus> for String {
    fn from(status: ThresholdStatus) -> Self {
        match status {
            ThresholdStatus::MeetsThreshold => "meets_threshold",
            ThresholdStatus::BelowThreshold => "below_threshold",
        }
        .to_string()
    }
}

impl ThresholdStatus {
    pub fn meets(&self) -> bool {
        matches!(self, Self::MeetsThreshold)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub total_days: i64,
    pub present_days: i64,
    pub absent_days: i64,
    pub late_days: i64,
    pub attendance_percentage: f64,
    pub status: ThresholdStatus,
    pub recent_status: String,
    pub avg_hours: f64,
}

/// Employee collection as returned by `GET /api/employees`. When no data
/// has been generated yet the server sends a `message` and an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeesResponse {
    #[serde(default)]
    pub total_employees: i64,
    #[serde(default)]
    pub employees: Vec<EmployeeSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub total_days: i64,
    pub present_days: i64,
    pub absent_days: i64,
    pub late_days: i64,
    pub attendance_percentage: f64,
    pub status: ThresholdStatus,
    pub ai_insights: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_employees: i64,
    pub meeting_70_percent_threshold: i64,
    pub below_threshold: i64,
    pub average_attendance_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_timestamp: Option<String>,
}

/// Analysis payload shared by `POST /api/analyze-attendance` and
/// `GET /api/attendance-report`. The analyze endpoint names the result
/// list `detailed_results` while the report endpoint names it `results`;
/// the alias normalizes both onto one field so render code never checks
/// twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub summary: Option<AnalysisSummary>,
    #[serde(default, alias = "detailed_results")]
    pub results: Vec<AnalysisResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleDataResponse {
    pub message: String,
    pub employees_count: i64,
    pub records_count: i64,
    #[serde(default)]
    pub analysis_period: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}
