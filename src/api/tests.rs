use super::test_support::mock::*;
use super::*;
use serde_json::json;

fn employee_json(id: &str, department: &str) -> serde_json::Value {
    json!({
        "employee_id": id,
        "name": "Sarah Johnson",
        "department": department,
        "position": "QA Engineer",
        "email": "sarah.johnson@company.com",
        "phone": "(415) 555-0137",
        "total_days": 22,
        "present_days": 18,
        "absent_days": 4,
        "late_days": 2,
        "attendance_percentage": 81.8,
        "status": "meets_threshold",
        "recent_status": "Good",
        "avg_hours": 7.9
    })
}

fn analysis_result_json(id: &str) -> serde_json::Value {
    json!({
        "employee_id": id,
        "name": "Sarah Johnson",
        "department": "Engineering",
        "total_days": 22,
        "present_days": 18,
        "absent_days": 4,
        "late_days": 2,
        "attendance_percentage": 81.8,
        "status": "meets_threshold",
        "ai_insights": "Consistent attendance with occasional lateness."
    })
}

fn summary_json() -> serde_json::Value {
    json!({
        "total_employees": 1,
        "meeting_70_percent_threshold": 1,
        "below_threshold": 0,
        "average_attendance_rate": 81.8
    })
}

#[tokio::test]
async fn get_dashboard_stats_decodes_snapshot() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/dashboard-stats");
        then.status(200).json_body(json!({
            "employees_count": 100,
            "records_count": 2200,
            "analysis_count": 0,
            "has_analysis": false
        }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let stats = client.get_dashboard_stats().await.unwrap();
    assert_eq!(stats.employees_count, 100);
    assert_eq!(stats.records_count, 2200);
    assert!(!stats.has_analysis);
}

#[tokio::test]
async fn get_employees_decodes_collection() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(200).json_body(json!({
            "total_employees": 2,
            "employees": [
                employee_json("EMP001", "Engineering"),
                employee_json("EMP002", "Sales")
            ]
        }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let data = client.get_employees().await.unwrap();
    assert_eq!(data.total_employees, 2);
    assert_eq!(data.employees.len(), 2);
    assert_eq!(data.employees[1].department, "Sales");
    assert!(data.employees[0].status.meets());
}

#[tokio::test]
async fn get_employees_error_uses_message_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(500)
            .json_body(json!({ "message": "database unavailable" }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client.get_employees().await.unwrap_err();
    assert_eq!(err, "database unavailable");
}

#[tokio::test]
async fn get_employees_error_falls_back_without_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/employees");
        then.status(500).json_body(json!({}));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client.get_employees().await.unwrap_err();
    assert_eq!(err, EMPLOYEES_FETCH_FALLBACK);
}

#[tokio::test]
async fn generate_sample_data_decodes_outcome() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/sample-data");
        then.status(200).json_body(json!({
            "message": "Sample data generated successfully",
            "employees_count": 100,
            "records_count": 2200,
            "analysis_period": "Last 30 days"
        }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let outcome = client.generate_sample_data().await.unwrap();
    assert_eq!(outcome.employees_count, 100);
    assert_eq!(outcome.analysis_period.as_deref(), Some("Last 30 days"));
}

#[tokio::test]
async fn generate_sample_data_error_uses_detail_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/sample-data");
        then.status(500)
            .json_body(json!({ "detail": "seeding failed" }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client.generate_sample_data().await.unwrap_err();
    assert_eq!(err, "seeding failed");
}

#[tokio::test]
async fn analyze_attendance_normalizes_detailed_results() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/analyze-attendance");
        then.status(200).json_body(json!({
            "message": "Attendance analysis completed successfully",
            "summary": summary_json(),
            "detailed_results": [analysis_result_json("EMP001")]
        }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let report = client.analyze_attendance().await.unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.summary.unwrap().total_employees, 1);
}

#[tokio::test]
async fn analyze_attendance_error_uses_detail_field_or_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/analyze-attendance");
        then.status(404).json_body(json!({
            "detail": "No attendance data found. Please generate sample data first."
        }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client.analyze_attendance().await.unwrap_err();
    assert_eq!(
        err,
        "No attendance data found. Please generate sample data first."
    );

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/analyze-attendance");
        then.status(500).json_body(json!({ "error": "not the field" }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client.analyze_attendance().await.unwrap_err();
    assert_eq!(err, ANALYZE_FALLBACK);
}

#[tokio::test]
async fn attendance_report_accepts_plain_results_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance-report");
        then.status(200).json_body(json!({
            "summary": summary_json(),
            "results": [analysis_result_json("EMP001")]
        }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let report = client.get_attendance_report().await.unwrap();
    assert_eq!(report.results.len(), 1);
}

#[tokio::test]
async fn attendance_report_error_is_generic() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/attendance-report");
        then.status(500)
            .json_body(json!({ "detail": "should not surface" }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client.get_attendance_report().await.unwrap_err();
    assert_eq!(err, REPORT_FALLBACK);
}
