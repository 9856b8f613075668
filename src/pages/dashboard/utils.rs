use crate::api::{DashboardStats, EmployeeSummary, ThresholdStatus};

/// Employee list as shown on the employees tab: case-insensitive
/// substring match of the search term against name, id and email, then
/// restricted by the department and status selectors when set.
pub fn filter_employees(
    employees: &[EmployeeSummary],
    search_term: &str,
    department: &str,
    status: &str,
) -> Vec<EmployeeSummary> {
    let term = search_term.to_lowercase();
    employees
        .iter()
        .filter(|employee| {
            let matches_search = term.is_empty()
                || employee.name.to_lowercase().contains(&term)
                || employee.employee_id.to_lowercase().contains(&term)
                || employee.email.to_lowercase().contains(&term);
            let matches_department = department.is_empty() || employee.department == department;
            let matches_status =
                status.is_empty() || String::from(employee.status) == status;
            matches_search && matches_department && matches_status
        })
        .cloned()
        .collect()
}

/// Distinct department values in first-seen order.
pub fn distinct_departments(employees: &[EmployeeSummary]) -> Vec<String> {
    let mut departments: Vec<String> = Vec::new();
    for employee in employees {
        if !departments.contains(&employee.department) {
            departments.push(employee.department.clone());
        }
    }
    departments
}

pub fn threshold_color(status: ThresholdStatus) -> &'static str {
    if status.meets() {
        "text-green-600"
    } else {
        "text-red-600"
    }
}

pub fn threshold_badge_class(status: ThresholdStatus) -> String {
    let base = "px-3 py-1 rounded-full text-sm font-medium";
    if status.meets() {
        format!("{} bg-green-100 text-green-800", base)
    } else {
        format!("{} bg-red-100 text-red-800", base)
    }
}

pub fn threshold_label(status: ThresholdStatus) -> &'static str {
    if status.meets() {
        "Meets Threshold"
    } else {
        "Below Threshold"
    }
}

pub fn threshold_short_label(status: ThresholdStatus) -> &'static str {
    if status.meets() {
        "Meets 70%"
    } else {
        "Below 70%"
    }
}

/// Five presentation tiers for the recent-attendance column. Unrecognized
/// values get the neutral tier instead of erroring.
pub fn recent_status_class(recent_status: &str) -> &'static str {
    match recent_status {
        "Excellent" => "bg-green-100 text-green-800",
        "Good" => "bg-blue-100 text-blue-800",
        "Average" => "bg-yellow-100 text-yellow-800",
        "Poor" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-600",
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn format_hours(value: f64) -> String {
    format!("{:.1}h", value)
}

/// Analyze requires a stats snapshot with at least one employee; with no
/// snapshot at all the action stays disabled.
pub fn can_analyze(stats: Option<&DashboardStats>) -> bool {
    stats.map(|s| s.employees_count > 0).unwrap_or(false)
}

pub fn can_view_report(stats: Option<&DashboardStats>) -> bool {
    stats.map(|s| s.has_analysis).unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
pub fn notify_user(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn notify_user(message: &str) {
    log::info!("{message}");
}
