use crate::api::{AnalysisResult, AnalysisSummary};
use crate::pages::dashboard::{
    utils::{format_percent, threshold_badge_class, threshold_color, threshold_label},
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn ResultsSection() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let analysis_results = vm.analysis_results;
    let loading = vm.loading;
    let on_refresh = vm.handle_fetch_report();

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold text-gray-900">"Attendance Analysis Results"</h2>
                <button
                    on:click=on_refresh
                    disabled=move || loading.get()
                    class="bg-blue-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-blue-700 transition-colors disabled:opacity-50"
                >
                    "Refresh Report"
                </button>
            </div>

            {move || match analysis_results.get() {
                None => view! {
                    <div class="bg-white rounded-xl shadow-md p-6 text-center text-gray-500">
                        "No analysis results yet. Run the AI analysis from the dashboard."
                    </div>
                }.into_view(),
                Some(report) => {
                    let summary = report.summary.clone().map(|summary| view! {
                        <SummaryCard summary=summary />
                    });
                    let results = report.results.clone();
                    view! {
                        <div class="space-y-6">
                            {summary}
                            <div class="space-y-4">
                                <For
                                    each=move || results.clone()
                                    key=|result| result.employee_id.clone()
                                    children=move |result: AnalysisResult| {
                                        view! { <ResultCard result=result /> }
                                    }
                                />
                            </div>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn SummaryCard(summary: AnalysisSummary) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-md p-6">
            <h3 class="text-lg font-semibold mb-4">"Summary"</h3>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <div class="text-center">
                    <p class="text-2xl font-bold text-blue-600">{summary.total_employees}</p>
                    <p class="text-sm text-gray-600">"Total Employees"</p>
                </div>
                <div class="text-center">
                    <p class="text-2xl font-bold text-green-600">{summary.meeting_70_percent_threshold}</p>
                    <p class="text-sm text-gray-600">"Meeting 70% Threshold"</p>
                </div>
                <div class="text-center">
                    <p class="text-2xl font-bold text-red-600">{summary.below_threshold}</p>
                    <p class="text-sm text-gray-600">"Below Threshold"</p>
                </div>
                <div class="text-center">
                    <p class="text-2xl font-bold text-purple-600">{format_percent(summary.average_attendance_rate)}</p>
                    <p class="text-sm text-gray-600">"Average Attendance"</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ResultCard(result: AnalysisResult) -> impl IntoView {
    let status = result.status;
    view! {
        <div class="bg-white rounded-xl shadow-md p-6">
            <div class="flex items-center mb-2">
                <h3 class="text-lg font-semibold text-gray-900 mr-3">{result.name}</h3>
                <span class=threshold_badge_class(status)>
                    {threshold_label(status)}
                </span>
            </div>
            <p class="text-gray-600 mb-2">
                {format!("{} • {}", result.employee_id, result.department)}
            </p>

            <div class="grid grid-cols-2 md:grid-cols-5 gap-4 mb-4">
                <div>
                    <p class="text-sm text-gray-500">"Attendance Rate"</p>
                    <p class=format!("text-xl font-bold {}", threshold_color(status))>
                        {format_percent(result.attendance_percentage)}
                    </p>
                </div>
                <div>
                    <p class="text-sm text-gray-500">"Present Days"</p>
                    <p class="text-lg font-semibold text-gray-900">{result.present_days}</p>
                </div>
                <div>
                    <p class="text-sm text-gray-500">"Absent Days"</p>
                    <p class="text-lg font-semibold text-gray-900">{result.absent_days}</p>
                </div>
                <div>
                    <p class="text-sm text-gray-500">"Late Days"</p>
                    <p class="text-lg font-semibold text-gray-900">{result.late_days}</p>
                </div>
                <div>
                    <p class="text-sm text-gray-500">"Total Days"</p>
                    <p class="text-lg font-semibold text-gray-900">{result.total_days}</p>
                </div>
            </div>

            <div class="bg-gray-50 rounded-lg p-4">
                <h4 class="font-semibold text-gray-900 mb-2">
                    <i class="fas fa-lightbulb text-blue-600 mr-2"></i>
                    "AI Insights"
                </h4>
                <p class="text-gray-700 leading-relaxed">{result.ai_insights}</p>
            </div>
        </div>
    }
}
