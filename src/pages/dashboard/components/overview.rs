use crate::pages::dashboard::{
    utils::{can_analyze, can_view_report, format_percent},
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn OverviewSection() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let stats = vm.dashboard_stats;
    let loading = vm.loading;
    let hero_generate = vm.handle_generate_sample_data();
    let hero_analyze = vm.handle_run_analysis();
    let quick_generate = vm.handle_generate_sample_data();
    let quick_analyze = vm.handle_run_analysis();
    let quick_report = vm.handle_fetch_report();

    let analyze_disabled = move || loading.get() || !can_analyze(stats.get().as_ref());
    let report_disabled = move || loading.get() || !can_view_report(stats.get().as_ref());

    view! {
        <div class="space-y-8">
            <div class="text-center bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-2xl p-8">
                <h1 class="text-4xl font-bold mb-4">"AI-Powered Attendance Analyzer"</h1>
                <p class="text-xl opacity-90 mb-6">
                    "Automated attendance tracking with intelligent insights and 70% attendance threshold analysis"
                </p>
                <div class="flex flex-wrap justify-center gap-4">
                    <button
                        on:click=hero_generate
                        disabled=move || loading.get()
                        class="bg-white text-blue-600 px-6 py-3 rounded-lg font-semibold hover:bg-blue-50 transition-colors disabled:opacity-50"
                    >
                        {move || if loading.get() { "Generating..." } else { "Generate Sample Data" }}
                    </button>
                    <button
                        on:click=hero_analyze
                        disabled=analyze_disabled
                        class="bg-purple-700 text-white px-6 py-3 rounded-lg font-semibold hover:bg-purple-800 transition-colors disabled:opacity-50"
                    >
                        {move || if loading.get() { "Analyzing..." } else { "Analyze Attendance" }}
                    </button>
                </div>
            </div>

            {move || stats.get().map(|snapshot| {
                let threshold_cards = snapshot.has_analysis.then(|| view! {
                    <StatCard
                        label="Meeting 70% Threshold".to_string()
                        value=snapshot.meeting_threshold.unwrap_or_default().to_string()
                        accent="border-yellow-500".to_string()
                        icon="fas fa-check-circle text-yellow-600".to_string()
                    />
                    <StatCard
                        label="Average Attendance".to_string()
                        value=snapshot.average_attendance.map(format_percent).unwrap_or_else(|| "-".into())
                        accent="border-purple-500".to_string()
                        icon="fas fa-chart-line text-purple-600".to_string()
                    />
                });
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        <StatCard
                            label="Total Employees".to_string()
                            value=snapshot.employees_count.to_string()
                            accent="border-blue-500".to_string()
                            icon="fas fa-users text-blue-600".to_string()
                        />
                        <StatCard
                            label="Attendance Records".to_string()
                            value=snapshot.records_count.to_string()
                            accent="border-green-500".to_string()
                            icon="fas fa-calendar-check text-green-600".to_string()
                        />
                        {threshold_cards}
                    </div>
                }
            })}

            <div class="bg-white rounded-xl shadow-md p-6">
                <h3 class="text-xl font-semibold mb-4">"Quick Actions"</h3>
                <div class="flex flex-wrap gap-4">
                    <button
                        on:click=quick_generate
                        disabled=move || loading.get()
                        class="bg-blue-600 text-white px-6 py-3 rounded-lg font-medium hover:bg-blue-700 transition-colors disabled:opacity-50"
                    >
                        "Generate Sample Data"
                    </button>
                    <button
                        on:click=quick_analyze
                        disabled=analyze_disabled
                        class="bg-green-600 text-white px-6 py-3 rounded-lg font-medium hover:bg-green-700 transition-colors disabled:opacity-50"
                    >
                        "Run AI Analysis"
                    </button>
                    <button
                        on:click=quick_report
                        disabled=report_disabled
                        class="bg-purple-600 text-white px-6 py-3 rounded-lg font-medium hover:bg-purple-700 transition-colors disabled:opacity-50"
                    >
                        "View Latest Report"
                    </button>
                </div>
            </div>

            <div class="bg-blue-50 rounded-xl p-6">
                <h3 class="text-lg font-semibold text-blue-900 mb-3">"How to Use"</h3>
                <div class="space-y-2 text-blue-800">
                    <p><strong>"Step 1: "</strong>"Generate sample data to populate the system with realistic attendance records"</p>
                    <p><strong>"Step 2: "</strong>"Run AI analysis to process attendance data with 70% threshold rules"</p>
                    <p><strong>"Step 3: "</strong>"Review detailed results with AI-powered insights and recommendations"</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCard(label: String, value: String, accent: String, icon: String) -> impl IntoView {
    view! {
        <div class=format!("bg-white rounded-xl shadow-md p-6 border-l-4 {}", accent)>
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-600">{label}</p>
                    <p class="text-3xl font-bold text-gray-900">{value}</p>
                </div>
                <div class="p-3 rounded-full">
                    <i class=format!("{} text-2xl", icon)></i>
                </div>
            </div>
        </div>
    }
}
