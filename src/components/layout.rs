use crate::pages::dashboard::view_model::{use_dashboard_view_model, ActiveView};
use leptos::*;

fn tab_class(active_view: RwSignal<ActiveView>, view: ActiveView) -> String {
    if active_view.get() == view {
        "px-4 py-2 rounded-lg font-medium transition-colors bg-blue-100 text-blue-700".into()
    } else {
        "px-4 py-2 rounded-lg font-medium transition-colors text-gray-600 hover:text-gray-900 hover:bg-gray-100"
            .into()
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let active_view = vm.active_view;
    let show_dashboard = vm.handle_show_view(ActiveView::Dashboard);
    let show_employees = vm.handle_show_view(ActiveView::Employees);
    let show_results = vm.handle_show_view(ActiveView::Results);

    view! {
        <nav class="bg-white shadow-sm border-b">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <i class="fas fa-chart-bar text-blue-600 text-2xl mr-3"></i>
                        <span class="text-xl font-bold text-gray-900">"AI Attendance Analyzer"</span>
                    </div>
                    <div class="flex items-center space-x-1">
                        <button
                            on:click=show_dashboard
                            class=move || tab_class(active_view, ActiveView::Dashboard)
                        >
                            "Dashboard"
                        </button>
                        <button
                            on:click=show_employees
                            class=move || tab_class(active_view, ActiveView::Employees)
                        >
                            "Employees"
                        </button>
                        <button
                            on:click=show_results
                            class=move || tab_class(active_view, ActiveView::Results)
                        >
                            "Analysis Results"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100">
            <Header />
            <main class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
    }
}

/// Full-screen busy indicator shown while one of the stateful fetches
/// is in flight.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
            <div class="bg-white rounded-lg p-6 flex items-center space-x-4">
                <LoadingSpinner />
                <span class="text-lg font-medium">"Processing..."</span>
            </div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded-lg mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm"><strong>"Error: "</strong>{message}</p>
                </div>
            </div>
        </div>
    }
}
