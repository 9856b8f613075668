use crate::components::layout::{ErrorMessage, LoadingOverlay};
use crate::pages::dashboard::{
    components::{EmployeesSection, OverviewSection, ResultsSection},
    layout::DashboardFrame,
    view_model::{use_dashboard_view_model, ActiveView},
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let active_view = vm.active_view;
    let loading = vm.loading;
    let error = vm.error;

    view! {
        <DashboardFrame>
            <Show when=move || loading.get()>
                <LoadingOverlay />
            </Show>
            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
            {move || match active_view.get() {
                ActiveView::Dashboard => view! { <OverviewSection /> }.into_view(),
                ActiveView::Employees => view! { <EmployeesSection /> }.into_view(),
                ActiveView::Results => view! { <ResultsSection /> }.into_view(),
            }}
        </DashboardFrame>
    }
}
