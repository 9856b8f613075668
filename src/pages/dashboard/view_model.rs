use crate::api::{AnalysisReport, ApiClient, DashboardStats, EmployeesResponse};
use crate::pages::dashboard::{repository::DashboardRepository, utils};
use leptos::{ev::MouseEvent, *};
use std::rc::Rc;

pub const STATS_FETCH_FALLBACK: &str = "Failed to load dashboard statistics";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Dashboard,
    Employees,
    Results,
}

/// All dashboard state lives here: the three server snapshots, the
/// shared loading flag and error slot, the active tab and the employee
/// filters. Each operation is one method, so the whole request/response
/// discipline is auditable in one place.
///
/// The loading flag is not a mutex: nothing stops a second request while
/// one is in flight, and the last response to arrive wins.
#[derive(Clone)]
pub struct DashboardViewModel {
    pub active_view: RwSignal<ActiveView>,
    pub dashboard_stats: RwSignal<Option<DashboardStats>>,
    pub employees_data: RwSignal<Option<EmployeesResponse>>,
    pub analysis_results: RwSignal<Option<AnalysisReport>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub search_term: RwSignal<String>,
    pub filter_department: RwSignal<String>,
    pub filter_status: RwSignal<String>,
    repository: DashboardRepository,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let vm = Self {
            active_view: create_rw_signal(ActiveView::Dashboard),
            dashboard_stats: create_rw_signal(None),
            employees_data: create_rw_signal(None),
            analysis_results: create_rw_signal(None),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            search_term: create_rw_signal(String::new()),
            filter_department: create_rw_signal(String::new()),
            filter_status: create_rw_signal(String::new()),
            repository: DashboardRepository::new_with_client(Rc::new(api)),
        };

        {
            let bootstrap = vm.clone();
            create_effect(move |_| {
                let vm = bootstrap.clone();
                spawn_local(async move {
                    vm.refresh_dashboard_stats().await;
                });
            });
        }

        vm
    }

    /// Fetch the counters for the dashboard tab. Runs without the shared
    /// loading flag; a failure only sets the generic error message.
    pub async fn refresh_dashboard_stats(&self) {
        match self.repository.fetch_dashboard_stats().await {
            Ok(snapshot) => self.dashboard_stats.set(Some(snapshot)),
            Err(message) => {
                log::error!("Error fetching dashboard stats: {message}");
                self.error.set(Some(STATS_FETCH_FALLBACK.to_string()));
            }
        }
    }

    pub async fn load_employees(&self) {
        self.loading.set(true);
        self.error.set(None);
        match self.repository.fetch_employees().await {
            Ok(snapshot) => {
                self.employees_data.set(Some(snapshot));
                self.error.set(None);
            }
            Err(message) => {
                log::error!("Error fetching employees data: {message}");
                self.error.set(Some(message));
            }
        }
        self.loading.set(false);
    }

    pub async fn generate_sample_data(&self) {
        self.loading.set(true);
        self.error.set(None);
        match self.repository.generate_sample_data().await {
            Ok(outcome) => {
                self.refresh_dashboard_stats().await;
                self.error.set(None);
                utils::notify_user(&format!(
                    "Sample data with {} employees generated successfully!",
                    outcome.employees_count
                ));
            }
            Err(message) => {
                log::error!("Error generating sample data: {message}");
                self.error.set(Some(message));
            }
        }
        self.loading.set(false);
    }

    pub async fn run_analysis(&self) {
        self.loading.set(true);
        self.error.set(None);
        match self.repository.run_analysis().await {
            Ok(report) => {
                self.analysis_results.set(Some(report));
                self.refresh_dashboard_stats().await;
                self.active_view.set(ActiveView::Results);
                self.error.set(None);
            }
            Err(message) => {
                log::error!("Error analyzing attendance: {message}");
                self.error.set(Some(message));
            }
        }
        self.loading.set(false);
    }

    /// Read-only twin of `run_analysis`: loads the last stored report and
    /// jumps to the results tab without touching the dashboard counters.
    pub async fn fetch_latest_report(&self) {
        self.loading.set(true);
        self.error.set(None);
        match self.repository.fetch_report().await {
            Ok(report) => {
                self.analysis_results.set(Some(report));
                self.active_view.set(ActiveView::Results);
                self.error.set(None);
            }
            Err(message) => {
                log::error!("Error fetching report: {message}");
                self.error.set(Some(message));
            }
        }
        self.loading.set(false);
    }

    pub fn handle_show_view(&self, view: ActiveView) -> impl Fn(MouseEvent) {
        let vm = self.clone();
        move |_| {
            vm.active_view.set(view);
            if view == ActiveView::Employees {
                let vm = vm.clone();
                spawn_local(async move {
                    vm.load_employees().await;
                });
            }
        }
    }

    pub fn handle_load_employees(&self) -> impl Fn(MouseEvent) {
        let vm = self.clone();
        move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.load_employees().await;
            });
        }
    }

    pub fn handle_generate_sample_data(&self) -> impl Fn(MouseEvent) {
        let vm = self.clone();
        move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.generate_sample_data().await;
            });
        }
    }

    pub fn handle_run_analysis(&self) -> impl Fn(MouseEvent) {
        let vm = self.clone();
        move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.run_analysis().await;
            });
        }
    }

    pub fn handle_fetch_report(&self) -> impl Fn(MouseEvent) {
        let vm = self.clone();
        move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.fetch_latest_report().await;
            });
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
