use crate::api::EmployeeSummary;
use crate::pages::dashboard::{
    utils::{
        distinct_departments, filter_employees, format_hours, format_percent,
        recent_status_class, threshold_badge_class, threshold_color, threshold_short_label,
    },
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn EmployeesSection() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let employees_data = vm.employees_data;
    let loading = vm.loading;
    let search_term = vm.search_term;
    let filter_department = vm.filter_department;
    let filter_status = vm.filter_status;
    let on_reload = vm.handle_load_employees();

    let departments = move || {
        employees_data
            .get()
            .map(|data| distinct_departments(&data.employees))
            .unwrap_or_default()
    };
    let filtered = move || {
        employees_data
            .get()
            .map(|data| {
                filter_employees(
                    &data.employees,
                    &search_term.get(),
                    &filter_department.get(),
                    &filter_status.get(),
                )
            })
            .unwrap_or_default()
    };
    let total = move || {
        employees_data
            .get()
            .map(|data| data.total_employees)
            .unwrap_or_default()
    };

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold text-gray-900">"Employees"</h2>
                <button
                    on:click=on_reload
                    disabled=move || loading.get()
                    class="bg-blue-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-blue-700 transition-colors disabled:opacity-50"
                >
                    "Reload Employees"
                </button>
            </div>

            <div class="bg-white rounded-xl shadow-md p-6">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <input
                        type="text"
                        placeholder="Search by name, ID, or email..."
                        class="border border-gray-300 rounded-lg px-4 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        prop:value=move || search_term.get()
                        on:input=move |ev| search_term.set(event_target_value(&ev))
                    />
                    <select
                        class="border border-gray-300 rounded-lg px-4 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        on:change=move |ev| filter_department.set(event_target_value(&ev))
                    >
                        <option value="">"All Departments"</option>
                        <For
                            each=departments
                            key=|department| department.clone()
                            children=move |department: String| {
                                view! { <option value=department.clone()>{department}</option> }
                            }
                        />
                    </select>
                    <select
                        class="border border-gray-300 rounded-lg px-4 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        on:change=move |ev| filter_status.set(event_target_value(&ev))
                    >
                        <option value="">"All Statuses"</option>
                        <option value="meets_threshold">"Meets 70%"</option>
                        <option value="below_threshold">"Below 70%"</option>
                    </select>
                </div>
            </div>

            {move || match employees_data.get() {
                None => view! {
                    <div class="bg-white rounded-xl shadow-md p-6 text-center text-gray-500">
                        "Employee data has not been loaded yet."
                    </div>
                }.into_view(),
                Some(_) => {
                    let rows = filtered();
                    view! {
                        <div class="bg-white rounded-xl shadow-md overflow-hidden">
                            <div class="px-6 py-3 text-sm text-gray-600 border-b">
                                {format!("Showing {} of {} employees", rows.len(), total())}
                            </div>
                            <table class="min-w-full divide-y divide-gray-200">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <HeaderCell label="Employee" />
                                        <HeaderCell label="Department" />
                                        <HeaderCell label="Attendance" />
                                        <HeaderCell label="Present / Absent / Late" />
                                        <HeaderCell label="Avg Hours" />
                                        <HeaderCell label="Status" />
                                        <HeaderCell label="Recent" />
                                    </tr>
                                </thead>
                                <tbody class="bg-white divide-y divide-gray-200">
                                    <For
                                        each=move || rows.clone()
                                        key=|employee| employee.employee_id.clone()
                                        children=move |employee: EmployeeSummary| {
                                            view! { <EmployeeRow employee=employee /> }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn HeaderCell(label: &'static str) -> impl IntoView {
    view! {
        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
            {label}
        </th>
    }
}

#[component]
fn EmployeeRow(employee: EmployeeSummary) -> impl IntoView {
    let status = employee.status;
    view! {
        <tr>
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="text-sm font-medium text-gray-900">{employee.name}</div>
                <div class="text-sm text-gray-500">
                    {format!("{} • {}", employee.employee_id, employee.email)}
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="text-sm text-gray-900">{employee.department}</div>
                <div class="text-sm text-gray-500">{employee.position}</div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=format!("text-sm font-semibold {}", threshold_color(status))>
                    {format_percent(employee.attendance_percentage)}
                </span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                {format!(
                    "{} / {} / {}",
                    employee.present_days, employee.absent_days, employee.late_days
                )}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                {format_hours(employee.avg_hours)}
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=threshold_badge_class(status)>
                    {threshold_short_label(status)}
                </span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=format!(
                    "px-3 py-1 rounded-full text-sm font-medium {}",
                    recent_status_class(&employee.recent_status)
                )>
                    {employee.recent_status.clone()}
                </span>
            </td>
        </tr>
    }
}
