use leptos::*;

mod api;
mod components;
pub mod config;
mod pages;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;

use pages::dashboard::DashboardPage;

#[component]
pub fn App() -> impl IntoView {
    view! { <DashboardPage /> }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Attendance Analyzer Frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__ATTENDANCE_ENV is present (env.js), it takes precedence.
    spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    mount_to_body(|| view! { <App /> });
}
