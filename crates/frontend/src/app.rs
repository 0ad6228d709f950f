use crate::routes::routes::AppRoutes;
use crate::shared::alert::{AlertHost, AlertService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide AlertService for centralized notifications
    provide_context(AlertService::new());

    view! {
        <AppRoutes />
        <AlertHost />
    }
}
