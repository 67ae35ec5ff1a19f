use crate::dashboards::RetailSalesDashboard;
use crate::shared::config::DashboardConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    // Provide the resolved configuration to the whole app via context.
    provide_context(config);

    view! {
        <main class="app-main">
            <RetailSalesDashboard />
        </main>
    }
}
