//! Field Task Frontend App
//!
//! Root component: resolves the endpoint, builds the API client and store.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::HttpTaskApi;
use crate::components::TaskForm;
use crate::config::ApiConfig;
use crate::context::FormContext;
use crate::store::new_form_store;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::load();
    let api = HttpTaskApi::new(config.endpoint);
    log::info!("[APP] Submitting tasks to {}", api.endpoint());

    // Provide context to all children
    provide_context(FormContext::new(new_form_store(), Arc::new(api)));

    view! {
        <main class="app-layout">
            <TaskForm />
        </main>
    }
}
