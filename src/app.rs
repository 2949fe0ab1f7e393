//! App Root
//!
//! Wires configuration, the HTTP client and the reload trigger into context,
//! then renders the task list view.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{HttpTaskApi, TaskApi};
use crate::components::TaskListView;
use crate::config::TaskServiceConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = TaskServiceConfig::default();
    let api: Rc<dyn TaskApi> = Rc::new(HttpTaskApi::new(&config));
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        config,
        api,
    ));

    view! {
        <main class="app-shell">
            <TaskListView />
        </main>
    }
}
