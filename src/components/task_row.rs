//! Task Row
//!
//! A single task: label, completion indicator, delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::Task;
use crate::state::TaskListState;
use crate::sync::{self, DeleteOutcome};

#[component]
pub fn TaskRow(task: Task, state: RwSignal<TaskListState>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let is_done = task.is_done;
    let label = task.label.clone();

    let delete = move |_| {
        // Local-only entries have no id to delete by.
        let Some(id) = id else { return };
        let api = ctx.api();
        let config = ctx.config();
        spawn_local(async move {
            let current = state.try_with(|s| s.tasks.clone()).unwrap_or_default();
            match sync::remove_task(api.as_ref(), &config, &current, id).await {
                Ok(DeleteOutcome::Refetch) => ctx.reload(),
                Ok(DeleteOutcome::Replaced(remaining)) => {
                    state.try_update(|s| s.apply_replaced(remaining));
                }
                Err(e) => {
                    // No optimistic removal: state stays as-is on failure.
                    web_sys::console::error_1(
                        &format!("[TASKS] delete {} failed: {}", id, e).into(),
                    );
                    state.try_update(|s| s.set_error(&e));
                }
            }
        });
    };

    view! {
        <li class=move || if is_done { "task-row completed" } else { "task-row" }>
            <span class="task-done-indicator">{if is_done { "✓" } else { "·" }}</span>
            <span class="task-label">{label}</span>
            <button class="delete-btn" on:click=delete>"×"</button>
        </li>
    }
}
