//! Task List View
//!
//! The main view: runs the load sequence on mount and on every reload
//! trigger, renders the three display states and the count footer.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NewTaskForm, TaskRow};
use crate::context::AppContext;
use crate::state::{DisplayState, TaskListState};
use crate::sync;

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let state = RwSignal::new(TaskListState::default());

    // Load on mount and whenever a mutation triggers a reload. The epoch
    // token makes a superseded load settle as a no-op, so a stale response
    // can never overwrite newer state.
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let api = ctx.api();
        let user = ctx.config().user;
        let Some(token) = state.try_update(TaskListState::begin_load) else {
            return;
        };
        spawn_local(async move {
            let result = sync::load_tasks(api.as_ref(), &user).await;
            match &result {
                Ok(tasks) => web_sys::console::log_1(
                    &format!("[TASKS] loaded {} tasks (trigger={})", tasks.len(), trigger).into(),
                ),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TASKS] load failed: {}", e).into())
                }
            }
            state.try_update(|s| s.finish_load(token, result));
        });
    });

    let clear_all = move |_| {
        let api = ctx.api();
        let user = ctx.config().user;
        spawn_local(async move {
            match api.clear_tasks(&user).await {
                Ok(()) => {
                    // Post-condition is "empty", no re-fetch needed.
                    state.try_update(TaskListState::apply_cleared);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[TASKS] clear all failed: {}", e).into(),
                    );
                    state.try_update(|s| s.set_error(&e));
                }
            }
        });
    };

    view! {
        <div class="task-list-view">
            <h1>"Tasks"</h1>

            <NewTaskForm state=state />

            {move || {
                state.with(|s| match s.display() {
                    DisplayState::Loading => {
                        view! { <div class="loading">"Loading..."</div> }.into_any()
                    }
                    DisplayState::Empty => {
                        view! { <div class="empty-state">"No tasks yet. Add one above."</div> }
                            .into_any()
                    }
                    DisplayState::Populated => view! {
                        <ul class="task-list">
                            <For
                                each=move || state.with(|s| s.tasks.clone())
                                key=|task| (task.id, task.label.clone())
                                children=move |task| view! { <TaskRow task=task state=state /> }
                            />
                        </ul>
                    }
                    .into_any(),
                })
            }}

            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="error-message">
                    {move || state.with(|s| s.error.clone().unwrap_or_default())}
                </div>
            </Show>

            <footer class="task-footer">
                <span class="task-count">{move || state.with(|s| s.count_label())}</span>
                <button class="clear-all-btn" on:click=clear_all>"Clear all"</button>
            </footer>
        </div>
    }
}
