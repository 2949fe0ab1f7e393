//! New Task Form
//!
//! Controlled input for the draft buffer plus the submit flow.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::NewTask;
use crate::state::TaskListState;

#[component]
pub fn NewTaskForm(state: RwSignal<TaskListState>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Covers both the button and an Enter keypress in the input.
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.with(|s| s.is_creating) {
            return;
        }
        // Blank or whitespace-only drafts are rejected before any request,
        // and the draft buffer is left untouched.
        let Some(new_task) = state.with(|s| NewTask::from_draft(&s.draft)) else {
            return;
        };
        state.update(TaskListState::begin_create);

        let api = ctx.api();
        let user = ctx.config().user;
        spawn_local(async move {
            let result = api.create_task(&user, &new_task).await;
            match &result {
                Ok(()) => web_sys::console::log_1(
                    &format!("[TASKS] created task: {}", new_task.label).into(),
                ),
                Err(e) => web_sys::console::error_1(
                    &format!("[TASKS] create failed for {:?}: {}", new_task.label, e).into(),
                ),
            }
            let succeeded = result.is_ok();
            state.try_update(|s| s.finish_create(result));
            // Re-fetch only after the create settled, so the fetch observes it.
            if succeeded {
                ctx.reload();
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=submit>
            <input
                type="text"
                placeholder="Add a task..."
                prop:value=move || state.with(|s| s.draft.clone())
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let value = input.value();
                    state.update(|s| s.set_draft(value));
                }
            />
            <button type="submit" disabled=move || state.with(|s| s.is_creating)>
                {move || if state.with(|s| s.is_creating) { "Adding..." } else { "Add" }}
            </button>
        </form>
    }
}
