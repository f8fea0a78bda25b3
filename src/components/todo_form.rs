//! Todo Form Component
//!
//! Form for adding new entries with inline validation.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::new_todo_id;
use crate::store::{store_dispatch, use_todo_store, Action};

/// Validation message for a blank add or edit input
pub const EMPTY_INPUT_ERROR: &str = "Todo input cannot be empty!";

/// Form for adding new entries at the top of the list
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_todo_store();

    let (new_text, set_new_text) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get().trim().to_string();
        if text.is_empty() {
            set_error.set(EMPTY_INPUT_ERROR.to_string());
            return;
        }

        store_dispatch(&store, Action::Add { id: new_todo_id(), item: text });
        ctx.toast("ToDo added successfully");
        set_new_text.set(String::new());
        set_error.set(String::new());
    };

    view! {
        <form class="todo-form" on:submit=add_todo>
            <div class="todo-form-row">
                <input
                    type="text"
                    placeholder="Enter your todo"
                    autofocus=true
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>

            <Show when=move || !error.get().is_empty()>
                <div class="form-error" role="alert">{move || error.get()}</div>
            </Show>
        </form>
    }
}
