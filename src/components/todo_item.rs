//! Todo Item Component
//!
//! A single row in the list, with inline edit and delete-with-confirm.

use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, EMPTY_INPUT_ERROR};
use crate::context::AppContext;
use crate::models::TodoEntry;
use crate::store::{store_dispatch, use_todo_store, Action};

/// A single entry row
#[component]
pub fn TodoItem(entry: TodoEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_todo_store();

    let id = entry.id.clone();
    let item = entry.item.clone();

    let (editing, set_editing) = signal(false);
    let (edit_text, set_edit_text) = signal(entry.item.clone());
    let (error, set_error) = signal(String::new());

    let save_id = id.clone();
    let save_edit = move || {
        let text = edit_text.get().trim().to_string();
        if text.is_empty() {
            set_error.set(EMPTY_INPUT_ERROR.to_string());
            return;
        }

        store_dispatch(&store, Action::SaveEdit { id: save_id.clone(), item: text });
        ctx.toast("ToDo saved successfully");
        set_editing.set(false);
        set_error.set(String::new());
    };

    let delete_id = id.clone();
    let delete_todo = move || {
        store_dispatch(&store, Action::Delete { id: delete_id.clone() });
        ctx.toast("ToDo deleted");
    };

    // Text shown while not editing; the row is re-keyed on edit, so a
    // plain clone is current for this row's lifetime
    let display_item = item.clone();

    view! {
        <li class="todo-row">
            <div class="todo-row-main">
                {move || if editing.get() {
                    view! {
                        <input
                            type="text"
                            class="todo-edit-input"
                            prop:value=move || edit_text.get()
                            on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                        />
                    }.into_any()
                } else {
                    view! { <span class="todo-text">{display_item.clone()}</span> }.into_any()
                }}

                <Show when=move || !error.get().is_empty()>
                    <div class="form-error" role="alert">{move || error.get()}</div>
                </Show>
            </div>

            <div class="todo-row-actions">
                // Edit toggles into Save for the same button
                <button
                    class="edit-btn"
                    on:click=move |_| {
                        if editing.get() {
                            save_edit();
                        } else {
                            set_edit_text.set(item.clone());
                            set_error.set(String::new());
                            set_editing.set(true);
                        }
                    }
                >
                    {move || if editing.get() { "Save" } else { "Edit" }}
                </button>

                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=Callback::new(move |_| delete_todo())
                />
            </div>
        </li>
    }
}
