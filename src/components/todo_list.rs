//! Todo List View Component
//!
//! Renders the ordered list of entries, newest first.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_todo_store, TodoStateStoreFields};

/// The list itself
#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.todos().get()
                // Key on both fields so an edit re-renders the row
                key=|entry| (entry.id.clone(), entry.item.clone())
                children=move |entry| view! { <TodoItem entry=entry /> }
            />
        </ul>
    }
}
