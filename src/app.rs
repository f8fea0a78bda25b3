//! ToDo App
//!
//! Main application component: owns the store, wires the persistence
//! bridge, and lays out the single-column card.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Toast, TodoForm, TodoListView};
use crate::context::AppContext;
use crate::storage::{BrowserStorage, TodoStorage};
use crate::store::{store_dispatch, Action, TodoState, TodoStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(TodoState::default());
    provide_context(store);

    let (toast_message, set_toast_message) = signal::<Option<String>>(None);
    let (toast_seq, set_toast_seq) = signal(0u32);
    provide_context(AppContext::new(
        (toast_message, set_toast_message),
        (toast_seq, set_toast_seq),
    ));

    let storage: Rc<dyn TodoStorage> = Rc::new(BrowserStorage::new());

    // Rehydrate persisted todos before the first render. Missing or
    // corrupt data leaves the empty default in place.
    if let Some(todos) = storage.load() {
        web_sys::console::log_1(&format!("[APP] Rehydrated {} todos", todos.len()).into());
        store_dispatch(&store, Action::SetAll(todos));
    }

    // Mirror every state change back to storage, including the state the
    // session started with
    Effect::new(move |_| {
        let todos = store.todos().get();
        if let Err(err) = storage.save(&todos) {
            web_sys::console::warn_1(&format!("[APP] Failed to persist todos: {}", err).into());
        }
    });

    view! {
        <Toast />

        <div class="todo-card">
            <h1>"ToDo App"</h1>

            <TodoForm />

            <TodoListView />

            <p class="todo-count">{move || format!("{} todos", store.todos().get().len())}</p>
        </div>
    }
}
