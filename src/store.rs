//! To-Do List State Store
//!
//! Holds the ordered list of entries and applies every state transition
//! through a pure reduction function. Uses Leptos reactive_stores for the
//! reactive container; the reducer itself knows nothing about reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoEntry;

/// Application state: the to-do list, newest first
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TodoState {
    /// All entries, newest first
    pub todos: Vec<TodoEntry>,
}

/// State transitions over [`TodoState`]
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Replace the list wholesale. Only used at startup rehydration;
    /// contents are trusted to already satisfy the list invariants.
    SetAll(Vec<TodoEntry>),
    /// Prepend a new entry. The caller validates that `item` is non-empty
    /// and `id` unused before dispatching.
    Add { id: String, item: String },
    /// Remove the matching entry; no-op when no entry has this id.
    Delete { id: String },
    /// Replace the text of the matching entry, keeping its id and
    /// position; no-op when no entry has this id.
    SaveEdit { id: String, item: String },
}

/// Pure reduction function: (state, action) -> new state
///
/// Always returns a fresh snapshot. Side effects (storage writes, toasts)
/// belong to the calling layer and happen strictly after reduction.
pub fn reduce(state: TodoState, action: Action) -> TodoState {
    match action {
        Action::SetAll(todos) => TodoState { todos },
        Action::Add { id, item } => {
            let mut todos = Vec::with_capacity(state.todos.len() + 1);
            todos.push(TodoEntry { id, item });
            todos.extend(state.todos);
            TodoState { todos }
        }
        Action::Delete { id } => TodoState {
            todos: state
                .todos
                .into_iter()
                .filter(|todo| todo.id != id)
                .collect(),
        },
        Action::SaveEdit { id, item } => TodoState {
            todos: state
                .todos
                .into_iter()
                .map(|todo| {
                    if todo.id == id {
                        TodoEntry { item: item.clone(), ..todo }
                    } else {
                        todo
                    }
                })
                .collect(),
        },
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Apply an action to the store
///
/// The single write path into the store: snapshot out, reduce, snapshot
/// back in. The untracked read keeps dispatch sites from subscribing to
/// the list they are about to replace.
pub fn store_dispatch(store: &TodoStore, action: Action) {
    let current = TodoState {
        todos: store.todos().get_untracked(),
    };
    let next = reduce(current, action);
    store.todos().set(next.todos);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{new_todo_id, TodoEntry};

    fn entry(id: &str, item: &str) -> TodoEntry {
        TodoEntry {
            id: id.to_string(),
            item: item.to_string(),
        }
    }

    fn state(entries: &[(&str, &str)]) -> TodoState {
        TodoState {
            todos: entries.iter().map(|(id, item)| entry(id, item)).collect(),
        }
    }

    #[test]
    fn test_add_prepends_newest_first() {
        let s = reduce(
            TodoState::default(),
            Action::Add { id: "1".into(), item: "Buy milk".into() },
        );
        let s = reduce(s, Action::Add { id: "2".into(), item: "Walk dog".into() });

        assert_eq!(s, state(&[("2", "Walk dog"), ("1", "Buy milk")]));
    }

    #[test]
    fn test_add_length_matches_number_of_adds() {
        let mut s = TodoState::default();
        for i in 0..5 {
            s = reduce(
                s,
                Action::Add { id: i.to_string(), item: format!("todo {}", i) },
            );
        }

        assert_eq!(s.todos.len(), 5);
        assert_eq!(s.todos[0].id, "4");
        assert_eq!(s.todos[4].id, "0");
    }

    #[test]
    fn test_set_all_replaces_wholesale() {
        let s = state(&[("1", "old")]);
        let s = reduce(s, Action::SetAll(vec![entry("2", "B"), entry("3", "C")]));

        assert_eq!(s, state(&[("2", "B"), ("3", "C")]));
    }

    #[test]
    fn test_delete_removes_only_matching_entry() {
        let s = state(&[("1", "A"), ("2", "B"), ("3", "C")]);
        let s = reduce(s, Action::Delete { id: "2".into() });

        assert_eq!(s, state(&[("1", "A"), ("3", "C")]));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let s = state(&[("1", "A")]);
        let after = reduce(s.clone(), Action::Delete { id: "2".into() });

        assert_eq!(after, s);
    }

    #[test]
    fn test_delete_twice_is_idempotent() {
        let s = state(&[("1", "A"), ("2", "B")]);
        let once = reduce(s, Action::Delete { id: "1".into() });
        let twice = reduce(once.clone(), Action::Delete { id: "1".into() });

        assert_eq!(twice, once);
    }

    #[test]
    fn test_save_edit_replaces_text_in_place() {
        let s = state(&[("1", "A"), ("2", "B")]);
        let s = reduce(s, Action::SaveEdit { id: "1".into(), item: "A2".into() });

        assert_eq!(s, state(&[("1", "A2"), ("2", "B")]));
    }

    #[test]
    fn test_save_edit_last_write_wins() {
        let s = state(&[("1", "A")]);
        let s = reduce(s, Action::SaveEdit { id: "1".into(), item: "x".into() });
        let s = reduce(s, Action::SaveEdit { id: "1".into(), item: "y".into() });

        assert_eq!(s, state(&[("1", "y")]));
    }

    #[test]
    fn test_save_edit_unknown_id_is_noop() {
        let s = state(&[("1", "A"), ("2", "B")]);
        let after = reduce(s.clone(), Action::SaveEdit { id: "3".into(), item: "C".into() });

        assert_eq!(after, s);
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        assert_ne!(new_todo_id(), new_todo_id());
    }
}
