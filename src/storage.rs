//! Persistence Bridge
//!
//! Mirrors the in-memory list to browser local storage and rehydrates it
//! once at startup. The store never touches storage directly; the bridge
//! is a capability injected into whatever owns the store, so tests can
//! substitute an in-memory stand-in.

use std::cell::RefCell;

use crate::models::TodoEntry;

/// Local storage slot holding the serialized list
pub const STORAGE_KEY: &str = "todos";

/// Load/save capability for the to-do list
pub trait TodoStorage {
    /// Read the persisted list. Missing or unparseable data yields `None`;
    /// the caller falls back to the empty default.
    fn load(&self) -> Option<Vec<TodoEntry>>;

    /// Overwrite the persisted list with the given entries.
    fn save(&self, todos: &[TodoEntry]) -> Result<(), String>;
}

/// Browser `localStorage` backend
pub struct BrowserStorage {
    key: &'static str,
}

impl BrowserStorage {
    pub fn new() -> Self {
        Self { key: STORAGE_KEY }
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TodoStorage for BrowserStorage {
    fn load(&self) -> Option<Vec<TodoEntry>> {
        let raw = Self::local_storage()?.get_item(self.key).ok()??;
        match serde_json::from_str(&raw) {
            Ok(todos) => Some(todos),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[STORAGE] Ignoring unparseable todos: {}", err).into(),
                );
                None
            }
        }
    }

    fn save(&self, todos: &[TodoEntry]) -> Result<(), String> {
        let json = serde_json::to_string(todos).map_err(|e| e.to_string())?;
        let storage =
            Self::local_storage().ok_or_else(|| "local storage unavailable".to_string())?;
        storage
            .set_item(self.key, &json)
            .map_err(|_| "failed to write local storage".to_string())
    }
}

/// In-memory backend with the same slot semantics as [`BrowserStorage`],
/// down to how unparseable contents are treated. Used by tests.
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self { slot: RefCell::new(None) }
    }

    /// Start from raw slot contents, e.g. to simulate corrupt data
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: RefCell::new(Some(raw.to_string())),
        }
    }
}

impl TodoStorage for MemoryStorage {
    fn load(&self) -> Option<Vec<TodoEntry>> {
        let raw = self.slot.borrow().clone()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, todos: &[TodoEntry]) -> Result<(), String> {
        let json = serde_json::to_string(todos).map_err(|e| e.to_string())?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, item: &str) -> TodoEntry {
        TodoEntry {
            id: id.to_string(),
            item: item.to_string(),
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let storage = MemoryStorage::new();
        let todos = vec![entry("2", "Walk dog"), entry("1", "Buy milk")];

        storage.save(&todos).expect("Failed to save");

        assert_eq!(storage.load(), Some(todos));
    }

    #[test]
    fn test_load_missing_slot_returns_none() {
        assert_eq!(MemoryStorage::new().load(), None);
    }

    #[test]
    fn test_load_corrupt_slot_returns_none() {
        assert_eq!(MemoryStorage::with_raw("not json").load(), None);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let storage = MemoryStorage::new();

        storage.save(&[entry("1", "A")]).expect("Failed to save");
        storage.save(&[entry("2", "B")]).expect("Failed to save");

        assert_eq!(storage.load(), Some(vec![entry("2", "B")]));
    }

    #[test]
    fn test_wire_format_is_id_item_records() {
        let json = serde_json::to_string(&[entry("1", "Buy milk")]).expect("Failed to serialize");

        assert_eq!(json, r#"[{"id":"1","item":"Buy milk"}]"#);
    }

    #[test]
    fn test_empty_list_round_trips() {
        let storage = MemoryStorage::new();

        storage.save(&[]).expect("Failed to save");

        assert_eq!(storage.load(), Some(Vec::new()));
    }
}
