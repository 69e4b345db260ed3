//! Tab-scoped key/value storage used by the contacts page.
//!
//! In the browser this is `sessionStorage`; entries survive navigation inside
//! one tab and disappear when the tab is closed. `MemoryStore` stands in when
//! the Storage API is unavailable and in tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use web_sys::window;

use crate::shared::error::{ContactsPageError, PageResult};

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> PageResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> PageResult<()>;
    fn remove_item(&self, key: &str) -> PageResult<()>;
    /// Drop every entry, not only the ones this page wrote.
    fn clear(&self) -> PageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get_item(&self, key: &str) -> PageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> PageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> PageResult<()> {
        (**self).remove_item(key)
    }

    fn clear(&self) -> PageResult<()> {
        (**self).clear()
    }
}

// ============================================================================
// Browser sessionStorage
// ============================================================================

pub struct BrowserSessionStore {
    storage: web_sys::Storage,
}

impl BrowserSessionStore {
    /// Open `window.sessionStorage`.
    ///
    /// Fails when the browser blocks storage (privacy modes, sandboxed frames).
    pub fn open() -> PageResult<Self> {
        let window = window().ok_or(ContactsPageError::NoWindow)?;
        let storage = window
            .session_storage()
            .map_err(ContactsPageError::storage)?
            .ok_or_else(|| ContactsPageError::Storage("sessionStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> PageResult<Option<String>> {
        self.storage.get_item(key).map_err(ContactsPageError::storage)
    }

    fn set_item(&self, key: &str, value: &str) -> PageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(ContactsPageError::storage)
    }

    fn remove_item(&self, key: &str) -> PageResult<()> {
        self.storage
            .remove_item(key)
            .map_err(ContactsPageError::storage)
    }

    fn clear(&self) -> PageResult<()> {
        self.storage.clear().map_err(ContactsPageError::storage)
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Keeps entries for the lifetime of the page only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> PageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> PageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> PageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> PageResult<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}
