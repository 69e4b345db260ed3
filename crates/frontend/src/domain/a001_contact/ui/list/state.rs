use contracts::domain::a001_contact::list_page::CHECKED_CONTACTS_KEY;
use contracts::domain::a001_contact::search::SearchAttributes;
use contracts::domain::a001_contact::selection::CheckedContacts;

use crate::shared::error::{ContactsPageError, PageResult};
use crate::shared::session_store::KeyValueStore;

/// Состояние списка контактов в sessionStorage
///
/// Отмеченные контакты и значения фильтров поиска переживают переходы
/// между страницами списка в пределах одной вкладки.
pub struct ContactsSessionState<S> {
    store: S,
}

impl<S: KeyValueStore> ContactsSessionState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored selection. Absent or unreadable entries count as empty.
    pub fn checked_contacts(&self) -> CheckedContacts {
        let raw = match self.store.get_item(CHECKED_CONTACTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return CheckedContacts::new(),
            Err(err) => {
                log::warn!("failed to read {}: {}", CHECKED_CONTACTS_KEY, err);
                return CheckedContacts::new();
            }
        };
        CheckedContacts::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("ignoring malformed {} ({}): {}", CHECKED_CONTACTS_KEY, err, raw);
            CheckedContacts::new()
        })
    }

    /// Отметить или снять отметку с контакта
    ///
    /// Store is written only when the selection actually changes, so
    /// unchecking with nothing stored leaves the store untouched.
    pub fn toggle(&self, contact_id: &str, checked: bool) -> PageResult<CheckedContacts> {
        let mut selection = self.checked_contacts();
        let changed = if checked {
            selection.insert(contact_id)
        } else {
            selection.remove(contact_id)
        };
        if changed {
            self.save(&selection)?;
        }
        Ok(selection)
    }

    fn save(&self, selection: &CheckedContacts) -> PageResult<()> {
        let json = selection
            .to_json()
            .map_err(|e| ContactsPageError::Storage(e.to_string()))?;
        self.store.set_item(CHECKED_CONTACTS_KEY, &json)
    }

    /// Mirror every named search field under its own key.
    pub fn save_search_attributes(&self, attributes: &SearchAttributes) -> PageResult<()> {
        for (name, value) in attributes.storage_entries() {
            self.store.set_item(name, value)?;
        }
        Ok(())
    }

    /// Forget the selection and the search filters together.
    pub fn clear(&self) -> PageResult<()> {
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::session_store::MemoryStore;
    use contracts::domain::a001_contact::search::SearchAttribute;
    use std::rc::Rc;

    fn state() -> (Rc<MemoryStore>, ContactsSessionState<Rc<MemoryStore>>) {
        let store = Rc::new(MemoryStore::new());
        (store.clone(), ContactsSessionState::new(store))
    }

    #[test]
    fn test_check_creates_selection() {
        let (store, state) = state();
        state.toggle("3", true).unwrap();
        assert_eq!(
            store.get_item(CHECKED_CONTACTS_KEY).unwrap().as_deref(),
            Some(r#"["3"]"#)
        );
    }

    #[test]
    fn test_uncheck_without_selection_is_noop() {
        let (store, state) = state();
        let selection = state.toggle("3", false).unwrap();
        assert!(selection.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_selection_tracks_checked_boxes() {
        let (_, state) = state();
        let events = [
            ("1", true),
            ("2", true),
            ("1", true),
            ("3", true),
            ("2", false),
            ("4", false),
            ("1", false),
            ("2", true),
        ];
        let mut expected: Vec<&str> = Vec::new();
        for (id, checked) in events {
            state.toggle(id, checked).unwrap();
            if checked && !expected.contains(&id) {
                expected.push(id);
            } else if !checked {
                expected.retain(|existing| *existing != id);
            }
        }
        assert_eq!(state.checked_contacts().ids(), expected.as_slice());
    }

    #[test]
    fn test_malformed_selection_reads_as_empty() {
        let (store, state) = state();
        store.set_item(CHECKED_CONTACTS_KEY, "{oops").unwrap();
        assert!(state.checked_contacts().is_empty());

        state.toggle("5", true).unwrap();
        assert_eq!(state.checked_contacts().joined(), "5");
    }

    #[test]
    fn test_search_attributes_and_clear() {
        let (store, state) = state();
        let attrs: SearchAttributes = vec![
            SearchAttribute::new("firstName", "Anna"),
            SearchAttribute::new("city", "Minsk"),
        ]
        .into_iter()
        .collect();
        state.save_search_attributes(&attrs).unwrap();
        state.toggle("9", true).unwrap();
        assert_eq!(store.get_item("city").unwrap().as_deref(), Some("Minsk"));
        assert_eq!(store.len(), 3);

        state.clear().unwrap();
        assert!(store.is_empty());
        assert!(state.checked_contacts().is_empty());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod property_tests {
    use super::*;
    use crate::shared::session_store::MemoryStore;
    use proptest::prelude::*;
    use std::rc::Rc;

    fn toggle_events() -> impl Strategy<Value = Vec<(String, bool)>> {
        prop::collection::vec(
            (prop::sample::select(vec!["1", "2", "3", "4", "5"]), any::<bool>())
                .prop_map(|(id, checked)| (id.to_string(), checked)),
            0..40,
        )
    }

    proptest! {
        /// Property: stored selection equals the set of checked boxes after every event.
        #[test]
        fn selection_matches_checked_boxes(events in toggle_events()) {
            let store = Rc::new(MemoryStore::new());
            let state = ContactsSessionState::new(store.clone());
            let mut model: Vec<String> = Vec::new();

            for (id, checked) in &events {
                state.toggle(id, *checked).unwrap();
                if *checked {
                    if !model.contains(id) {
                        model.push(id.clone());
                    }
                } else {
                    model.retain(|existing| existing != id);
                }

                let stored = state.checked_contacts();
                prop_assert_eq!(stored.ids(), model.as_slice());
            }
        }

        /// Property: unchecking before anything was checked never writes to the store.
        #[test]
        fn leading_unchecks_leave_store_empty(
            ids in prop::collection::vec(prop::sample::select(vec!["1", "2", "3"]), 1..10)
        ) {
            let store = Rc::new(MemoryStore::new());
            let state = ContactsSessionState::new(store.clone());

            for id in &ids {
                let selection = state.toggle(id, false).unwrap();
                prop_assert!(selection.is_empty());
            }
            prop_assert!(store.is_empty());
        }
    }
}
