use serde::{Deserialize, Serialize};

// ============================================================================
// Selection set
// ============================================================================

/// Отмеченные пользователем контакты
///
/// Хранится в sessionStorage как JSON-массив строковых id.
/// Порядок отметки сохраняется, дубликаты не допускаются.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CheckedContacts {
    ids: Vec<String>,
}

impl CheckedContacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the stored JSON array, dropping repeated ids.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Добавить id. Возвращает `false`, если он уже был отмечен.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Убрать id. Возвращает `false`, если его не было.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.ids.iter().position(|existing| existing == id) {
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Comma-joined ids, the format the servlets split on.
    pub fn joined(&self) -> String {
        self.ids.join(",")
    }
}

impl FromIterator<String> for CheckedContacts {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut checked = Self::new();
        for id in iter {
            checked.insert(id);
        }
        checked
    }
}

impl From<Vec<String>> for CheckedContacts {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<CheckedContacts> for Vec<String> {
    fn from(checked: CheckedContacts) -> Self {
        checked.ids
    }
}
