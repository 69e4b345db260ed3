/// Поле фильтра поиска контактов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAttribute {
    pub name: String,
    pub value: String,
}

impl SearchAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Current values of the search filter fields, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchAttributes(Vec<SearchAttribute>);

impl SearchAttributes {
    /// `(key, value)` pairs to mirror into session storage.
    /// Unnamed fields have no key and are skipped.
    pub fn storage_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter(|attr| !attr.name.is_empty())
            .map(|attr| (attr.name.as_str(), attr.value.as_str()))
    }
}

impl FromIterator<SearchAttribute> for SearchAttributes {
    fn from_iter<I: IntoIterator<Item = SearchAttribute>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_entries_skip_unnamed() {
        let attrs: SearchAttributes = vec![
            SearchAttribute::new("firstName", "Ivan"),
            SearchAttribute::new("", "orphan"),
            SearchAttribute::new("country", ""),
        ]
        .into_iter()
        .collect();

        let entries: Vec<_> = attrs.storage_entries().collect();
        assert_eq!(entries, vec![("firstName", "Ivan"), ("country", "")]);
    }
}
