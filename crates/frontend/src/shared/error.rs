//! Error type shared by the contacts page modules.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactsPageError {
    #[error("window is not available")]
    NoWindow,

    #[error("required element #{id} not found")]
    MissingElement { id: String },

    #[error("element #{id} is not {expected}")]
    UnexpectedElement { id: String, expected: &'static str },

    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid page config: {0}")]
    Config(String),

    #[error("dom error: {0}")]
    Dom(String),
}

pub type PageResult<T> = Result<T, ContactsPageError>;

impl ContactsPageError {
    pub fn missing(id: impl Into<String>) -> Self {
        Self::MissingElement { id: id.into() }
    }

    /// Wrap an exception thrown by the Storage API.
    pub fn storage(err: JsValue) -> Self {
        Self::Storage(js_error_message(&err))
    }

    /// Wrap an exception thrown by a DOM call.
    pub fn dom(err: JsValue) -> Self {
        Self::Dom(js_error_message(&err))
    }
}

/// Best-effort human readable text for a thrown JS value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|text| text.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_element() {
        let err = ContactsPageError::missing("contactsForm");
        assert_eq!(err.to_string(), "required element #contactsForm not found");
    }

    #[test]
    fn test_unexpected_element_display() {
        let err = ContactsPageError::UnexpectedElement {
            id: "isLowerIds".to_string(),
            expected: "an input",
        };
        assert_eq!(err.to_string(), "element #isLowerIds is not an input");
    }
}
