use contracts::domain::a001_contact::list_page::{
    DELETE_CONFIRM_MESSAGE, DELETE_EMPTY_SELECTION_MESSAGE, NAVIGATION_ERROR_MESSAGE,
    PAGE_CONFIG_ID,
};
use contracts::domain::a001_contact::pagination::PaginationMode;
use serde::Deserialize;
use web_sys::Document;

use crate::shared::error::{ContactsPageError, PageResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Settings of the contacts list page.
///
/// Every field is optional in the inline JSON; missing ones keep defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    pub pagination_mode: PaginationMode,
    pub log_level: LogLevel,
    pub delete_confirm_message: String,
    pub delete_empty_selection_message: String,
    pub navigation_error_message: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            pagination_mode: PaginationMode::default(),
            log_level: LogLevel::default(),
            delete_confirm_message: DELETE_CONFIRM_MESSAGE.to_string(),
            delete_empty_selection_message: DELETE_EMPTY_SELECTION_MESSAGE.to_string(),
            navigation_error_message: NAVIGATION_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Parse the inline config text. Blank text means defaults.
pub fn parse_page_config(raw: &str) -> PageResult<PageConfig> {
    if raw.trim().is_empty() {
        return Ok(PageConfig::default());
    }
    serde_json::from_str(raw).map_err(|e| ContactsPageError::Config(e.to_string()))
}

/// Load configuration for the page
///
/// Search order:
/// 1. `<script type="application/json" id="contactsPageConfig">` in the page
/// 2. Falls back to built-in defaults
pub fn load_page_config(document: &Document) -> PageResult<PageConfig> {
    match document.get_element_by_id(PAGE_CONFIG_ID) {
        Some(element) => parse_page_config(&element.text_content().unwrap_or_default()),
        None => Ok(PageConfig::default()),
    }
}
