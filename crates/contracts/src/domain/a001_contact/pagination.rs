use serde::{Deserialize, Serialize};

use super::list_page::{START_ID_FOR_NEXT_PAGE_ID, START_ID_FOR_PREVIOUS_PAGE_ID};

/// Направление перехода по страницам
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

impl PageDirection {
    /// Value relayed in `isLowerIds`: previous pages hold lower contact ids.
    pub fn is_lower_ids(self) -> bool {
        matches!(self, PageDirection::Previous)
    }

    /// Hidden field holding the cursor the server prepared for this direction.
    pub fn cursor_field_id(self) -> &'static str {
        match self {
            PageDirection::Next => START_ID_FOR_NEXT_PAGE_ID,
            PageDirection::Previous => START_ID_FOR_PREVIOUS_PAGE_ID,
        }
    }
}

/// How the `hasNext` / `hasPrevious` flags map onto the pagination controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationMode {
    /// Each flag enables its own control.
    #[default]
    Corrected,
    /// Either flag enables "previous"; "next" stays disabled.
    /// Matches the markup the legacy page script was written against.
    Legacy,
}

/// Флаги наличия соседних страниц из скрытых полей
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationFlags {
    pub has_next: bool,
    pub has_previous: bool,
}

/// Which pagination controls should lose their `disabled` class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationAffordance {
    pub enable_next: bool,
    pub enable_previous: bool,
}

impl PaginationFlags {
    /// Only the literal `"true"` the server writes counts as set.
    pub fn from_fields(has_next: &str, has_previous: &str) -> Self {
        Self {
            has_next: has_next == "true",
            has_previous: has_previous == "true",
        }
    }

    pub fn affordance(&self, mode: PaginationMode) -> PaginationAffordance {
        match mode {
            PaginationMode::Corrected => PaginationAffordance {
                enable_next: self.has_next,
                enable_previous: self.has_previous,
            },
            PaginationMode::Legacy => PaginationAffordance {
                enable_next: false,
                enable_previous: self.has_next || self.has_previous,
            },
        }
    }
}
