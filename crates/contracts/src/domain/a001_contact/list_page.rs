//! DOM contract of the server-rendered contacts list page.
//!
//! The JSP page renders these ids and names; the frontend only reacts to them.

// ============================================================================
// Table
// ============================================================================

pub const CONTACTS_TABLE_ID: &str = "contactsTable";
pub const EMPTY_CONTACTS_ROW_ID: &str = "emptyContacts";

// ============================================================================
// Pagination
// ============================================================================

pub const HAS_NEXT_ID: &str = "hasNext";
pub const HAS_PREVIOUS_ID: &str = "hasPrevious";
pub const NEXT_PAGE_ID: &str = "nextPage";
pub const PREVIOUS_PAGE_ID: &str = "previousPage";
pub const START_ID_FOR_NEXT_PAGE_ID: &str = "startContactIdForNextPage";
pub const START_ID_FOR_PREVIOUS_PAGE_ID: &str = "startContactIdForPreviousPage";
pub const START_ID_FOR_PAGE_ID: &str = "startContactIdForPage";
pub const IS_LOWER_IDS_ID: &str = "isLowerIds";

// ============================================================================
// Form and actions
// ============================================================================

pub const CONTACTS_FORM_ID: &str = "contactsForm";
pub const EMAIL_CONTACTS_ID: &str = "emailContactsId";
pub const DELETING_CONTACTS_ID: &str = "deletingContactsId";
pub const SEND_EMAIL_BUTTON_ID: &str = "sendEmailButton";
pub const DELETE_CONTACTS_BUTTON_ID: &str = "deleteContactsButton";
pub const ALL_CONTACT_LIST_ID: &str = "allContactList";

// ============================================================================
// Search
// ============================================================================

pub const SEARCH_ATTRIBUTES_ID: &str = "contactSearchAttributes";
pub const IS_SEARCH_ID: &str = "isSearch";

// ============================================================================
// Named inputs
// ============================================================================

pub const CONTACT_CHECKBOX_NAME: &str = "contact";
pub const SHOW_CONTACT_BUTTON_NAME: &str = "showContact";
pub const EDIT_CONTACT_BUTTON_NAME: &str = "editContact";
pub const NAVIGATION_URL_ATTR: &str = "data-url";

/// Класс, которым сервер скрывает строку "нет контактов"
pub const HIDDEN_CLASS: &str = "hidden";
/// Класс неактивной кнопки пагинации
pub const DISABLED_CLASS: &str = "disabled";

/// Ключ sessionStorage с отмеченными контактами (JSON-массив id)
pub const CHECKED_CONTACTS_KEY: &str = "checkedContacts";

/// Необязательный `<script type="application/json">` с настройками страницы
pub const PAGE_CONFIG_ID: &str = "contactsPageConfig";

// ============================================================================
// User messages
// ============================================================================

pub const DELETE_CONFIRM_MESSAGE: &str = "Действительно удалить выбранные номера?";
pub const DELETE_EMPTY_SELECTION_MESSAGE: &str = "Пожалуйста, выберите контакты для удаления!";
pub const NAVIGATION_ERROR_MESSAGE: &str = "Не удалось перейти на другую страницу";

/// Elements that must exist before any handler is bound.
pub const REQUIRED_ELEMENT_IDS: &[&str] = &[
    CONTACTS_TABLE_ID,
    EMPTY_CONTACTS_ROW_ID,
    HAS_NEXT_ID,
    HAS_PREVIOUS_ID,
    NEXT_PAGE_ID,
    PREVIOUS_PAGE_ID,
    START_ID_FOR_NEXT_PAGE_ID,
    START_ID_FOR_PREVIOUS_PAGE_ID,
    START_ID_FOR_PAGE_ID,
    IS_LOWER_IDS_ID,
    CONTACTS_FORM_ID,
    EMAIL_CONTACTS_ID,
    DELETING_CONTACTS_ID,
    SEND_EMAIL_BUTTON_ID,
    DELETE_CONTACTS_BUTTON_ID,
    ALL_CONTACT_LIST_ID,
    SEARCH_ATTRIBUTES_ID,
    IS_SEARCH_ID,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_required_ids_are_unique() {
        let unique: HashSet<_> = REQUIRED_ELEMENT_IDS.iter().collect();
        assert_eq!(unique.len(), REQUIRED_ELEMENT_IDS.len());
    }

    #[test]
    fn test_config_element_is_optional() {
        assert!(!REQUIRED_ELEMENT_IDS.contains(&PAGE_CONFIG_ID));
    }
}
