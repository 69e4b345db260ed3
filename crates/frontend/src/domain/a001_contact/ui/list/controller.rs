use contracts::domain::a001_contact::form::{ContactsFormPayload, FormSubmission};
use contracts::domain::a001_contact::list_page::{
    DELETING_CONTACTS_ID, EMAIL_CONTACTS_ID, HAS_NEXT_ID, HAS_PREVIOUS_ID, IS_LOWER_IDS_ID,
    IS_SEARCH_ID, NEXT_PAGE_ID, PREVIOUS_PAGE_ID, START_ID_FOR_PAGE_ID,
};
use contracts::domain::a001_contact::pagination::{
    PageDirection, PaginationAffordance, PaginationFlags,
};
use contracts::domain::a001_contact::selection::CheckedContacts;

use super::state::ContactsSessionState;
use super::view::ContactsListView;
use crate::shared::config::PageConfig;
use crate::shared::dialogs::Dialogs;
use crate::shared::error::PageResult;
use crate::shared::session_store::KeyValueStore;

/// Result of a click handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The shared form was retargeted and submitted.
    Submitted(FormSubmission),
    /// The user declined the confirmation.
    Cancelled,
    /// Preconditions failed; nothing was submitted.
    Rejected,
    Navigated(String),
    /// Let the browser follow the link.
    FollowLink,
}

impl ClickOutcome {
    pub fn prevents_default(&self) -> bool {
        !matches!(self, ClickOutcome::FollowLink)
    }
}

/// Контроллер страницы списка контактов
///
/// Связывает DOM страницы, sessionStorage и диалоги браузера.
/// Все обработчики синхронные и вызываются из обработчиков событий DOM.
pub struct ContactsListController<V, S, D> {
    view: V,
    state: ContactsSessionState<S>,
    dialogs: D,
    config: PageConfig,
}

impl<V, S, D> ContactsListController<V, S, D>
where
    V: ContactsListView,
    S: KeyValueStore,
    D: Dialogs,
{
    pub fn new(view: V, store: S, dialogs: D, config: PageConfig) -> Self {
        Self {
            view,
            state: ContactsSessionState::new(store),
            dialogs,
            config,
        }
    }

    // ------------------------------------------------------------------------
    // Page load
    // ------------------------------------------------------------------------

    /// Only DOM failures abort the load; storage failures are logged.
    pub fn on_load(&self) -> PageResult<()> {
        self.check_empty_table()?;
        self.resolve_pagination()?;
        self.save_search_attributes();
        Ok(())
    }

    fn check_empty_table(&self) -> PageResult<()> {
        if self.view.contact_row_count() == 0 {
            log::debug!("contacts table is empty");
            self.view.reveal_empty_row()?;
        }
        Ok(())
    }

    fn resolve_pagination(&self) -> PageResult<PaginationAffordance> {
        let flags = PaginationFlags::from_fields(
            &self.view.field_value(HAS_NEXT_ID)?,
            &self.view.field_value(HAS_PREVIOUS_ID)?,
        );
        let affordance = flags.affordance(self.config.pagination_mode);
        if affordance.enable_next {
            self.view.enable_control(NEXT_PAGE_ID)?;
        }
        if affordance.enable_previous {
            self.view.enable_control(PREVIOUS_PAGE_ID)?;
        }
        Ok(affordance)
    }

    fn save_search_attributes(&self) {
        if let Err(err) = self
            .state
            .save_search_attributes(&self.view.search_attributes())
        {
            log::warn!("failed to keep search filters: {}", err);
        }
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    pub fn on_contact_toggled(&self, contact_id: &str, checked: bool) -> PageResult<CheckedContacts> {
        let selection = self.state.toggle(contact_id, checked)?;
        log::debug!("checked contacts: [{}]", selection.joined());
        Ok(selection)
    }

    pub fn checked_contacts(&self) -> CheckedContacts {
        self.state.checked_contacts()
    }

    // ------------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------------

    pub fn on_next_page(&self, href: &str) -> ClickOutcome {
        self.turn_page(PageDirection::Next, href)
    }

    pub fn on_previous_page(&self, href: &str) -> ClickOutcome {
        self.turn_page(PageDirection::Previous, href)
    }

    fn turn_page(&self, direction: PageDirection, href: &str) -> ClickOutcome {
        match self.prepare_page_turn(direction, href) {
            Ok(submission) => self.submit(submission),
            Err(err) => {
                log::error!("{:?} page: {}", direction, err);
                self.dialogs.notify(&self.config.navigation_error_message);
                ClickOutcome::Rejected
            }
        }
    }

    fn prepare_page_turn(&self, direction: PageDirection, href: &str) -> PageResult<FormSubmission> {
        let is_lower_ids = direction.is_lower_ids();
        self.view
            .set_field_value(IS_LOWER_IDS_ID, &is_lower_ids.to_string())?;

        let cursor = self.view.field_value(direction.cursor_field_id())?;
        log::debug!("{}: {}", direction.cursor_field_id(), cursor);
        self.view.set_field_value(START_ID_FOR_PAGE_ID, &cursor)?;

        Ok(FormSubmission::post(
            href,
            ContactsFormPayload {
                is_lower_ids: Some(is_lower_ids),
                start_contact_id_for_page: Some(cursor),
                ..Default::default()
            },
        ))
    }

    // ------------------------------------------------------------------------
    // Bulk actions
    // ------------------------------------------------------------------------

    /// Отправка письма выбранным контактам; пустой выбор тоже отправляется.
    pub fn on_send_email(&self, href: &str) -> ClickOutcome {
        let ids = self.state.checked_contacts().joined();
        if let Err(err) = self.view.set_field_value(EMAIL_CONTACTS_ID, &ids) {
            log::error!("send email: {}", err);
            return ClickOutcome::Rejected;
        }
        self.submit(FormSubmission::post(
            href,
            ContactsFormPayload {
                email_contacts_id: Some(ids),
                ..Default::default()
            },
        ))
    }

    pub fn on_delete(&self, href: &str) -> ClickOutcome {
        let selection = self.state.checked_contacts();
        if selection.is_empty() {
            self.dialogs
                .notify(&self.config.delete_empty_selection_message);
            return ClickOutcome::Rejected;
        }
        if !self.dialogs.confirm(&self.config.delete_confirm_message) {
            return ClickOutcome::Cancelled;
        }

        let ids = selection.joined();
        if let Err(err) = self.view.set_field_value(DELETING_CONTACTS_ID, &ids) {
            log::error!("delete contacts: {}", err);
            return ClickOutcome::Rejected;
        }
        self.submit(FormSubmission::post(
            href,
            ContactsFormPayload {
                deleting_contacts_id: Some(ids),
                ..Default::default()
            },
        ))
    }

    /// Сброс поиска: очищает фильтры и sessionStorage, переход по ссылке
    /// выполняет браузер.
    pub fn on_show_all_contacts(&self) -> ClickOutcome {
        self.view.clear_search_fields();
        if let Err(err) = self.state.clear() {
            log::error!("failed to clear session storage: {}", err);
        }
        if let Err(err) = self.view.set_field_value(IS_SEARCH_ID, "false") {
            log::error!("failed to reset {}: {}", IS_SEARCH_ID, err);
        }
        ClickOutcome::FollowLink
    }

    /// Show/edit buttons carry their target in `data-url`.
    pub fn on_row_action(&self, url: Option<&str>) -> ClickOutcome {
        let Some(url) = url.filter(|url| !url.is_empty()) else {
            log::warn!("row action without data-url");
            return ClickOutcome::Rejected;
        };
        match self.view.navigate(url) {
            Ok(()) => ClickOutcome::Navigated(url.to_string()),
            Err(err) => {
                log::error!("navigation to {} failed: {}", url, err);
                ClickOutcome::Rejected
            }
        }
    }

    fn submit(&self, submission: FormSubmission) -> ClickOutcome {
        match submission.encoded_payload() {
            Ok(encoded) => log::debug!("POST {} [{}]", submission.action, encoded),
            Err(err) => log::warn!("failed to encode payload: {}", err),
        }
        match self.view.submit_form(&submission) {
            Ok(()) => ClickOutcome::Submitted(submission),
            Err(err) => {
                log::error!("form submission to {} failed: {}", submission.action, err);
                ClickOutcome::Rejected
            }
        }
    }
}
