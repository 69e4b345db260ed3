use std::rc::Rc;

use contracts::domain::a001_contact::form::FormSubmission;
use contracts::domain::a001_contact::list_page::{
    CONTACTS_FORM_ID, CONTACTS_TABLE_ID, DISABLED_CLASS, EMPTY_CONTACTS_ROW_ID, HIDDEN_CLASS,
    REQUIRED_ELEMENT_IDS, SEARCH_ATTRIBUTES_ID,
};
use contracts::domain::a001_contact::search::{SearchAttribute, SearchAttributes};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    Window,
};

use crate::shared::error::{ContactsPageError, PageResult};

/// Всё, что обработчики страницы читают из DOM и пишут в него
pub trait ContactsListView {
    /// Rows currently rendered in the contacts table body.
    fn contact_row_count(&self) -> u32;
    fn reveal_empty_row(&self) -> PageResult<()>;

    fn field_value(&self, id: &str) -> PageResult<String>;
    fn set_field_value(&self, id: &str, value: &str) -> PageResult<()>;

    /// Drop the `disabled` class from a pagination control.
    fn enable_control(&self, id: &str) -> PageResult<()>;

    fn search_attributes(&self) -> SearchAttributes;
    fn clear_search_fields(&self);

    /// Retarget the shared form to the submission's action/method and submit it.
    fn submit_form(&self, submission: &FormSubmission) -> PageResult<()>;
    fn navigate(&self, url: &str) -> PageResult<()>;
}

impl<T: ContactsListView + ?Sized> ContactsListView for Rc<T> {
    fn contact_row_count(&self) -> u32 {
        (**self).contact_row_count()
    }

    fn reveal_empty_row(&self) -> PageResult<()> {
        (**self).reveal_empty_row()
    }

    fn field_value(&self, id: &str) -> PageResult<String> {
        (**self).field_value(id)
    }

    fn set_field_value(&self, id: &str, value: &str) -> PageResult<()> {
        (**self).set_field_value(id, value)
    }

    fn enable_control(&self, id: &str) -> PageResult<()> {
        (**self).enable_control(id)
    }

    fn search_attributes(&self) -> SearchAttributes {
        (**self).search_attributes()
    }

    fn clear_search_fields(&self) {
        (**self).clear_search_fields()
    }

    fn submit_form(&self, submission: &FormSubmission) -> PageResult<()> {
        (**self).submit_form(submission)
    }

    fn navigate(&self, url: &str) -> PageResult<()> {
        (**self).navigate(url)
    }
}

// ============================================================================
// Live DOM
// ============================================================================

/// Server-rendered contacts page, resolved once at startup.
pub struct DomContactsListView {
    window: Window,
    document: Document,
    table: Element,
    empty_row: Element,
    form: HtmlFormElement,
    search_container: Element,
}

impl DomContactsListView {
    /// Resolve the page elements, failing on the first one that is missing.
    pub fn attach(window: Window, document: Document) -> PageResult<Self> {
        if let Some(missing) = REQUIRED_ELEMENT_IDS
            .iter()
            .find(|id| document.get_element_by_id(id).is_none())
        {
            return Err(ContactsPageError::missing(*missing));
        }

        let table = element_by_id(&document, CONTACTS_TABLE_ID)?;
        let empty_row = element_by_id(&document, EMPTY_CONTACTS_ROW_ID)?;
        let search_container = element_by_id(&document, SEARCH_ATTRIBUTES_ID)?;
        let form = element_by_id(&document, CONTACTS_FORM_ID)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| ContactsPageError::UnexpectedElement {
                id: CONTACTS_FORM_ID.to_string(),
                expected: "a form",
            })?;

        Ok(Self {
            window,
            document,
            table,
            empty_row,
            form,
            search_container,
        })
    }

    fn input(&self, id: &str) -> PageResult<HtmlInputElement> {
        element_by_id(&self.document, id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| ContactsPageError::UnexpectedElement {
                id: id.to_string(),
                expected: "an input",
            })
    }

    fn search_fields(&self) -> Vec<SearchField> {
        let children = self.search_container.children();
        (0..children.length())
            .filter_map(|index| children.item(index))
            .filter_map(|child| SearchField::from_element(&child))
            .collect()
    }
}

impl ContactsListView for DomContactsListView {
    fn contact_row_count(&self) -> u32 {
        // последний дочерний элемент таблицы — tbody
        self.table
            .last_element_child()
            .map(|body| body.child_element_count())
            .unwrap_or(0)
    }

    fn reveal_empty_row(&self) -> PageResult<()> {
        self.empty_row
            .class_list()
            .remove_1(HIDDEN_CLASS)
            .map_err(ContactsPageError::dom)
    }

    fn field_value(&self, id: &str) -> PageResult<String> {
        Ok(self.input(id)?.value())
    }

    fn set_field_value(&self, id: &str, value: &str) -> PageResult<()> {
        self.input(id)?.set_value(value);
        Ok(())
    }

    fn enable_control(&self, id: &str) -> PageResult<()> {
        element_by_id(&self.document, id)?
            .class_list()
            .remove_1(DISABLED_CLASS)
            .map_err(ContactsPageError::dom)
    }

    fn search_attributes(&self) -> SearchAttributes {
        self.search_fields()
            .iter()
            .map(SearchField::attribute)
            .collect()
    }

    fn clear_search_fields(&self) {
        for field in self.search_fields() {
            field.clear();
        }
    }

    fn submit_form(&self, submission: &FormSubmission) -> PageResult<()> {
        self.form.set_action(&submission.action);
        self.form.set_method(submission.method.as_str());
        self.form.submit().map_err(ContactsPageError::dom)
    }

    fn navigate(&self, url: &str) -> PageResult<()> {
        self.window
            .location()
            .set_href(url)
            .map_err(ContactsPageError::dom)
    }
}

/// Поле фильтра внутри `contactSearchAttributes`
enum SearchField {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl SearchField {
    /// Children without a form value (labels, wrappers) are skipped.
    fn from_element(element: &Element) -> Option<Self> {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Some(Self::Input(input.clone()))
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Some(Self::Select(select.clone()))
        } else {
            element
                .dyn_ref::<HtmlTextAreaElement>()
                .map(|area| Self::TextArea(area.clone()))
        }
    }

    fn attribute(&self) -> SearchAttribute {
        match self {
            Self::Input(input) => SearchAttribute::new(input.name(), input.value()),
            Self::Select(select) => SearchAttribute::new(select.name(), select.value()),
            Self::TextArea(area) => SearchAttribute::new(area.name(), area.value()),
        }
    }

    fn clear(&self) {
        match self {
            Self::Input(input) => input.set_value(""),
            Self::Select(select) => select.set_value(""),
            Self::TextArea(area) => area.set_value(""),
        }
    }
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> PageResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ContactsPageError::missing(id))
}
