pub mod form;
pub mod list_page;
pub mod pagination;
pub mod search;
pub mod selection;
