pub mod bind;
pub mod controller;
pub mod state;
pub mod view;

pub use bind::mount_contacts_list;
pub use controller::{ClickOutcome, ContactsListController};
