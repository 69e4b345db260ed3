//! Blocking user dialogs (confirm / alert).

use std::rc::Rc;

use web_sys::Window;

/// Synchronous yes/no decisions and notifications shown to the user.
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn notify(&self, message: &str);
}

impl<T: Dialogs + ?Sized> Dialogs for Rc<T> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

/// `window.confirm` / `window.alert`
pub struct BrowserDialogs {
    window: Window,
}

impl BrowserDialogs {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        match self.window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(err) => {
                log::error!("confirm dialog failed: {:?}", err);
                false
            }
        }
    }

    fn notify(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::error!("alert dialog failed: {:?}", err);
        }
    }
}
