// UI state - which screen is showing, transient messages and the newsletter input
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Book,
    About,
}

pub struct UIState {
    pub screen: Screen,
    pub email: String,
    pub form_error: Option<String>,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Book,
            email: String::new(),
            form_error: None,
            error_message: None,
            info_message: None,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn has_message(&self) -> bool {
        self.error_message.is_some() || self.info_message.is_some()
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }
}
