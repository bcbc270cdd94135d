use crate::views::{error_markup, spinner_markup, Frame};

/// Transient messages: upload progress, confirmation, failures.
#[derive(Debug, Default)]
pub struct NoticeView {
    frame: Frame,
}

impl NoticeView {
    pub fn render_spinner(&mut self) -> Option<String> {
        self.frame.push(spinner_markup())
    }

    pub fn render_message(&mut self, message: &str) -> Option<String> {
        self.frame.push(message.to_string())
    }

    pub fn render_error(&mut self, message: &str) -> Option<String> {
        self.frame.push(error_markup(message))
    }

    pub fn clear(&mut self) -> Option<String> {
        self.frame.push(String::new())
    }
}
