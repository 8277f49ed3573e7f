//! Page view state. Each controller owns one of these per page element it
//! drives, and only mutates it through the methods below.
mod options;
pub mod pretty;
mod table;

use html_escape::encode_text;

pub use options::OptionList;
pub use table::{dom_row_id, RenderedRow, RowTable, TableSchema};

pub const SUCCESS_ALERT_ID: &str = "success_alert";
pub const ERROR_ALERT_ID: &str = "error_alert";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Success and error banners of a page. Either can be visible independently;
/// each one is only ever overwritten by the next outcome of its kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBanner {
    success: Option<String>,
    error: Option<String>,
    history: Vec<(StatusKind, String)>,
}

impl StatusBanner {
    pub fn show_success(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.success = Some(message.clone());
        self.history.push((StatusKind::Success, message));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.error = Some(message.clone());
        self.history.push((StatusKind::Error, message));
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// How many outcomes have been shown so far, repeated messages included
    pub fn updates(&self) -> usize {
        self.history.len()
    }

    /// The banner that was updated last, with its text
    pub fn latest(&self) -> Option<(StatusKind, &str)> {
        self.history
            .last()
            .map(|(kind, message)| (*kind, message.as_str()))
    }

    /// Every outcome shown after the first `before` ones, oldest first
    pub fn updates_since(&self, before: usize) -> impl Iterator<Item = (StatusKind, &str)> {
        self.history
            .iter()
            .skip(before)
            .map(|(kind, message)| (*kind, message.as_str()))
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if let Some(message) = &self.success {
            html.push_str(&format!(
                r#"<div id="{SUCCESS_ALERT_ID}" class="alert alert-success">{}</div>"#,
                encode_text(message)
            ));
        }
        if let Some(message) = &self.error {
            html.push_str(&format!(
                r#"<div id="{ERROR_ALERT_ID}" class="alert alert-danger">{}</div>"#,
                encode_text(message)
            ));
        }
        html
    }
}
