// SPDX-License-Identifier: MPL-2.0
//! Confirmation requests.

/// What a caller asks to confirm. Unset strings fall back to localized
/// defaults when the dialog opens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfirmRequest {
    message: String,
    title: Option<String>,
    confirm_label: Option<String>,
    cancel_label: Option<String>,
}

impl ConfirmRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn confirm_label(&self) -> Option<&str> {
        self.confirm_label.as_deref()
    }

    #[must_use]
    pub fn cancel_label(&self) -> Option<&str> {
        self.cancel_label.as_deref()
    }
}

impl From<&str> for ConfirmRequest {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ConfirmRequest {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_leaves_defaults_unset() {
        let request = ConfirmRequest::from("Delete?");
        assert_eq!(request.message(), "Delete?");
        assert!(request.title().is_none());
        assert!(request.confirm_label().is_none());
        assert!(request.cancel_label().is_none());
    }

    #[test]
    fn builder_overrides_strings() {
        let request = ConfirmRequest::new(String::from("Discard draft?"))
            .with_title("Discard")
            .with_confirm_label("Discard")
            .with_cancel_label("Keep");

        assert_eq!(request.title(), Some("Discard"));
        assert_eq!(request.confirm_label(), Some("Discard"));
        assert_eq!(request.cancel_label(), Some("Keep"));
    }
}
