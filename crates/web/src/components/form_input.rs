//! Form input component types.
//!
//! These types configure the shared floating-label text field rendered by
//! `templates/components/form_input.html`. Every auth form builds its
//! fields through them.

/// Kind of control rendered for a form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Plain text input.
    Text,
    /// Email input (browser keyboard/validation hints).
    Email,
    /// Password input (masked).
    Password,
}

impl InputKind {
    /// The HTML `type` attribute value for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Configuration for one labeled text field.
///
/// The partial renders a floating label over the control and a fixed error
/// slot underneath it, so forms keep their height when a field error
/// appears.
#[derive(Debug, Clone)]
pub struct FormInput {
    /// HTML `name` (and `id`) of the control.
    pub name: String,
    /// Floating label text.
    pub label: String,
    /// Control kind.
    pub kind: InputKind,
    /// Pre-filled value (re-rendered forms keep what the user typed).
    pub value: String,
    /// Field-level error shown in the error slot.
    pub error: Option<String>,
    /// Whether the control carries the `required` attribute.
    pub required: bool,
    /// `autocomplete` attribute hint.
    pub autocomplete: Option<&'static str>,
}

impl FormInput {
    fn new(kind: InputKind, name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value: String::new(),
            error: None,
            required: false,
            autocomplete: None,
        }
    }

    /// Create a plain text field.
    #[must_use]
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(InputKind::Text, name, label)
    }

    /// Create an email field.
    #[must_use]
    pub fn email(name: &str, label: &str) -> Self {
        Self::new(InputKind::Email, name, label)
    }

    /// Create a password field.
    #[must_use]
    pub fn password(name: &str, label: &str) -> Self {
        Self::new(InputKind::Password, name, label)
    }

    /// Pre-fill the field value.
    #[must_use]
    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    /// Attach a field-level error message.
    #[must_use]
    pub fn error(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }

    /// Mark the field as required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the `autocomplete` hint.
    #[must_use]
    pub const fn autocomplete(mut self, hint: &'static str) -> Self {
        self.autocomplete = Some(hint);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_constructor() {
        let input = FormInput::email("email", "E-mail");
        assert_eq!(input.name, "email");
        assert_eq!(input.label, "E-mail");
        assert_eq!(input.kind, InputKind::Email);
        assert!(input.value.is_empty());
        assert!(input.error.is_none());
        assert!(!input.required);
    }

    #[test]
    fn test_builder_chain() {
        let input = FormInput::password("password", "Senha")
            .required(true)
            .autocomplete("current-password");
        assert_eq!(input.kind, InputKind::Password);
        assert!(input.required);
        assert_eq!(input.autocomplete, Some("current-password"));
    }

    #[test]
    fn test_value_and_error_preserved() {
        let input = FormInput::email("email", "E-mail")
            .value("user@example.com")
            .error("campo obrigatório");
        assert_eq!(input.value, "user@example.com");
        assert_eq!(input.error.as_deref(), Some("campo obrigatório"));
    }

    #[test]
    fn test_input_kind_as_str() {
        assert_eq!(InputKind::Text.as_str(), "text");
        assert_eq!(InputKind::Email.as_str(), "email");
        assert_eq!(InputKind::Password.as_str(), "password");
    }
}
