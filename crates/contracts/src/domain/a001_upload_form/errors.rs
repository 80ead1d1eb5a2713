use super::field::{ErrorKey, FormField};
use super::validation::{FieldViolation, ValidationErrors};
use std::collections::BTreeMap;

/// Сообщение, которое показывается при любой неудаче отправки
pub const SUBMISSION_FAILED_MESSAGE: &str = "This email is already taken";

/// Ошибки, отображаемые в форме: не больше одного сообщения на ключ
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    messages: BTreeMap<ErrorKey, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: impl Into<ErrorKey>) -> Option<&str> {
        self.messages.get(&key.into()).map(String::as_str)
    }

    pub fn field(&self, field: FormField) -> Option<&str> {
        self.get(field)
    }

    pub fn root(&self) -> Option<&str> {
        self.get(ErrorKey::Root)
    }

    pub fn set(&mut self, key: impl Into<ErrorKey>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    pub fn set_root(&mut self, message: impl Into<String>) {
        self.set(ErrorKey::Root, message);
    }

    pub fn clear_root(&mut self) {
        self.messages.remove(&ErrorKey::Root);
    }

    /// Заменить ошибку поля результатом его повторной проверки
    pub fn replace_field(&mut self, field: FormField, violations: &[FieldViolation]) {
        match violations.first() {
            Some(v) => self.set(field, v.message.clone()),
            None => {
                self.messages.remove(&ErrorKey::Field(field));
            }
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn has_field_errors(&self) -> bool {
        self.messages.keys().any(|k| matches!(k, ErrorKey::Field(_)))
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut result = FieldErrors::new();
        for field in errors.fields() {
            if let Some(message) = errors.first_message(field) {
                result.set(field, message);
            }
        }
        result
    }
}
