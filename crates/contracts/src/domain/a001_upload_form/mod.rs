//! Контракты формы загрузки
//!
//! - dto.rs: черновик формы, проверенные данные и ответ сервера
//! - field.rs: поля формы и ключи ошибок
//! - errors.rs: ошибки, отображаемые пользователю
//! - validation.rs: схема валидации

pub mod dto;
pub mod errors;
pub mod field;
pub mod validation;

pub use dto::{FormDraft, FormInput, UploadResponse, UPLOAD_PATH};
pub use errors::{FieldErrors, SUBMISSION_FAILED_MESSAGE};
pub use field::{ErrorKey, FormField};
pub use validation::{validate, validate_field, FieldRule, FieldViolation, ValidationErrors};
