use serde::{Deserialize, Serialize};
use std::fmt;

/// Путь endpoint'а загрузки относительно базового URL
pub const UPLOAD_PATH: &str = "/upload";

/// Возраст, подставляемый в пустую форму
pub const DEFAULT_AGE: &str = "18";

/// Черновик формы: значения полей в том виде, в каком их ввёл пользователь.
///
/// Возраст хранится строкой: поле number может содержать пустое,
/// нечисловое или дробное значение, и решение об этом принимает схема.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub age: String,
    pub email: String,
    pub password: String,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: DEFAULT_AGE.to_string(),
            email: String::new(),
            password: String::new(),
        }
    }
}

/// Проверенные данные формы, тело запроса `POST /upload`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub name: String,
    pub age: u8,
    pub email: String,
    pub password: String,
}

// Пароль не должен попадать в лог
impl fmt::Debug for FormInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormInput")
            .field("name", &self.name)
            .field("age", &self.age)
            .field("email", &self.email)
            .field("password", &"********")
            .finish()
    }
}

/// Ответ сервера; форма структуры не навязывается
pub type UploadResponse = serde_json::Value;
