use std::fmt;

/// Поле формы загрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Age,
    Email,
    Password,
}

impl FormField {
    /// Все поля в порядке отображения
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Age,
        FormField::Email,
        FormField::Password,
    ];

    /// Ключ поля в JSON и в разметке
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Age => "age",
            FormField::Email => "email",
            FormField::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Age => "Age",
            FormField::Email => "Email",
            FormField::Password => "Password",
        }
    }

    /// Значение атрибута `type` для `<input>`
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Name => "text",
            FormField::Age => "number",
            FormField::Email => "email",
            FormField::Password => "password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Ключ ошибки: конкретное поле или вся форма
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKey {
    Field(FormField),
    Root,
}

impl From<FormField> for ErrorKey {
    fn from(field: FormField) -> Self {
        ErrorKey::Field(field)
    }
}
