//! Схема валидации формы загрузки
//!
//! Каждое поле проверяется независимо от остальных чистой функцией,
//! которая возвращает либо нормализованное значение, либо список нарушений.
//! Порядок проверки полей на результат не влияет; все нарушения
//! возвращаются одновременно.

use super::dto::{FormDraft, FormInput};
use super::field::FormField;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MIN_AGE: u8 = 13;
pub const MAX_AGE: u8 = 150;
pub const MIN_PASSWORD_LEN: usize = 8;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("valid name regex"));

// Локальная часть не может начинаться с точки и содержать "..";
// эти условия проверяются отдельно, regex их не выражает
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("valid email regex")
});

/// Нарушенное правило схемы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRule {
    /// Имя: только буквы и пробелы, не пустое
    NamePattern,
    /// Возраст не является числом
    NotANumber,
    /// Возраст дробный
    NotInteger,
    /// Возраст не положительный
    NotPositive,
    BelowMinimum,
    AboveMaximum,
    EmailShape,
    MinLength,
}

impl FieldRule {
    pub fn message(&self) -> String {
        match self {
            FieldRule::NamePattern => "Name may contain only letters and spaces".to_string(),
            FieldRule::NotANumber => "Age must be a number".to_string(),
            FieldRule::NotInteger => "Age must be a whole number".to_string(),
            FieldRule::NotPositive => "Age must be greater than 0".to_string(),
            FieldRule::BelowMinimum => format!("Age must be at least {}", MIN_AGE),
            FieldRule::AboveMaximum => format!("Age must be at most {}", MAX_AGE),
            FieldRule::EmailShape => "Invalid email address".to_string(),
            FieldRule::MinLength => {
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN)
            }
        }
    }
}

/// Одно нарушение правила для одного поля
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldViolation {
    pub field: FormField,
    pub rule: FieldRule,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: FormField, rule: FieldRule) -> Self {
        Self {
            field,
            rule,
            message: rule.message(),
        }
    }
}

/// Все нарушения, найденные при проверке формы, в порядке полей
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("form has {} validation error(s)", .violations.len())]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new(mut violations: Vec<FieldViolation>) -> Self {
        // сортировка устойчивая: порядок правил внутри поля сохраняется
        violations.sort_by_key(|v| v.field);
        Self { violations }
    }

    pub fn for_field(&self, field: FormField) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter().filter(move |v| v.field == field)
    }

    /// Первое сообщение для поля: именно оно показывается под полем
    pub fn first_message(&self, field: FormField) -> Option<&str> {
        self.for_field(field).next().map(|v| v.message.as_str())
    }

    /// Поля, у которых есть хотя бы одно нарушение
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields: Vec<FormField> = self.violations.iter().map(|v| v.field).collect();
        fields.dedup();
        fields
    }
}

pub fn validate_name(value: &str) -> Result<String, Vec<FieldViolation>> {
    if NAME_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(vec![FieldViolation::new(FormField::Name, FieldRule::NamePattern)])
    }
}

/// Возраст: число, целое, положительное, в диапазоне [13, 150].
///
/// Проверки числовых ограничений независимы: `-5` нарушает и
/// положительность, и минимум.
pub fn validate_age(raw: &str) -> Result<u8, Vec<FieldViolation>> {
    let value = match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return Err(vec![FieldViolation::new(FormField::Age, FieldRule::NotANumber)]),
    };

    let mut violations = Vec::new();
    if value.fract() != 0.0 {
        violations.push(FieldViolation::new(FormField::Age, FieldRule::NotInteger));
    }
    if value <= 0.0 {
        violations.push(FieldViolation::new(FormField::Age, FieldRule::NotPositive));
    }
    if value < f64::from(MIN_AGE) {
        violations.push(FieldViolation::new(FormField::Age, FieldRule::BelowMinimum));
    }
    if value > f64::from(MAX_AGE) {
        violations.push(FieldViolation::new(FormField::Age, FieldRule::AboveMaximum));
    }

    if violations.is_empty() {
        // целое в [13, 150], в u8 помещается
        Ok(value as u8)
    } else {
        Err(violations)
    }
}

pub fn validate_email(value: &str) -> Result<String, Vec<FieldViolation>> {
    let shaped = EMAIL_RE.is_match(value) && !value.starts_with('.') && !value.contains("..");
    if shaped {
        Ok(value.to_string())
    } else {
        Err(vec![FieldViolation::new(FormField::Email, FieldRule::EmailShape)])
    }
}

pub fn validate_password(value: &str) -> Result<String, Vec<FieldViolation>> {
    if value.chars().count() >= MIN_PASSWORD_LEN {
        Ok(value.to_string())
    } else {
        Err(vec![FieldViolation::new(FormField::Password, FieldRule::MinLength)])
    }
}

/// Нарушения одного поля черновика
pub fn validate_field(draft: &FormDraft, field: FormField) -> Vec<FieldViolation> {
    let result = match field {
        FormField::Name => validate_name(&draft.name).map(|_| ()),
        FormField::Age => validate_age(&draft.age).map(|_| ()),
        FormField::Email => validate_email(&draft.email).map(|_| ()),
        FormField::Password => validate_password(&draft.password).map(|_| ()),
    };
    result.err().unwrap_or_default()
}

/// Проверить весь черновик и получить данные для отправки
pub fn validate(draft: &FormDraft) -> Result<FormInput, ValidationErrors> {
    let name = validate_name(&draft.name);
    let age = validate_age(&draft.age);
    let email = validate_email(&draft.email);
    let password = validate_password(&draft.password);

    match (name, age, email, password) {
        (Ok(name), Ok(age), Ok(email), Ok(password)) => Ok(FormInput {
            name,
            age,
            email,
            password,
        }),
        (name, age, email, password) => {
            let mut violations = Vec::new();
            violations.extend(name.err().unwrap_or_default());
            violations.extend(age.err().unwrap_or_default());
            violations.extend(email.err().unwrap_or_default());
            violations.extend(password.err().unwrap_or_default());
            Err(ValidationErrors::new(violations))
        }
    }
}
