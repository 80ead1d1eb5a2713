use crate::domain::a001_upload_form::api::{UploadApi, UploadError};
use contracts::domain::a001_upload_form::{
    validate, validate_field, FieldErrors, FormDraft, FormField, FormInput, UploadResponse,
    SUBMISSION_FAILED_MESSAGE,
};

/// Статус формы.
///
/// `Idle → Validating → (Invalid | Submitting) → (Submitted | Failed) → Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Submitted,
    Failed,
}

/// Состояние формы загрузки без реактивности
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadFormState {
    draft: FormDraft,
    errors: FieldErrors,
    status: FormStatus,
    submit_count: u32,
    last_response: Option<UploadResponse>,
}

impl UploadFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Сколько раз нажимали «Submit», включая неудачные проверки
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn last_response(&self) -> Option<&UploadResponse> {
        self.last_response.as_ref()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.draft.name,
            FormField::Age => &self.draft.age,
            FormField::Email => &self.draft.email,
            FormField::Password => &self.draft.password,
        }
    }

    /// Кнопка отправки заблокирована только пока идёт запрос
    pub fn is_submit_disabled(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Изменение поля пользователем.
    ///
    /// После первой попытки отправки поле сразу перепроверяется.
    /// Возвращает `false`, если значение не изменилось: тогда состояние
    /// не трогается.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.value(field) == value {
            return false;
        }
        match field {
            FormField::Name => self.draft.name = value,
            FormField::Age => self.draft.age = value,
            FormField::Email => self.draft.email = value,
            FormField::Password => self.draft.password = value,
        }

        if matches!(
            self.status,
            FormStatus::Invalid | FormStatus::Submitted | FormStatus::Failed
        ) {
            self.status = FormStatus::Idle;
        }

        if self.submit_count > 0 {
            self.revalidate(field);
        }
        true
    }

    fn revalidate(&mut self, field: FormField) {
        let violations = validate_field(&self.draft, field);
        self.errors.replace_field(field, &violations);
    }

    /// Начать отправку: проверить все поля.
    ///
    /// Возвращает данные для клиента, если форма валидна. Сама по себе не
    /// запрещает повторный вызов во время `Submitting`.
    pub fn begin_submit(&mut self) -> Option<FormInput> {
        self.submit_count += 1;
        self.status = FormStatus::Validating;
        self.errors.clear_root();

        match validate(&self.draft) {
            Ok(input) => {
                self.errors.clear();
                self.status = FormStatus::Submitting;
                Some(input)
            }
            Err(violations) => {
                log::debug!("Upload form is invalid: {}", violations);
                self.errors = FieldErrors::from(&violations);
                self.status = FormStatus::Invalid;
                None
            }
        }
    }

    /// Завершить отправку результатом клиента.
    ///
    /// Поля остаются редактируемыми во время запроса, поэтому ошибки полей
    /// отражают текущий черновик, а не отправленные данные.
    pub fn finish_submit(&mut self, input: &FormInput, result: Result<UploadResponse, UploadError>) {
        match result {
            Ok(response) => {
                log::debug!("Uploaded {:?}", input);
                self.errors.clear_root();
                for field in FormField::ALL {
                    self.revalidate(field);
                }
                self.last_response = Some(response);
                self.status = FormStatus::Submitted;
            }
            Err(e) => {
                log::warn!("Upload failed: {}", e);
                self.errors.set_root(SUBMISSION_FAILED_MESSAGE);
                self.status = FormStatus::Failed;
            }
        }
    }

    /// Вернуть форму к значениям по умолчанию
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Полный цикл отправки без реактивного рантайма: проверка, запрос,
/// фиксация результата
pub async fn submit_with<A>(state: &mut UploadFormState, api: &A) -> FormStatus
where
    A: UploadApi + ?Sized,
{
    if let Some(input) = state.begin_submit() {
        let result = api.upload(&input).await;
        state.finish_submit(&input, result);
    }
    state.status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    /// Фейковый клиент: запоминает тела запросов, отвечает заданным статусом
    struct RecordingApi {
        bodies: RefCell<Vec<Value>>,
        fail_with: Option<u16>,
    }

    impl RecordingApi {
        fn ok() -> Self {
            Self {
                bodies: RefCell::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                fail_with: Some(status),
                ..Self::ok()
            }
        }

        fn calls(&self) -> usize {
            self.bodies.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl UploadApi for RecordingApi {
        async fn upload(&self, input: &FormInput) -> Result<UploadResponse, UploadError> {
            self.bodies
                .borrow_mut()
                .push(serde_json::to_value(input).expect("serializable input"));
            match self.fail_with {
                Some(status) => Err(UploadError::Status(status)),
                None => Ok(json!({ "response": "uploaded" })),
            }
        }
    }

    fn fill(state: &mut UploadFormState, name: &str, age: &str, email: &str, password: &str) {
        state.set_field(FormField::Name, name);
        state.set_field(FormField::Age, age);
        state.set_field(FormField::Email, email);
        state.set_field(FormField::Password, password);
    }

    fn jane(state: &mut UploadFormState) {
        fill(state, "Jane Doe", "30", "jane@example.com", "secret123");
    }

    #[test]
    fn test_valid_submission_posts_once() {
        let mut state = UploadFormState::new();
        jane(&mut state);
        let api = RecordingApi::ok();

        let status = block_on(submit_with(&mut state, &api));

        assert_eq!(status, FormStatus::Submitted);
        assert_eq!(api.calls(), 1);
        assert_eq!(
            api.bodies.borrow()[0],
            json!({
                "name": "Jane Doe",
                "age": 30,
                "email": "jane@example.com",
                "password": "secret123"
            })
        );
        assert!(state.errors().is_empty());
        assert_eq!(state.last_response(), Some(&json!({ "response": "uploaded" })));
        assert!(!state.is_submit_disabled());
    }

    #[test]
    fn test_server_rejection_sets_root_error() {
        let mut state = UploadFormState::new();
        jane(&mut state);
        let api = RecordingApi::failing(409);

        let status = block_on(submit_with(&mut state, &api));

        assert_eq!(status, FormStatus::Failed);
        assert_eq!(api.calls(), 1);
        assert_eq!(state.errors().root(), Some("This email is already taken"));
        assert!(!state.errors().has_field_errors());
        assert!(!state.is_submit_disabled());
    }

    #[test]
    fn test_any_failure_cause_gives_same_message() {
        for status in [400, 500, 503] {
            let mut state = UploadFormState::new();
            jane(&mut state);
            block_on(submit_with(&mut state, &RecordingApi::failing(status)));
            assert_eq!(state.errors().root(), Some(SUBMISSION_FAILED_MESSAGE));
        }
    }

    #[test]
    fn test_invalid_name_blocks_network() {
        let mut state = UploadFormState::new();
        fill(&mut state, "J4ne", "30", "jane@example.com", "secret123");
        assert!(!state.is_submit_disabled());
        let api = RecordingApi::ok();

        let status = block_on(submit_with(&mut state, &api));

        assert_eq!(status, FormStatus::Invalid);
        assert_eq!(api.calls(), 0);
        assert_eq!(
            state.errors().field(FormField::Name),
            Some("Name may contain only letters and spaces")
        );
        assert_eq!(state.errors().root(), None);
        assert!(!state.is_submit_disabled());
    }

    #[test]
    fn test_underage_blocks_network() {
        let mut state = UploadFormState::new();
        fill(&mut state, "Jane Doe", "12", "jane@example.com", "secret123");
        let api = RecordingApi::ok();

        block_on(submit_with(&mut state, &api));

        assert_eq!(api.calls(), 0);
        assert_eq!(state.errors().field(FormField::Age), Some("Age must be at least 13"));
        assert_eq!(state.errors().field(FormField::Name), None);
    }

    #[test]
    fn test_submit_disabled_only_while_submitting() {
        let mut state = UploadFormState::new();
        jane(&mut state);

        let input = state.begin_submit().expect("valid form");
        assert_eq!(state.status(), FormStatus::Submitting);
        assert!(state.is_submit_disabled());

        state.finish_submit(&input, Err(UploadError::Transport("offline".to_string())));
        assert_eq!(state.status(), FormStatus::Failed);
        assert!(!state.is_submit_disabled());
    }

    #[test]
    fn test_resubmitting_same_invalid_input_is_stable() {
        let mut state = UploadFormState::new();
        fill(&mut state, "J4ne", "200", "jane@", "short");

        state.begin_submit();
        let first = state.errors().clone();
        state.begin_submit();

        assert_eq!(&first, state.errors());
        assert_eq!(state.submit_count(), 2);
    }

    #[test]
    fn test_no_validation_on_change_before_first_submit() {
        let mut state = UploadFormState::new();
        state.set_field(FormField::Name, "J4ne");
        assert!(state.errors().is_empty());
        assert_eq!(state.status(), FormStatus::Idle);
    }

    #[test]
    fn test_change_after_submit_revalidates_field() {
        let mut state = UploadFormState::new();
        fill(&mut state, "J4ne", "30", "jane@example.com", "secret123");
        state.begin_submit();
        assert_eq!(state.status(), FormStatus::Invalid);

        state.set_field(FormField::Name, "Jane");
        assert_eq!(state.status(), FormStatus::Idle);
        assert_eq!(state.errors().field(FormField::Name), None);

        state.set_field(FormField::Password, "short");
        assert_eq!(
            state.errors().field(FormField::Password),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_resubmit_after_failure_clears_root_error() {
        let mut state = UploadFormState::new();
        jane(&mut state);
        block_on(submit_with(&mut state, &RecordingApi::failing(409)));
        assert!(state.errors().root().is_some());

        state.set_field(FormField::Email, "jane.doe@example.com");
        let status = block_on(submit_with(&mut state, &RecordingApi::ok()));

        assert_eq!(status, FormStatus::Submitted);
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = UploadFormState::new();
        jane(&mut state);
        block_on(submit_with(&mut state, &RecordingApi::ok()));

        state.reset();

        assert_eq!(state, UploadFormState::default());
        assert_eq!(state.value(FormField::Age), "18");
    }

    #[test]
    fn test_edit_during_failed_request_keeps_field_error() {
        let mut state = UploadFormState::new();
        jane(&mut state);
        let input = state.begin_submit().expect("valid form");

        state.set_field(FormField::Email, "broken");
        assert_eq!(state.errors().field(FormField::Email), Some("Invalid email address"));

        state.finish_submit(&input, Err(UploadError::Status(409)));

        assert_eq!(state.status(), FormStatus::Failed);
        assert_eq!(state.errors().root(), Some(SUBMISSION_FAILED_MESSAGE));
        assert_eq!(state.errors().field(FormField::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_edit_during_successful_request_keeps_field_error() {
        let mut state = UploadFormState::new();
        jane(&mut state);
        let input = state.begin_submit().expect("valid form");

        state.set_field(FormField::Password, "short");
        state.finish_submit(&input, Ok(json!({ "response": "uploaded" })));

        assert_eq!(state.status(), FormStatus::Submitted);
        assert_eq!(state.errors().root(), None);
        assert_eq!(
            state.errors().field(FormField::Password),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(state.errors().field(FormField::Name), None);
    }

    #[test]
    fn test_unchanged_value_is_not_written() {
        let mut state = UploadFormState::new();
        state.set_field(FormField::Age, "");
        state.begin_submit();
        assert_eq!(state.status(), FormStatus::Invalid);

        // поле number отдаёт "" для незаконченного ввода вроде "-"
        assert!(!state.set_field(FormField::Age, ""));
        assert_eq!(state.status(), FormStatus::Invalid);
        assert!(state.set_field(FormField::Age, "-5"));
        assert_eq!(state.status(), FormStatus::Idle);
    }
}
