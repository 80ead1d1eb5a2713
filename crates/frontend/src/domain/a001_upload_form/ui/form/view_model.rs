use super::state::{FormStatus, UploadFormState};
use crate::domain::a001_upload_form::api::UploadApi;
use contracts::domain::a001_upload_form::FormField;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel формы загрузки
#[derive(Clone, Copy)]
pub struct UploadFormViewModel {
    pub state: RwSignal<UploadFormState>,
}

impl UploadFormViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(UploadFormState::new()),
        }
    }

    pub fn value(&self, field: FormField) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.value(field).to_string()))
    }

    pub fn error(&self, field: FormField) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.errors().field(field).map(str::to_string)))
    }

    pub fn root_error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.errors().root().map(str::to_string)))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_submit_disabled()))
    }

    pub fn is_submitted(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.status() == FormStatus::Submitted))
    }

    /// Без изменения значения сигнал не трогаем, иначе `<input>`
    /// перерисуется и потеряет незаконченный ввод
    pub fn set_field(&self, field: FormField, value: String) {
        let changed = self.state.with_untracked(|s| s.value(field) != value);
        if changed {
            self.state.update(|s| {
                s.set_field(field, value);
            });
        }
    }

    /// Проверить форму и, если она валидна, отправить через `api`
    pub fn submit_command<A>(&self, api: A)
    where
        A: UploadApi + 'static,
    {
        let mut input = None;
        self.state.update(|s| input = s.begin_submit());
        let Some(input) = input else {
            return;
        };

        let state = self.state;
        spawn_local(async move {
            let result = api.upload(&input).await;
            state.update(|s| s.finish_submit(&input, result));
        });
    }

    /// Сбросить форму к значениям по умолчанию
    pub fn reset_command(&self) {
        self.state.update(|s| s.reset());
    }
}

impl Default for UploadFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
