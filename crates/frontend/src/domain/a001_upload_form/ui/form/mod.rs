//! Форма загрузки (UI)
//!
//! Упрощённый MVVM:
//! - state.rs: машина состояний формы (черновик, ошибки, статус) без реактивности
//! - view_model.rs: ViewModel с командами поверх реактивного сигнала состояния
//! - view.rs: Leptos-компонент (только разметка)

mod state;
mod view;
mod view_model;

pub use state::{submit_with, FormStatus, UploadFormState};
pub use view::UploadForm;
pub use view_model::UploadFormViewModel;
