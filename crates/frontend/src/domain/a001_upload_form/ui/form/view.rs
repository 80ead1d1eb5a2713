use super::view_model::UploadFormViewModel;
use crate::domain::a001_upload_form::api::HttpUploadApi;
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::ui::{Button, Input};
use contracts::domain::a001_upload_form::FormField;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Значение `autocomplete` для поля формы
fn autocomplete(field: FormField) -> &'static str {
    match field {
        FormField::Name => "name",
        FormField::Age => "off",
        FormField::Email => "email",
        FormField::Password => "new-password",
    }
}

#[component]
pub fn UploadForm() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_env);
    let api = HttpUploadApi::new(&config);
    let vm = UploadFormViewModel::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(api.clone());
    };

    let fields = FormField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <Input
                    id=field.key()
                    label=field.label()
                    input_type=field.input_type()
                    autocomplete=autocomplete(field)
                    value=vm.value(field)
                    error=vm.error(field)
                    on_input=Callback::new(move |value: String| vm.set_field(field, value))
                />
            }
        })
        .collect_view();

    view! {
        <div class="details-container upload-form">
            <form class="details-form" on:submit=on_submit novalidate=true>
                {fields}

                <div class="details-actions">
                    <Button button_type="submit" disabled=vm.is_submitting()>
                        {move || if vm.is_submitting().get() { "Submitting..." } else { "Submit" }}
                    </Button>
                    <Button
                        variant="secondary"
                        disabled=vm.is_submitting()
                        on_click=Callback::new(move |_| vm.reset_command())
                    >
                        {"Reset"}
                    </Button>
                </div>

                {move || vm.root_error().get().map(|message| view! {
                    <p class="form__error form__error--root">{message}</p>
                })}
                {move || vm.is_submitted().get().then(|| view! {
                    <p class="form__success">{"Uploaded"}</p>
                })}
            </form>
        </div>
    }
}
