use leptos::prelude::*;

/// Labeled input with an inline error line below it
#[component]
pub fn Input(
    /// Label text
    #[prop(into)]
    label: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Input type: "text" (default), "number", "password", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// ID for the input element
    #[prop(into)]
    id: String,
    /// Autocomplete attribute
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
    /// Error message shown under the input; also sets `aria-invalid`
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let label_for = id.clone();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();
    let message = move || error.and_then(|e| e.get());
    let is_invalid = move || message().is_some();

    // Write the value back only when the element shows something else.
    // A number input reports "" for partial entries like "-", so an
    // unconditional write would erase the keystroke.
    let input_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        let current = value.get();
        if let Some(el) = input_ref.get() {
            if el.value() != current {
                el.set_value(&current);
            }
        }
    });

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {label}
            </label>
            <input
                node_ref=input_ref
                id=id
                class=move || if is_invalid() { "form__input form__input--invalid" } else { "form__input" }
                type=input_t
                autocomplete=input_autocomplete
                aria-invalid=move || if is_invalid() { "true" } else { "false" }
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || message().map(|text| view! {
                <p class="form__error">{text}</p>
            })}
        </div>
    }
}
