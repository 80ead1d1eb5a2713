use crate::domain::a001_upload_form::ui::form::UploadForm;
use crate::layout::Header;
use crate::shared::api_utils::ApiConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Base URL is read once at startup and shared with every request client.
    provide_context(ApiConfig::from_env());

    view! {
        <Header />
        <main class="app-main">
            <UploadForm />
        </main>
    }
}
