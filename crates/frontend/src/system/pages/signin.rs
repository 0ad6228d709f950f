use leptos::prelude::*;

use crate::system::auth::storage;

/// Landing page for unauthenticated users.
///
/// Sign-in itself happens outside this panel; operators paste the
/// access token issued by the identity service and continue.
#[component]
pub fn SignInPage() -> impl IntoView {
    let token = RwSignal::new(String::new());

    let save_token = move |_| {
        let value = token.get();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        storage::set_access_token(trimmed);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    };

    view! {
        <div class="details-container signin-page">
            <div class="details-header">
                <h3>"Sign In"</h3>
            </div>
            <p>"Paste the access token issued for this admin panel to continue."</p>
            <div class="details-form">
                <div class="form-group">
                    <label for="access-token">{"Access Token"}</label>
                    <input
                        type="password"
                        id="access-token"
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="details-actions">
                <button class="btn btn-primary" on:click=save_token>
                    "Continue"
                </button>
            </div>
        </div>
    }
}
