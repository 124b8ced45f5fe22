//! Status Alert Component

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::form::FormModelStoreFields;

/// Outcome message of the last submission, hidden while empty
#[component]
pub fn StatusAlert() -> impl IntoView {
    let store = use_form_context().store;
    let message = move || store.message().get();

    view! {
        <Show when=move || !message().is_empty()>
            <div class="success-message" role="alert">
                {message}
            </div>
        </Show>
    }
}
