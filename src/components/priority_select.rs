//! Priority Select Component
//!
//! Required single-select over the fixed priority options.

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::form::FormModelStoreFields;
use crate::models::{Field, PRIORITY_OPTIONS};

/// Priority dropdown; the empty option is the unselected sentinel
#[component]
pub fn PrioritySelect() -> impl IntoView {
    let ctx = use_form_context();
    let store = ctx.store;
    let field = Field::Priority;

    view! {
        <select
            id=field.name()
            name=field.name()
            required=field.is_required()
            on:change=move |ev| ctx.set_field(field, event_target_value(&ev))
        >
            {PRIORITY_OPTIONS.iter().map(|(value, label)| {
                let value = *value;
                let is_selected = move || store.fields().read().priority == value;
                view! {
                    <option value=value prop:selected=is_selected>
                        {*label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
