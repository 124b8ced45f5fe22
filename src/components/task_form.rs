//! Task Form Component
//!
//! Create-task form: five labeled inputs, submit button and status alert.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::{PrioritySelect, StatusAlert};
use crate::context::use_form_context;
use crate::form::FormModelStoreFields;
use crate::models::Field;

/// Label plus control for one field
#[component]
fn FormGroup(field: Field, children: Children) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field.name()>{field.label()}</label>
            {children()}
        </div>
    }
}

/// Single-line input bound to a form field
#[component]
fn FieldInput(
    field: Field,
    input_type: &'static str,
    placeholder: &'static str,
    #[prop(optional)] min: Option<&'static str>,
) -> impl IntoView {
    let ctx = use_form_context();
    let store = ctx.store;

    view! {
        <input
            type=input_type
            id=field.name()
            name=field.name()
            placeholder=placeholder
            min=min
            required=field.is_required()
            prop:value=move || store.fields().read().value(field).to_string()
            on:input=move |ev| ctx.set_field(field, event_target_value(&ev))
        />
    }
}

/// Form for creating a new task
#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_form_context();
    let store = ctx.store;

    let on_submit = {
        let ctx = ctx.clone();
        move |ev: SubmitEvent| {
            // Native required-field validation has already passed here
            ev.prevent_default();
            ctx.submit();
        }
    };

    let description = Field::Description;

    view! {
        <div class="task-form-container">
            <h1>"Create New Task"</h1>
            <form class="task-form" on:submit=on_submit>
                <FormGroup field=Field::Title>
                    <FieldInput field=Field::Title input_type="text" placeholder="Enter task title" />
                </FormGroup>

                <FormGroup field=description>
                    <textarea
                        id=description.name()
                        name=description.name()
                        placeholder="Enter task description"
                        rows="4"
                        prop:value=move || store.fields().read().description.clone()
                        on:input=move |ev| ctx.set_field(description, event_target_value(&ev))
                    />
                </FormGroup>

                <FormGroup field=Field::Address>
                    <FieldInput field=Field::Address input_type="text" placeholder="Enter service address" />
                </FormGroup>

                <FormGroup field=Field::Priority>
                    <PrioritySelect />
                </FormGroup>

                <FormGroup field=Field::Duration>
                    <FieldInput
                        field=Field::Duration
                        input_type="number"
                        placeholder="Enter estimated duration"
                        min="0"
                    />
                </FormGroup>

                <button type="submit" disabled=move || store.is_submitting().get()>
                    {move || store.read().submit_label()}
                </button>

                <StatusAlert />
            </form>
        </div>
    }
}
