//! View rendering for the lead form component.
//!
//! The form is rendered with `novalidate`: required and email checks run in
//! `common::form`, and invalid fields get a red border, `aria-invalid` and an
//! `aria-describedby` link to a `role="alert"` message span.

use common::form::{FieldKind, FormField};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::fields::{FieldSpec, LEAD_FORM};
use super::messages::Msg;
use super::state::LeadFormComponent;

const INVALID_BORDER: &str = "border-color: #ef4444;";

pub fn view(component: &LeadFormComponent, ctx: &Context<LeadFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="lead-form-root">
            <form
                id="leadForm"
                class="lead-form"
                novalidate={true}
                style={component.submitted.then_some("display: none;")}
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                { for LEAD_FORM.iter().zip(&component.fields).map(|(spec, field)| {
                    build_field(component, spec, field, link)
                }) }
                <button
                    type="submit"
                    class="btn btn-primary form-submit"
                    disabled={component.submitting}
                >
                    { component.submit_label() }
                </button>
            </form>
            {
                if component.submitted {
                    build_success_panel()
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn build_field(
    component: &LeadFormComponent,
    spec: &FieldSpec,
    field: &FormField,
    link: &Scope<LeadFormComponent>,
) -> Html {
    if field.kind == FieldKind::Hidden {
        return html! {
            <input type="hidden" id={field.id.clone()} name={field.name.clone()} value={field.value.clone()} />
        };
    }

    let error = component.errors.get(&field.id);
    let style = error.map(|_| INVALID_BORDER);
    let invalid = error.map(|_| "true");
    let described_by = error.map(|_| field.error_id());

    let control = if field.kind == FieldKind::Select {
        let id = field.id.clone();
        html! {
            <select
                id={field.id.clone()}
                name={field.name.clone()}
                required={field.required}
                style={style}
                aria-invalid={invalid}
                aria-describedby={described_by}
                onchange={link.callback(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::Input { id: id.clone(), value: select.value() }
                })}
            >
                { for spec.options.iter().map(|(value, text)| html! {
                    <option value={*value} selected={field.value == *value}>{ *text }</option>
                }) }
            </select>
        }
    } else {
        let id = field.id.clone();
        html! {
            <input
                type={input_type(field.kind)}
                id={field.id.clone()}
                name={field.name.clone()}
                placeholder={spec.placeholder}
                required={field.required}
                value={field.value.clone()}
                style={style}
                aria-invalid={invalid}
                aria-describedby={described_by}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Input { id: id.clone(), value: input.value() }
                })}
            />
        }
    };

    html! {
        <div class="form-group">
            if let Some(label) = &field.label {
                <label for={field.id.clone()}>{ label.clone() }</label>
            }
            { control }
            if let Some(message) = error {
                <span id={field.error_id()} class="form-error" role="alert">{ message.clone() }</span>
            }
        </div>
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Tel => "tel",
        FieldKind::Email => "email",
        FieldKind::Date => "date",
        FieldKind::Hidden => "hidden",
        FieldKind::Text | FieldKind::Select => "text",
    }
}

fn build_success_panel() -> Html {
    html! {
        <div id="modalSuccess" class="modal-success" role="status">
            <h3>{ "You're on the list!" }</h3>
            <p>{ "Thanks! One of our bond-back specialists will call you within one business day." }</p>
        </div>
    }
}
