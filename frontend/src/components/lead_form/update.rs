//! Update function for the lead form component.
//!
//! Elm-style: receives the current state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! Submission flow
//! - `Submit` runs `common::form::validate_form`; failures only mark fields.
//! - A valid form is serialized, the button switches to its pending label and
//!   the request runs in `spawn_local`.
//! - `Settled` re-enables the button and lets the `FailurePolicy` decide
//!   between the success panel and an alert.

use common::form::policy::SubmitOutcome;
use common::form::{serialize_fields, validate_form};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{alert, send_lead};
use super::messages::Msg;
use super::state::LeadFormComponent;

pub fn update(component: &mut LeadFormComponent, ctx: &Context<LeadFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Input { id, value } => {
            component.set_value(&id, value);
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            if let Err(errors) = validate_form(&component.fields) {
                component.set_errors(errors);
                return true;
            }

            component.errors.clear();
            component.submitting = true;

            let payload = serialize_fields(&component.fields);
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = send_lead(&payload).await;
                link.send_message(Msg::Settled(result));
            });
            true
        }
        Msg::Settled(result) => {
            match ctx.props().policy.resolve(&result) {
                SubmitOutcome::ShowSuccess => {
                    component.settle(true);
                    ctx.props().on_success.emit(());
                }
                SubmitOutcome::Alert { message, log } => {
                    component.settle(false);
                    gloo_console::error!(log);
                    alert(message);
                }
            }
            true
        }
    }
}
