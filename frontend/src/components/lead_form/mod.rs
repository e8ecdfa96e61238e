//! Lead capture form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `LeadFormProps`, `LeadFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.

use yew::prelude::*;

mod fields;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::LeadFormProps;
pub use state::LeadFormComponent;

impl Component for LeadFormComponent {
    type Message = Msg;
    type Properties = LeadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        LeadFormComponent::new(&ctx.props().source_page)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
