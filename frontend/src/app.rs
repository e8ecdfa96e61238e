use crate::components::modal::LeadModal;
use common::form::policy::FailurePolicy;
use web_sys::Element;
use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    pub policy: FailurePolicy,
    pub source_page: AttrValue,
}

impl AppProps {
    /// Reads `data-failure-policy` and `data-source-page` from the mount element.
    pub fn from_mount(root: &Element) -> Self {
        let policy = root
            .get_attribute("data-failure-policy")
            .map(|raw| {
                raw.parse().unwrap_or_else(|e| {
                    gloo_console::warn!(format!("{}, using strict", e));
                    FailurePolicy::Strict
                })
            })
            .unwrap_or_default();
        let source_page = root.get_attribute("data-source-page").unwrap_or_default();

        Self {
            policy,
            source_page: source_page.into(),
        }
    }
}

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <LeadModal policy={ctx.props().policy} source_page={ctx.props().source_page.clone()} />
        }
    }
}
