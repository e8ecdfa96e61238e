//! Modal dialog hosting the lead form.
//!
//! The call-to-action button opens it; the close button, a click on the
//! overlay itself and Escape close it. While it is open, page scrolling is
//! locked and Tab / Shift+Tab wrap around the modal's focusable elements. The
//! first input is focused shortly after opening. Closing after a successful
//! submission remounts the form so the next visitor starts clean.

use common::form::policy::FailurePolicy;
use gloo_events::EventListener;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};
use yew::prelude::*;

use crate::components::lead_form::LeadFormComponent;

/// Delay before focusing the first input, so the opening transition has started.
const FOCUS_DELAY_MS: u32 = 100;

const FOCUSABLE: &str = "button, [href], input:not([type=hidden]), select, textarea, [tabindex]:not([tabindex='-1'])";

pub enum Msg {
    Open,
    Close,
    OverlayClicked(MouseEvent),
    Submitted,
}

#[derive(Properties, PartialEq)]
pub struct LeadModalProps {
    #[prop_or_default]
    pub policy: FailurePolicy,
    #[prop_or_default]
    pub source_page: AttrValue,
}

pub struct LeadModal {
    open: bool,
    submitted: bool,
    /// Bumped to remount the form after a completed submission.
    form_key: u32,
    overlay_ref: NodeRef,
    /// Document-level keydown handler, attached only while open.
    key_listener: Option<EventListener>,
}

impl Component for LeadModal {
    type Message = Msg;
    type Properties = LeadModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            submitted: false,
            form_key: 0,
            overlay_ref: NodeRef::default(),
            key_listener: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open => {
                if self.open {
                    return false;
                }
                self.open = true;
                lock_body_scroll(true);
                self.key_listener = listen_for_keys(ctx, self.overlay_ref.clone());
                let overlay_ref = self.overlay_ref.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(FOCUS_DELAY_MS).await;
                    focus_first_input(&overlay_ref);
                });
                true
            }
            Msg::Close => self.close(),
            Msg::OverlayClicked(e) => {
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                if target.is_some() && target == self.overlay_ref.get() {
                    self.close()
                } else {
                    false
                }
            }
            Msg::Submitted => {
                self.submitted = true;
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();

        html! {
            <>
                <button class="btn btn-primary" data-open-modal="" onclick={link.callback(|_| Msg::Open)}>
                    { "Get My Free Assessment" }
                </button>
                <div
                    id="modalOverlay"
                    class={classes!("modal-overlay", self.open.then_some("open"))}
                    ref={self.overlay_ref.clone()}
                    onclick={link.callback(Msg::OverlayClicked)}
                >
                    <div class="modal" role="dialog" aria-modal="true" aria-labelledby="modalTitle">
                        <button
                            id="modalClose"
                            class="modal-close"
                            aria-label="Close"
                            onclick={link.callback(|_| Msg::Close)}
                        >
                            { "×" }
                        </button>
                        <h2 id="modalTitle">{ "Get your bond back, guaranteed" }</h2>
                        <LeadFormComponent
                            key={self.form_key}
                            policy={props.policy}
                            source_page={props.source_page.clone()}
                            on_success={link.callback(|_| Msg::Submitted)}
                        />
                    </div>
                </div>
            </>
        }
    }
}

impl LeadModal {
    fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.key_listener = None;
        lock_body_scroll(false);
        if self.submitted {
            self.submitted = false;
            self.form_key += 1;
        }
        true
    }
}

/// Escape closes the modal from anywhere on the page; Tab is kept inside it.
fn listen_for_keys(ctx: &Context<LeadModal>, overlay_ref: NodeRef) -> Option<EventListener> {
    let document = web_sys::window()?.document()?;
    let close = ctx.link().callback(|_: ()| Msg::Close);
    Some(EventListener::new(&document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        match event.key().as_str() {
            "Escape" => close.emit(()),
            "Tab" => wrap_focus(&overlay_ref, event),
            _ => {}
        }
    }))
}

/// Moves focus from the last focusable element back to the first (and the
/// reverse with Shift) instead of letting it leave the modal.
fn wrap_focus(overlay_ref: &NodeRef, event: &KeyboardEvent) {
    let Some(focusable) = overlay_ref
        .cast::<Element>()
        .and_then(|overlay| overlay.query_selector_all(FOCUSABLE).ok())
    else {
        return;
    };
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .map(Node::from);
    let position = (0..focusable.length()).find(|&i| {
        focusable
            .item(i)
            .is_some_and(|node| node.is_same_node(active.as_ref()))
    });

    let Some(target) = wrap_target(position, focusable.length(), event.shift_key()) else {
        return;
    };
    event.prevent_default();
    if let Some(Ok(element)) = focusable.item(target).map(|n| n.dyn_into::<HtmlElement>()) {
        element.focus().ok();
    }
}

/// Index to focus instead of the browser default, given the position of the
/// focused element among `count` focusable ones. `None` lets Tab proceed.
fn wrap_target(position: Option<u32>, count: u32, backwards: bool) -> Option<u32> {
    let last = count.checked_sub(1)?;
    match (position, backwards) {
        (Some(0), true) => Some(last),
        (Some(p), false) if p == last => Some(0),
        _ => None,
    }
}

fn lock_body_scroll(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let overflow = if locked { "hidden" } else { "" };
        body.style().set_property("overflow", overflow).ok();
    }
}

fn focus_first_input(overlay_ref: &NodeRef) {
    let input = overlay_ref
        .cast::<Element>()
        .and_then(|overlay| overlay.query_selector("input:not([type=hidden])").ok().flatten())
        .and_then(|input| input.dyn_into::<HtmlElement>().ok());
    if let Some(input) = input {
        input.focus().ok();
    }
}
