use crate::app::{App, AppProps};

mod app;
mod components;

/// Element the landing page reserves for the lead capture widget.
const MOUNT_ID: &str = "lead-capture";

fn main() {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID));

    match root {
        Some(root) => {
            let props = AppProps::from_mount(&root);
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            yew::Renderer::<App>::new().render();
        }
    }
}
