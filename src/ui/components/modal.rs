use dioxus::prelude::*;

use super::{Card, SectionHeader};

/// Window-covering overlay holding one dialog.
///
/// The backdrop swallows pointer events so nothing underneath can be used
/// until the dialog is closed.
#[component]
pub fn Modal(title: String, #[props(default = 420)] width_px: u32, children: Element) -> Element {
    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0,0,0,0.45); display: flex; align-items: center; justify-content: center; z-index: 100;",
            onclick: move |evt| evt.stop_propagation(),
            ondoubleclick: move |evt| evt.stop_propagation(),
            Card {
                custom_style: "width: {width_px}px; max-height: 90vh; overflow: auto;",
                SectionHeader { title }
                {children}
            }
        }
    }
}
