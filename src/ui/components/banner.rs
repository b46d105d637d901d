use dioxus::prelude::*;

/// Titled confirmation message. Multi-line messages keep their line breaks.
#[component]
pub fn Banner(title: String, message: String, onclick: EventHandler<Event<MouseData>>) -> Element {
    rsx! {
        div {
            style: "padding: 12px; background: #e7f9ed; border-left: 4px solid #28a745; border-radius: 4px; box-shadow: 0 2px 6px rgba(0,0,0,0.15); cursor: pointer;",
            onclick: move |evt| onclick.call(evt),
            p {
                style: "margin: 0 0 4px 0; font-size: 14px; font-weight: bold; color: #333;",
                "✓ {title}"
            }
            p {
                style: "margin: 0; font-size: 13px; color: #555; white-space: pre-line;",
                "{message}"
            }
        }
    }
}
