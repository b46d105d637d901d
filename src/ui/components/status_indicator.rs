use dioxus::prelude::*;

/// Compact labelled status lamp. No data source feeds it, so the lamp stays grey.
#[component]
pub fn StatusIndicator(text: String) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; gap: 6px; height: 28px; padding: 0 8px; background: #e0e0e0; border-radius: 3px; border: 1px solid #ccc;",
            div {
                style: "width: 10px; height: 10px; border-radius: 50%; background: #999;",
            }
            span {
                style: "font-size: 10pt; font-weight: bold; color: #333; white-space: nowrap;",
                "{text}"
            }
        }
    }
}
