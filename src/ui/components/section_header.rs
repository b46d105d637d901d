use dioxus::prelude::*;

#[component]
pub fn SectionHeader(title: String) -> Element {
    rsx! {
        h2 {
            style: "margin: 0 0 15px 0; font-size: 18px; color: #333; border-bottom: 2px solid #007bff; padding-bottom: 10px;",
            "{title}"
        }
    }
}
