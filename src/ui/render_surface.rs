use dioxus::prelude::*;

/// Placeholder video surface. Double-clicks go to the registered handler.
#[component]
pub fn RenderSurface(
    label: String,
    #[props(default = false)] expanded: bool,
    ondoubleclick: EventHandler<Event<MouseData>>,
) -> Element {
    let size_style = if expanded {
        "flex: 1; min-height: 480px;"
    } else {
        "min-width: 320px; min-height: 240px;"
    };

    rsx! {
        div {
            style: "{size_style} display: flex; align-items: center; justify-content: center; background: black; color: white; font-family: Arial, sans-serif; font-size: 24pt; font-weight: bold; user-select: none;",
            ondoubleclick: move |evt| ondoubleclick.call(evt),
            "{label}"
        }
    }
}
