use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Control,
}

impl ButtonVariant {
    fn get_style(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "padding: 8px 20px; border: none; background: #007bff; color: white; cursor: pointer; border-radius: 4px; font-size: 14px; font-weight: 500;"
            }
            ButtonVariant::Secondary => {
                "padding: 8px 20px; border: 1px solid #6c757d; background: white; color: #6c757d; cursor: pointer; border-radius: 4px; font-size: 14px; font-weight: 500;"
            }
            ButtonVariant::Control => {
                "padding: 6px 12px; border: 1px solid #ccc; background: lightgrey; color: #222; cursor: pointer; border-radius: 5px; font-size: 13px; font-weight: bold;"
            }
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[props(default = "".to_string())] custom_style: String,
    onclick: EventHandler<Event<MouseData>>,
    children: Element,
) -> Element {
    let base_style = variant.get_style();
    let final_style = if custom_style.is_empty() {
        base_style.to_string()
    } else {
        format!("{} {}", base_style, custom_style)
    };

    rsx! {
        button {
            style: "{final_style}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
