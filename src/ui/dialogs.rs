use dioxus::prelude::*;

use super::components::{Button, ButtonVariant, Modal};
use crate::dashboard::{ConfigureCameraDialog, DataPoints, DataPointsDialog, DialogOutcome};

/// RTSP link entry. Closes with `Some(link)` on Save and `None` on Cancel.
#[component]
pub fn ConfigureCameraDialogView(
    initial: ConfigureCameraDialog,
    on_close: EventHandler<Option<String>>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());
    let text = draft.read().rtsp_input().to_string();

    let on_input = move |evt: Event<FormData>| {
        draft.write().set_rtsp_input(evt.value());
    };

    let on_save = move |_: MouseEvent| {
        on_close.call(draft.read().clone().close(DialogOutcome::Accepted));
    };

    let on_cancel = move |_: MouseEvent| {
        on_close.call(draft.read().clone().close(DialogOutcome::Rejected));
    };

    rsx! {
        Modal {
            title: ConfigureCameraDialog::TITLE.to_string(),
            div {
                style: "display: flex; flex-direction: column; gap: 15px;",
                input {
                    r#type: "text",
                    value: "{text}",
                    placeholder: ConfigureCameraDialog::PLACEHOLDER,
                    oninput: on_input,
                    style: "width: 100%; padding: 8px 12px; border: 1px solid #ccc; border-radius: 4px; font-size: 14px; box-sizing: border-box;",
                }
                div {
                    style: "display: flex; justify-content: flex-end; gap: 10px;",
                    Button { variant: ButtonVariant::Primary, onclick: on_save, "Save" }
                    Button { variant: ButtonVariant::Secondary, onclick: on_cancel, "Cancel" }
                }
            }
        }
    }
}

/// Sixteen checkbox + name rows. Closes with the full set on OK and `None` on Cancel.
#[component]
pub fn DataPointsDialogView(
    initial: DataPointsDialog,
    on_close: EventHandler<Option<DataPoints>>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());
    let rows: Vec<(usize, bool, String)> = draft
        .read()
        .rows()
        .iter()
        .map(|row| (row.index, row.checked, row.name.clone()))
        .collect();

    let on_ok = move |_: MouseEvent| {
        on_close.call(draft.read().clone().close(DialogOutcome::Accepted));
    };

    let on_cancel = move |_: MouseEvent| {
        on_close.call(draft.read().clone().close(DialogOutcome::Rejected));
    };

    rsx! {
        Modal {
            title: DataPointsDialog::TITLE.to_string(),
            width_px: 460,
            div {
                style: "display: flex; flex-direction: column; gap: 6px;",
                for (index, checked, name) in rows {
                    div {
                        key: "{index}",
                        style: "display: flex; align-items: center; gap: 10px;",
                        input {
                            r#type: "checkbox",
                            checked,
                            onchange: move |_| draft.write().toggle_checked(index),
                        }
                        input {
                            r#type: "text",
                            value: "{name}",
                            oninput: move |evt: Event<FormData>| draft.write().set_name(index, evt.value()),
                            style: "flex: 1; padding: 6px 10px; border: 1px solid #ccc; border-radius: 4px; font-size: 14px;",
                        }
                    }
                }
            }
            div {
                style: "display: flex; justify-content: flex-end; gap: 10px; margin-top: 10px;",
                Button { variant: ButtonVariant::Primary, onclick: on_ok, "OK" }
                Button { variant: ButtonVariant::Secondary, onclick: on_cancel, "Cancel" }
            }
        }
    }
}
