use dioxus::prelude::*;

use super::components::{Button, ButtonVariant, Card, StatusIndicator};
use super::dialogs::{ConfigureCameraDialogView, DataPointsDialogView};
use super::render_surface::RenderSurface;
use crate::config::STATUS_LABELS;
use crate::dashboard::{CameraAction, CameraId, ConfigureCameraDialog, DataPoints, DataPointsDialog};
use crate::state::AppState;

/// One camera: render surface, status row, control buttons and its dialogs.
#[component]
pub fn CameraPanelView(id: CameraId, #[props(default = false)] fullscreen: bool) -> Element {
    let mut app_state = use_context::<Signal<AppState>>();
    let mut configure_dialog = use_signal(|| None::<ConfigureCameraDialog>);
    let mut data_points_dialog = use_signal(|| None::<DataPointsDialog>);

    let surface_label = match app_state.read().dashboard.panel(id) {
        Some(panel) => panel.surface_label(),
        None => return rsx! {},
    };

    let on_configure = move |_: MouseEvent| {
        let dialog = app_state.read().dashboard.configure_dialog(id);
        configure_dialog.set(dialog);
    };

    let on_insert = move |_: MouseEvent| {
        app_state.read().dashboard.insert_camera(id);
    };

    let on_retract = move |_: MouseEvent| {
        app_state.read().dashboard.retract_camera(id);
    };

    let on_view_data = move |_: MouseEvent| {
        let dialog = app_state.read().dashboard.data_points_dialog(id);
        data_points_dialog.set(dialog);
    };

    let on_surface_double_click = move |_: MouseEvent| {
        app_state.write().dashboard.double_click_surface(id);
    };

    let on_configure_closed = move |outcome: Option<String>| {
        configure_dialog.set(None);
        let confirmation = app_state.write().dashboard.close_configure_dialog(id, outcome);
        if let Some(confirmation) = confirmation {
            app_state.write().push_confirmation(confirmation);
        }
    };

    let on_data_points_closed = move |outcome: Option<DataPoints>| {
        data_points_dialog.set(None);
        let confirmation = app_state.write().dashboard.close_data_points_dialog(id, outcome);
        if let Some(confirmation) = confirmation {
            app_state.write().push_confirmation(confirmation);
        }
    };

    let configure_label = CameraAction::Configure.label();
    let insert_label = CameraAction::Insert.label();
    let retract_label = CameraAction::Retract.label();
    let view_data_label = CameraAction::ViewDataPoints.label();

    let card_style = if fullscreen { "flex: 1; height: 100%; box-sizing: border-box;" } else { "" };

    rsx! {
        Card {
            custom_style: card_style.to_string(),

            RenderSurface {
                label: surface_label,
                expanded: fullscreen,
                ondoubleclick: on_surface_double_click,
            }

            // Status indicators
            div {
                style: "display: flex; gap: 6px; flex-wrap: wrap;",
                for label in STATUS_LABELS {
                    StatusIndicator { key: "{label}", text: label.to_string() }
                }
            }

            // Controls
            div {
                style: "display: flex; gap: 6px;",
                Button {
                    variant: ButtonVariant::Control,
                    custom_style: "flex: 1;".to_string(),
                    onclick: on_configure,
                    "{configure_label}"
                }
                Button {
                    variant: ButtonVariant::Control,
                    custom_style: "flex: 1;".to_string(),
                    onclick: on_insert,
                    "{insert_label}"
                }
                Button {
                    variant: ButtonVariant::Control,
                    custom_style: "flex: 1;".to_string(),
                    onclick: on_retract,
                    "{retract_label}"
                }
                Button {
                    variant: ButtonVariant::Control,
                    custom_style: "flex: 1;".to_string(),
                    onclick: on_view_data,
                    "{view_data_label}"
                }
            }

            if let Some(dialog) = configure_dialog() {
                ConfigureCameraDialogView { initial: dialog, on_close: on_configure_closed }
            }

            if let Some(dialog) = data_points_dialog() {
                DataPointsDialogView { initial: dialog, on_close: on_data_points_closed }
            }
        }
    }
}
