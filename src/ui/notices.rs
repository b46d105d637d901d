use dioxus::prelude::*;
use tracing::trace;

use super::components::Banner;
use crate::config::NOTICE_TIMEOUT;
use crate::state::{AppState, Notice};

/// Toasts in the bottom-right corner, mounted for the whole app lifetime.
#[component]
pub fn NoticeStack() -> Element {
    let app_state = use_context::<Signal<AppState>>();
    let notices = app_state.read().notices.clone();

    rsx! {
        div {
            style: "position: fixed; right: 20px; bottom: 20px; display: flex; flex-direction: column; gap: 10px; max-width: 360px; z-index: 200;",
            for notice in notices {
                NoticeToast { key: "{notice.id}", notice }
            }
        }
    }
}

/// One toast. Its timer lives as long as the toast itself, so view changes
/// elsewhere do not cancel it.
#[component]
fn NoticeToast(notice: Notice) -> Element {
    let mut app_state = use_context::<Signal<AppState>>();
    let id = notice.id;

    use_future(move || async move {
        tokio::time::sleep(NOTICE_TIMEOUT).await;
        trace!("Notice {} timed out", id);
        app_state.write().dismiss_notice(id);
    });

    rsx! {
        Banner {
            title: notice.title,
            message: notice.message,
            onclick: move |_: MouseEvent| app_state.write().dismiss_notice(id),
        }
    }
}
