use dioxus::prelude::*;

use crate::app::Notice;

/// Dismissible banner reporting the outcome of the last save attempt.
#[component]
pub fn NoticeBanner(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let (message, banner_class) = match &notice {
        Notice::Success(msg) => (
            msg.clone(),
            "flex items-center justify-between gap-3 px-4 py-3 rounded-xl border border-[var(--border-success)] bg-[var(--bg-success-subtle)] text-[var(--text-success)] text-sm",
        ),
        Notice::Error(msg) => (
            msg.clone(),
            "flex items-center justify-between gap-3 px-4 py-3 rounded-xl border border-[var(--border-error)] bg-[var(--bg-error-subtle)] text-[var(--text-error)] text-sm",
        ),
    };

    rsx! {
        div {
            class: "{banner_class}",
            span { "{message}" }
            button {
                class: "shrink-0 opacity-60 hover:opacity-100 transition-opacity",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                svg {
                    width: "14",
                    height: "14",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    path { d: "M18 6L6 18M6 6l12 12" }
                }
            }
        }
    }
}
