//! UI components for Rollcall
//!
//! This module contains all user interface components built with Dioxus.

pub mod components;
pub mod form;
pub mod list;

use dioxus::prelude::*;

use crate::app::AppState;
use crate::ui::components::notice::NoticeBanner;
use crate::ui::form::PersonForm;
use crate::ui::list::PersonList;

/// Main Application Layout
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let mut notice_signal = app_state.notice;
    let notice = notice_signal.read().clone();

    rsx! {
        div {
            class: "flex flex-col h-screen w-screen bg-[var(--bg-main)] text-[var(--text-primary)] font-sans overflow-hidden",

            link { rel: "stylesheet", href: "assets/styles.css" }

            // Header
            header {
                class: "px-8 pt-8 pb-4",
                h1 { class: "text-2xl font-bold tracking-tight text-[var(--text-primary)]", "Save Name and Date" }
                p { class: "text-sm text-[var(--text-secondary)] mt-1", "You need to introduce two values" }
            }

            // Submit outcome banner
            {notice.map(|notice| rsx! {
                div {
                    class: "px-8",
                    NoticeBanner {
                        notice,
                        on_dismiss: move |_| notice_signal.set(None),
                    }
                }
            })}

            // Form
            div {
                class: "px-8 py-4",
                PersonForm {}
            }

            // Saved records
            main {
                class: "flex-1 min-h-0 px-8 pb-8 flex flex-col",
                h2 { class: "text-sm font-medium text-[var(--text-secondary)] uppercase tracking-wide mb-2", "Saved" }
                PersonList {}
            }
        }
    }
}
