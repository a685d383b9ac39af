//! Name-and-date entry form
//!
//! Two controlled inputs and a save button. The button stays disabled while
//! either field is empty, which is the only validation there is.

use dioxus::prelude::*;

use crate::app::{refresh, AppState, Notice};
use crate::types::NewPerson;

#[component]
pub fn PersonForm() -> Element {
    let app_state = use_context::<AppState>();
    let mut name = use_signal(String::new);
    let mut date = use_signal(String::new);

    let handle_save = move |_| {
        let api = app_state.api.clone();
        let mut notice = app_state.notice;
        let list = app_state.list;

        if name().trim().is_empty() || date().trim().is_empty() {
            return;
        }

        // Fire-and-forget: repeated clicks may overlap, the server copes
        spawn(async move {
            let person = NewPerson::new(name(), date());
            match api.create(&person).await {
                Ok(()) => {
                    notice.set(Some(Notice::Success("Data saved successfully!".to_string())));
                    name.set(String::new());
                    date.set(String::new());
                    refresh(api, list).await;
                }
                Err(e) => {
                    // Fields keep their values so the user can retry
                    tracing::error!("Error saving person: {}", e);
                    notice.set(Some(Notice::Error("Error saving data".to_string())));
                }
            }
        });
    };

    let incomplete = name().trim().is_empty() || date().trim().is_empty();

    rsx! {
        div {
            class: "flex flex-col gap-4 p-4 bg-[var(--bg-surface)] border border-[var(--border-subtle)] rounded-2xl shadow-lg",

            div {
                class: "flex flex-col gap-1",
                label {
                    class: "text-sm text-[var(--text-secondary)]",
                    r#for: "person-name",
                    "Name:"
                }
                input {
                    id: "person-name",
                    class: "px-3 py-2 bg-transparent border border-[var(--border-subtle)] rounded-xl outline-none text-[var(--text-primary)] focus:border-[var(--border-focus)] transition-colors",
                    r#type: "text",
                    required: true,
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }

            div {
                class: "flex flex-col gap-1",
                label {
                    class: "text-sm text-[var(--text-secondary)]",
                    r#for: "person-date",
                    "Date:"
                }
                input {
                    id: "person-date",
                    class: "px-3 py-2 bg-transparent border border-[var(--border-subtle)] rounded-xl outline-none text-[var(--text-primary)] focus:border-[var(--border-focus)] transition-colors",
                    r#type: "date",
                    required: true,
                    value: "{date}",
                    oninput: move |evt| date.set(evt.value()),
                }
            }

            button {
                onclick: handle_save,
                disabled: incomplete,
                class: "self-start px-5 py-2 rounded-xl bg-[var(--accent-primary)] text-[var(--accent-text)] hover:bg-[var(--accent-hover)] disabled:opacity-30 disabled:cursor-not-allowed transition-all shadow-md active:scale-95",
                "Save"
            }
        }
    }
}
