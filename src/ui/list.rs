//! Saved-records list
//!
//! Shows a spinner until the first fetch completes, then either an
//! empty-state line or one row per saved person.

use dioxus::prelude::*;

use crate::app::AppState;
use crate::types::{format_date, Person};
use crate::ui::components::loading::Spinner;

#[component]
pub fn PersonList() -> Element {
    let app_state = use_context::<AppState>();
    let list = app_state.list.read().clone();

    rsx! {
        div {
            class: "flex-1 overflow-y-auto space-y-2",
            style: "scrollbar-width: thin;",

            if list.loading {
                div {
                    class: "flex items-center gap-3 px-3 py-4 text-sm text-[var(--text-tertiary)]",
                    Spinner { size: 18 }
                    span { "Loading..." }
                }
            } else if list.items.is_empty() {
                div {
                    class: "px-3 py-4 text-sm text-[var(--text-tertiary)]",
                    "No records saved yet"
                }
            } else {
                {list.items.iter().enumerate().map(|(idx, person)| {
                    // Server ids key the rows; index is the fallback when the
                    // payload carries none
                    let key = person
                        .id
                        .map(|id| format!("id-{id}"))
                        .unwrap_or_else(|| format!("idx-{idx}"));
                    rsx! {
                        PersonRow { key: "{key}", person: person.clone() }
                    }
                })}
            }
        }
    }
}

#[component]
fn PersonRow(person: Person) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between px-4 py-3 bg-[var(--bg-surface)] border border-[var(--border-subtle)] rounded-xl hover:border-[var(--border-hover)] transition-colors",
            span { class: "font-medium text-[var(--text-primary)] truncate", "{person.name}" }
            span { class: "text-sm text-[var(--text-secondary)] shrink-0 ml-4", "{format_date(&person.date)}" }
        }
    }
}
