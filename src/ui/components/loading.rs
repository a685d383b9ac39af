use dioxus::prelude::*;

#[component]
pub fn Spinner(props: SpinnerProps) -> Element {
    let size = props.size.unwrap_or(24);

    rsx! {
        div {
            class: "spinner",
            style: "width: {size}px; height: {size}px; border: 2px solid var(--bg-active); border-top-color: var(--accent-primary); border-radius: 50%; animation: spin 1s linear infinite;",
        }
        style {
            "@keyframes spin {{ to {{ transform: rotate(360deg); }} }}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SpinnerProps {
    #[props(optional)]
    pub size: Option<i32>,
}
