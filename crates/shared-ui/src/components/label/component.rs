use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Caption for a form control, optionally flagged as required.
#[component]
pub fn Label(
    html_for: String,
    #[props(default = false)] required: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { class: "label", html_for: html_for,
            {children}
            if required {
                span { class: "label-required", "aria-hidden": "true", " *" }
            }
        }
    }
}
