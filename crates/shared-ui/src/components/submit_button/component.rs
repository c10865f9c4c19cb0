use dioxus::prelude::*;

/// Label shown while a submission is in flight.
pub const LOADING_LABEL: &str = "Loading...";

/// Primary submit button for a form. Disabled and showing a spinner while
/// `loading` is true.
#[component]
pub fn SubmitButton(
    #[props(default = false)] loading: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "submit-button", None, false),
        Attribute::new("data-style", "primary", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "submit",
            disabled: loading,
            "aria-busy": if loading { "true" } else { "false" },
            ..merged,
            if loading {
                span { class: "submit-button-spinner", "aria-hidden": "true" }
                "{LOADING_LABEL}"
            } else {
                {children}
            }
        }
    }
}
