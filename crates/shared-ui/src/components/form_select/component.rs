use dioxus::prelude::*;

/// A themed native select element.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: EventHandler<FormEvent>,
    /// Whether the select is disabled.
    #[props(default = false)]
    disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    /// Option elements to render inside the select.
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form-select", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        select {
            value: value,
            disabled: disabled,
            onchange: move |evt| onchange.call(evt),
            ..merged,
            {children}
        }
    }
}
