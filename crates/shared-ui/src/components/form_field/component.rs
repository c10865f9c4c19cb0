use dioxus::prelude::*;

use crate::components::{FormSelect, Input, Label, Skeleton, Textarea};

/// Which control a `FormField` renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Input,
    Textarea,
    PhoneInput,
    Checkbox,
    DatePicker,
    Select,
    /// Inert placeholder; any children are rendered beneath it.
    Skeleton,
}

impl FieldKind {
    /// Native `type` for kinds rendered through `Input`.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::PhoneInput => "tel",
            FieldKind::DatePicker => "date",
            FieldKind::Checkbox => "checkbox",
            _ => "text",
        }
    }
}

/// A labelled, bound form control with its inline validation message.
///
/// `value` and `on_input` bind the control to the owning form; `error`
/// is shown under the control when present. For `FieldKind::Checkbox` the
/// value is `"true"` when checked. For `FieldKind::Select` the children
/// are the `option` elements.
#[component]
pub fn FormField(
    /// Field identifier, used as the control id.
    name: String,
    #[props(default)] kind: FieldKind,
    #[props(default)] label: String,
    #[props(default)] placeholder: String,
    /// Leading icon for single-line inputs.
    #[props(default)]
    icon: Option<Element>,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: EventHandler<FocusEvent>,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    let error_id = format!("{name}-error");
    let invalid = if error.is_some() { "true" } else { "false" };

    let control = match kind {
        FieldKind::Input | FieldKind::PhoneInput | FieldKind::DatePicker => rsx! {
            div { class: "form-field-control",
                if let Some(icon) = icon {
                    span { class: "form-field-icon", {icon} }
                }
                Input {
                    id: "{name}",
                    input_type: kind.input_type().to_string(),
                    value: value,
                    placeholder: placeholder,
                    disabled: disabled,
                    on_input: on_input,
                    on_blur: on_blur,
                }
            }
        },
        FieldKind::Textarea => rsx! {
            Textarea {
                id: "{name}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                on_input: on_input,
                on_blur: on_blur,
            }
        },
        FieldKind::Checkbox => rsx! {
            div { class: "form-field-checkbox",
                input {
                    r#type: "checkbox",
                    id: "{name}",
                    checked: value == "true",
                    disabled: disabled,
                    onchange: move |e| on_input.call(e),
                }
                Label { html_for: name.clone(), "{label}" }
            }
        },
        FieldKind::Select => rsx! {
            FormSelect {
                id: "{name}",
                value: value,
                disabled: disabled,
                onchange: on_input,
                if !placeholder.is_empty() {
                    option { value: "", disabled: true, "{placeholder}" }
                }
                {children}
            }
        },
        FieldKind::Skeleton => rsx! {
            div { class: "form-field-skeleton",
                Skeleton {}
                {children}
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-field", "data-invalid": invalid,
            if kind != FieldKind::Checkbox && !label.is_empty() {
                Label { html_for: name.clone(), "{label}" }
            }
            {control}
            if let Some(message) = error {
                p { id: "{error_id}", class: "form-field-error", role: "alert", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn input_types_follow_kind() {
        assert_eq!(FieldKind::Input.input_type(), "text");
        assert_eq!(FieldKind::PhoneInput.input_type(), "tel");
        assert_eq!(FieldKind::DatePicker.input_type(), "date");
        assert_eq!(FieldKind::default(), FieldKind::Input);
    }

    #[test]
    fn text_field_renders_label_value_and_placeholder() {
        let html = dioxus_ssr::render_element(rsx! {
            FormField {
                name: "name",
                label: "Full name",
                placeholder: "Mihail Ternovetchii",
                value: "Jane Doe",
            }
        });

        assert!(html.contains("Full name"), "{html}");
        assert!(html.contains(r#"value="Jane Doe""#), "{html}");
        assert!(html.contains(r#"placeholder="Mihail Ternovetchii""#), "{html}");
        assert!(html.contains(r#"type="text""#), "{html}");
        assert!(!html.contains("form-field-error"), "{html}");
    }

    #[test]
    fn error_is_rendered_as_alert() {
        let html = dioxus_ssr::render_element(rsx! {
            FormField {
                name: "email",
                label: "Email",
                value: "jane@",
                error: "Invalid email address".to_string(),
            }
        });

        assert!(html.contains(r#"role="alert""#), "{html}");
        assert!(html.contains("Invalid email address"), "{html}");
        assert!(html.contains(r#"data-invalid="true""#), "{html}");
    }

    #[test]
    fn phone_field_uses_tel_input() {
        let html = dioxus_ssr::render_element(rsx! {
            FormField {
                name: "phone",
                kind: FieldKind::PhoneInput,
                label: "Phone Number",
                placeholder: "0 (22) 00-80-00",
            }
        });

        assert!(html.contains(r#"type="tel""#), "{html}");
    }

    #[test]
    fn textarea_field_renders_textarea() {
        let html = dioxus_ssr::render_element(rsx! {
            FormField { name: "notes", kind: FieldKind::Textarea, label: "Notes" }
        });

        assert!(html.contains("<textarea"), "{html}");
    }

    #[test]
    fn select_field_renders_placeholder_and_options() {
        let html = dioxus_ssr::render_element(rsx! {
            FormField {
                name: "doctor",
                kind: FieldKind::Select,
                label: "Doctor",
                placeholder: "Select a doctor",
                option { value: "green", "Dr. Green" }
            }
        });

        assert!(html.contains("<select"), "{html}");
        assert!(html.contains("Select a doctor"), "{html}");
        assert!(html.contains("Dr. Green"), "{html}");
    }

    #[test]
    fn skeleton_field_is_inert() {
        let html = dioxus_ssr::render_element(rsx! {
            FormField { name: "pending", kind: FieldKind::Skeleton }
        });

        assert!(html.contains("skeleton"), "{html}");
        assert!(!html.contains("<input"), "{html}");
    }
}
