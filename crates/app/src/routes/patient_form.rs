use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMail, LdUser};
use dioxus_free_icons::Icon;
use shared_types::IntakeField;
use shared_ui::{FieldKind, Form, FormField, SubmitButton};

use crate::intake::{
    IntakeFormState, IntakeSubmission, RouterNavigator, ServerPatientService, SubmitOutcome,
};

/// First step of patient onboarding: name, email and phone.
#[component]
pub fn PatientForm() -> Element {
    let mut form = use_signal(IntakeFormState::default);
    let loading = use_signal(|| false);

    let mut update = move |field: IntakeField, value: String| form.write().update(field, value);
    let mut check = move |field: IntakeField| form.write().blur(field);

    let handle_submit = move |_evt: FormEvent| {
        spawn(async move {
            form.write().notice = None;
            let current = form.read().draft.clone();
            let submission = IntakeSubmission::new(ServerPatientService, RouterNavigator, loading);

            let outcome = submission.submit(&current).await;
            // The page is being replaced after a redirect.
            if !matches!(outcome, SubmitOutcome::Redirected(_)) {
                form.write().apply(outcome);
            }
        });
    };

    let error_for = move |field: IntakeField| form.read().error(field);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./patient_form.css") }

        Form { class: "patient-form", onsubmit: handle_submit,
            section { class: "patient-form-intro",
                h1 { class: "header", "Hi There 👋" }
                p { class: "patient-form-subtitle", "Schedule your first appointment." }
            }

            if let Some(message) = form.read().notice.clone() {
                div { class: "patient-form-notice", role: "alert", "{message}" }
            }

            FormField {
                name: "name",
                label: "Full name",
                placeholder: "Mihail Ternovetchii",
                icon: rsx! { Icon::<LdUser> { icon: LdUser, width: 18, height: 18 } },
                value: form.read().draft.name.clone(),
                error: error_for(IntakeField::Name),
                on_input: move |e: FormEvent| update(IntakeField::Name, e.value()),
                on_blur: move |_: FocusEvent| check(IntakeField::Name),
            }

            FormField {
                name: "email",
                label: "Email",
                placeholder: "ternovetchii.2002@gmail.com",
                icon: rsx! { Icon::<LdMail> { icon: LdMail, width: 18, height: 18 } },
                value: form.read().draft.email.clone(),
                error: error_for(IntakeField::Email),
                on_input: move |e: FormEvent| update(IntakeField::Email, e.value()),
                on_blur: move |_: FocusEvent| check(IntakeField::Email),
            }

            FormField {
                name: "phone",
                kind: FieldKind::PhoneInput,
                label: "Phone Number",
                placeholder: "0 (22) 00-80-00",
                value: form.read().draft.phone.clone(),
                error: error_for(IntakeField::Phone),
                on_input: move |e: FormEvent| update(IntakeField::Phone, e.value()),
                on_blur: move |_: FocusEvent| check(IntakeField::Phone),
            }

            SubmitButton { loading: loading(), "Get Started" }
        }
    }
}
