use dioxus::prelude::*;

/// Landing page of the registration step, reached after the intake form
/// has created the patient's account.
#[component]
pub fn PatientRegister(user_id: String) -> Element {
    rsx! {
        section { class: "patient-register",
            h1 { class: "header", "Welcome 👋" }
            p { class: "patient-register-subtitle", "Let us know more about yourself." }
            p { class: "patient-register-id",
                "Patient reference: "
                code { "{user_id}" }
            }
        }
    }
}
