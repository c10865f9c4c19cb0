pub mod not_found;
pub mod patient_form;
pub mod patient_register;

use dioxus::prelude::*;

use not_found::NotFound;
use patient_form::PatientForm;
use patient_register::PatientRegister;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(PageShell)]
    #[route("/")]
    PatientForm {},
    #[route("/patients/:user_id/register")]
    PatientRegister { user_id: String },
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Two-column shell shared by the intake pages: content on the left,
/// artwork panel on the right.
#[component]
fn PageShell() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./page_shell.css") }
        div { class: "page-shell",
            main { class: "page-shell-content",
                div { class: "page-shell-inner",
                    Link { to: Route::PatientForm {}, class: "page-shell-brand", "Patient Portal" }
                    Outlet::<Route> {}
                    p { class: "page-shell-footer", "© Patient Portal" }
                }
            }
            aside { class: "page-shell-art", "aria-hidden": "true" }
        }
    }
}
