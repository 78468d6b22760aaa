use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::i18n::{t, use_lang, TextKey};
use crate::routes::Route;

/// Sign-in view, the navigation target of the recovery page's back
/// link. Credential handling lives in the main LearnVastora app.
#[component]
pub fn SignIn() -> Element {
    let lang = use_lang();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { {t(lang(), TextKey::SignInTitle)} }
                    CardDescription { {t(lang(), TextKey::SignInSubtitle)} }
                }
                CardContent {
                    p { class: "auth-link",
                        Link { to: Route::ForgotPassword {}, class: "back-link",
                            {t(lang(), TextKey::ForgotLink)}
                        }
                    }
                }
            }
        }
    }
}
