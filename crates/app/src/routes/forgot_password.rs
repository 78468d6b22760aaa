use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowRight;
use dioxus_free_icons::Icon;
use shared_ui::{
    use_toast, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
    Label, ToastOptions,
};

use crate::components::LanguagePicker;
use crate::i18n::{t, use_lang, TextKey};
use crate::reset;
use crate::routes::Route;

/// Password recovery page. Lets a user request a reset link by email.
///
/// Submission is atomic from the page's point of view: the trigger is
/// disabled for exactly one Idle → Submitting → Idle cycle, and the
/// handler re-enables it on every exit path.
#[component]
pub fn ForgotPassword() -> Element {
    let lang = use_lang();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut visible = use_signal(|| false);

    // One-shot entrance transition after first mount.
    use_effect(move || visible.set(true));

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);

        match reset::request_reset(&email()).await {
            Ok(()) => {
                toast.success(
                    t(lang(), TextKey::ResetSuccess).to_string(),
                    ToastOptions::new(),
                );
                email.set(String::new());
            }
            Err(err) => {
                tracing::warn!(%err, "password reset request failed");
                toast.error(
                    t(lang(), TextKey::ResetError).to_string(),
                    ToastOptions::new(),
                );
            }
        }

        // Both branches land here: the trigger re-enables exactly once
        // per submit cycle.
        submitting.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page forgot-page",
            div { class: "animated-background",
                div { class: "floating-shapes",
                    for n in 1..=5 {
                        div { class: "shape shape-{n}" }
                    }
                }
            }

            LanguagePicker {}

            div { class: "forgot-layout",
                section { class: "hero-section",
                    div { class: "hero-content",
                        div { class: "hero-icon", "🔐" }
                        h1 { class: "hero-title", {t(lang(), TextKey::HeroTitle)} }
                        p { class: "hero-subtitle", {t(lang(), TextKey::HeroSubtitle)} }
                        div { class: "hero-features",
                            div { class: "feature",
                                div { class: "feature-icon", "📧" }
                                div { class: "feature-text", {t(lang(), TextKey::FeatureEmail)} }
                            }
                            div { class: "feature",
                                div { class: "feature-icon", "⚡" }
                                div { class: "feature-text", {t(lang(), TextKey::FeatureSpeed)} }
                            }
                            div { class: "feature",
                                div { class: "feature-icon", "🔒" }
                                div { class: "feature-text", {t(lang(), TextKey::FeatureSecurity)} }
                            }
                        }
                    }
                }

                section { class: "form-section",
                    div { class: if visible() { "form-container visible" } else { "form-container" },
                        div { class: "brand-logo",
                            span { class: "logo-icon", "🎓" }
                            span { class: "logo-text", "LearnVastora" }
                        }

                        Card { class: "auth-card",
                            CardHeader {
                                CardTitle { {t(lang(), TextKey::FormTitle)} }
                                CardDescription { {t(lang(), TextKey::FormSubtitle)} }
                            }

                            CardContent {
                                form { onsubmit: handle_submit,
                                    div { class: "auth-field",
                                        Label { html_for: "email", {t(lang(), TextKey::EmailLabel)} }
                                        div { class: "input-icon-wrapper",
                                            span { class: "input-icon", "📧" }
                                            Input {
                                                input_type: "email",
                                                id: "email",
                                                placeholder: t(lang(), TextKey::EmailPlaceholder).to_string(),
                                                value: email(),
                                                required: true,
                                                on_input: move |e: FormEvent| email.set(e.value()),
                                            }
                                        }
                                    }
                                    button {
                                        r#type: "submit",
                                        class: "auth-submit button",
                                        disabled: submitting(),
                                        if submitting() {
                                            span { class: "button-spinner", aria_label: "Loading" }
                                        } else {
                                            span { {t(lang(), TextKey::SubmitButton)} }
                                            span { class: "button-arrow",
                                                Icon::<LdArrowRight> { icon: LdArrowRight, width: 18, height: 18 }
                                            }
                                        }
                                    }
                                }
                            }

                            CardFooter {
                                p { class: "auth-link",
                                    span { class: "back-text", {t(lang(), TextKey::BackText)} }
                                    " "
                                    Link { to: Route::SignIn {}, class: "back-link",
                                        {t(lang(), TextKey::BackLink)}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
