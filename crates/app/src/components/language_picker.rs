use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_free_icons::Icon;

use crate::i18n::{use_lang, Lang, ALL_LANGS};
use crate::storage;

/// Document-level listener reporting any pointer-down outside the
/// dropdown subtree. Scoped with an AbortController so teardown removes
/// exactly this listener and nothing else.
const OUTSIDE_POINTERDOWN_JS: &str = r#"
const controller = new AbortController();
document.addEventListener(
    "pointerdown",
    (event) => {
        if (!event.target.closest(".lang-dropdown")) {
            dioxus.send(true);
        }
    },
    { signal: controller.signal },
);
window.addEventListener("lang-dropdown-teardown", () => controller.abort(), { once: true });
"#;

const TEARDOWN_JS: &str = r#"window.dispatchEvent(new Event("lang-dropdown-teardown"));"#;

/// Language dropdown: flag + code trigger and a menu of all supported
/// languages. Selecting an option updates the shared language signal,
/// persists the code, and closes the menu; a pointer-down outside the
/// control closes the menu without touching the selection.
#[component]
pub fn LanguagePicker() -> Element {
    let mut lang = use_lang();
    let mut open = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            let mut outside = document::eval(OUTSIDE_POINTERDOWN_JS);
            while outside.recv::<bool>().await.is_ok() {
                open.set(false);
            }
        });
    });

    use_drop(|| {
        document::eval(TEARDOWN_JS);
    });

    let mut select_language = move |next: Lang| {
        tracing::debug!(code = next.code(), "language selected");
        lang.set(next);
        storage::store(storage::LANGUAGE_KEY, next.code());
        open.set(false);
    };

    rsx! {
        div { class: "language-switcher",
            div { class: "lang-dropdown",
                button {
                    r#type: "button",
                    class: "lang-trigger",
                    onclick: move |_| {
                        let next = !open();
                        open.set(next);
                    },
                    span { class: "lang-flag", {lang().flag()} }
                    span { class: "lang-code", {lang().code().to_uppercase()} }
                    span { class: if open() { "lang-arrow open" } else { "lang-arrow" },
                        Icon::<LdChevronDown> { icon: LdChevronDown, width: 12, height: 12 }
                    }
                }
                div { class: if open() { "lang-menu open" } else { "lang-menu" },
                    for option in ALL_LANGS.iter().copied() {
                        button {
                            r#type: "button",
                            class: if option == lang() { "lang-option active" } else { "lang-option" },
                            onclick: move |_| select_language(option),
                            span { class: "option-flag", {option.flag()} }
                            span { class: "option-name", {option.native_name()} }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outside_listener_is_scoped_to_the_dropdown_subtree() {
        assert!(OUTSIDE_POINTERDOWN_JS.contains(r#"closest(".lang-dropdown")"#));
        assert!(OUTSIDE_POINTERDOWN_JS.contains(r#""pointerdown""#));
    }

    #[test]
    fn listener_release_is_wired_to_the_teardown_event() {
        // The registration installs an abort hook for the event the
        // unmount snippet dispatches; the pair must reference the same
        // event name or the listener leaks.
        assert!(OUTSIDE_POINTERDOWN_JS.contains("lang-dropdown-teardown"));
        assert!(TEARDOWN_JS.contains("lang-dropdown-teardown"));
        assert!(OUTSIDE_POINTERDOWN_JS.contains("controller.abort()"));
    }
}
