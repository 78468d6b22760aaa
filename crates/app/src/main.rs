use dioxus::prelude::*;

mod components;
mod i18n;
mod reset;
mod routes;
mod storage;

use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        i18n::I18nProvider {
            shared_ui::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_app() -> String {
        let mut dom = VirtualDom::new(App);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn recovery_page_is_the_index_route() {
        let html = render_app();
        assert!(html.contains("forgot-page"), "html: {html}");
        assert!(html.contains(r#"type="email""#), "html: {html}");
        assert!(html.contains("LearnVastora"), "html: {html}");
    }

    #[test]
    fn first_mount_shows_default_language_and_glyph() {
        let html = render_app();
        assert!(html.contains(">EN<"), "html: {html}");
        assert!(html.contains("🇺🇸"), "html: {html}");
        assert!(html.contains("Send Reset Link"), "html: {html}");
    }

    #[test]
    fn language_menu_starts_closed() {
        let html = render_app();
        assert!(html.contains(r#"class="lang-menu""#), "html: {html}");
        assert!(!html.contains("lang-menu open"), "html: {html}");
    }

    #[test]
    fn every_supported_language_is_listed() {
        let html = render_app();
        for lang in crate::i18n::ALL_LANGS {
            assert!(
                html.contains(lang.native_name()),
                "missing menu option for {lang:?}"
            );
        }
    }

    #[test]
    fn entrance_transition_starts_hidden() {
        let html = render_app();
        assert!(html.contains(r#"class="form-container""#), "html: {html}");
        assert!(!html.contains("form-container visible"), "html: {html}");
    }

    #[test]
    fn submit_trigger_is_enabled_while_idle() {
        let html = render_app();
        assert!(!html.contains("disabled"), "html: {html}");
        assert!(!html.contains("button-spinner"), "html: {html}");
    }

    #[test]
    fn back_link_targets_the_sign_in_view() {
        let html = render_app();
        assert!(html.contains(r#"href="/signin""#), "html: {html}");
    }
}
