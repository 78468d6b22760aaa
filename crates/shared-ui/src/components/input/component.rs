use dioxus::prelude::*;

use crate::components::merge_attributes;

/// Styled text input. Validation stays native: callers opt into
/// `required` and an HTML `input_type` such as `email`.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                required: required,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            div { class: "input-focus-border" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness() -> Element {
        rsx! {
            Input {
                input_type: "email",
                id: "email",
                placeholder: "user@example.com",
                required: true,
            }
        }
    }

    #[test]
    fn input_renders_native_validation_attributes() {
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"type="email""#), "html: {html}");
        assert!(html.contains("required"), "html: {html}");
        assert!(html.contains(r#"placeholder="user@example.com""#));
        assert!(html.contains(r#"id="email""#));
    }

    #[test]
    fn input_is_enabled_by_default() {
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("disabled"), "html: {html}");
    }
}
