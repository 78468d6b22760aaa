use dioxus::prelude::*;

use crate::components::merge_attributes;

/// Form field label, associated to its control via `html_for`.
#[component]
pub fn Label(
    #[props(default)] html_for: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "label", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            r#for: "{html_for}",
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness() -> Element {
        rsx! {
            Label { html_for: "email", "Email" }
        }
    }

    #[test]
    fn label_targets_its_control() {
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"for="email""#), "html: {html}");
        assert!(html.contains(">Email<"), "html: {html}");
    }
}
