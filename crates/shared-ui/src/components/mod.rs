pub mod card;
pub mod input;
pub mod label;
pub mod toast;

use dioxus::prelude::*;
use dioxus::core::AttributeValue;

/// Flatten attribute groups into one list, collapsing every `class`
/// attribute into a single space-joined value so component base classes
/// compose with caller-supplied ones.
pub(crate) fn merge_attributes(groups: Vec<Vec<Attribute>>) -> Vec<Attribute> {
    let mut merged: Vec<Attribute> = Vec::new();
    let mut classes: Vec<String> = Vec::new();

    for attr in groups.into_iter().flatten() {
        if attr.name == "class" {
            if let AttributeValue::Text(ref class) = attr.value {
                if !class.is_empty() {
                    classes.push(class.clone());
                }
                continue;
            }
        }
        merged.push(attr);
    }

    if !classes.is_empty() {
        merged.push(Attribute::new("class", classes.join(" "), None, false));
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn class_of(attrs: &[Attribute]) -> Option<String> {
        attrs.iter().find(|a| a.name == "class").and_then(|a| {
            if let AttributeValue::Text(ref s) = a.value {
                Some(s.clone())
            } else {
                None
            }
        })
    }

    #[test]
    fn base_class_survives_alone() {
        let merged = merge_attributes(vec![
            vec![Attribute::new("class", "card", None, false)],
            vec![],
        ]);
        assert_eq!(class_of(&merged), Some("card".to_string()));
    }

    #[test]
    fn caller_class_appends_after_base() {
        let merged = merge_attributes(vec![
            vec![Attribute::new("class", "card", None, false)],
            vec![Attribute::new("class", "auth-card", None, false)],
        ]);
        assert_eq!(class_of(&merged), Some("card auth-card".to_string()));
    }

    #[test]
    fn empty_caller_class_is_ignored() {
        let merged = merge_attributes(vec![
            vec![Attribute::new("class", "card", None, false)],
            vec![Attribute::new("class", "", None, false)],
        ]);
        assert_eq!(class_of(&merged), Some("card".to_string()));
    }

    #[test]
    fn non_class_attributes_pass_through() {
        let merged = merge_attributes(vec![
            vec![Attribute::new("class", "input", None, false)],
            vec![Attribute::new("id", "email", None, false)],
        ]);
        assert!(merged.iter().any(|a| a.name == "id"));
        assert_eq!(class_of(&merged), Some("input".to_string()));
    }
}
