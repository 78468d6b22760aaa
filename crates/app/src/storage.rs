//! Durable client-side preference storage, backed by the browser's
//! localStorage and reached through `document::eval`.

use dioxus::prelude::*;

/// Storage key for the last selected interface language.
pub const LANGUAGE_KEY: &str = "selectedLanguage";

fn read_js(key: &str) -> String {
    format!(r#"try {{ return localStorage.getItem("{key}"); }} catch (e) {{ return null; }}"#)
}

fn write_js(key: &str, value: &str) -> String {
    format!(r#"try {{ localStorage.setItem("{key}", "{value}"); }} catch (e) {{}}"#)
}

/// Read a stored value. Returns `None` when the key is absent, the value
/// is empty, or storage is unavailable.
pub async fn load(key: &str) -> Option<String> {
    match document::eval(&read_js(key)).await {
        Ok(value) => value.as_str().map(str::to_string).filter(|v| !v.is_empty()),
        Err(_) => None,
    }
}

/// Persist a value. Fire-and-forget, like the write itself: a client
/// with storage disabled simply loses the preference on reload.
pub fn store(key: &str, value: &str) {
    document::eval(&write_js(key, value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_snippet_targets_local_storage_key() {
        let js = read_js(LANGUAGE_KEY);
        assert!(js.contains(r#"localStorage.getItem("selectedLanguage")"#));
    }

    #[test]
    fn write_snippet_stores_value_under_key() {
        let js = write_js(LANGUAGE_KEY, "fr");
        assert!(js.contains(r#"localStorage.setItem("selectedLanguage", "fr")"#));
    }

    #[test]
    fn snippets_swallow_storage_failures() {
        // Both paths must be wrapped so a sandboxed client cannot throw
        // back into the page.
        assert!(read_js(LANGUAGE_KEY).contains("try"));
        assert!(write_js(LANGUAGE_KEY, "de").contains("try"));
    }
}
