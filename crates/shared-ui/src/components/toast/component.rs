use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const DEFAULT_DURATION_MS: u32 = 4_000;

/// Visual category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    fn class(self) -> &'static str {
        match self {
            ToastType::Success => "toast-success",
            ToastType::Error => "toast-error",
            ToastType::Info => "toast-info",
        }
    }
}

/// Per-toast display options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    duration_ms: u32,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    /// Override how long the toast stays on screen.
    pub fn duration_ms(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ToastItem {
    id: u64,
    message: String,
    kind: ToastType,
    duration_ms: u32,
}

impl ToastItem {
    fn css_class(&self) -> String {
        format!("toast {}", self.kind.class())
    }
}

/// Handle for emitting fire-and-forget toasts. Cheap to copy into event
/// handlers; obtained via [`use_toast`] under a [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<ToastItem>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.push(ToastType::Success, message, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.push(ToastType::Error, message, options);
    }

    pub fn info(&self, message: String, options: ToastOptions) {
        self.push(ToastType::Info, message, options);
    }

    fn push(&self, kind: ToastType, message: String, options: ToastOptions) {
        let mut items = self.items;
        let mut next_id = self.next_id;

        let id = next_id();
        next_id.set(id + 1);

        items.write().push(ToastItem {
            id,
            message,
            kind,
            duration_ms: options.duration_ms,
        });

        // Auto-dismiss after the configured duration. The task is scoped
        // to the provider and dies with it.
        spawn(async move {
            TimeoutFuture::new(options.duration_ms).await;
            items.write().retain(|toast| toast.id != id);
        });
    }
}

/// Access the toast handle provided by the nearest [`ToastProvider`].
pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

/// Provides the [`Toasts`] context and renders the stacked toast region
/// above `children`.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut items = use_signal(Vec::<ToastItem>::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| Toasts { items, next_id });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        {children}
        div { class: "toast-region", aria_live: "polite",
            for toast in items() {
                ToastView {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_dismiss: move |id: u64| {
                        items.write().retain(|t| t.id != id);
                    },
                }
            }
        }
    }
}

#[component]
fn ToastView(toast: ToastItem, on_dismiss: EventHandler<u64>) -> Element {
    let id = toast.id;

    rsx! {
        div { class: toast.css_class(),
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-dismiss",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(id),
                "\u{00d7}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn options_default_to_four_seconds() {
        assert_eq!(ToastOptions::new().duration_ms, 4_000);
        assert_eq!(ToastOptions::default(), ToastOptions::new());
    }

    #[test]
    fn options_duration_is_overridable() {
        assert_eq!(ToastOptions::new().duration_ms(750).duration_ms, 750);
    }

    #[test]
    fn toast_classes_follow_kind() {
        let toast = ToastItem {
            id: 0,
            message: "saved".into(),
            kind: ToastType::Success,
            duration_ms: 4_000,
        };
        assert_eq!(toast.css_class(), "toast toast-success");
        assert_eq!(ToastType::Error.class(), "toast-error");
        assert_eq!(ToastType::Info.class(), "toast-info");
    }

    fn harness() -> Element {
        rsx! {
            ToastProvider {
                p { "content" }
            }
        }
    }

    #[test]
    fn provider_renders_children_and_empty_region() {
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("<p>content</p>"), "html: {html}");
        assert!(html.contains("toast-region"), "html: {html}");
        assert!(!html.contains("toast-message"), "html: {html}");
    }
}
