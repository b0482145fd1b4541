//! Transient toast notifications.
//!
//! A toast is a styled `div` appended to the document body and removed again
//! after a few seconds. Destructive toasts are red. Title and description are
//! set as text content, never as HTML, since descriptions can carry messages
//! coming back from the store.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// How long a toast stays on screen, in milliseconds.
const TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Sucesso!".to_string(),
            description: description.into(),
            severity: Severity::Normal,
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    /// Displays the toast at the bottom of the screen.
    pub fn show(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let (Some(toast), Some(body)) = (self.build(&document), document.body()) else {
            return;
        };

        if body.append_child(&toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                if let Some(parent) = toast.parent_node() {
                    parent.remove_child(&toast).ok();
                }
            });
        }
    }

    fn build(&self, document: &Document) -> Option<HtmlElement> {
        let toast: HtmlElement = document.create_element("div").ok()?.unchecked_into();
        toast.set_attribute("role", "status").ok();

        let title = document.create_element("strong").ok()?;
        title.set_text_content(Some(&self.title));
        let description = document.create_element("div").ok()?;
        description.set_text_content(Some(&self.description));
        toast.append_child(&title).ok()?;
        toast.append_child(&description).ok()?;

        let background = match self.severity {
            Severity::Normal => "rgba(0, 0, 0, 0.85)",
            Severity::Destructive => "#d32f2f",
        };

        let style = toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("left", "50%").ok();
        style.set_property("transform", "translateX(-50%)").ok();
        style.set_property("background", background).ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "10px 20px").ok();
        style.set_property("border-radius", "4px").ok();
        style.set_property("z-index", "10000").ok();
        style.set_property("font-family", "Arial, sans-serif").ok();
        style.set_property("min-width", "280px").ok();

        Some(toast)
    }
}
