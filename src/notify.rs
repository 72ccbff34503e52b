//! Transient toast notifications.
//!
//! A notification is an `.alert` banner appended to the page's
//! `.flash-container` (created on first use). Success and info toasts
//! dismiss themselves; errors and warnings wait for the close button, which
//! the delegated handler in `dom::flash` takes care of.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dom::flash::AUTO_DISMISS_MS;
use crate::util::theme::Palette;

pub const CONTAINER_CLASS: &str = "flash-container";
pub const ICON_CLASS: &str = "material-icons";
pub const CLOSE_ICON: &str = "close";

/// Notification severity, mirrored in the `alert-<tag>` CSS class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl Severity {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }

    /// Strict parse of a lowercase tag.
    pub fn parse_tag(tag: &str) -> Option<Self> {
        match tag {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    /// Lenient parse: unknown tags read as [`Severity::Info`].
    pub fn from_tag(tag: &str) -> Self {
        Self::parse_tag(tag).unwrap_or_default()
    }

    /// Material icon name shown beside the message.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check_circle",
            Self::Error => "error",
            Self::Info | Self::Warning => "info",
        }
    }

    pub fn auto_dismiss(self) -> bool {
        matches!(self, Self::Success | Self::Info)
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Success => Palette::SUCCESS,
            Self::Error => Palette::ERROR,
            Self::Info => Palette::INFO,
            Self::Warning => Palette::WARNING,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What a toast shows and how long it lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    #[serde(default, rename = "type")]
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self { message: message.into(), severity }
    }

    pub fn class_name(&self) -> String {
        format!("alert alert-{}", self.severity.tag())
    }

    pub fn icon(&self) -> &'static str {
        self.severity.icon()
    }

    /// Auto-dismiss delay, or `None` when the toast waits for the user.
    pub fn dismiss_after_ms(&self) -> Option<u32> {
        self.severity.auto_dismiss().then_some(AUTO_DISMISS_MS)
    }
}

/// Show a toast for `message`.
pub fn show_notification(message: &str, severity: Severity) {
    show(&Notification::new(message, severity));
}

/// Show a prepared [`Notification`].
pub fn show(notification: &Notification) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = render(notification) {
            leptos::logging::warn!("failed to show notification: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("[{}] {}", notification.severity, notification.message);
    }
}

#[cfg(feature = "hydrate")]
fn render(notification: &Notification) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let document = crate::dom::document().ok_or("document unavailable")?;

    let root = document.create_element("div")?;
    root.set_class_name(&notification.class_name());

    let icon = document.create_element("span")?;
    icon.set_class_name(ICON_CLASS);
    icon.set_text_content(Some(notification.icon()));
    root.append_child(&icon)?;

    // Message goes in as text; it may echo user input.
    root.append_child(&document.create_text_node(&notification.message))?;

    let close = document.create_element("button")?;
    close.set_class_name("alert-close");
    let close_icon = document.create_element("span")?;
    close_icon.set_class_name(ICON_CLASS);
    close_icon.set_text_content(Some(CLOSE_ICON));
    close.append_child(&close_icon)?;
    root.append_child(&close)?;

    flash_container(&document)?.append_child(&root)?;

    if let Some(delay_ms) = notification.dismiss_after_ms() {
        crate::dom::flash::dismiss_after(root.unchecked_into(), delay_ms);
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn flash_container(document: &web_sys::Document) -> Result<web_sys::Element, wasm_bindgen::JsValue> {
    if let Some(existing) = document.query_selector(&format!(".{CONTAINER_CLASS}"))? {
        return Ok(existing);
    }
    let container = document.create_element("div")?;
    container.set_class_name(CONTAINER_CLASS);
    document
        .body()
        .ok_or("document has no body")?
        .append_child(&container)?;
    Ok(container)
}
