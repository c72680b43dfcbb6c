//! Theme attribute on the document element.
//!
//! TRADE-OFFS
//! ==========
//! Applying the theme is browser-only behavior; SSR paths no-op to keep
//! server rendering deterministic.

/// Attribute the stylesheet keys light/dark colors on.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

/// Set `data-bs-theme` on `<html>` to `value`.
pub fn apply(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute(THEME_ATTRIBUTE, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}
