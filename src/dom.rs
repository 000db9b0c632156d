use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Inner size of the window in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

pub fn create_element(
    document: &web::Document,
    tag: &str,
    class: &str,
    style: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow!("create <{tag}>: {:?}", e))?;
    _ = el.set_attribute("class", class);
    _ = el.set_attribute("style", style);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("<{tag}> is not an HtmlElement: {:?}", e))
}

pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow!("append_child: {:?}", e))
}

/// Hides the system cursor on `<body>` and restores the previous value on drop.
pub struct CursorGuard {
    body: web::HtmlElement,
    previous: String,
}

impl CursorGuard {
    pub fn hide(document: &web::Document) -> Option<Self> {
        let body = document.body()?;
        let style = body.style();
        let previous = style.get_property_value("cursor").unwrap_or_default();
        _ = style.set_property("cursor", "none");
        Some(Self { body, previous })
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let style = self.body.style();
        if self.previous.is_empty() {
            _ = style.remove_property("cursor");
        } else {
            _ = style.set_property("cursor", &self.previous);
        }
    }
}
