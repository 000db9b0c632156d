use crate::constants::{OVERLAY_HINT, OVERLAY_TITLE};
use crate::dom;
use crate::style;
use web_sys as web;

/// Build the static heading + hint shown above everything else.
pub fn build(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let el = dom::create_element(document, "div", "gun-cursor-overlay", style::OVERLAY_STYLE)?;
    el.set_inner_html(&format!(
        "<h1 style='margin:0 0 12px'>{}</h1><p style='margin:0'>{}</p>",
        OVERLAY_TITLE, OVERLAY_HINT
    ));
    Ok(el)
}
