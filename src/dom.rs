use crate::constants::{GAP_VAR, ITEM_WIDTH_VAR, MAX_PIXEL_RATIO};
use crate::core::{CanvasOptions, CarouselLayout};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Reads a `px` custom property from `:root`.
pub fn root_css_px(name: &str) -> Option<f32> {
    let window = web::window()?;
    let root = window.document()?.document_element()?;
    let style = window.get_computed_style(&root).ok()??;
    let raw = style.get_property_value(name).ok()?;
    raw.trim().trim_end_matches("px").trim().parse::<f32>().ok()
}

/// Chip dimensions from the stylesheet, with the built-in fallbacks.
pub fn read_carousel_layout() -> CarouselLayout {
    let d = CarouselLayout::default();
    CarouselLayout::new(
        root_css_px(ITEM_WIDTH_VAR).unwrap_or(d.item_width),
        root_css_px(GAP_VAR).unwrap_or(d.gap),
    )
}

pub fn canvas_options(canvas: &web::HtmlCanvasElement) -> CanvasOptions {
    CanvasOptions::from_attributes(|name| canvas.get_attribute(name))
}

/// Focus the user is typing into, if any.
pub fn text_entry_has_focus(document: &web::Document) -> bool {
    document
        .active_element()
        .map(|el| crate::core::is_text_entry_tag(&el.tag_name()))
        .unwrap_or(false)
}
