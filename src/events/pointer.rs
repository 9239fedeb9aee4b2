use crate::app::AppHandle;
use crate::carousel_dom::CarouselDom;
use crate::constants::DRAG_CAPTURE_SLOP_PX;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Swipe handling on the carousel viewport. The strip follows the pointer
/// while it is down; release decides between a one-step move and a snap back.
pub fn wire_swipe(app: &AppHandle, strip: &CarouselDom) {
    wire_pointerdown(app, strip);
    wire_pointermove(app, strip);
    wire_pointerup(app, strip);
    wire_pointercancel(app, strip);
}

fn listen(target: &web::HtmlElement, event: &str, handler: impl FnMut(web::PointerEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(app: &AppHandle, strip: &CarouselDom) {
    let app = app.clone();
    listen(&strip.viewport, "pointerdown", move |ev| {
        let started = app.navigate(|c| c.begin_drag(ev.pointer_id(), ev.client_x() as f32));
        if !started {
            log::debug!("[carousel] ignoring extra pointer {}", ev.pointer_id());
        }
    });
}

// Capture only once the pointer has really moved, so plain taps still reach
// the chip's click handler.
fn wire_pointermove(app: &AppHandle, strip: &CarouselDom) {
    let app = app.clone();
    let viewport = strip.viewport.clone();
    listen(&strip.viewport, "pointermove", move |ev| {
        let id = ev.pointer_id();
        if !app.controller.borrow().carousel().is_dragging_with(id) {
            return;
        }
        let offset = app.navigate(|c| {
            c.move_drag(id, ev.client_x() as f32);
            c.carousel().drag_offset()
        });
        if offset.abs() > DRAG_CAPTURE_SLOP_PX && !viewport.has_pointer_capture(id) {
            _ = viewport.set_pointer_capture(id);
        }
    });
}

fn wire_pointerup(app: &AppHandle, strip: &CarouselDom) {
    let app = app.clone();
    let viewport = strip.viewport.clone();
    listen(&strip.viewport, "pointerup", move |ev| {
        let id = ev.pointer_id();
        if !app.controller.borrow().carousel().is_dragging_with(id) {
            return;
        }
        if viewport.has_pointer_capture(id) {
            _ = viewport.release_pointer_capture(id);
        }
        if app.navigate(|c| c.end_drag(id)) {
            log::info!("[carousel] swipe -> {}", app.controller.borrow().selected());
        }
    });
}

fn wire_pointercancel(app: &AppHandle, strip: &CarouselDom) {
    let app = app.clone();
    listen(&strip.viewport, "pointercancel", move |ev| {
        app.navigate(|c| c.cancel_drag(ev.pointer_id()));
    });
}
