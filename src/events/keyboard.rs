use crate::app::AppHandle;
use crate::core::nav_delta_for_key;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &AppHandle) {
    if let Some(doc) = dom::window_document() {
        if dom::text_entry_has_focus(&doc) {
            return;
        }
    }
    let Some(delta) = nav_delta_for_key(&ev.key()) else {
        return;
    };
    ev.prevent_default();
    app.navigate(|c| c.step(delta));
    let idx = app.controller.borrow().selected();
    if let Some(strip) = &app.carousel {
        strip.focus_chip(idx);
    }
    log::info!("[keys] preset {}", idx);
}

pub fn wire_global_keydown(app: &AppHandle) {
    if let Some(window) = web::window() {
        let app = app.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &app);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
