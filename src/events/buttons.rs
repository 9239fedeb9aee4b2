use crate::app::AppHandle;
use crate::constants::{NEXT_BUTTON_ID, PREV_BUTTON_ID};
use crate::core::is_activation_key;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Prev/next buttons step the carousel and move focus to the new chip.
pub fn wire_nav_buttons(document: &web::Document, app: &AppHandle) {
    for (id, delta) in [(PREV_BUTTON_ID, -1_i64), (NEXT_BUTTON_ID, 1)] {
        let app = app.clone();
        dom::add_click_listener(document, id, move || {
            app.navigate(|c| c.step(delta));
            let idx = app.controller.borrow().selected();
            if let Some(strip) = &app.carousel {
                strip.focus_chip(idx);
            }
        });
    }
}

/// Click selects a chip; Enter/Space on a focused chip acts as a click.
pub fn wire_chips(app: &AppHandle, chips: Vec<web::HtmlElement>) {
    for (i, chip) in chips.into_iter().enumerate() {
        let app_click = app.clone();
        let click = Closure::wrap(Box::new(move || {
            app_click.navigate(|c| c.select(i));
            if let Some(strip) = &app_click.carousel {
                strip.focus_chip(i);
            }
        }) as Box<dyn FnMut()>);
        _ = chip.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();

        let chip_for_key = chip.clone();
        let key = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if is_activation_key(&ev.key()) {
                ev.prevent_default();
                chip_for_key.click();
            }
        }) as Box<dyn FnMut(_)>);
        _ = chip.add_event_listener_with_callback("keydown", key.as_ref().unchecked_ref());
        key.forget();
    }
}
