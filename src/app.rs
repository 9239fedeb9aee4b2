use crate::carousel_dom::CarouselDom;
use crate::constants::{CANVAS_ID, PANEL_ID, STATUS_ID};
use crate::core::{
    resolve_index, CanvasOptions, ConfigPatch, ControllerConfig, InstantClock, PalettePatch,
    ParamError, ParamValue, PresetController, PresetRegistry, DEFAULT_TRANSITION_SECS,
};
use crate::storage::{LocalStorage, StatusAnnouncer};
use crate::{dom, events, frame, panel};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Controller plus the DOM strip that mirrors its carousel. Every navigation
/// path goes through `navigate` so the strip never lags the selection.
#[derive(Clone)]
pub struct AppHandle {
    pub controller: Rc<RefCell<PresetController>>,
    pub carousel: Option<CarouselDom>,
}

impl AppHandle {
    pub fn navigate<R>(&self, f: impl FnOnce(&mut PresetController) -> R) -> R {
        let out = f(&mut self.controller.borrow_mut());
        self.sync_carousel();
        out
    }

    pub fn sync_carousel(&self) {
        if let Some(c) = &self.carousel {
            c.sync(self.controller.borrow().carousel());
        }
    }
}

thread_local! {
    static APP: RefCell<Option<AppHandle>> = const { RefCell::new(None) };
}

fn with_app<R>(f: impl FnOnce(&AppHandle) -> R) -> Option<R> {
    APP.with(|app| app.borrow().as_ref().map(f))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("frost-canvas starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Programmatic navigation from JavaScript. Non-finite indices are ignored;
/// the duration defaults to 0.9 s and `0` applies immediately.
#[wasm_bindgen]
pub fn switch_to_preset(index: f64, duration_secs: Option<f64>) -> bool {
    with_app(|app| {
        let count = app.controller.borrow().registry().count();
        let Some(i) = resolve_index(index, count) else {
            log::warn!("[preset] ignoring invalid index {}", index);
            return false;
        };
        let duration = duration_secs.unwrap_or(DEFAULT_TRANSITION_SECS);
        app.navigate(|c| c.switch_to_preset(i as i64, duration))
    })
    .unwrap_or(false)
}

#[wasm_bindgen]
pub fn current_preset() -> Option<u32> {
    with_app(|app| app.controller.borrow().selected() as u32)
}

/// Direct parameter write: one value for scalars, three for vectors.
#[wasm_bindgen]
pub fn set_param(name: &str, values: Vec<f32>) -> Result<(), JsValue> {
    let value = match values.as_slice() {
        [s] => ParamValue::Scalar(*s),
        [x, y, z] => ParamValue::Vector(Vec3::new(*x, *y, *z)),
        _ => return Err(JsValue::from_str("expected 1 or 3 values")),
    };
    with_app(|app| {
        app.controller
            .borrow_mut()
            .set_parameter_override(name, value)
            .map_err(to_js)
    })
    .unwrap_or_else(|| Err(JsValue::from_str("not initialised")))
}

/// Replaces any of the four palette terms; omitted terms are kept.
#[wasm_bindgen]
pub fn set_palette(
    a: Option<Vec<f32>>,
    b: Option<Vec<f32>>,
    c: Option<Vec<f32>>,
    d: Option<Vec<f32>>,
) -> Result<(), JsValue> {
    let patch = PalettePatch::from_slices(a.as_deref(), b.as_deref(), c.as_deref(), d.as_deref())
        .map_err(to_js)?;
    with_app(|app| app.controller.borrow_mut().set_palette(patch).map_err(to_js))
        .unwrap_or_else(|| Err(JsValue::from_str("not initialised")))
}

/// Partial update of the scalar shader settings; `undefined` keeps a value.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn set_config(
    noise_scale: Option<f32>,
    noise_strength: Option<f32>,
    animation_speed: Option<f32>,
    grain_intensity: Option<f32>,
    vignette_strength: Option<f32>,
    domain_warp_strength: Option<f32>,
    turbulence: Option<f32>,
    gradient_angle: Option<f32>,
    color_spread: Option<f32>,
    flow_speed: Option<f32>,
) -> Result<(), JsValue> {
    let patch = ConfigPatch {
        noise_scale,
        noise_strength,
        animation_speed,
        grain_intensity,
        vignette_strength,
        domain_warp_strength,
        turbulence,
        gradient_angle,
        color_spread,
        flow_speed,
    };
    with_app(|app| app.controller.borrow_mut().set_config(patch).map_err(to_js))
        .unwrap_or_else(|| Err(JsValue::from_str("not initialised")))
}

/// Live palette as twelve floats: `a`, `b`, `c`, `d`. Empty before init.
#[wasm_bindgen]
pub fn palette() -> Vec<f32> {
    with_app(|app| app.controller.borrow().palette().to_array().to_vec()).unwrap_or_default()
}

/// Live scalar settings in `set_config` argument order. Empty before init.
#[wasm_bindgen]
pub fn config() -> Vec<f32> {
    with_app(|app| app.controller.borrow().config().to_array().to_vec()).unwrap_or_default()
}

fn to_js(e: ParamError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, app: &AppHandle) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let app = app.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        let layout = dom::read_carousel_layout();
        app.navigate(|c| c.set_layout(layout));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn build_controller(
    document: &web::Document,
    options: &CanvasOptions,
) -> anyhow::Result<PresetController> {
    let registry = PresetRegistry::builtin()?;
    let config = ControllerConfig {
        initial_preset: options.initial_preset,
        // static backgrounds have no frames to blend across
        transition_secs: if options.static_mode {
            0.0
        } else {
            DEFAULT_TRANSITION_SECS
        },
        layout: dom::read_carousel_layout(),
        ..ControllerConfig::default()
    };
    Ok(PresetController::new(
        registry,
        config,
        Box::new(InstantClock::new()),
        Box::new(LocalStorage),
        Box::new(StatusAnnouncer::new(document, STATUS_ID)),
    ))
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let options = dom::canvas_options(&canvas);
    log::info!("[init] {:?}", options);

    let controller = Rc::new(RefCell::new(build_controller(&document, &options)?));
    let carousel = if options.show_presets {
        CarouselDom::find(&document)
    } else {
        None
    };
    let app = AppHandle {
        controller: controller.clone(),
        carousel,
    };

    if let Some(strip) = &app.carousel {
        let chips = {
            let ctrl = controller.borrow();
            strip.render_chips(&document, ctrl.registry())?
        };
        events::wire_chips(&app, chips);
        events::wire_nav_buttons(&document, &app);
        events::wire_swipe(&app, strip);
        app.sync_carousel();
    }
    events::wire_global_keydown(&app);

    if options.auto_resize {
        wire_canvas_resize(&canvas, &app);
    } else {
        dom::sync_canvas_backing_size(&canvas);
    }

    let panel = if options.show_gui {
        panel::TuningPanel::build(&document, PANEL_ID, &controller)
            .map_err(|e| log::warn!("[panel] {:?}", e))
            .ok()
    } else {
        None
    };

    APP.with(|slot| *slot.borrow_mut() = Some(app.clone()));

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        gpu,
        canvas,
        panel,
        static_mode: options.static_mode,
        last_size: (0, 0),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
