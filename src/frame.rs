use crate::core::{GradientUniforms, PresetController};
use crate::panel::TuningPanel;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub controller: Rc<RefCell<PresetController>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub panel: Option<TuningPanel>,
    /// Draw only on change, with shader time pinned at zero.
    pub static_mode: bool,
    pub last_size: (u32, u32),
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let (now, dirty, values) = {
            let mut ctrl = self.controller.borrow_mut();
            let now = ctrl.now();
            let dirty = ctrl.poll(now);
            (now, dirty, ctrl.current_values().clone())
        };
        if dirty {
            if let Some(panel) = &self.panel {
                panel.refresh(&values);
            }
        }

        let size = (self.canvas.width(), self.canvas.height());
        let resized = size != self.last_size;
        self.last_size = size;
        if self.static_mode && !dirty && !resized {
            return;
        }

        let Some(g) = &mut self.gpu else {
            return;
        };
        g.resize_if_needed(size.0, size.1);
        let (w, h) = g.size();
        let time = if self.static_mode { 0.0 } else { now as f32 };
        let uniforms = GradientUniforms::pack(&values, time, [w as f32, h as f32]);
        match g.render(&uniforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost, reconfiguring");
                g.reconfigure();
                // force a redraw next frame even in static mode
                self.last_size = (0, 0);
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
