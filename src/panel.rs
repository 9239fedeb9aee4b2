//! Optional slider panel for live tuning, driven by the binding table.

use crate::core::{default_bindings, ControlBinding, ParamSet, PresetController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct TuningPanel {
    sliders: Vec<(ControlBinding, web::HtmlInputElement)>,
}

impl TuningPanel {
    /// Builds one range input per binding inside `#container_id`, creating
    /// the container on `<body>` when the page has none.
    pub fn build(
        document: &web::Document,
        container_id: &str,
        controller: &Rc<RefCell<PresetController>>,
    ) -> anyhow::Result<Self> {
        let container = match document.get_element_by_id(container_id) {
            Some(el) => el,
            None => {
                let el = create(document, "div")?;
                el.set_id(container_id);
                let body = document
                    .body()
                    .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
                body.append_child(&el)
                    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
                el
            }
        };

        let mut sliders = Vec::new();
        let mut folder: Option<(&str, web::Element)> = None;
        let values = controller.borrow().current_values().clone();
        for binding in default_bindings() {
            let group = match &folder {
                Some((name, el)) if *name == binding.folder => el.clone(),
                _ => {
                    let fs = create(document, "fieldset")?;
                    let legend = create(document, "legend")?;
                    legend.set_text_content(Some(binding.folder));
                    append(&fs, &legend)?;
                    append(&container, &fs)?;
                    folder = Some((binding.folder, fs.clone()));
                    fs
                }
            };

            let label = create(document, "label")?;
            label.set_text_content(Some(binding.label));
            let input = create(document, "input")?
                .dyn_into::<web::HtmlInputElement>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            input.set_type("range");
            input.set_id(&binding.id());
            input.set_min(&binding.min.to_string());
            input.set_max(&binding.max.to_string());
            input.set_step(&binding.step.to_string());
            if let Some(v) = binding.read(&values) {
                input.set_value(&v.to_string());
            }
            append(&label, &input)?;
            append(&group, &label)?;

            let ctrl = controller.clone();
            let input_for_cb = input.clone();
            let on_input = Closure::wrap(Box::new(move || {
                let raw = input_for_cb.value_as_number() as f32;
                if let Err(e) = binding.write(&mut ctrl.borrow_mut(), raw) {
                    log::warn!("[panel] {}", e);
                }
            }) as Box<dyn FnMut()>);
            _ = input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref());
            on_input.forget();

            sliders.push((binding, input));
        }
        log::info!("[panel] {} controls", sliders.len());
        Ok(Self { sliders })
    }

    /// Pulls slider positions from the store (after preset transitions).
    pub fn refresh(&self, values: &ParamSet) {
        for (binding, input) in &self.sliders {
            if let Some(v) = binding.read(values) {
                input.set_value(&v.to_string());
            }
        }
    }
}

fn create(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}
