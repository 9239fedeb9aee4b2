use crate::constants::{ACTIVE_CLASS, CHIP_CLASS, SIDE_CLASS, TRACK_ID, VIEWPORT_SELECTOR};
use crate::core::{Carousel, ChipRole, Palette, PresetRegistry, TRACK_TRANSITION_CSS};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The chip strip (`#preset-track`) inside its clipping viewport.
#[derive(Clone)]
pub struct CarouselDom {
    pub track: web::HtmlElement,
    pub viewport: web::HtmlElement,
}

impl CarouselDom {
    pub fn find(document: &web::Document) -> Option<Self> {
        let track = document
            .get_element_by_id(TRACK_ID)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let viewport = document
            .query_selector(VIEWPORT_SELECTOR)
            .ok()??
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        Some(Self { track, viewport })
    }

    /// Replaces the track contents with one chip per preset. Returns the
    /// chips in preset order so the caller can attach listeners.
    pub fn render_chips(
        &self,
        document: &web::Document,
        registry: &PresetRegistry,
    ) -> anyhow::Result<Vec<web::HtmlElement>> {
        self.track.set_inner_html("");
        let mut chips = Vec::with_capacity(registry.count());
        for (i, preset) in registry.iter().enumerate() {
            let chip = create_html(document, "button")?;
            chip.set_class_name(CHIP_CLASS);
            set_attrs(
                &chip,
                &[
                    ("type", "button"),
                    ("role", "option"),
                    ("aria-selected", "false"),
                    ("data-index", &i.to_string()),
                ],
            );
            chip.set_title(preset.title());
            chip.set_tab_index(0);

            let pal = Palette::from_params(preset.values());
            let swatch = create_html(document, "span")?;
            swatch.set_class_name("preset-swatch");
            _ = swatch.style().set_property(
                "background",
                &format!(
                    "radial-gradient(circle at 30% 30%, rgba(255,255,255,0.06), transparent 12%), linear-gradient(135deg, {}, {} 55%, {})",
                    Palette::css_rgb(pal.a),
                    Palette::css_rgb(pal.b),
                    Palette::css_rgb(pal.c)
                ),
            );

            let meta = create_html(document, "div")?;
            meta.set_class_name("preset-meta");
            let name = create_html(document, "div")?;
            name.set_class_name("preset-name");
            name.set_text_content(Some(preset.name()));
            let desc = create_html(document, "div")?;
            desc.set_class_name("preset-desc");
            desc.set_text_content(preset.description());

            append(&meta, &name)?;
            append(&meta, &desc)?;
            append(&chip, &swatch)?;
            append(&chip, &meta)?;
            append(&self.track, &chip)?;
            chips.push(chip);
        }
        Ok(chips)
    }

    /// Moves the strip and refreshes chip highlight classes.
    pub fn sync(&self, carousel: &Carousel) {
        let pos = carousel.track_position();
        let style = self.track.style();
        let transition = if pos.animate {
            TRACK_TRANSITION_CSS
        } else {
            "none"
        };
        _ = style.set_property("transition", transition);
        _ = style.set_property("transform", &format!("translateX({}px)", pos.translate_x));

        let children = self.track.children();
        for i in 0..children.length() {
            let Some(chip) = children.item(i) else {
                continue;
            };
            let cl = chip.class_list();
            _ = cl.remove_2(ACTIVE_CLASS, SIDE_CLASS);
            let role = carousel.chip_role(i as usize);
            match role {
                ChipRole::Active => {
                    _ = cl.add_1(ACTIVE_CLASS);
                }
                ChipRole::Side => {
                    _ = cl.add_1(SIDE_CLASS);
                }
                ChipRole::Hidden => {}
            }
            let selected = if role == ChipRole::Active { "true" } else { "false" };
            _ = chip.set_attribute("aria-selected", selected);
        }
    }

    pub fn focus_chip(&self, index: usize) {
        let Some(chip) = self.track.children().item(index as u32) else {
            return;
        };
        if let Ok(el) = chip.dyn_into::<web::HtmlElement>() {
            let opts = web::FocusOptions::new();
            opts.set_prevent_scroll(true);
            _ = el.focus_with_options(&opts);
        }
    }
}

fn create_html(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

fn append(parent: &web::HtmlElement, child: &web::HtmlElement) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

fn set_attrs(el: &web::HtmlElement, attrs: &[(&str, &str)]) {
    for (k, v) in attrs {
        _ = el.set_attribute(k, v);
    }
}
