use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlElement};

use garden_shared::garden::GardenState;

pub fn render_palette(document: &Document, palette_el: &HtmlElement, garden: &GardenState) {
    palette_el.set_inner_html("");
    for (index, color) in garden.palette().iter().enumerate() {
        let Ok(element) = document.create_element("button") else {
            continue;
        };
        let Ok(button) = element.dyn_into::<HtmlButtonElement>() else {
            continue;
        };
        let css = color.to_css();
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("data-index", &index.to_string());
        let _ = button.set_attribute("aria-label", &format!("Use color {css}"));
        let is_active = garden.is_active_color(*color);
        let _ = button.set_attribute("aria-pressed", if is_active { "true" } else { "false" });
        let class_name = if is_active {
            "swatch swatch--active"
        } else {
            "swatch"
        };
        button.set_class_name(class_name);
        let _ = button.style().set_property("background", &css);
        let _ = palette_el.append_child(&button);
    }
}
