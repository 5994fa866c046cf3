use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, TouchEvent};

use garden_shared::{PointerInput, PointerPhase, ScreenRect};

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn create_element<T: JsCast>(document: &Document, tag: &str) -> Result<T, JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {tag}")))
}

pub fn screen_rect(element: &Element) -> ScreenRect {
    let rect = element.get_bounding_client_rect();
    ScreenRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Reads the client position from a mouse/pointer event or from the first
/// active touch. Events without one still carry their phase.
pub fn pointer_input(event: &Event, phase: PointerPhase) -> PointerInput {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return PointerInput::new(phase, mouse.client_x() as f64, mouse.client_y() as f64);
    }
    if let Some(touch) = event
        .dyn_ref::<TouchEvent>()
        .and_then(|touch_event| touch_event.touches().get(0))
    {
        return PointerInput::new(phase, touch.client_x() as f64, touch.client_y() as f64);
    }
    PointerInput::without_position(phase)
}

pub fn set_square_size(element: &HtmlElement, size: f64) {
    let value = format!("{size}px");
    let style = element.style();
    let _ = style.set_property("width", &value);
    let _ = style.set_property("height", &value);
}

pub fn data_index(event: &Event) -> Option<usize> {
    let mut current = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    while let Some(element) = current {
        if let Some(index) = element.get_attribute("data-index") {
            return index.parse::<usize>().ok();
        }
        current = element.parent_element();
    }
    None
}

/// Attaches a listener for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event_name: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
