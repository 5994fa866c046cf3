use wasm_bindgen::JsValue;
use web_sys::Window;

/// `Math.random` as a [`garden_shared::random::RandomSource`].
pub fn random() -> f64 {
    js_sys::Math::random()
}

pub fn make_assignment_id() -> String {
    let now = js_sys::Date::now() as u64;
    let rand = (random() * 10_000.0) as u32;
    format!("{now}-{rand}")
}

pub fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1") || search.contains("debug=true")
}

pub fn init_logging(window: &Window) -> Result<(), JsValue> {
    let level = if debug_enabled(window) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).map_err(|err| JsValue::from_str(&err.to_string()))
}
