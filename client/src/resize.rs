use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, ResizeObserver};

use garden_shared::ContainerSize;

/// Owns a `ResizeObserver` and its callback; disconnects on drop.
pub struct ContainerObserver {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ContainerObserver {
    pub fn observe(
        target: &Element,
        mut on_size: impl FnMut(ContainerSize) + 'static,
    ) -> Result<Self, JsValue> {
        let measured = target.clone();
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |_entries: js_sys::Array| {
            let rect = measured.get_bounding_client_rect();
            on_size(ContainerSize {
                width: rect.width(),
                height: rect.height(),
            });
        });
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

/// Reads `persisted` from a `pagehide`/`pageshow` event.
pub fn page_transition_persisted(event: &web_sys::Event) -> Option<bool> {
    js_sys::Reflect::get(event.as_ref(), &JsValue::from_str("persisted"))
        .ok()?
        .as_bool()
}

/// Only a `pagehide` that is known not to enter the back/forward cache ends
/// the page; bfcache entries and tab switches come back with `pageshow`.
pub fn releases_observer(persisted: Option<bool>) -> bool {
    persisted == Some(false)
}

impl Drop for ContainerObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        log::debug!("container observer disconnected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_page_keeps_observing() {
        assert!(!releases_observer(Some(true)));
    }

    #[test]
    fn unknown_transition_keeps_observing() {
        assert!(!releases_observer(None));
    }

    #[test]
    fn final_unload_releases_observer() {
        assert!(releases_observer(Some(false)));
    }
}
