use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, ResizeObserver, ResizeObserverEntry};

/// Reports the content size of an element whenever it changes. The
/// observer is disconnected when the binding is dropped.
pub struct ResizeBinding {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeBinding {
    pub fn observe(target: &Element, mut on_resize: impl FnMut(f64, f64) + 'static) -> Result<Self, String> {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            // Only the last entry matters when several resizes were batched.
            let Some(entry) = entries
                .iter()
                .last()
                .and_then(|e| e.dyn_into::<ResizeObserverEntry>().ok())
            else {
                return;
            };
            let rect = entry.content_rect();
            on_resize(rect.width(), rect.height());
        });
        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| format!("ResizeObserver unavailable: {:?}", e))?;
        observer.observe(target);
        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for ResizeBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
