use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, MouseEvent};

type Handler = Closure<dyn FnMut(web_sys::Event)>;

/// Listeners attached to the window for the life of one gesture, so a
/// drag keeps tracking after the pointer leaves the element. Dropping
/// the session removes every listener it added.
pub struct WindowListeners {
    target: EventTarget,
    handlers: Vec<(&'static str, Handler)>,
}

impl WindowListeners {
    pub fn new() -> Result<Self, String> {
        let window = web_sys::window().ok_or("No window object")?;
        Ok(Self { target: window.into(), handlers: Vec::new() })
    }

    pub fn listen<E: JsCast + 'static>(
        &mut self,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> Result<(), String> {
        let closure = Handler::new(move |ev: web_sys::Event| handler(ev.unchecked_into::<E>()));
        self.target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| format!("add {event} listener failed: {:?}", e))?;
        self.handlers.push((event, closure));
        Ok(())
    }
}

impl Drop for WindowListeners {
    fn drop(&mut self) {
        for (event, closure) in self.handlers.drain(..) {
            let _ = self
                .target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

/// Horizontal pointer position as a fraction of `el`'s width, unclamped.
pub fn pointer_fraction(ev: &MouseEvent, el: &Element) -> f64 {
    let rect = el.get_bounding_client_rect();
    if rect.width() <= 0.0 {
        return 0.0;
    }
    (ev.client_x() as f64 - rect.left()) / rect.width()
}
