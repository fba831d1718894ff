use leptos::prelude::*;
use logiview_core::interaction::{BrushInteraction, DeltaMode, WheelInput};
use logiview_core::render::{paint_timeline, TimelineFrame, Viewport};
use logiview_core::Subscription;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent, WheelEvent};

use crate::canvas::resize::ResizeBinding;
use crate::canvas::surface::{device_pixel_ratio, CanvasSurface};
use crate::canvas::FrameRequest;
use crate::input::{pointer_fraction, WindowListeners};
use crate::state::AppState;

/// Key that arms the brush selection.
const BRUSH_KEY: &str = "Shift";

fn from_text_input(ev: &KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .is_some()
}

#[component]
pub fn Timeline() -> impl IntoView {
    let state = expect_context::<AppState>();
    let host_ref = NodeRef::<leptos::html::Div>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let surface = StoredValue::new_local(None::<CanvasSurface>);
    let resize = StoredValue::new_local(None::<ResizeBinding>);
    let range_sub = StoredValue::new_local(None::<Subscription>);
    let key_listeners = StoredValue::new_local(None::<WindowListeners>);
    // Present only while a brush drag is in flight.
    let drag_session = StoredValue::new_local(None::<WindowListeners>);
    let brush = StoredValue::new(BrushInteraction::new());
    let hovering = StoredValue::new(false);
    let frames = FrameRequest::new(surface);
    let brushing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // ── Drawing ──

    let draw = move |generation: u64| {
        let Some(capture) = state.capture.try_get_untracked() else { return };
        let config = state.config.get_untracked();
        let range = state.range();
        let selection = brush.with_value(|b| b.selection());
        surface.with_value(|s| {
            let Some(s) = s else { return };
            s.render_with(generation, |p, viewport| {
                let frame = TimelineFrame { capture: capture.as_ref(), range, selection, config: &config };
                paint_timeline(p, viewport, &frame);
            });
        });
    };

    let redraw_now = move || {
        let Some(Some(generation)) = surface.try_with_value(|s| s.as_ref().map(CanvasSurface::generation)) else {
            return;
        };
        draw(generation);
    };

    let request_redraw = move || frames.schedule(draw);

    // ── Brush selection ──

    let cancel_brush = move || {
        drag_session.set_value(None);
        brushing.set(false);
        if brush.try_update_value(|b| b.cancel()) == Some(true) {
            log::debug!("brush selection cancelled");
            redraw_now();
        }
    };

    let pointer_x = move |ev: &PointerEvent| -> Option<f64> {
        let canvas = canvas_ref.get_untracked()?;
        Some(pointer_fraction(ev, canvas.as_ref()))
    };

    let start_drag_session = move || -> Result<WindowListeners, String> {
        let mut listeners = WindowListeners::new()?;
        listeners.listen("pointermove", move |ev: PointerEvent| {
            let Some(x) = pointer_x(&ev) else { return };
            if brush.try_update_value(|b| b.pointer_move(x)) == Some(true) {
                redraw_now();
            }
        })?;
        listeners.listen("pointerup", move |_: PointerEvent| {
            let view = state.range();
            let committed = brush.try_update_value(|b| b.pointer_up(view)).flatten();
            drag_session.set_value(None);
            brushing.set(false);
            match committed {
                Some(range) => {
                    log::debug!("brush commit {:.6}..{:.6}", range.start, range.end);
                    if !state.navigate(range) {
                        redraw_now();
                    }
                }
                None => redraw_now(),
            }
        })?;
        listeners.listen("pointercancel", move |_: PointerEvent| cancel_brush())?;
        Ok(listeners)
    };

    let bind_keys = move || -> Result<WindowListeners, String> {
        let mut listeners = WindowListeners::new()?;
        listeners.listen("keydown", move |ev: KeyboardEvent| {
            if from_text_input(&ev) {
                return;
            }
            match ev.key().as_str() {
                BRUSH_KEY => {
                    if !hovering.get_value() {
                        return;
                    }
                    if brush.try_update_value(|b| b.modifier_down()) == Some(true) {
                        brushing.set(true);
                        redraw_now();
                    }
                }
                "Escape" => cancel_brush(),
                _ => {}
            }
        })?;
        listeners.listen("keyup", move |ev: KeyboardEvent| {
            if ev.key() == BRUSH_KEY {
                cancel_brush();
            }
        })?;
        listeners.listen("blur", move |_: web_sys::Event| cancel_brush())?;
        Ok(listeners)
    };

    // ── Mount ──

    // Acquire the surface and wire observers once the elements exist.
    Effect::new(move || {
        let (Some(host), Some(canvas_el)) = (host_ref.get(), canvas_ref.get()) else { return };
        if surface.with_value(Option::is_some) {
            return;
        }
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();
        match CanvasSurface::acquire(canvas.clone()) {
            Ok(s) => surface.set_value(Some(s)),
            Err(e) => {
                log::error!("timeline surface unavailable: {e}");
                error.set(Some(e));
                return;
            }
        }

        let on_resize = move |w: f64, h: f64| {
            let viewport = Viewport::new(w, h, device_pixel_ratio());
            brush.update_value(|b| b.set_pixel_fraction(viewport.pixel_fraction()));
            if surface.try_update_value(|s| s.as_mut().is_some_and(|s| s.configure(viewport))) == Some(true) {
                request_redraw();
            }
        };
        match ResizeBinding::observe(host.as_ref(), on_resize) {
            Ok(binding) => resize.set_value(Some(binding)),
            Err(e) => {
                log::error!("timeline resize binding failed: {e}");
                error.set(Some(e));
            }
        }

        range_sub.set_value(Some(state.shared_range().subscribe(move |_| redraw_now())));

        match bind_keys() {
            Ok(listeners) => key_listeners.set_value(Some(listeners)),
            Err(e) => log::error!("brush keys unavailable: {e}"),
        }
    });

    Effect::new(move || {
        state.capture.track();
        state.config.track();
        request_redraw();
    });

    // ── Canvas events ──

    let on_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let input = WheelInput {
            delta_x: ev.delta_x(),
            delta_y: ev.delta_y(),
            mode: DeltaMode::from_dom(ev.delta_mode()),
            zoom_modifier: ev.ctrl_key() || ev.meta_key(),
            focal: pointer_fraction(&ev, canvas.as_ref()).clamp(0.0, 1.0),
        };
        let page_px = surface.with_value(|s| s.as_ref().map(|s| s.viewport().width)).unwrap_or(0.0);
        let next = state.config.with_untracked(|cfg| input.apply(state.range(), page_px, cfg));
        state.set_range(next);
    };

    let on_pointermove = move |ev: PointerEvent| {
        if drag_session.with_value(Option::is_some) {
            return;
        }
        let Some(x) = pointer_x(&ev) else { return };
        if brush.try_update_value(|b| b.pointer_move(x)) == Some(true) {
            redraw_now();
        }
    };

    let on_pointerleave = move |_: PointerEvent| {
        hovering.set_value(false);
        if brush.try_update_value(|b| b.pointer_left()) == Some(true) {
            brushing.set(false);
            redraw_now();
        }
    };

    let on_pointerdown = move |ev: PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let Some(x) = pointer_x(&ev) else { return };
        if brush.try_update_value(|b| b.pointer_down(x)) != Some(true) {
            return;
        }
        ev.prevent_default();
        redraw_now();
        match start_drag_session() {
            Ok(listeners) => drag_session.set_value(Some(listeners)),
            Err(e) => {
                log::error!("brush drag unavailable: {e}");
                cancel_brush();
            }
        }
    };

    view! {
        <div class="timeline" node_ref=host_ref>
            <canvas
                node_ref=canvas_ref
                on:wheel=on_wheel
                on:pointermove=on_pointermove
                on:pointerdown=on_pointerdown
                on:pointerenter=move |_| hovering.set_value(true)
                on:pointerleave=on_pointerleave
                style:cursor=move || if brushing.get() { "crosshair" } else { "default" }
            />
            {move || error.get().map(|e| view! { <div class="view-error">{e}</div> })}
        </div>
    }
}
