use leptos::prelude::*;
use logiview_core::interaction::{DeltaMode, MinimapInteraction, WheelInput};
use logiview_core::render::{draw_minimap_window, draw_waveform, BitmapCache, MinimapKey, Viewport};
use logiview_core::{Capture, Subscription, ViewConfig, ViewRange};
use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent, WheelEvent};

use crate::canvas::resize::ResizeBinding;
use crate::canvas::surface::{device_pixel_ratio, CanvasSurface};
use crate::canvas::FrameRequest;
use crate::input::{pointer_fraction, WindowListeners};
use crate::state::AppState;

/// Draw the whole capture into a detached canvas the size of the minimap.
fn render_overview(capture: &Capture, viewport: Viewport, config: &ViewConfig) -> Result<CanvasSurface, String> {
    let mut bitmap = CanvasSurface::offscreen()?;
    if !bitmap.configure(viewport) {
        return Err("overview has no size".to_string());
    }
    bitmap.render_with(bitmap.generation(), |p, vp| {
        draw_waveform(p, capture.buffer.bytes(), ViewRange::FULL, vp.width, vp.height, config);
    });
    log::debug!(
        "minimap overview built: {} samples into {}x{}",
        capture.buffer.len(),
        viewport.backing_width(),
        viewport.backing_height()
    );
    Ok(bitmap)
}

#[component]
pub fn Minimap() -> impl IntoView {
    let state = expect_context::<AppState>();
    let host_ref = NodeRef::<leptos::html::Div>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let surface = StoredValue::new_local(None::<CanvasSurface>);
    let overview = StoredValue::new_local(BitmapCache::<MinimapKey, CanvasSurface>::new());
    let resize = StoredValue::new_local(None::<ResizeBinding>);
    let range_sub = StoredValue::new_local(None::<Subscription>);
    let drag_session = StoredValue::new_local(None::<WindowListeners>);
    let interaction = StoredValue::new(MinimapInteraction::new(ViewConfig::default().minimap_min_window));
    let frames = FrameRequest::new(surface);
    let cursor = RwSignal::new("pointer");
    let error = RwSignal::new(None::<String>);

    // ── Drawing ──

    let draw = move |generation: u64| {
        let Some(capture) = state.capture.try_get_untracked() else { return };
        let config = state.config.get_untracked();
        let range = state.range();
        surface.with_value(|s| {
            let Some(s) = s else { return };
            s.render_with(generation, |p, viewport| {
                match capture.as_ref() {
                    Some(capture) => {
                        let key = MinimapKey {
                            buffer: capture.buffer.id(),
                            backing_width: viewport.backing_width(),
                            backing_height: viewport.backing_height(),
                            grid_spacing_px: config.grid_spacing_px,
                        };
                        let blitted = overview.try_update_value(|cache| {
                            cache
                                .get_or_try_build(key, || render_overview(capture, *viewport, &config))
                                .and_then(|bitmap| s.blit(bitmap))
                        });
                        if let Some(Err(e)) = blitted {
                            log::error!("minimap overview: {e}");
                        }
                    }
                    None => draw_waveform(p, &[], ViewRange::FULL, viewport.width, viewport.height, &config),
                }
                draw_minimap_window(p, range, viewport.width, viewport.height, config.minimap_min_window);
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

    let pointer_x = move |ev: &PointerEvent| -> Option<f64> {
        let canvas = canvas_ref.get_untracked()?;
        Some(pointer_fraction(ev, canvas.as_ref()))
    };

    // ── Window drag ──

    let cancel_drag = move || {
        drag_session.set_value(None);
        cursor.set("pointer");
        if let Some(Some(before)) = interaction.try_update_value(|m| m.cancel()) {
            log::debug!("minimap drag cancelled");
            state.set_range(before);
        }
    };

    let start_drag_session = move || -> Result<WindowListeners, String> {
        let mut listeners = WindowListeners::new()?;
        listeners.listen("pointermove", move |ev: PointerEvent| {
            let Some(x) = pointer_x(&ev) else { return };
            if let Some(Some(range)) = interaction.try_update_value(|m| m.pointer_move(x)) {
                state.set_range(range);
            }
        })?;
        listeners.listen("pointerup", move |_: PointerEvent| {
            let ended = interaction.try_update_value(|m| m.pointer_up()) == Some(true);
            drag_session.set_value(None);
            cursor.set("pointer");
            if ended {
                let range = state.range();
                log::debug!("minimap commit {:.6}..{:.6}", range.start, range.end);
                state.record_range();
            }
        })?;
        listeners.listen("pointercancel", move |_: PointerEvent| cancel_drag())?;
        listeners.listen("keydown", move |ev: KeyboardEvent| {
            if ev.key() == "Escape" {
                cancel_drag();
            }
        })?;
        listeners.listen("blur", move |_: web_sys::Event| cancel_drag())?;
        Ok(listeners)
    };

    // ── Mount ──

    Effect::new(move || {
        let (Some(host), Some(canvas_el)) = (host_ref.get(), canvas_ref.get()) else { return };
        if surface.with_value(Option::is_some) {
            return;
        }
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();
        match CanvasSurface::acquire(canvas.clone()) {
            Ok(s) => surface.set_value(Some(s)),
            Err(e) => {
                log::error!("minimap surface unavailable: {e}");
                error.set(Some(e));
                return;
            }
        }

        let on_resize = move |w: f64, h: f64| {
            let viewport = Viewport::new(w, h, device_pixel_ratio());
            interaction.update_value(|m| m.set_pixel_fraction(viewport.pixel_fraction()));
            if surface.try_update_value(|s| s.as_mut().is_some_and(|s| s.configure(viewport))) == Some(true) {
                request_redraw();
            }
        };
        match ResizeBinding::observe(host.as_ref(), on_resize) {
            Ok(binding) => resize.set_value(Some(binding)),
            Err(e) => {
                log::error!("minimap resize binding failed: {e}");
                error.set(Some(e));
            }
        }

        range_sub.set_value(Some(state.shared_range().subscribe(move |_| redraw_now())));
    });

    Effect::new(move || {
        if state.capture.with(Option::is_none) {
            overview.update_value(BitmapCache::invalidate);
        }
        let min_window = state.config.with(|c| c.minimap_min_window);
        interaction.update_value(|m| m.set_min_window(min_window));
        request_redraw();
    });

    // ── Canvas events ──

    let on_pointerdown = move |ev: PointerEvent| {
        if ev.button() != 0 || state.capture.with_untracked(Option::is_none) {
            return;
        }
        let Some(x) = pointer_x(&ev) else { return };
        ev.prevent_default();
        state.record_range();
        let view = state.range();
        let Some(seeded) = interaction.try_update_value(|m| m.pointer_down(x, view)) else { return };
        cursor.set(if seeded.is_some() { "ew-resize" } else { "grabbing" });
        if let Some(range) = seeded {
            state.set_range(range);
        }
        match start_drag_session() {
            Ok(listeners) => drag_session.set_value(Some(listeners)),
            Err(e) => {
                log::error!("minimap drag unavailable: {e}");
                cancel_drag();
            }
        }
    };

    let on_pointermove = move |ev: PointerEvent| {
        if drag_session.with_value(Option::is_some) {
            return;
        }
        let Some(x) = pointer_x(&ev) else { return };
        let over_window = interaction.with_value(|m| m.hit_window(x, state.range()));
        cursor.set(if over_window { "grab" } else { "pointer" });
    };

    let on_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let view = state.range();
        // The minimap shows the whole capture; zoom around the same sample
        // on the timeline.
        let x = pointer_fraction(&ev, canvas.as_ref()).clamp(0.0, 1.0);
        let input = WheelInput {
            delta_x: ev.delta_x(),
            delta_y: ev.delta_y(),
            mode: DeltaMode::from_dom(ev.delta_mode()),
            zoom_modifier: ev.ctrl_key() || ev.meta_key(),
            focal: view.to_screen(x).clamp(0.0, 1.0),
        };
        let page_px = surface.with_value(|s| s.as_ref().map(|s| s.viewport().width)).unwrap_or(0.0);
        let next = state.config.with_untracked(|cfg| input.apply(view, page_px, cfg));
        state.set_range(next);
    };

    view! {
        <div class="minimap" node_ref=host_ref>
            <canvas
                node_ref=canvas_ref
                on:pointerdown=on_pointerdown
                on:pointermove=on_pointermove
                on:wheel=on_wheel
                style:cursor=move || cursor.get()
            />
            {move || error.get().map(|e| view! { <div class="view-error">{e}</div> })}
        </div>
    }
}
