use leptos::prelude::*;
use logiview_core::ViewRange;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

use crate::state::AppState;

async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Reading {} failed: {:?}", file.name(), e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

fn input_target(ev: &web_sys::Event) -> Option<HtmlInputElement> {
    ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
}

#[component]
pub fn Toolbar() -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_file = move |ev: web_sys::Event| {
        let Some(input) = input_target(&ev) else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return };
        // Let the same file be picked again.
        input.set_value("");
        wasm_bindgen_futures::spawn_local(async move {
            match read_file(&file).await {
                Ok(bytes) => state.load_bytes(bytes),
                Err(e) => {
                    log::error!("{e}");
                    state.status.set(Some(e));
                }
            }
        });
    };

    let on_rate = move |ev: web_sys::Event| {
        let Some(input) = input_target(&ev) else { return };
        match input.value().trim().parse::<u64>() {
            Ok(hz) if hz > 0 => {
                state.sample_rate.set(hz);
                state.capture.update(|c| {
                    if let Some(c) = c {
                        c.sample_rate = hz;
                    }
                });
            }
            _ => {
                log::warn!("ignoring sample rate {:?}", input.value());
                input.set_value(&state.sample_rate.get_untracked().to_string());
            }
        }
    };

    let has_capture = move || state.capture.with(Option::is_some);
    let can_back = move || state.history.with(|h| h.can_back());
    let can_forward = move || state.history.with(|h| h.can_forward());
    let is_full = move || state.visible.get().is_full();
    let grid_on = move || state.config.with(|c| c.grid_enabled());

    view! {
        <div class="toolbar">
            <span class="toolbar-brand"><b>"logi"</b><i>"view"</i></span>

            <label class="toolbar-btn" title="Load a raw capture, one byte per sample">
                "Open"
                <input type="file" style="display: none;" on:change=on_file />
            </label>
            <label class="toolbar-field" title="Sample rate in Hz (display only)">
                "Rate"
                <input
                    type="number"
                    min="1"
                    prop:value=move || state.sample_rate.get().to_string()
                    on:change=on_rate
                />
                "Hz"
            </label>
            <button class="toolbar-btn" on:click=move |_| state.load_demo() title="Generate a demo capture">
                "Demo"
            </button>
            <button
                class="toolbar-btn"
                disabled=move || !has_capture()
                on:click=move |_| state.clear()
                title="Clear data"
            >"Clear"</button>

            <div style="flex: 1;"></div>

            <button
                class="toolbar-btn"
                disabled=move || !can_back()
                on:click=move |_| state.nav_back()
                title="Back"
            >"←"</button>
            <button
                class="toolbar-btn"
                disabled=move || !can_forward()
                on:click=move |_| state.nav_forward()
                title="Forward"
            >"→"</button>
            <button
                class="toolbar-btn"
                disabled=move || is_full()
                on:click=move |_| {
                    state.navigate(ViewRange::FULL);
                }
                title="Show the whole capture"
            >"Full"</button>
            <button
                class=move || if grid_on() { "toolbar-btn active" } else { "toolbar-btn" }
                on:click=move |_| state.update_config(|c| *c = c.clone().with_grid(!c.grid_enabled()))
                title="Toggle grid"
            >"Grid"</button>
        </div>
    }
}
