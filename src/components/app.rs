use leptos::prelude::*;

use crate::components::minimap::Minimap;
use crate::components::readout::Readout;
use crate::components::timeline::Timeline;
use crate::components::toolbar::Toolbar;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    view! {
        <div class="app">
            <Toolbar />
            <MainArea />
        </div>
    }
}

#[component]
fn MainArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let has_capture = move || state.capture.with(Option::is_some);

    view! {
        <div class="main">
            <Minimap />
            <Timeline />
            <Readout />
            {move || state.status.get().map(|msg| view! {
                <div class="status" on:click=move |_| state.status.set(None)>{msg}</div>
            })}
            {move || (!has_capture()).then(|| view! {
                <div class="empty-state">
                    "Open a raw capture or press Demo. Shift+drag on the timeline to zoom into a selection."
                </div>
            })}
        </div>
    }
}
