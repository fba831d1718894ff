use leptos::prelude::*;
use logiview_core::render::time_markers::format_duration;
use logiview_core::types::hex_preview;

use crate::state::AppState;

const HEX_PREVIEW_BYTES: usize = 32;

fn format_rate(hz: u64) -> String {
    match hz {
        0 => "unknown rate".to_string(),
        hz if hz >= 1_000_000 && hz % 1_000 == 0 => format!("{} MHz", hz as f64 / 1e6),
        hz if hz >= 1_000 => format!("{} kHz", hz as f64 / 1e3),
        hz => format!("{hz} Hz"),
    }
}

#[component]
pub fn Readout() -> impl IntoView {
    let state = expect_context::<AppState>();

    let summary = move || {
        let range = state.visible.get();
        state.capture.with(|capture| {
            let Some(capture) = capture else {
                return "No capture loaded".to_string();
            };
            let len = capture.buffer.len();
            let (first, last) = range.sample_bounds(len);
            let (_, visible) = capture.visible_time(range);
            format!(
                "Samples {first}..{last} of {len} | {} visible | {}",
                format_duration(visible),
                format_rate(capture.sample_rate)
            )
        })
    };

    let hex = move || {
        let range = state.visible.get();
        state.capture.with(|capture| {
            capture.as_ref().map(|capture| {
                let (first, last) = range.sample_bounds(capture.buffer.len());
                hex_preview(&capture.buffer.bytes()[first..last], HEX_PREVIEW_BYTES)
            })
        })
    };

    view! {
        <div class="readout">
            <span class="readout-summary">{summary}</span>
            {move || hex().map(|h| view! { <code class="readout-hex">{h}</code> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(24_000_000), "24 MHz");
        assert_eq!(format_rate(12_500_000), "12.5 MHz");
        assert_eq!(format_rate(44_100), "44.1 kHz");
        assert_eq!(format_rate(500), "500 Hz");
        assert_eq!(format_rate(0), "unknown rate");
    }
}
