use super::painter::Painter;

// ── Time scale ────────────────────────────────────────────────────────────

/// Nice 1-2-5 progression of tick intervals in seconds, from 10 ns to 10 min.
const TICK_INTERVALS: &[f64] = &[
    1e-8, 2e-8, 5e-8,                // 10–50 ns
    1e-7, 2e-7, 5e-7,                // 100–500 ns
    1e-6, 2e-6, 5e-6,                // 1–5 µs
    1e-5, 2e-5, 5e-5,                // 10–50 µs
    0.0001, 0.0002, 0.0005,          // 100–500 µs
    0.001, 0.002, 0.005,             // 1–5 ms
    0.01, 0.02, 0.05,                // 10–50 ms
    0.1, 0.2, 0.5,                   // 100–500 ms
    1.0, 2.0, 5.0,                   // 1–5 s
    10.0, 30.0, 60.0,                // 10 s – 1 min
    120.0, 300.0, 600.0,             // 2–10 min
];

/// Trim a fixed-precision number: "1.50" -> "1.5", "2.00" -> "2".
fn trim_decimal(s: String) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Format a time value as a compact label whose unit matches the tick interval.
pub fn format_time_label(seconds: f64, interval: f64) -> String {
    if interval < 1e-6 {
        trim_decimal(format!("{:.2}", seconds * 1e9)) + "ns"
    } else if interval < 1e-3 {
        trim_decimal(format!("{:.3}", seconds * 1e6)) + "µs"
    } else if interval < 1.0 {
        trim_decimal(format!("{:.3}", seconds * 1e3)) + "ms"
    } else if interval < 60.0 {
        trim_decimal(format!("{:.1}", seconds)) + "s"
    } else {
        let mins = (seconds / 60.0).floor() as u64;
        let secs = (seconds % 60.0).round() as u64;
        if secs == 0 {
            format!("{mins}m")
        } else {
            format!("{mins}m{secs:02}s")
        }
    }
}

/// Human readable duration, choosing the unit from the value itself.
pub fn format_duration(seconds: f64) -> String {
    if !(seconds.is_finite() && seconds > 0.0) {
        return "0s".to_string();
    }
    let unit = TICK_INTERVALS
        .iter()
        .copied()
        .rev()
        .find(|&i| i <= seconds)
        .unwrap_or(TICK_INTERVALS[0]);
    format_time_label(seconds, unit)
}

/// Smallest tick interval that keeps major ticks at least `min_px` apart.
pub fn pick_interval(visible_time: f64, canvas_width: f64, min_px: f64) -> f64 {
    let px_per_sec = canvas_width / visible_time;
    let min_interval = min_px / px_per_sec;
    TICK_INTERVALS
        .iter()
        .copied()
        .find(|&i| i >= min_interval)
        .unwrap_or(TICK_INTERVALS[TICK_INTERVALS.len() - 1])
}

/// Draw time tick marks and labels along the bottom of a surface.
pub fn draw_time_markers<P: Painter + ?Sized>(
    p: &mut P,
    start_time: f64,
    visible_time: f64,
    canvas_width: f64,
    canvas_height: f64,
    duration: f64,
) {
    if !(visible_time > 0.0) || canvas_width <= 0.0 {
        return;
    }

    let px_per_sec = canvas_width / visible_time;
    let interval = pick_interval(visible_time, canvas_width, 100.0);
    let end_time = (start_time + visible_time).min(duration);

    // ── Minor ticks (no labels) ──
    let minor_interval = interval / 5.0;
    if minor_interval * px_per_sec >= 4.0 {
        p.set_stroke_style("rgba(255,255,255,0.15)");
        p.set_line_width(1.0);
        p.begin_path();
        let first = (start_time / minor_interval).ceil() as i64;
        let last = (end_time / minor_interval).floor() as i64;
        for k in first..=last {
            // Every fifth minor tick is a major one.
            if k % 5 == 0 {
                continue;
            }
            let x = (k as f64 * minor_interval - start_time) * px_per_sec;
            if (0.0..=canvas_width).contains(&x) {
                p.move_to(x, canvas_height - 6.0);
                p.line_to(x, canvas_height);
            }
        }
        p.stroke();
    }

    // ── Major ticks + labels ──
    let tick_h = 12.0;
    p.set_font("10px sans-serif");
    let first = (start_time / interval).ceil() as i64;
    let last = (end_time / interval + 0.01).floor() as i64;
    for k in first..=last {
        let t = k as f64 * interval;
        let x = (t - start_time) * px_per_sec;
        if !(0.0..=canvas_width).contains(&x) {
            continue;
        }
        p.set_stroke_style("rgba(255,255,255,0.35)");
        p.set_line_width(1.0);
        p.begin_path();
        p.move_to(x, canvas_height - tick_h);
        p.line_to(x, canvas_height);
        p.stroke();

        let label = format_time_label(t, interval);
        let tw = p.text_width(&label);
        let lx = x + 3.0;
        if lx + tw < canvas_width - 2.0 {
            p.set_fill_style("rgba(0,0,0,0.6)");
            p.fill_rect(lx - 1.0, canvas_height - tick_h - 12.0, tw + 2.0, 12.0);
            p.set_fill_style("rgba(255,255,255,0.7)");
            p.fill_text(&label, lx, canvas_height - tick_h - 1.0);
        }
    }
}
