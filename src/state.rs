use leptos::prelude::*;
use logiview_core::types::demo_signal;
use logiview_core::{Capture, NavHistory, SharedViewRange, Subscription, ViewConfig, ViewRange};

/// Sample rate assumed for loaded files until the user enters another one.
pub const DEFAULT_SAMPLE_RATE: u64 = 24_000_000;

const DEMO_SAMPLES: usize = 1 << 20;

#[derive(Clone, Copy)]
pub struct AppState {
    pub capture: RwSignal<Option<Capture>>,
    pub sample_rate: RwSignal<u64>,
    /// The one pan/zoom range both views observe.
    pub view_range: StoredValue<SharedViewRange, LocalStorage>,
    /// Signal mirror of `view_range` for reactive readouts.
    pub visible: RwSignal<ViewRange>,
    pub config: RwSignal<ViewConfig>,
    pub history: RwSignal<NavHistory>,
    pub status: RwSignal<Option<String>>,
    _mirror: StoredValue<Option<Subscription>, LocalStorage>,
}

impl AppState {
    pub fn new() -> Self {
        let shared = SharedViewRange::new();
        let visible = RwSignal::new(shared.get());
        let mirror = shared.subscribe(move |range| visible.set(range));
        Self {
            capture: RwSignal::new(None),
            sample_rate: RwSignal::new(DEFAULT_SAMPLE_RATE),
            view_range: StoredValue::new_local(shared),
            visible,
            config: RwSignal::new(crate::config::load()),
            history: RwSignal::new(NavHistory::new()),
            status: RwSignal::new(None),
            _mirror: StoredValue::new_local(Some(mirror)),
        }
    }

    /// A handle on the shared range. Callers notify through the handle so
    /// no store borrow is held while subscribers run.
    pub fn shared_range(&self) -> SharedViewRange {
        self.view_range.get_value()
    }

    pub fn range(&self) -> ViewRange {
        self.view_range.with_value(|r| r.get())
    }

    /// Continuous update (wheel, drag in progress). Not recorded in history.
    pub fn set_range(&self, range: ViewRange) -> bool {
        self.shared_range().set(range)
    }

    /// Discrete navigation, recorded so Back returns to where it started.
    /// Returns whether the range changed.
    pub fn navigate(&self, range: ViewRange) -> bool {
        let before = self.range();
        let shared = self.shared_range();
        let changed = shared.set(range);
        let after = shared.get();
        self.history.update(|h| {
            h.push(before);
            h.push(after);
        });
        changed
    }

    /// Record the current range, e.g. after a drag that moved it live.
    pub fn record_range(&self) {
        let current = self.range();
        self.history.update(|h| h.push(current));
    }

    pub fn nav_back(&self) {
        let mut target = None;
        self.history.update(|h| target = h.back());
        if let Some(range) = target {
            self.set_range(range);
        }
    }

    pub fn nav_forward(&self) {
        let mut target = None;
        self.history.update(|h| target = h.forward());
        if let Some(range) = target {
            self.set_range(range);
        }
    }

    /// Replace the capture. The view resets to the full range.
    pub fn load_capture(&self, capture: Capture) {
        log::info!(
            "loaded {} samples at {} Hz ({:.6} s)",
            capture.buffer.len(),
            capture.sample_rate,
            capture.duration_secs()
        );
        self.capture.set(Some(capture));
        self.history.set(NavHistory::new());
        self.shared_range().reset();
        self.status.set(None);
    }

    pub fn load_bytes(&self, bytes: Vec<u8>) {
        if bytes.is_empty() {
            self.status.set(Some("File is empty".to_string()));
            return;
        }
        self.load_capture(Capture::new(bytes, self.sample_rate.get_untracked()));
    }

    pub fn load_demo(&self) {
        self.load_capture(Capture::new(demo_signal(DEMO_SAMPLES), self.sample_rate.get_untracked()));
    }

    pub fn clear(&self) {
        self.capture.set(None);
        self.history.set(NavHistory::new());
        self.shared_range().reset();
    }

    pub fn update_config(&self, f: impl FnOnce(&mut ViewConfig)) {
        self.config.update(|c| {
            f(c);
            *c = c.clone().sanitized();
        });
        if let Err(e) = crate::config::save(&self.config.get_untracked()) {
            log::warn!("{e}");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
