use crate::pan_zoom::ViewRange;
use crate::types::SelectionRegion;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BrushState {
    Idle,
    /// Selection modifier held; the preview follows the pointer.
    Selecting,
    /// Pointer pressed while selecting; the preview spans origin to pointer.
    Dragging { origin: f64 },
}

/// Brush (preview-then-commit) selection on the main timeline.
///
/// Positions are fractions of the timeline width. The selection preview
/// lives here and never touches the shared range until commit.
#[derive(Clone, Debug)]
pub struct BrushInteraction {
    state: BrushState,
    selection: Option<SelectionRegion>,
    pointer: f64,
    pixel: f64,
}

impl Default for BrushInteraction {
    fn default() -> Self {
        Self { state: BrushState::Idle, selection: None, pointer: 0.0, pixel: 0.0 }
    }
}

impl BrushInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BrushState {
        self.state
    }

    pub fn selection(&self) -> Option<SelectionRegion> {
        self.selection
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, BrushState::Dragging { .. })
    }

    /// Width of one layout pixel as a fraction of the timeline.
    pub fn set_pixel_fraction(&mut self, pixel: f64) {
        self.pixel = pixel.max(0.0);
    }

    fn seed_at(&self, x: f64) -> SelectionRegion {
        let x = x.clamp(0.0, 1.0);
        let end = (x + self.pixel).min(1.0);
        SelectionRegion { start: end - self.pixel.min(end), end }
    }

    /// Selection modifier pressed. Returns whether the preview changed.
    pub fn modifier_down(&mut self) -> bool {
        if self.state != BrushState::Idle {
            return false;
        }
        self.state = BrushState::Selecting;
        self.selection = Some(self.seed_at(self.pointer));
        true
    }

    /// Pointer moved to `x`. Returns whether the preview changed.
    pub fn pointer_move(&mut self, x: f64) -> bool {
        self.pointer = x;
        let next = match self.state {
            BrushState::Idle => return false,
            BrushState::Selecting => self.seed_at(x),
            BrushState::Dragging { origin } => {
                let region = SelectionRegion::between(origin, x);
                if region.width() < self.pixel {
                    self.seed_at(origin)
                } else {
                    region
                }
            }
        };
        let changed = self.selection != Some(next);
        self.selection = Some(next);
        changed
    }

    /// Pointer pressed at `x`. Returns whether the brush took the press.
    pub fn pointer_down(&mut self, x: f64) -> bool {
        if self.state != BrushState::Selecting {
            return false;
        }
        self.pointer = x;
        let origin = x.clamp(0.0, 1.0);
        self.state = BrushState::Dragging { origin };
        self.selection = Some(self.seed_at(origin));
        true
    }

    /// Pointer released. While dragging, map the preview through `view`
    /// and return the range to commit; the brush goes back to idle.
    pub fn pointer_up(&mut self, view: ViewRange) -> Option<ViewRange> {
        if !self.is_dragging() {
            return None;
        }
        let committed = self.selection.map(|sel| sel.commit(view));
        self.state = BrushState::Idle;
        self.selection = None;
        committed
    }

    /// Pointer left the view. A hover preview is dropped; a drag keeps
    /// tracking outside. Returns whether the preview changed.
    pub fn pointer_left(&mut self) -> bool {
        if self.state != BrushState::Selecting {
            return false;
        }
        self.cancel()
    }

    /// Selection modifier released: drop the preview without committing.
    pub fn modifier_up(&mut self) -> bool {
        self.cancel()
    }

    /// Abandon whatever is in progress. Returns whether there was a preview.
    pub fn cancel(&mut self) -> bool {
        let had = self.selection.is_some() || self.state != BrushState::Idle;
        self.state = BrushState::Idle;
        self.selection = None;
        had
    }
}
