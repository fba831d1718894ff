use super::ViewRange;

const MAX_ENTRIES: usize = 100;

/// Back/forward list of discrete navigations (brush commits, minimap
/// seeks, full-view resets). Wheel steps are not recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct NavHistory {
    entries: Vec<ViewRange>,
    index: usize,
}

impl Default for NavHistory {
    fn default() -> Self {
        Self::new()
    }
}

fn nearly_equal(a: &ViewRange, b: &ViewRange) -> bool {
    (a.start - b.start).abs() < 1e-6 && (a.end - b.end).abs() < 1e-6
}

impl NavHistory {
    pub fn new() -> Self {
        Self { entries: vec![ViewRange::FULL], index: 0 }
    }

    /// Record `range` as the newest entry, dropping any forward entries.
    pub fn push(&mut self, range: ViewRange) {
        self.entries.truncate(self.index + 1);
        if self.entries.last().is_some_and(|last| nearly_equal(last, &range)) {
            return;
        }
        self.entries.push(range);
        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.index = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> Option<ViewRange> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index).copied()
    }

    pub fn forward(&mut self) -> Option<ViewRange> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index).copied()
    }

    pub fn can_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_and_forward() {
        let mut h = NavHistory::new();
        h.push(ViewRange::new(0.2, 0.4));
        h.push(ViewRange::new(0.25, 0.3));
        assert_eq!(h.back(), Some(ViewRange::new(0.2, 0.4)));
        assert_eq!(h.back(), Some(ViewRange::FULL));
        assert_eq!(h.back(), None);
        assert_eq!(h.forward(), Some(ViewRange::new(0.2, 0.4)));
        assert!(h.can_forward());
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut h = NavHistory::new();
        h.push(ViewRange::new(0.2, 0.4));
        h.push(ViewRange::new(0.5, 0.6));
        h.back();
        h.push(ViewRange::new(0.7, 0.8));
        assert!(!h.can_forward());
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn test_near_duplicates_skipped() {
        let mut h = NavHistory::new();
        h.push(ViewRange::FULL);
        h.push(ViewRange::new(0.2, 0.4));
        h.push(ViewRange::new(0.2 + 1e-9, 0.4));
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn test_bounded() {
        let mut h = NavHistory::new();
        for i in 0..250 {
            let s = i as f64 / 1000.0;
            h.push(ViewRange::new(s, s + 0.5));
        }
        assert_eq!(h.len(), MAX_ENTRIES);
        assert!(!h.can_forward());
    }
}
