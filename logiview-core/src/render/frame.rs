/// Generation counter and pending-frame slot for one drawing surface.
///
/// Every resize bumps the generation. Redraw requests made before the next
/// animation frame collapse into one, and that frame is drawn only if it
/// still matches the current generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    generation: u64,
    pending: Option<u64>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a new generation. Frames queued before this are stale.
    pub fn bump(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Queue a frame for the current generation. Returns true when no
    /// frame was pending, i.e. the caller must request one.
    pub fn schedule(&mut self) -> bool {
        self.pending.replace(self.generation).is_none()
    }

    /// Take the queued frame, if it still belongs to the current generation.
    /// The slot is emptied either way.
    pub fn take_if_current(&mut self) -> Option<u64> {
        self.pending.take().filter(|&g| g == self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_frame_dropped() {
        let mut gate = FrameGate::new();
        assert!(gate.schedule());
        gate.bump();
        assert_eq!(gate.take_if_current(), None);
        assert!(!gate.is_pending());
        assert!(!gate.is_current(0));
    }

    #[test]
    fn test_requests_collapse_into_one_frame() {
        let mut gate = FrameGate::new();
        assert!(gate.schedule());
        assert!(!gate.schedule());
        assert!(!gate.schedule());
        assert_eq!(gate.take_if_current(), Some(0));
        assert_eq!(gate.take_if_current(), None);
        // Once taken, the next request needs a new frame.
        assert!(gate.schedule());
    }

    #[test]
    fn test_frame_carries_newest_generation() {
        let mut gate = FrameGate::new();
        assert!(gate.schedule());
        assert_eq!(gate.bump(), 1);
        assert!(!gate.schedule());
        assert_eq!(gate.bump(), 2);
        assert!(!gate.schedule());
        assert_eq!(gate.take_if_current(), Some(2));
        assert!(gate.is_current(2));
    }
}
