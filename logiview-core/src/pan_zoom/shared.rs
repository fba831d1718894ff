use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::ViewRange;

type Callback = Rc<dyn Fn(ViewRange)>;

struct Inner {
    value: Cell<ViewRange>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(u64, Callback)>>,
}

/// The one canonical [`ViewRange`] of a viewing session.
///
/// Any holder may write; every subscriber is called synchronously with the
/// new value before `set` returns. Writes are clamped, never rejected.
/// Clones share the same state.
#[derive(Clone)]
pub struct SharedViewRange {
    inner: Rc<Inner>,
}

impl Default for SharedViewRange {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedViewRange {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                value: Cell::new(ViewRange::FULL),
                next_id: Cell::new(0),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn get(&self) -> ViewRange {
        self.inner.value.get()
    }

    /// Store `range` (clamped) and notify subscribers if it changed.
    /// Returns whether it changed.
    pub fn set(&self, range: ViewRange) -> bool {
        let range = ViewRange::clamped(range.start, range.end);
        if range == self.inner.value.get() {
            return false;
        }
        self.inner.value.set(range);
        // Snapshot so callbacks may subscribe, unsubscribe or write.
        let callbacks: Vec<Callback> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for cb in callbacks {
            cb(range);
        }
        true
    }

    /// Back to the full capture.
    pub fn reset(&self) -> bool {
        self.set(ViewRange::FULL)
    }

    /// Register `callback` for every change. Dropping the returned
    /// [`Subscription`] unregisters it.
    pub fn subscribe(&self, callback: impl Fn(ViewRange) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.subscribers.borrow_mut().push((id, Rc::new(callback)));
        Subscription {
            owner: Rc::downgrade(&self.inner),
            id,
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}

/// Registration handle returned by [`SharedViewRange::subscribe`].
pub struct Subscription {
    owner: Weak<Inner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.owner.upgrade() {
            inner.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribers_see_every_change_synchronously() {
        let shared = SharedViewRange::new();
        let seen_a = Rc::new(RefCell::new(Vec::new()));
        let seen_b = Rc::new(Cell::new(None));
        let a = Rc::clone(&seen_a);
        let _sub_a = shared.subscribe(move |r| a.borrow_mut().push(r));
        let b = Rc::clone(&seen_b);
        let _sub_b = shared.subscribe(move |r| b.set(Some(r)));

        assert!(shared.set(ViewRange::new(0.1, 0.4)));
        assert_eq!(seen_b.get(), Some(ViewRange::new(0.1, 0.4)));
        assert!(shared.set(ViewRange::new(0.2, 0.4)));
        assert_eq!(seen_a.borrow().len(), 2);
    }

    #[test]
    fn test_unchanged_write_is_silent() {
        let shared = SharedViewRange::new();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let _sub = shared.subscribe(move |_| c.set(c.get() + 1));
        assert!(!shared.set(ViewRange::FULL));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_writes_are_clamped() {
        let shared = SharedViewRange::new();
        shared.set(ViewRange { start: -0.5, end: 0.5 });
        assert_eq!(shared.get(), ViewRange { start: 0.0, end: 0.5 });
        shared.set(ViewRange { start: 0.6, end: 0.6 });
        let r = shared.get();
        assert!(r.start < r.end);
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let shared = SharedViewRange::new();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let sub = shared.subscribe(move |_| c.set(c.get() + 1));
        assert_eq!(shared.subscriber_count(), 1);
        drop(sub);
        assert_eq!(shared.subscriber_count(), 0);
        shared.set(ViewRange::new(0.3, 0.6));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_callback_may_write_back() {
        let shared = SharedViewRange::new();
        let writer = shared.clone();
        // Snap any range that touches the left edge back to full view.
        let _sub = shared.subscribe(move |r| {
            if r.start == 0.0 {
                writer.reset();
            }
        });
        shared.set(ViewRange::new(0.0, 0.5));
        assert_eq!(shared.get(), ViewRange::FULL);
    }

    #[test]
    fn test_reset_returns_to_full() {
        let shared = SharedViewRange::new();
        shared.set(ViewRange::new(0.4, 0.5));
        assert!(shared.reset());
        assert!(shared.get().is_full());
    }
}
