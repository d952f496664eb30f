use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Holds at most one pending handle. Putting a new one in drops the previous
/// one; `clear` drops whatever is left.
///
/// A pending callback may own a clone of its own slot, so the owner must
/// `clear` on unmount to cancel it and release the cycle.
pub struct PendingSlot<H>(Rc<RefCell<Option<H>>>);

impl<H> Clone for PendingSlot<H> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<H> PendingSlot<H> {
    pub fn replace(&self, handle: H) {
        let previous = self.0.borrow_mut().replace(handle);
        drop(previous);
    }

    pub fn clear(&self) {
        let pending = self.0.borrow_mut().take();
        drop(pending);
    }
}

pub type TimeoutSlot = PendingSlot<Timeout>;

impl PendingSlot<Timeout> {
    pub fn schedule<F>(&self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.replace(Timeout::new(delay_ms, callback));
    }
}

/// Timeout slot tied to the component: unmounting cancels the pending one.
#[hook]
pub fn use_timeout_slot() -> TimeoutSlot {
    let slot = PendingSlot(use_mut_ref(|| None::<Timeout>));
    {
        let slot = slot.clone();
        use_effect_with((), move |_| move || slot.clear());
    }
    slot
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Stands in for a timer handle: counts drops and keeps the slot alive
    /// the way a scheduled reset closure does.
    struct CountingHandle {
        dropped: Rc<Cell<u32>>,
        _owner: Option<PendingSlot<CountingHandle>>,
    }

    impl Drop for CountingHandle {
        fn drop(&mut self) {
            self.dropped.set(self.dropped.get() + 1);
        }
    }

    fn create_test_slot() -> PendingSlot<CountingHandle> {
        PendingSlot(Rc::new(RefCell::new(None)))
    }

    fn create_test_handle(
        dropped: &Rc<Cell<u32>>,
        owner: Option<&PendingSlot<CountingHandle>>,
    ) -> CountingHandle {
        CountingHandle {
            dropped: dropped.clone(),
            _owner: owner.cloned(),
        }
    }

    #[test]
    fn test_replace_drops_previous() {
        let dropped = Rc::new(Cell::new(0));
        let slot = create_test_slot();

        slot.replace(create_test_handle(&dropped, None));
        assert_eq!(dropped.get(), 0);

        slot.replace(create_test_handle(&dropped, None));
        assert_eq!(dropped.get(), 1);
        assert!(slot.0.borrow().is_some());
    }

    #[test]
    fn test_clear_releases_self_referencing_handle() {
        let dropped = Rc::new(Cell::new(0));
        let slot = create_test_slot();

        slot.replace(create_test_handle(&dropped, Some(&slot)));
        assert_eq!(Rc::strong_count(&slot.0), 2);

        slot.clear();
        assert_eq!(dropped.get(), 1);
        assert!(slot.0.borrow().is_none());
        assert_eq!(Rc::strong_count(&slot.0), 1);
    }
}
