use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use yew::Callback;

/// Registered callbacks for identity changes, keyed by subscription id.
pub struct Listeners<T> {
    entries: RefCell<Vec<(u64, Callback<T>)>>,
    next_id: Cell<u64>,
}

/// Keeps a callback registered; dropping it unsubscribes.
pub struct Subscription<T> {
    registry: Weak<Listeners<T>>,
    id: u64,
}

impl<T> Subscription<T> {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.entries.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl<T: Clone> Listeners<T> {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            entries: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    pub fn subscribe(self: &Rc<Self>, callback: Callback<T>) -> Subscription<T> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, callback));
        Subscription {
            registry: Rc::downgrade(self),
            id,
        }
    }

    /// Emits `value` to one subscriber if it is still registered.
    pub fn deliver_to(&self, id: u64, value: T) -> bool {
        let callback = self
            .entries
            .borrow()
            .iter()
            .find(|(listener, _)| *listener == id)
            .map(|(_, cb)| cb.clone());
        match callback {
            Some(callback) => {
                callback.emit(value);
                true
            }
            None => false,
        }
    }

    /// Emits `value` to every subscriber. The list is copied first, so a
    /// callback may subscribe or unsubscribe while it runs.
    pub fn notify(&self, value: T) {
        let callbacks: Vec<Callback<T>> = self.entries.borrow().iter().map(|(_, cb)| cb.clone()).collect();
        for callback in callbacks {
            callback.emit(value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, Callback<u32>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Callback::from(move |value| sink.borrow_mut().push(value)))
    }

    #[test]
    fn notify_reaches_every_subscriber() {
        let listeners = Listeners::new();
        let (first, cb_first) = recorder();
        let (second, cb_second) = recorder();
        let _a = listeners.subscribe(cb_first);
        let _b = listeners.subscribe(cb_second);

        listeners.notify(7);
        assert_eq!(*first.borrow(), vec![7]);
        assert_eq!(*second.borrow(), vec![7]);
    }

    #[test]
    fn dropped_subscription_no_longer_hears_changes() {
        let listeners = Listeners::new();
        let (kept, cb_kept) = recorder();
        let (gone, cb_gone) = recorder();
        let _kept = listeners.subscribe(cb_kept);
        let dropped = listeners.subscribe(cb_gone);

        listeners.notify(1);
        drop(dropped);
        listeners.notify(2);

        assert_eq!(*kept.borrow(), vec![1, 2]);
        assert_eq!(*gone.borrow(), vec![1]);
    }

    #[test]
    fn late_subscriber_gets_exactly_one_delivery() {
        let listeners = Listeners::new();
        let (seen, callback) = recorder();
        let subscription = listeners.subscribe(callback);
        assert!(seen.borrow().is_empty());

        assert!(listeners.deliver_to(subscription.id(), 3));
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn delivery_after_unsubscribe_is_skipped() {
        let listeners = Listeners::new();
        let (seen, callback) = recorder();
        let subscription = listeners.subscribe(callback);
        let id = subscription.id();
        drop(subscription);

        assert!(!listeners.deliver_to(id, 3));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn subscription_outliving_the_registry_drops_cleanly() {
        let listeners = Listeners::new();
        let (_, callback) = recorder();
        let subscription = listeners.subscribe(callback);
        drop(listeners);
        drop(subscription);
    }
}
