use std::rc::{Rc, Weak};

/// An object that wants to be told about every notified change to a [`LiveData`](crate::LiveData).
///
/// `observe` runs synchronously on whichever thread called `set`.
pub trait Observer<T> {
    fn observe(&self, data: &T);
}

/// A registered observer reference.
///
/// Slots are never pruned: an empty slot, or a weak slot whose target has been
/// dropped, stays in the sequence and is skipped during notification.
pub enum ObserverSlot<T> {
    /// Shares ownership of the observer with whoever else holds it
    Shared(Rc<dyn Observer<T>>),
    /// Does not keep the observer alive
    Weak(Weak<dyn Observer<T>>),
    Empty,
}

impl<T: 'static> ObserverSlot<T> {
    /// Slot holding a concrete observer type
    pub fn new<O: Observer<T> + 'static>(observer: Rc<O>) -> Self { ObserverSlot::Shared(observer) }

    /// Slot that does not keep the observer alive
    pub fn weak<O: Observer<T> + 'static>(observer: &Rc<O>) -> Self {
        let observer: Rc<dyn Observer<T>> = observer.clone();
        ObserverSlot::Weak(Rc::downgrade(&observer))
    }
}

impl<T> ObserverSlot<T> {
    pub fn empty() -> Self { ObserverSlot::Empty }

    /// The observer behind this slot, if there still is one
    pub fn upgrade(&self) -> Option<Rc<dyn Observer<T>>> {
        match self {
            ObserverSlot::Shared(observer) => Some(observer.clone()),
            ObserverSlot::Weak(observer) => observer.upgrade(),
            ObserverSlot::Empty => None,
        }
    }

    /// Invokes the observer if the slot is live. Returns whether it was invoked.
    pub(crate) fn notify(&self, data: &T) -> bool {
        match self.upgrade() {
            Some(observer) => {
                observer.observe(data);
                true
            }
            None => false,
        }
    }
}

impl<T> Clone for ObserverSlot<T> {
    fn clone(&self) -> Self {
        match self {
            ObserverSlot::Shared(observer) => ObserverSlot::Shared(observer.clone()),
            ObserverSlot::Weak(observer) => ObserverSlot::Weak(observer.clone()),
            ObserverSlot::Empty => ObserverSlot::Empty,
        }
    }
}

impl<T> std::fmt::Debug for ObserverSlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObserverSlot::Shared(_) => f.write_str("Shared"),
            ObserverSlot::Weak(observer) => write!(f, "Weak(alive: {})", observer.strong_count() > 0),
            ObserverSlot::Empty => f.write_str("Empty"),
        }
    }
}

impl<T> From<Rc<dyn Observer<T>>> for ObserverSlot<T> {
    fn from(observer: Rc<dyn Observer<T>>) -> Self { ObserverSlot::Shared(observer) }
}

impl<T> From<Option<Rc<dyn Observer<T>>>> for ObserverSlot<T> {
    fn from(observer: Option<Rc<dyn Observer<T>>>) -> Self {
        match observer {
            Some(observer) => ObserverSlot::Shared(observer),
            None => ObserverSlot::Empty,
        }
    }
}

impl<T> From<Weak<dyn Observer<T>>> for ObserverSlot<T> {
    fn from(observer: Weak<dyn Observer<T>>) -> Self { ObserverSlot::Weak(observer) }
}
