use crate::{
    listener::{Callback, IntoCallback},
    observer::ObserverSlot,
};

/// An observable value.
///
/// Holds a single `T` and notifies its listeners whenever the value is replaced through
/// [`set`](Self::set) or [`assign`](Self::assign). Two kinds of listener can be registered:
/// callbacks (closures, channel senders) and [`Observer`](crate::Observer) objects held by
/// shared reference. Each notification pass runs every callback in registration order, then
/// every live observer in registration order.
///
/// Mutation takes `&mut self`, so a listener cannot reach back into the container that is
/// notifying it. Wrap the container in a [`SharedLiveData`](crate::SharedLiveData) when listeners
/// need a handle to it.
pub struct LiveData<T> {
    value: T,
    callbacks: Vec<Callback<T>>,
    observers: Vec<ObserverSlot<T>>,
}

impl<T: 'static> LiveData<T> {
    /// Creates a container holding `value`. No listeners are notified.
    pub fn new(value: T) -> Self { Self { value, callbacks: Vec::new(), observers: Vec::new() } }

    /// Creates a container whose initial value is built from `args`
    pub fn from_args<A>(args: A) -> Self
    where T: From<A> {
        Self::new(T::from(args))
    }

    /// Registers a closure to be called with the new value on every notified change.
    /// Duplicates are allowed and there is no way to remove a single callback.
    pub fn register_callback<F>(&mut self, callback: F)
    where F: FnMut(&T) + 'static {
        self.callbacks.push(Box::new(callback));
    }

    /// Registers anything convertible into a callback, such as a channel sender
    pub fn register_listener<L>(&mut self, listener: L)
    where L: IntoCallback<T> {
        self.callbacks.push(listener.into_callback());
    }

    /// Registers an observer. Empty slots are accepted and skipped during notification.
    pub fn register_observer<O>(&mut self, observer: O)
    where O: Into<ObserverSlot<T>> {
        self.observers.push(observer.into());
    }

    /// Replaces the value, then notifies all listeners before returning
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Replaces the value without notifying anyone
    pub fn set_quietly(&mut self, value: T) { self.value = value; }

    /// Same as [`set`](Self::set), returning the container for chaining
    pub fn assign(&mut self, value: T) -> &mut Self {
        self.set(value);
        self
    }

    /// Mutates the value in place, then notifies all listeners
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        self.notify();
    }

    /// Runs a notification pass with the current value.
    ///
    /// Useful after editing the value through [`get_mut`](Self::get_mut).
    /// A panicking listener aborts the rest of the pass.
    pub fn notify(&mut self) {
        tracing::trace!(callbacks = self.callbacks.len(), observers = self.observers.len(), "LiveData notifying listeners");

        for callback in self.callbacks.iter_mut() {
            callback(&self.value);
        }

        let mut skipped = 0;
        for observer in self.observers.iter() {
            if !observer.notify(&self.value) {
                skipped += 1;
            }
        }
        if skipped > 0 {
            tracing::trace!(skipped, "LiveData skipped empty observer slots");
        }
    }

    /// Removes every callback and observer. The value is untouched.
    pub fn clear_listeners(&mut self) {
        tracing::debug!(callbacks = self.callbacks.len(), observers = self.observers.len(), "LiveData clearing listeners");
        self.callbacks.clear();
        self.observers.clear();
    }
}

impl<T> LiveData<T> {
    /// Borrows the current value
    pub fn get(&self) -> &T { &self.value }

    /// Mutable access to the current value.
    ///
    /// Changes made through this reference do NOT notify listeners. Call
    /// [`notify`](Self::notify) afterwards, or use [`update`](Self::update), if they should.
    pub fn get_mut(&mut self) -> &mut T { &mut self.value }

    /// Number of registered callbacks
    pub fn callback_count(&self) -> usize { self.callbacks.len() }

    /// Number of registered observer slots, including empty and dead ones
    pub fn observer_count(&self) -> usize { self.observers.len() }

    /// Consumes the container, dropping its listeners and returning the value
    pub fn into_inner(self) -> T { self.value }
}

impl<T: Default + 'static> Default for LiveData<T> {
    fn default() -> Self { Self::new(T::default()) }
}

impl<T: 'static> From<T> for LiveData<T> {
    fn from(value: T) -> Self { Self::new(value) }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LiveData<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveData")
            .field("value", &self.value)
            .field("callbacks", &self.callbacks.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
