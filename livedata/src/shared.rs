use std::{cell::RefCell, rc::Rc};

use crate::{LiveData, LiveDataError, listener::IntoCallback, observer::ObserverSlot};

/// A cloneable handle to a [`LiveData`].
///
/// Clones share the same value and listeners, so a listener can hold a handle back to the
/// container that notifies it. Any access made while the container is in the middle of a
/// notification pass fails with [`LiveDataError::Reentrant`] instead of observing a
/// half-finished pass.
pub struct SharedLiveData<T>(Rc<RefCell<LiveData<T>>>);

impl<T> Clone for SharedLiveData<T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T: 'static> SharedLiveData<T> {
    pub fn new(value: T) -> Self { Self(Rc::new(RefCell::new(LiveData::new(value)))) }

    /// Replaces the value and notifies all listeners
    pub fn set(&self, value: T) -> Result<(), LiveDataError> {
        self.borrow_mut()?.set(value);
        Ok(())
    }

    /// Replaces the value without notifying anyone
    pub fn set_quietly(&self, value: T) -> Result<(), LiveDataError> {
        self.borrow_mut()?.set_quietly(value);
        Ok(())
    }

    /// Same as [`set`](Self::set), returning the handle for chaining
    pub fn assign(&self, value: T) -> Result<&Self, LiveDataError> {
        self.set(value)?;
        Ok(self)
    }

    /// Mutates the value in place, then notifies all listeners
    pub fn update(&self, f: impl FnOnce(&mut T)) -> Result<(), LiveDataError> {
        self.borrow_mut()?.update(f);
        Ok(())
    }

    pub fn register_callback<F>(&self, callback: F) -> Result<(), LiveDataError>
    where F: FnMut(&T) + 'static {
        self.borrow_mut()?.register_callback(callback);
        Ok(())
    }

    pub fn register_listener<L>(&self, listener: L) -> Result<(), LiveDataError>
    where L: IntoCallback<T> {
        self.borrow_mut()?.register_listener(listener);
        Ok(())
    }

    pub fn register_observer<O>(&self, observer: O) -> Result<(), LiveDataError>
    where O: Into<ObserverSlot<T>> {
        self.borrow_mut()?.register_observer(observer);
        Ok(())
    }

    pub fn clear_listeners(&self) -> Result<(), LiveDataError> {
        self.borrow_mut()?.clear_listeners();
        Ok(())
    }
}

impl<T> SharedLiveData<T> {
    /// Calls a closure with a borrow of the current value
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, LiveDataError> {
        let data = self.0.try_borrow().inspect_err(|_| tracing::warn!("SharedLiveData read rejected: notification in progress"))?;
        Ok(f(data.get()))
    }

    /// Calls a closure with mutable access to the value. Does not notify.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R, LiveDataError> { Ok(f(self.borrow_mut()?.get_mut())) }

    /// Whether both handles refer to the same container
    pub fn ptr_eq(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }

    fn borrow_mut(&self) -> Result<std::cell::RefMut<'_, LiveData<T>>, LiveDataError> {
        Ok(self.0.try_borrow_mut().inspect_err(|_| tracing::warn!("SharedLiveData write rejected: notification in progress"))?)
    }
}

impl<T: Clone> SharedLiveData<T> {
    /// Returns a clone of the current value
    pub fn value(&self) -> Result<T, LiveDataError> { self.with(T::clone) }
}

impl<T: Default + 'static> Default for SharedLiveData<T> {
    fn default() -> Self { Self::new(T::default()) }
}

impl<T: 'static> From<LiveData<T>> for SharedLiveData<T> {
    fn from(data: LiveData<T>) -> Self { Self(Rc::new(RefCell::new(data))) }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedLiveData<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.try_borrow() {
            Ok(data) => f.debug_tuple("SharedLiveData").field(&*data).finish(),
            Err(_) => f.write_str("SharedLiveData(<notifying>)"),
        }
    }
}
