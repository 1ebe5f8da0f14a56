/// A function-style listener, called with a borrow of the new value
pub type Callback<T> = Box<dyn FnMut(&T) + 'static>;

/// Trait for types that can be registered as callback listeners
pub trait IntoCallback<T> {
    fn into_callback(self) -> Callback<T>;
}

// Implementations for converting closures to Callback<T>
impl<F, T> IntoCallback<T> for F
where F: FnMut(&T) + 'static
{
    fn into_callback(self) -> Callback<T> { Box::new(self) }
}

// Forwards a clone of each new value into a std::sync::mpsc channel
impl<T: Clone + 'static> IntoCallback<T> for std::sync::mpsc::Sender<T> {
    fn into_callback(self) -> Callback<T> {
        Box::new(move |value: &T| {
            let _ = self.send(value.clone()); // Ignore send errors
        })
    }
}

// Forwards a clone of each new value into a tokio channel
#[cfg(feature = "tokio")]
impl<T: Clone + 'static> IntoCallback<T> for tokio::sync::mpsc::UnboundedSender<T> {
    fn into_callback(self) -> Callback<T> {
        Box::new(move |value: &T| {
            let _ = self.send(value.clone()); // Ignore send errors
        })
    }
}
