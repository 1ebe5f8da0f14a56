use std::{cell::RefCell, rc::Rc};

/// Returns a recording closure and a checker that drains everything recorded so far
#[allow(unused)]
pub fn watcher<T: 'static>() -> (impl Fn(T) + Clone, impl Fn() -> Vec<T>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let watcher = {
        let changes = changes.clone();
        move |value: T| changes.borrow_mut().push(value)
    };

    let check = move || changes.borrow_mut().drain(..).collect::<Vec<T>>();

    (watcher, check)
}

#[allow(unused)]
pub fn init_tracing() { let _ = tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE).with_test_writer().try_init(); }
