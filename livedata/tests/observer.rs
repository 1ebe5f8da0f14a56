mod common;
use common::watcher;
use livedata::*;
use std::rc::Rc;

struct Named<F: Fn(String)> {
    name: &'static str,
    accumulate: F,
}

impl<F: Fn(String)> Observer<i32> for Named<F> {
    fn observe(&self, data: &i32) { (self.accumulate)(format!("{}: {}", self.name, data)) }
}

#[test]
fn test_callbacks_run_before_observers() {
    let mut data = LiveData::new(0);
    let (accumulate, check) = watcher();

    // observers registered first still run after every callback
    data.register_observer(ObserverSlot::new(Rc::new(Named { name: "observer 1", accumulate: accumulate.clone() })));
    data.register_observer(ObserverSlot::new(Rc::new(Named { name: "observer 2", accumulate: accumulate.clone() })));
    {
        let accumulate = accumulate.clone();
        data.register_callback(move |value: &i32| accumulate(format!("callback 1: {value}")));
    }
    data.register_callback(move |value: &i32| accumulate(format!("callback 2: {value}")));

    data.set(5);
    assert_eq!(check(), ["callback 1: 5", "callback 2: 5", "observer 1: 5", "observer 2: 5"]);

    data.assign(6);
    assert_eq!(check(), ["callback 1: 6", "callback 2: 6", "observer 1: 6", "observer 2: 6"]);
}

#[test]
fn test_empty_observer_is_skipped() {
    let mut data = LiveData::new(0);
    let (accumulate, check) = watcher();

    data.register_observer(ObserverSlot::empty());
    data.register_observer(Option::<Rc<dyn Observer<i32>>>::None);
    data.register_observer(ObserverSlot::new(Rc::new(Named { name: "live", accumulate: accumulate.clone() })));
    data.register_callback(move |value: &i32| accumulate(format!("callback: {value}")));

    data.set(1);
    assert_eq!(check(), ["callback: 1", "live: 1"]);
    assert_eq!(data.observer_count(), 3);
}

#[test]
fn test_container_shares_observer_ownership() {
    let mut data = LiveData::new(0);
    let (accumulate, check) = watcher();

    let observer: Rc<dyn Observer<i32>> = Rc::new(Named { name: "shared", accumulate });
    data.register_observer(observer.clone());
    assert_eq!(Rc::strong_count(&observer), 2);

    let weak = Rc::downgrade(&observer);
    drop(observer);

    // still alive through the container
    data.set(3);
    assert_eq!(check(), ["shared: 3"]);

    data.clear_listeners();
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_dropped_weak_observer_is_skipped() {
    let mut data = LiveData::new(0);
    let (accumulate, check) = watcher();

    let transient = Rc::new(Named { name: "transient", accumulate: accumulate.clone() });
    data.register_observer(ObserverSlot::weak(&transient));
    data.register_observer(ObserverSlot::new(Rc::new(Named { name: "durable", accumulate })));

    data.set(1);
    assert_eq!(check(), ["transient: 1", "durable: 1"]);

    drop(transient);
    data.set(2);
    assert_eq!(check(), ["durable: 2"]);
    assert_eq!(data.observer_count(), 2);
}

#[test]
fn test_same_observer_registered_twice() {
    let mut data = LiveData::new(0);
    let (accumulate, check) = watcher();

    let observer: Rc<dyn Observer<i32>> = Rc::new(Named { name: "twice", accumulate });
    data.register_observer(observer.clone());
    data.register_observer(observer);

    data.set(9);
    assert_eq!(check(), ["twice: 9", "twice: 9"]);
}
