/*!
An observable value container.

A [`LiveData<T>`] holds one value and tells its listeners when that value changes.

# Design requirements:
- Notification is synchronous: `set` returns only after every listener has run
- Callbacks run first, in registration order, then observers, in registration order
- `set_quietly` and `get_mut` change the value without notifying anyone
- Observers are held by shared reference and may be empty or weak; dead slots are skipped, never pruned
- Listeners can only be removed all at once

# Nomenclature:
- callback - a closure (or channel sender) called with `&T`
- observer - any `Rc<dyn Observer<T>>`, called through [`Observer::observe`]
- notification pass - one run over all callbacks and observers

# Basic usage

```rust
use livedata::*;
use std::{cell::RefCell, rc::Rc};

let log = Rc::new(RefCell::new(Vec::new()));
let mut data: LiveData<i32> = LiveData::default();
{
    let log = log.clone();
    data.register_callback(move |_: &i32| log.borrow_mut().push("A"));
}
{
    let log = log.clone();
    data.register_callback(move |_: &i32| log.borrow_mut().push("B"));
}

data.set(5);
assert_eq!(*log.borrow(), ["A", "B"]);
assert_eq!(*data.get(), 5);

data.set_quietly(9);
assert_eq!(*log.borrow(), ["A", "B"]);
assert_eq!(*data.get(), 9);

data.clear_listeners();
data.set(1);
assert_eq!(*log.borrow(), ["A", "B"]);
assert_eq!(*data.get(), 1);
```

# Observer usage

```rust
use livedata::*;
use std::{cell::Cell, rc::Rc};

struct Thermostat {
    heating: Cell<bool>,
}

impl Observer<f32> for Thermostat {
    fn observe(&self, celsius: &f32) { self.heating.set(*celsius < 18.0); }
}

let thermostat = Rc::new(Thermostat { heating: Cell::new(false) });
let mut temperature = LiveData::new(21.0_f32);
temperature.register_observer(ObserverSlot::new(thermostat.clone()));

temperature.assign(16.5).assign(17.0);
assert!(thermostat.heating.get());
```
*/

mod error;
mod listener;
mod observer;
mod shared;
mod value;

pub use error::*;
pub use listener::*;
pub use observer::*;
pub use shared::*;
pub use value::*;
