//! Type aliases for shared state.
//!
//! A project and every editing surface opened on one of its levels look at
//! the same `Level` value. Everything runs on the one interaction thread, so
//! `Rc<RefCell<T>>` is enough.
//!
//! ```rust,ignore
//! use staredit_core::types::*;
//!
//! let level: Shared<Level> = shared(Level::default());
//! level.borrow_mut().name = "Asteroid Belt".to_string();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in [`Shared`].
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
