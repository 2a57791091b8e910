use crate::store::NavStore;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a [`NavStore`].
///
/// The store is only ever touched from the UI event-handling thread,
/// so a plain `Rc<RefCell<_>>` is sufficient; no locking is needed.
pub type NavHandle = Rc<RefCell<NavStore>>;
