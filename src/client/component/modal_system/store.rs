use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use dioxus::prelude::*;

use super::state::ModalState;

/// Container holding the `ModalState` of one modal instance.
///
/// Both accessors return `None` once the backing state has been torn down, so
/// writes that arrive after unmount (an `on_submit` future resolving late)
/// become no-ops instead of panics.
pub trait StateStore: Clone + 'static {
    fn inspect<R>(&self, f: impl FnOnce(&ModalState) -> R) -> Option<R>;

    fn modify<R>(&self, f: impl FnOnce(&mut ModalState) -> R) -> Option<R>;
}

impl StateStore for Signal<ModalState> {
    fn inspect<R>(&self, f: impl FnOnce(&ModalState) -> R) -> Option<R> {
        self.try_peek().ok().map(|state| f(&state))
    }

    fn modify<R>(&self, f: impl FnOnce(&mut ModalState) -> R) -> Option<R> {
        let mut signal = *self;
        signal.try_write().ok().map(|mut state| f(&mut state))
    }
}

impl StateStore for Rc<RefCell<ModalState>> {
    fn inspect<R>(&self, f: impl FnOnce(&ModalState) -> R) -> Option<R> {
        self.try_borrow().ok().map(|state| f(&state))
    }

    fn modify<R>(&self, f: impl FnOnce(&mut ModalState) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }
}

impl StateStore for Weak<RefCell<ModalState>> {
    fn inspect<R>(&self, f: impl FnOnce(&ModalState) -> R) -> Option<R> {
        self.upgrade()?.inspect(f)
    }

    fn modify<R>(&self, f: impl FnOnce(&mut ModalState) -> R) -> Option<R> {
        self.upgrade()?.modify(f)
    }
}
