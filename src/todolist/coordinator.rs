//! # Coordinator
//!
//! Wires one [`Store`] to one [`Presenter`]:
//!
//! - the presenter's render entry point becomes the store's single observer, so
//!   every change is redrawn;
//! - the coordinator itself is the [`IntentHandler`], mapping each intent to one
//!   store operation.
//!
//! | Intent            | Store operation     |
//! |-------------------|---------------------|
//! | `submit_new_text` | `create`            |
//! | `request_delete`  | `delete`            |
//! | `request_toggle`  | `toggle_complete`   |
//! | `request_edit`    | `update`            |
//!
//! The presenter is shared with the observer closure through `Rc<RefCell<_>>`.
//! Intents never hold a presenter borrow while they reach the store, so the
//! observer's `borrow_mut` cannot collide.

use crate::model::TodoId;
use crate::persistence::Persistence;
use crate::store::Store;
use crate::view::{IntentHandler, Presenter};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use tracing::debug;

/// Owns the store and the presenter it keeps up to date.
pub struct Coordinator<P: Persistence, V: Presenter + 'static> {
    store: Store<P>,
    presenter: Rc<RefCell<V>>,
}

impl<P: Persistence, V: Presenter + 'static> Coordinator<P, V> {
    /// Subscribes `presenter` to `store`. Subscription renders the current list
    /// right away, which is the initial render.
    pub fn new(mut store: Store<P>, presenter: V) -> Self {
        let presenter = Rc::new(RefCell::new(presenter));
        let observer = Rc::clone(&presenter);
        store.subscribe(move |todos| observer.borrow_mut().render(todos));
        debug!(count = store.len(), "coordinator wired");
        Self { store, presenter }
    }

    /// Redraws the current list without changing it.
    pub fn refresh(&self) {
        self.presenter.borrow_mut().render(self.store.todos());
    }

    pub fn store(&self) -> &Store<P> {
        &self.store
    }

    pub fn presenter(&self) -> Ref<'_, V> {
        self.presenter.borrow()
    }

    pub fn presenter_mut(&self) -> RefMut<'_, V> {
        self.presenter.borrow_mut()
    }
}

impl<P: Persistence, V: Presenter + 'static> IntentHandler for Coordinator<P, V> {
    fn submit_new_text(&mut self, text: String) {
        self.store.create(&text);
    }

    fn request_delete(&mut self, id: TodoId) {
        self.store.delete(id);
    }

    fn request_toggle(&mut self, id: TodoId) {
        self.store.toggle_complete(id);
    }

    fn request_edit(&mut self, id: TodoId, text: String) {
        self.store.update(id, &text);
    }
}
