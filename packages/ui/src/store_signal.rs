//! Reactive bridge between a [`ResourceStore`] and the renderer.
//!
//! The store itself is framework-free; components hold it through this
//! wrapper, which mirrors every state change into a [`Signal`] so tables
//! re-render. The mirror raises the loading flag before the request starts
//! and snapshots the store when it settles.

use dioxus::prelude::*;
use store::{IdOf, ResourceClient, ResourceStore, StoreState};

pub struct StoreSignal<C: ResourceClient + 'static> {
    store: ResourceStore<C>,
    state: Signal<StoreState<C::Record>>,
}

impl<C: ResourceClient + Clone + 'static> Clone for StoreSignal<C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            state: self.state,
        }
    }
}

impl<C: ResourceClient + Clone + 'static> StoreSignal<C> {
    /// Wrap a store. Must be called inside a component (allocates a signal).
    pub fn new(store: ResourceStore<C>) -> Self {
        let state = Signal::new(store.snapshot());
        Self { store, state }
    }

    /// Current state; reading it subscribes the component to changes.
    pub fn state(&self) -> StoreState<C::Record> {
        self.state.read().clone()
    }

    pub async fn fetch_all(&self) {
        let mut state = self.state;
        state.write().is_loading = true;
        self.store.fetch_all().await;
        state.set(self.store.snapshot());
    }

    pub async fn fetch_one(&self, id: IdOf<C>) {
        let mut state = self.state;
        state.write().is_loading = true;
        self.store.fetch_one(id).await;
        state.set(self.store.snapshot());
    }

    pub async fn create(&self, req: C::Create) -> bool {
        let mut state = self.state;
        state.write().is_loading = true;
        let accepted = self.store.create(req).await;
        state.set(self.store.snapshot());
        accepted
    }

    pub async fn update(&self, id: IdOf<C>, req: C::Update) -> bool {
        let mut state = self.state;
        state.write().is_loading = true;
        let accepted = self.store.update(id, req).await;
        state.set(self.store.snapshot());
        accepted
    }

    pub async fn delete(&self, id: IdOf<C>) -> bool {
        let mut state = self.state;
        state.write().is_loading = true;
        let accepted = self.store.delete(id).await;
        state.set(self.store.snapshot());
        accepted
    }

    pub fn set_selected(&self, record: Option<C::Record>) {
        self.store.set_selected(record);
        self.sync();
    }

    pub fn clear_error(&self) {
        self.store.clear_error();
        self.sync();
    }

    fn sync(&self) {
        let mut state = self.state;
        state.set(self.store.snapshot());
    }
}
