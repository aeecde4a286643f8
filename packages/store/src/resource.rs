//! # Resource stores — async CRUD lifecycles over one remote collection
//!
//! This module is the core of LiftDesk's state layer. [`ResourceStore`] keeps a
//! local cache of one resource's records (users, memberships, schedules,
//! exercises) consistent with the remote API, and exposes the request
//! lifecycle (loading flag, last error, current selection) for the UI to
//! render. All network traffic goes through the [`ResourceClient`] trait, so
//! the same engine drives every resource and tests run against an in-memory
//! fake.
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`fetch_all`](ResourceStore::fetch_all) | Replaces the cached collection wholesale with the server's list. |
//! | [`fetch_one`](ResourceStore::fetch_one) | Loads a single record into `selected`; the collection is untouched. |
//! | [`create`](ResourceStore::create) | Posts a create request and appends the server-returned record (with its server-assigned id). |
//! | [`update`](ResourceStore::update) | Issues the update, then refetches the record by id to confirm, and only then patches the cache. The server does not return the updated body, so the refetch is the source of truth. |
//! | [`delete`](ResourceStore::delete) | Removes the record from the cache after the server confirms the delete. |
//!
//! Mutating operations return `true` iff the server accepted the change.
//! Failures never propagate: they are reduced to a message in
//! [`StoreState::error`] and the operation returns `false`.
//!
//! ## Overlapping invocations
//!
//! Operations are not queued. Each invocation takes a per-store sequence
//! number when it starts; a completion only writes its result if it is still
//! the newest invocation. A response that arrives after a newer operation has
//! already started is discarded — it cannot resurrect a deleted record or
//! strand the loading flag. There is no cancellation: superseded requests run
//! to completion and report their network outcome, their state writes are
//! just dropped.

use std::sync::{Arc, Mutex};

use crate::error::ClientError;

/// A domain record managed by a [`ResourceStore`].
///
/// Identity is server-assigned; a record only exists locally once a server
/// response carried it.
pub trait Record: Clone {
    type Id: Clone + PartialEq;

    fn id(&self) -> Self::Id;
}

/// Identifier type of a client's record.
pub type IdOf<C> = <<C as ResourceClient>::Record as Record>::Id;

/// Async interface to one remote resource collection.
///
/// One binding exists per resource, all provided by a single generic HTTP
/// endpoint in the `api` crate. Implementations reduce every failure to a
/// [`ClientError`] before it reaches the store.
pub trait ResourceClient {
    type Record: Record;
    type Create;
    type Update;

    /// Plural label used in failure messages ("users", "memberships").
    fn resource(&self) -> &'static str;

    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Self::Record>, ClientError>>;
    fn get(
        &self,
        id: &IdOf<Self>,
    ) -> impl std::future::Future<Output = Result<Self::Record, ClientError>>;
    fn create(
        &self,
        req: &Self::Create,
    ) -> impl std::future::Future<Output = Result<Self::Record, ClientError>>;
    fn update(
        &self,
        id: &IdOf<Self>,
        req: &Self::Update,
    ) -> impl std::future::Future<Output = Result<(), ClientError>>;
    fn delete(
        &self,
        id: &IdOf<Self>,
    ) -> impl std::future::Future<Output = Result<(), ClientError>>;
}

/// Snapshot of a store's observable state.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreState<R> {
    /// Records in fetch order. Replaced wholesale by `fetch_all`, patched in
    /// place by mutations.
    pub collection: Vec<R>,
    /// True from the start of the newest invocation until it settles.
    pub is_loading: bool,
    /// Last failure message. Sticky until cleared or overwritten.
    pub error: Option<String>,
    /// Record focused for edit, if any.
    pub selected: Option<R>,
}

impl<R> Default for StoreState<R> {
    fn default() -> Self {
        Self {
            collection: Vec::new(),
            is_loading: false,
            error: None,
            selected: None,
        }
    }
}

struct Inner<R> {
    state: StoreState<R>,
    /// Sequence number of the newest invocation.
    newest: u64,
}

/// Local cache plus request lifecycle for one remote resource.
///
/// State lives behind `Arc<Mutex<_>>` so handles are cheap to clone into
/// event handlers and spawned futures; the lock is never held across an
/// await.
pub struct ResourceStore<C: ResourceClient> {
    client: C,
    inner: Arc<Mutex<Inner<C::Record>>>,
}

impl<C: ResourceClient + Clone> Clone for ResourceStore<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: ResourceClient> ResourceStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            inner: Arc::new(Mutex::new(Inner {
                state: StoreState::default(),
                newest: 0,
            })),
        }
    }

    /// Clone of the current state, for rendering or assertions.
    pub fn snapshot(&self) -> StoreState<C::Record> {
        self.inner.lock().unwrap().state.clone()
    }

    /// Focus a record for editing, or clear the focus. No network effect.
    pub fn set_selected(&self, record: Option<C::Record>) {
        self.inner.lock().unwrap().state.selected = record;
    }

    /// Dismiss the last failure message.
    pub fn clear_error(&self) {
        self.inner.lock().unwrap().state.error = None;
    }

    /// Replace the cached collection with the server's current list.
    ///
    /// On failure the collection is left as it was and the failure message
    /// lands in [`StoreState::error`].
    pub async fn fetch_all(&self) {
        let seq = self.begin(true);
        match self.client.list().await {
            Ok(records) => {
                self.settle(seq, |state| state.collection = records);
            }
            Err(err) => self.fail(seq, "fetch", err),
        }
    }

    /// Load a single record into `selected`. The collection is untouched.
    pub async fn fetch_one(&self, id: IdOf<C>) {
        let seq = self.begin(true);
        match self.client.get(&id).await {
            Ok(record) => {
                self.settle(seq, |state| state.selected = Some(record));
            }
            Err(err) => self.fail(seq, "fetch", err),
        }
    }

    /// Create a record remotely and append the server's response (which
    /// carries the server-assigned id) to the collection.
    pub async fn create(&self, req: C::Create) -> bool {
        let seq = self.begin(false);
        match self.client.create(&req).await {
            Ok(record) => {
                self.settle(seq, |state| state.collection.push(record));
                true
            }
            Err(err) => {
                self.fail(seq, "create", err);
                false
            }
        }
    }

    /// Update a record remotely, then refetch it by id and patch the cache
    /// with the confirmed result.
    ///
    /// The cache is only touched after the confirming refetch succeeds. If
    /// the update lands but the refetch fails, the server has changed while
    /// the local copy has not — the collection stays byte-for-byte as it was
    /// and stays stale until the next `fetch_all`.
    pub async fn update(&self, id: IdOf<C>, req: C::Update) -> bool {
        let seq = self.begin(false);
        let confirmed = match self.client.update(&id, &req).await {
            Ok(()) => self.client.get(&id).await,
            Err(err) => Err(err),
        };
        match confirmed {
            Ok(record) => {
                self.settle(seq, |state| {
                    if let Some(slot) =
                        state.collection.iter_mut().find(|r| r.id() == id)
                    {
                        *slot = record.clone();
                    }
                    if state.selected.as_ref().is_some_and(|s| s.id() == id) {
                        state.selected = Some(record);
                    }
                });
                true
            }
            Err(err) => {
                self.fail(seq, "update", err);
                false
            }
        }
    }

    /// Delete a record remotely and drop it from the cache. Clears the
    /// selection if it pointed at the deleted record.
    pub async fn delete(&self, id: IdOf<C>) -> bool {
        let seq = self.begin(false);
        match self.client.delete(&id).await {
            Ok(()) => {
                self.settle(seq, |state| {
                    state.collection.retain(|r| r.id() != id);
                    if state.selected.as_ref().is_some_and(|s| s.id() == id) {
                        state.selected = None;
                    }
                });
                true
            }
            Err(err) => {
                self.fail(seq, "delete", err);
                false
            }
        }
    }

    /// Start an invocation: bump the sequence number and raise the loading
    /// flag. Fetches also clear any previous failure message.
    fn begin(&self, clear_error: bool) -> u64 {
        let mut inner = self.inner.lock().unwrap();
        inner.newest += 1;
        inner.state.is_loading = true;
        if clear_error {
            inner.state.error = None;
        }
        inner.newest
    }

    /// Apply a completion if `seq` is still the newest invocation. Returns
    /// whether the write was applied.
    fn settle(
        &self,
        seq: u64,
        apply: impl FnOnce(&mut StoreState<C::Record>),
    ) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.newest != seq {
            return false;
        }
        inner.state.is_loading = false;
        apply(&mut inner.state);
        true
    }

    fn fail(&self, seq: u64, op: &str, err: ClientError) {
        let message = match &err {
            ClientError::Status(code) => {
                format!("Failed to {op} {} (status {code})", self.client.resource())
            }
            other => other.to_string(),
        };
        tracing::warn!(resource = self.client.resource(), error = %err, "{op} failed");
        self.settle(seq, |state| state.error = Some(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::Semaphore;

    #[derive(Clone, Debug, PartialEq)]
    struct Member {
        id: i64,
        name: String,
    }

    impl Record for Member {
        type Id = i64;

        fn id(&self) -> i64 {
            self.id
        }
    }

    fn member(id: i64, name: &str) -> Member {
        Member {
            id,
            name: name.to_string(),
        }
    }

    /// Blocks client calls between "request sent" and "response received"
    /// so tests can observe in-flight state. Each `gate_next` arms the gate
    /// for one more call.
    struct Gate {
        armed: Mutex<u32>,
        entered: Semaphore,
        release: Semaphore,
    }

    impl Default for Gate {
        fn default() -> Self {
            Self {
                armed: Mutex::new(0),
                entered: Semaphore::new(0),
                release: Semaphore::new(0),
            }
        }
    }

    /// In-memory stand-in for the HTTP collaborator. Keeps a "remote"
    /// collection and can be told to fail or stall the next call.
    #[derive(Clone, Default)]
    struct MemberApi {
        remote: Arc<Mutex<Vec<Member>>>,
        failures: Arc<Mutex<HashMap<&'static str, ClientError>>>,
        gate: Arc<Gate>,
    }

    impl MemberApi {
        fn with_remote(members: Vec<Member>) -> Self {
            let api = Self::default();
            api.set_remote(members);
            api
        }

        fn set_remote(&self, members: Vec<Member>) {
            *self.remote.lock().unwrap() = members;
        }

        fn fail_next(&self, op: &'static str, err: ClientError) {
            self.failures.lock().unwrap().insert(op, err);
        }

        fn gate_next(&self) {
            *self.gate.armed.lock().unwrap() += 1;
        }

        /// Wait until the gated call is in flight.
        async fn entered(&self) {
            self.gate.entered.acquire().await.unwrap().forget();
        }

        /// Let the gated call complete.
        fn release(&self) {
            self.gate.release.add_permits(1);
        }

        async fn pass_gate(&self) {
            let armed = {
                let mut remaining = self.gate.armed.lock().unwrap();
                if *remaining > 0 {
                    *remaining -= 1;
                    true
                } else {
                    false
                }
            };
            if armed {
                self.gate.entered.add_permits(1);
                self.gate.release.acquire().await.unwrap().forget();
            }
        }

        fn take_failure(&self, op: &'static str) -> Option<ClientError> {
            self.failures.lock().unwrap().remove(op)
        }
    }

    impl ResourceClient for MemberApi {
        type Record = Member;
        type Create = String;
        type Update = String;

        fn resource(&self) -> &'static str {
            "members"
        }

        async fn list(&self) -> Result<Vec<Member>, ClientError> {
            self.pass_gate().await;
            if let Some(err) = self.take_failure("list") {
                return Err(err);
            }
            Ok(self.remote.lock().unwrap().clone())
        }

        async fn get(&self, id: &i64) -> Result<Member, ClientError> {
            self.pass_gate().await;
            if let Some(err) = self.take_failure("get") {
                return Err(err);
            }
            self.remote
                .lock()
                .unwrap()
                .iter()
                .find(|m| m.id == *id)
                .cloned()
                .ok_or(ClientError::Status(404))
        }

        async fn create(&self, name: &String) -> Result<Member, ClientError> {
            self.pass_gate().await;
            if let Some(err) = self.take_failure("create") {
                return Err(err);
            }
            let mut remote = self.remote.lock().unwrap();
            let id = remote.iter().map(|m| m.id).max().unwrap_or(0) + 1;
            let created = member(id, name);
            remote.push(created.clone());
            Ok(created)
        }

        async fn update(&self, id: &i64, name: &String) -> Result<(), ClientError> {
            self.pass_gate().await;
            if let Some(err) = self.take_failure("update") {
                return Err(err);
            }
            let mut remote = self.remote.lock().unwrap();
            match remote.iter_mut().find(|m| m.id == *id) {
                Some(m) => {
                    m.name = name.clone();
                    Ok(())
                }
                None => Err(ClientError::Status(404)),
            }
        }

        async fn delete(&self, id: &i64) -> Result<(), ClientError> {
            self.pass_gate().await;
            if let Some(err) = self.take_failure("delete") {
                return Err(err);
            }
            self.remote.lock().unwrap().retain(|m| m.id != *id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn fetch_all_replaces_collection() {
        let api = MemberApi::with_remote(vec![member(1, "Ada"), member(2, "Grace")]);
        let store = ResourceStore::new(api.clone());

        store.fetch_all().await;
        assert_eq!(store.snapshot().collection.len(), 2);

        // A shrunken server list replaces, never merges.
        api.set_remote(vec![member(3, "Linus")]);
        store.fetch_all().await;
        assert_eq!(store.snapshot().collection, vec![member(3, "Linus")]);
    }

    #[tokio::test]
    async fn fetch_all_failure_keeps_collection() {
        let api = MemberApi::with_remote(vec![member(1, "Ada")]);
        let store = ResourceStore::new(api.clone());
        store.fetch_all().await;

        api.fail_next("list", ClientError::Transport("connection refused".into()));
        store.fetch_all().await;

        let state = store.snapshot();
        assert_eq!(state.collection, vec![member(1, "Ada")]);
        assert_eq!(state.error.as_deref(), Some("connection refused"));
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn fetch_one_sets_selected_only() {
        let api = MemberApi::with_remote(vec![member(1, "Ada"), member(2, "Grace")]);
        let store = ResourceStore::new(api);

        store.fetch_one(2).await;

        let state = store.snapshot();
        assert_eq!(state.selected, Some(member(2, "Grace")));
        assert!(state.collection.is_empty());
    }

    #[tokio::test]
    async fn create_appends_server_assigned_record() {
        let api = MemberApi::with_remote(vec![member(1, "Ada")]);
        let store = ResourceStore::new(api);
        store.fetch_all().await;

        let ok = store.create("Grace".to_string()).await;

        assert!(ok);
        let state = store.snapshot();
        assert_eq!(state.collection, vec![member(1, "Ada"), member(2, "Grace")]);
    }

    #[tokio::test]
    async fn create_failure_returns_false_and_sets_error() {
        let api = MemberApi::with_remote(vec![]);
        let store = ResourceStore::new(api.clone());

        api.fail_next("create", ClientError::Status(400));
        let ok = store.create("Grace".to_string()).await;

        assert!(!ok);
        let state = store.snapshot();
        assert!(state.collection.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to create members (status 400)")
        );
    }

    #[tokio::test]
    async fn update_is_confirmed_by_refetch() {
        let api = MemberApi::with_remote(vec![member(1, "Ada"), member(2, "Grace")]);
        let store = ResourceStore::new(api);
        store.fetch_all().await;
        store.set_selected(Some(member(2, "Grace")));

        let ok = store.update(2, "Grace Hopper".to_string()).await;

        assert!(ok);
        let state = store.snapshot();
        assert_eq!(state.collection[1], member(2, "Grace Hopper"));
        assert_eq!(state.selected, Some(member(2, "Grace Hopper")));
        // the other record is untouched
        assert_eq!(state.collection[0], member(1, "Ada"));
    }

    #[tokio::test]
    async fn update_refetch_failure_leaves_cache_untouched() {
        let api = MemberApi::with_remote(vec![member(1, "Ada")]);
        let store = ResourceStore::new(api.clone());
        store.fetch_all().await;
        let before = store.snapshot().collection;

        // the update lands server-side, the confirming refetch does not
        api.fail_next("get", ClientError::Transport("connection reset".into()));
        let ok = store.update(1, "Ada Lovelace".to_string()).await;

        assert!(!ok);
        let state = store.snapshot();
        assert_eq!(state.collection, before);
        assert_eq!(state.error.as_deref(), Some("connection reset"));
        // the server did change; a later fetch_all observes it
        store.fetch_all().await;
        assert_eq!(
            store.snapshot().collection,
            vec![member(1, "Ada Lovelace")]
        );
    }

    #[tokio::test]
    async fn delete_removes_record_and_clears_selection() {
        let api = MemberApi::with_remote(vec![member(1, "Ada"), member(2, "Grace")]);
        let store = ResourceStore::new(api);
        store.fetch_all().await;
        store.set_selected(Some(member(1, "Ada")));

        let ok = store.delete(1).await;

        assert!(ok);
        let state = store.snapshot();
        assert_eq!(state.collection, vec![member(2, "Grace")]);
        assert_eq!(state.selected, None);
    }

    #[tokio::test]
    async fn delete_of_unselected_record_keeps_selection() {
        let api = MemberApi::with_remote(vec![member(1, "Ada"), member(2, "Grace")]);
        let store = ResourceStore::new(api);
        store.fetch_all().await;
        store.set_selected(Some(member(2, "Grace")));

        store.delete(1).await;

        assert_eq!(store.snapshot().selected, Some(member(2, "Grace")));
    }

    #[tokio::test]
    async fn loading_flag_brackets_every_operation() {
        let api = MemberApi::with_remote(vec![member(1, "Ada")]);
        let store = ResourceStore::new(api.clone());
        assert!(!store.snapshot().is_loading);

        api.gate_next();
        let running = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_all().await }
        });
        api.entered().await;
        assert!(store.snapshot().is_loading);

        api.release();
        running.await.unwrap();
        assert!(!store.snapshot().is_loading);
    }

    #[tokio::test]
    async fn error_is_sticky_until_cleared_or_overwritten() {
        let api = MemberApi::with_remote(vec![member(1, "Ada")]);
        let store = ResourceStore::new(api.clone());
        store.fetch_all().await;

        api.fail_next("delete", ClientError::Transport("boom".into()));
        store.delete(1).await;
        assert_eq!(store.snapshot().error.as_deref(), Some("boom"));

        // a successful mutation does not dismiss the message
        store.create("Grace".to_string()).await;
        assert_eq!(store.snapshot().error.as_deref(), Some("boom"));

        // the next failure overwrites it
        api.fail_next("create", ClientError::Transport("still down".into()));
        store.create("Linus".to_string()).await;
        assert_eq!(store.snapshot().error.as_deref(), Some("still down"));

        store.clear_error();
        assert_eq!(store.snapshot().error, None);
    }

    #[tokio::test]
    async fn superseded_completion_is_discarded() {
        let api = MemberApi::with_remote(vec![member(1, "Ada")]);
        let store = ResourceStore::new(api.clone());

        // first fetch stalls in flight
        api.gate_next();
        let stale = tokio::spawn({
            let store = store.clone();
            async move { store.fetch_all().await }
        });
        api.entered().await;

        // a newer fetch starts and completes while the first is parked
        api.set_remote(vec![member(2, "Grace")]);
        store.fetch_all().await;
        assert_eq!(store.snapshot().collection, vec![member(2, "Grace")]);

        // the stale response arrives last and must not win
        api.set_remote(vec![member(3, "Linus")]);
        api.release();
        stale.await.unwrap();

        let state = store.snapshot();
        assert_eq!(state.collection, vec![member(2, "Grace")]);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn stale_update_cannot_resurrect_a_deleted_record() {
        let api = MemberApi::with_remote(vec![member(1, "Ada")]);
        let store = ResourceStore::new(api.clone());
        store.fetch_all().await;

        // gate both halves of the update: the PUT, then the confirming GET
        api.gate_next();
        api.gate_next();
        let update = tokio::spawn({
            let store = store.clone();
            async move { store.update(1, "Ada Lovelace".to_string()).await }
        });
        api.entered().await;
        api.release();
        api.entered().await; // refetch now parked

        // a delete completes while the refetch is parked
        store.delete(1).await;
        assert!(store.snapshot().collection.is_empty());

        api.release();
        update.await.unwrap();
        assert!(store.snapshot().collection.is_empty());
    }
}
