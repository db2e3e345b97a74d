//! Per-resource store
//!
//! Caches the current list page, the selected entity and the loading/error
//! flags for one resource. State is published through a `watch` channel so
//! any number of views can observe it; every mutation re-fetches the list.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use expertise_client::{ClientResult, HttpClient, Resource, ResourceApi};
use shared::{ListFilters, PageMeta, Record};
use tokio::sync::watch;

/// Lifecycle of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Snapshot of a store
#[derive(Debug, Clone)]
pub struct StoreState<E> {
    pub items: Vec<E>,
    pub selected: Option<E>,
    pub pagination: Option<PageMeta>,
    pub filters: ListFilters,
    /// List fetch in flight
    pub loading: bool,
    /// Single-entity fetch in flight
    pub loading_item: bool,
    pub saving: bool,
    /// Human-readable message of the last failure
    pub error: Option<String>,
    pub load_state: LoadState,
}

impl<E> Default for StoreState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            pagination: None,
            filters: ListFilters::default(),
            loading: false,
            loading_item: false,
            saving: false,
            error: None,
            load_state: LoadState::Idle,
        }
    }
}

pub struct ResourceStore<R: Resource, H: HttpClient> {
    api: ResourceApi<R, H>,
    state: watch::Sender<StoreState<R::Entity>>,
    /// Incremented on every list fetch; older responses are dropped
    generation: AtomicU64,
}

impl<R: Resource, H: HttpClient> ResourceStore<R, H> {
    pub fn new(api: ResourceApi<R, H>) -> Self {
        Self {
            api,
            state: watch::Sender::new(StoreState::default()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn from_http(http: Arc<H>) -> Self {
        Self::new(ResourceApi::new(http))
    }

    /// Initial filters (page size, relation filters...)
    pub fn with_filters(self, filters: ListFilters) -> Self {
        self.state.send_modify(|s| s.filters = filters);
        self
    }

    pub fn api(&self) -> &ResourceApi<R, H> {
        &self.api
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState<R::Entity>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> StoreState<R::Entity> {
        self.state.borrow().clone()
    }

    pub fn filters(&self) -> ListFilters {
        self.state.borrow().filters.clone()
    }

    // ============ Local setters ============

    pub fn set_filters(&self, filters: ListFilters) {
        self.state.send_modify(|s| s.filters = filters);
    }

    pub fn set_selected(&self, entity: Option<R::Entity>) {
        self.state.send_modify(|s| s.selected = entity);
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|s| s.error = None);
    }

    // ============ Fetching ============

    /// Load a list page; `None` reuses the current filters
    pub async fn fetch_list(&self, filters: Option<ListFilters>) -> ClientResult<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let mut query = ListFilters::default();
        self.state.send_modify(|s| {
            if let Some(filters) = filters {
                s.filters = filters;
            }
            query = s.filters.clone();
            s.loading = true;
            s.load_state = LoadState::Loading;
        });

        let result = self.api.list(&query).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(resource = R::PATH, generation, "Discarding superseded list response");
            return Ok(());
        }

        match result {
            Ok(page) => {
                let meta = page.meta();
                tracing::debug!(resource = R::PATH, count = page.data.len(), total = meta.total, "List loaded");
                self.state.send_modify(|s| {
                    s.items = page.data;
                    s.pagination = Some(meta);
                    s.error = None;
                    s.loading = false;
                    s.load_state = LoadState::Loaded;
                });
                Ok(())
            }
            Err(e) => {
                tracing::warn!(resource = R::PATH, error = %e, "List fetch failed");
                let message = e.user_message();
                self.state.send_modify(|s| {
                    s.error = Some(message);
                    s.loading = false;
                    s.load_state = LoadState::Errored;
                });
                Err(e)
            }
        }
    }

    /// Load one entity into `selected`
    pub async fn fetch_one(&self, id: i64) -> ClientResult<R::Entity> {
        self.state.send_modify(|s| s.loading_item = true);
        match self.api.get(id).await {
            Ok(entity) => {
                let selected = entity.clone();
                self.state.send_modify(|s| {
                    s.selected = Some(selected);
                    s.error = None;
                    s.loading_item = false;
                });
                Ok(entity)
            }
            Err(e) => {
                tracing::warn!(resource = R::PATH, id, error = %e, "Fetch failed");
                let message = e.user_message();
                self.state.send_modify(|s| {
                    s.error = Some(message);
                    s.loading_item = false;
                });
                Err(e)
            }
        }
    }

    /// Search from page 1
    pub async fn search(&self, text: &str) -> ClientResult<()> {
        let filters = self.filters().with_search(text).with_page(1);
        self.fetch_list(Some(filters)).await
    }

    pub async fn go_to_page(&self, page: u32) -> ClientResult<()> {
        let filters = self.filters().with_page(page);
        self.fetch_list(Some(filters)).await
    }

    // ============ Mutations ============

    pub async fn create(&self, data: &R::Create) -> ClientResult<R::Entity> {
        self.mutate("create", self.api.create(data)).await
    }

    pub async fn update(&self, id: i64, data: &R::Update) -> ClientResult<R::Entity> {
        let entity = self.mutate("update", self.api.update(id, data)).await?;
        self.state.send_modify(|s| {
            if s.selected.as_ref().is_some_and(|e| e.id() == id) {
                s.selected = Some(entity.clone());
            }
        });
        Ok(entity)
    }

    pub async fn remove(&self, id: i64) -> ClientResult<()> {
        self.mutate("delete", self.api.remove(id)).await?;
        self.state.send_modify(|s| {
            if s.selected.as_ref().is_some_and(|e| e.id() == id) {
                s.selected = None;
            }
        });
        Ok(())
    }

    pub async fn enable(&self, id: i64) -> ClientResult<()> {
        self.mutate("enable", self.api.enable(id)).await
    }

    pub async fn disable(&self, id: i64) -> ClientResult<()> {
        self.mutate("disable", self.api.disable(id)).await
    }

    /// Run a mutation then re-fetch the list.
    ///
    /// A failed re-fetch leaves its message in `error` but does not fail the
    /// mutation, which did go through.
    async fn mutate<T>(&self, action: &'static str, call: impl Future<Output = ClientResult<T>>) -> ClientResult<T> {
        self.state.send_modify(|s| {
            s.saving = true;
            s.error = None;
        });

        match call.await {
            Ok(value) => {
                tracing::info!(resource = R::PATH, action, "Mutation succeeded");
                self.state.send_modify(|s| s.saving = false);
                if let Err(e) = self.fetch_list(None).await {
                    tracing::warn!(resource = R::PATH, action, error = %e, "Refresh after mutation failed");
                }
                Ok(value)
            }
            Err(e) => {
                tracing::warn!(resource = R::PATH, action, error = %e, "Mutation failed");
                let message = e.user_message();
                self.state.send_modify(|s| {
                    s.saving = false;
                    s.error = Some(message);
                });
                Err(e)
            }
        }
    }
}
