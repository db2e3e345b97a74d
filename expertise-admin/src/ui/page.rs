//! Resource page
//!
//! Composes the store, the table, the four dialogs, the toast queue and the
//! debounced search box of one resource screen.

use std::sync::Arc;
use std::time::Duration;

use expertise_client::HttpClient;
use shared::Record;

use super::dialog::{CreateDialog, DeleteDialog, EditDialog, ViewDialog};
use super::table::{DataTable, RowAction};
use crate::core::config::DEFAULT_SEARCH_DEBOUNCE_MS;
use crate::core::{AdminError, AdminResult, Toasts};
use crate::resources::AdminResource;
use crate::store::ResourceStore;
use crate::utils::Debouncer;

pub struct ResourcePage<R: AdminResource, H: HttpClient> {
    store: Arc<ResourceStore<R, H>>,
    table: DataTable<R::Entity>,
    create: CreateDialog<R>,
    edit: EditDialog<R>,
    view: ViewDialog<R>,
    delete: DeleteDialog<R>,
    toasts: Toasts,
    search_text: String,
    search_delay: Duration,
    debouncer: Option<Debouncer<String>>,
}

impl<R: AdminResource, H: HttpClient + 'static> ResourcePage<R, H> {
    pub fn new(store: Arc<ResourceStore<R, H>>) -> Self {
        Self {
            store,
            table: R::table(),
            create: CreateDialog::new(),
            edit: EditDialog::new(),
            view: ViewDialog::new(),
            delete: DeleteDialog::new(),
            toasts: Toasts::new(),
            search_text: String::new(),
            search_delay: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            debouncer: None,
        }
    }

    pub fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    pub fn with_table(mut self, table: DataTable<R::Entity>) -> Self {
        self.table = table;
        self
    }

    pub fn store(&self) -> &Arc<ResourceStore<R, H>> {
        &self.store
    }

    pub fn table(&self) -> &DataTable<R::Entity> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DataTable<R::Entity> {
        &mut self.table
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn create_dialog(&mut self) -> &mut CreateDialog<R> {
        &mut self.create
    }

    pub fn edit_dialog(&mut self) -> &mut EditDialog<R> {
        &mut self.edit
    }

    pub fn view_dialog(&mut self) -> &mut ViewDialog<R> {
        &mut self.view
    }

    pub fn delete_dialog(&mut self) -> &mut DeleteDialog<R> {
        &mut self.delete
    }

    // ============ Loading ============

    /// Initial fetch
    pub async fn mount(&mut self) -> AdminResult<()> {
        tracing::debug!(resource = R::PATH, "Mounting page");
        let result = self.store.fetch_list(None).await;
        self.report(result)
    }

    /// Search input change; fetches once typing settles
    pub fn on_search_input(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        let store = self.store.clone();
        let debouncer = self.debouncer.get_or_insert_with(|| {
            Debouncer::spawn(self.search_delay, move |text: String| {
                let store = store.clone();
                async move {
                    if let Err(e) = store.search(&text).await {
                        tracing::warn!(resource = R::PATH, error = %e, "Search failed");
                    }
                }
            })
        });
        debouncer.push(self.search_text.clone());
    }

    /// Immediate search, bypassing the debounce
    pub async fn search_now(&mut self, text: impl Into<String>) -> AdminResult<()> {
        self.search_text = text.into();
        let result = self.store.search(&self.search_text).await;
        self.report(result)
    }

    pub async fn set_page(&mut self, page: u32) -> AdminResult<()> {
        let result = self.store.go_to_page(page).await;
        self.report(result)
    }

    pub async fn next_page(&mut self) -> AdminResult<()> {
        match self.store.snapshot().pagination {
            Some(meta) if meta.has_next() => self.set_page(meta.current_page + 1).await,
            _ => Ok(()),
        }
    }

    pub async fn prev_page(&mut self) -> AdminResult<()> {
        match self.store.snapshot().pagination {
            Some(meta) if meta.has_prev() => self.set_page(meta.current_page - 1).await,
            _ => Ok(()),
        }
    }

    /// Fetch one entity from the API and show it
    pub async fn show(&mut self, id: i64) -> AdminResult<()> {
        match self.store.fetch_one(id).await {
            Ok(entity) => {
                self.view.open(entity);
                Ok(())
            }
            Err(e) => {
                self.toasts.error(e.user_message());
                self.store.clear_error();
                Err(e.into())
            }
        }
    }

    // ============ Row actions ============

    fn find(&self, id: i64) -> AdminResult<R::Entity> {
        let entity = self
            .store
            .snapshot()
            .items
            .into_iter()
            .find(|e| e.id() == id)
            .ok_or(AdminError::NoSelection)?;
        self.store.set_selected(Some(entity.clone()));
        Ok(entity)
    }

    pub fn open_create(&mut self) {
        self.create.open();
    }

    pub fn on_view(&mut self, id: i64) -> AdminResult<()> {
        let entity = self.find(id)?;
        self.view.open(entity);
        Ok(())
    }

    pub fn on_edit(&mut self, id: i64) -> AdminResult<()> {
        let entity = self.find(id)?;
        self.edit.open(entity);
        Ok(())
    }

    pub fn on_delete(&mut self, id: i64) -> AdminResult<()> {
        let entity = self.find(id)?;
        self.delete.open(entity);
        Ok(())
    }

    pub async fn on_enable(&mut self, id: i64) -> AdminResult<()> {
        self.find(id)?;
        let result = self.store.enable(id).await;
        if result.is_ok() {
            self.toasts.success(format!("{} : activé", R::SINGULAR));
        }
        self.report(result)
    }

    pub async fn on_disable(&mut self, id: i64) -> AdminResult<()> {
        self.find(id)?;
        let result = self.store.disable(id).await;
        if result.is_ok() {
            self.toasts.success(format!("{} : désactivé", R::SINGULAR));
        }
        self.report(result)
    }

    /// Dispatch a table action for row `id`
    pub async fn on_row_action(&mut self, id: i64, action: RowAction) -> AdminResult<()> {
        match action {
            RowAction::View => self.on_view(id),
            RowAction::Edit => self.on_edit(id),
            RowAction::Delete => self.on_delete(id),
            RowAction::Enable => self.on_enable(id).await,
            RowAction::Disable => self.on_disable(id).await,
        }
    }

    // ============ Dialog submits ============

    // Dialogs toast their own failures; the store copy would show twice.

    pub async fn submit_create(&mut self) -> AdminResult<R::Entity> {
        let result = self.create.submit(&self.store, &mut self.toasts).await;
        if result.is_err() {
            self.store.clear_error();
        }
        result
    }

    pub async fn submit_edit(&mut self) -> AdminResult<R::Entity> {
        let result = self.edit.submit(&self.store, &mut self.toasts).await;
        if result.is_err() {
            self.store.clear_error();
        }
        result
    }

    pub async fn confirm_delete(&mut self) -> AdminResult<()> {
        let result = self.delete.confirm(&self.store, &mut self.toasts).await;
        if result.is_err() {
            self.store.clear_error();
        }
        result
    }

    // ============ Rendering ============

    /// Move a store failure into the toast queue
    fn report<T>(&mut self, result: expertise_client::ClientResult<T>) -> AdminResult<T> {
        match result {
            Ok(value) => Ok(value),
            Err(e) => {
                self.toasts.error(e.user_message());
                self.store.clear_error();
                Err(e.into())
            }
        }
    }

    /// Pick up errors raised in the background (debounced search)
    fn collect_store_error(&mut self) {
        if let Some(message) = self.store.snapshot().error {
            self.toasts.error(message);
            self.store.clear_error();
        }
    }

    /// Header, search line, table, pagination footer, open dialogs and the
    /// pending toasts (which are consumed)
    pub fn render(&mut self) -> String {
        self.collect_store_error();
        let state = self.store.snapshot();

        let mut out = format!("== {} ==\n", R::TITLE);
        if !self.search_text.is_empty() {
            out.push_str(&format!("Recherche : {}\n", self.search_text));
        }
        out.push_str(&self.table.render(&state.items, state.loading, state.pagination.as_ref()));
        out.push('\n');

        if self.view.is_open() {
            out.push_str(&self.view.render());
        }
        if self.delete.is_open() {
            out.push_str(&self.delete.prompt());
            out.push('\n');
        }
        for toast in self.toasts.drain() {
            out.push_str(&toast.to_string());
            out.push('\n');
        }
        out
    }
}
