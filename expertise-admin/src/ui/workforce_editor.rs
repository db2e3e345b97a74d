//! Multi-row editor for workforce hourly rates
//!
//! Rows are edited locally; `save` pushes new rows (POST) and modified rows
//! (PUT) and re-fetches once at the end. `cancel` drops every local edit.

use std::sync::Arc;

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use expertise_client::{HttpClient, WorkforceRates};
use shared::Record;
use shared::models::{WorkforceRate, WorkforceRateUpdate};

use super::form::{FormErrors, ResourceForm};
use crate::core::{AdminError, AdminResult, Toasts};
use crate::resources::WorkforceRateForm;
use crate::store::ResourceStore;
use crate::utils::format::format_xof;

#[derive(Debug, Clone)]
pub struct EditorRow {
    form: WorkforceRateForm,
    original: Option<WorkforceRate>,
    dirty: bool,
}

impl EditorRow {
    fn existing(rate: WorkforceRate) -> Self {
        Self {
            form: WorkforceRateForm::from_entity(&rate),
            original: Some(rate),
            dirty: false,
        }
    }

    fn blank() -> Self {
        Self {
            form: WorkforceRateForm::default(),
            original: None,
            dirty: true,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.original.as_ref().map(|r| r.id())
    }

    pub fn is_new(&self) -> bool {
        self.original.is_none()
    }

    pub fn is_modified(&self) -> bool {
        self.dirty && self.original.is_some()
    }

    pub fn form(&self) -> &WorkforceRateForm {
        &self.form
    }

    fn state_label(&self) -> &'static str {
        if self.is_new() {
            "Nouveau"
        } else if self.dirty {
            "Modifié"
        } else {
            ""
        }
    }
}

/// Outcome of a save
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSummary {
    pub created: usize,
    pub updated: usize,
}

pub struct WorkforceEditor<H: HttpClient> {
    store: Arc<ResourceStore<WorkforceRates, H>>,
    rows: Vec<EditorRow>,
}

impl<H: HttpClient> WorkforceEditor<H> {
    pub fn new(store: Arc<ResourceStore<WorkforceRates, H>>) -> Self {
        let mut editor = Self {
            store,
            rows: Vec::new(),
        };
        editor.reset_from_store();
        editor
    }

    /// Fetch the current rates and drop local edits
    pub async fn load(&mut self) -> AdminResult<()> {
        self.store.fetch_list(None).await?;
        self.reset_from_store();
        Ok(())
    }

    fn reset_from_store(&mut self) {
        self.rows = self
            .store
            .snapshot()
            .items
            .into_iter()
            .filter(|r| !r.is_deleted())
            .map(EditorRow::existing)
            .collect();
    }

    pub fn rows(&self) -> &[EditorRow] {
        &self.rows
    }

    /// Append an empty row, returning its index
    pub fn add_row(&mut self) -> usize {
        self.rows.push(EditorRow::blank());
        self.rows.len() - 1
    }

    pub fn set_cell(&mut self, index: usize, key: &str, value: impl Into<String>) -> AdminResult<()> {
        let row = self.rows.get_mut(index).ok_or(AdminError::NoSelection)?;
        row.form.set_field(key, value)?;
        row.dirty = true;
        Ok(())
    }

    /// Drop a row that was never saved; saved rows are deleted from the page
    pub fn remove_new_row(&mut self, index: usize) -> bool {
        match self.rows.get(index) {
            Some(row) if row.is_new() => {
                self.rows.remove(index);
                true
            }
            _ => false,
        }
    }

    /// `(new, modified)` row counts
    pub fn pending(&self) -> (usize, usize) {
        let new = self.rows.iter().filter(|r| r.is_new()).count();
        let modified = self.rows.iter().filter(|r| r.is_modified()).count();
        (new, modified)
    }

    pub fn has_changes(&self) -> bool {
        self.rows.iter().any(|r| r.dirty)
    }

    /// Errors keyed `ligne N.field` (1-based)
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        for (i, row) in self.rows.iter().enumerate().filter(|(_, r)| r.dirty) {
            if let Err(row_errors) = row.form.to_create() {
                for (field, message) in row_errors.iter() {
                    errors.add(&format!("ligne {}.{}", i + 1, field), message);
                }
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub async fn save(&mut self, toasts: &mut Toasts) -> AdminResult<SaveSummary> {
        if !self.has_changes() {
            toasts.info("Aucune modification à enregistrer");
            return Ok(SaveSummary::default());
        }
        if let Err(errors) = self.validate() {
            toasts.error("Veuillez corriger les lignes en erreur");
            return Err(AdminError::Validation(errors));
        }

        let mut summary = SaveSummary::default();
        let api = self.store.api();
        for row in self.rows.iter_mut().filter(|r| r.dirty) {
            let result = match &row.original {
                None => {
                    let data = row.form.to_create()?;
                    api.create(&data).await.map(|created| {
                        summary.created += 1;
                        Some(created)
                    })
                }
                Some(original) => {
                    let diff = row.form.to_update(original)?;
                    if diff == WorkforceRateUpdate::default() {
                        Ok(None)
                    } else {
                        api.update(original.id(), &diff).await.map(|updated| {
                            summary.updated += 1;
                            Some(updated)
                        })
                    }
                }
            };

            match result {
                Ok(saved) => {
                    if let Some(saved) = saved {
                        row.original = Some(saved);
                    }
                    row.dirty = false;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Workforce rate save failed");
                    toasts.error(e.user_message());
                    return Err(e.into());
                }
            }
        }

        tracing::info!(created = summary.created, updated = summary.updated, "Workforce rates saved");
        if let Err(e) = self.store.fetch_list(None).await {
            tracing::warn!(error = %e, "Refresh after save failed");
        } else {
            self.reset_from_store();
        }
        toasts.success(format!(
            "Taux enregistrés : {} créé(s), {} modifié(s)",
            summary.created, summary.updated
        ));
        Ok(summary)
    }

    /// Discard local edits
    pub fn cancel(&mut self) {
        self.reset_from_store();
    }

    pub fn render(&self) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["#", "Type", "Catégorie", "Taux horaire", "État"]);
        for (i, row) in self.rows.iter().enumerate() {
            let type_label = row
                .original
                .as_ref()
                .and_then(|r| r.workforce_type.as_ref())
                .filter(|t| t.id.to_string() == row.form.workforce_type_id)
                .map(|t| t.display_label())
                .unwrap_or_else(|| format!("#{}", row.form.workforce_type_id));
            table.add_row(vec![
                (i + 1).to_string(),
                type_label,
                row.form.vehicle_category.clone(),
                format_xof(&row.form.hourly_rate),
                row.state_label().to_string(),
            ]);
        }
        table.to_string()
    }
}
