//! Create / edit / view / delete dialogs
//!
//! Dialogs own their form state and talk to the store; outcomes are
//! reported through [`Toasts`]. A failed submit leaves the dialog open with
//! the form untouched.

use expertise_client::HttpClient;
use shared::Record;

use super::badge::StatusBadge;
use super::form::{FormErrors, ResourceForm};
use crate::core::{AdminError, AdminResult, Toasts};
use crate::resources::AdminResource;
use crate::store::ResourceStore;
use crate::utils::format::format_datetime;

// ============ Create ============

pub struct CreateDialog<R: AdminResource> {
    open: bool,
    form: R::Form,
    errors: FormErrors,
}

impl<R: AdminResource> Default for CreateDialog<R> {
    fn default() -> Self {
        Self {
            open: false,
            form: R::Form::default(),
            errors: FormErrors::default(),
        }
    }
}

impl<R: AdminResource> CreateDialog<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open with an empty form
    pub fn open(&mut self) {
        self.form = R::Form::default();
        self.errors.clear();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn form(&self) -> &R::Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut R::Form {
        &mut self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> AdminResult<()> {
        if !self.open {
            return Err(AdminError::DialogClosed("création"));
        }
        self.form.set_field(key, value)?;
        Ok(())
    }

    pub async fn submit<H: HttpClient>(
        &mut self,
        store: &ResourceStore<R, H>,
        toasts: &mut Toasts,
    ) -> AdminResult<R::Entity> {
        if !self.open {
            return Err(AdminError::DialogClosed("création"));
        }

        let data = match self.form.to_create() {
            Ok(data) => data,
            Err(errors) => {
                tracing::debug!(resource = R::PATH, %errors, "Create form rejected");
                self.errors = errors.clone();
                toasts.error("Veuillez corriger les champs en erreur");
                return Err(AdminError::Validation(errors));
            }
        };

        self.errors.clear();
        match store.create(&data).await {
            Ok(entity) => {
                toasts.success(format!("{} : création réussie", R::SINGULAR));
                self.open = false;
                Ok(entity)
            }
            Err(e) => {
                self.errors.merge_client(&e);
                toasts.error(e.user_message());
                Err(e.into())
            }
        }
    }
}

// ============ Edit ============

pub struct EditDialog<R: AdminResource> {
    open: bool,
    original: Option<R::Entity>,
    form: R::Form,
    errors: FormErrors,
}

impl<R: AdminResource> Default for EditDialog<R> {
    fn default() -> Self {
        Self {
            open: false,
            original: None,
            form: R::Form::default(),
            errors: FormErrors::default(),
        }
    }
}

impl<R: AdminResource> EditDialog<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open pre-filled from `entity`
    pub fn open(&mut self, entity: R::Entity) {
        self.form = R::Form::from_entity(&entity);
        self.original = Some(entity);
        self.errors.clear();
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.original = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn original(&self) -> Option<&R::Entity> {
        self.original.as_ref()
    }

    pub fn form(&self) -> &R::Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut R::Form {
        &mut self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> AdminResult<()> {
        if !self.open {
            return Err(AdminError::DialogClosed("modification"));
        }
        self.form.set_field(key, value)?;
        Ok(())
    }

    /// Send the changed fields in a single update call
    pub async fn submit<H: HttpClient>(
        &mut self,
        store: &ResourceStore<R, H>,
        toasts: &mut Toasts,
    ) -> AdminResult<R::Entity> {
        if !self.open {
            return Err(AdminError::DialogClosed("modification"));
        }
        let Some(original) = &self.original else {
            return Err(AdminError::NoSelection);
        };

        let diff = match self.form.to_update(original) {
            Ok(diff) => diff,
            Err(errors) => {
                self.errors = errors.clone();
                toasts.error("Veuillez corriger les champs en erreur");
                return Err(AdminError::Validation(errors));
            }
        };

        self.errors.clear();
        let id = original.id();
        match store.update(id, &diff).await {
            Ok(entity) => {
                toasts.success(format!("{} : modifications enregistrées", R::SINGULAR));
                self.close();
                Ok(entity)
            }
            Err(e) => {
                self.errors.merge_client(&e);
                toasts.error(e.user_message());
                Err(e.into())
            }
        }
    }
}

// ============ View ============

pub struct ViewDialog<R: AdminResource> {
    entity: Option<R::Entity>,
}

impl<R: AdminResource> Default for ViewDialog<R> {
    fn default() -> Self {
        Self { entity: None }
    }
}

impl<R: AdminResource> ViewDialog<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, entity: R::Entity) {
        self.entity = Some(entity);
    }

    pub fn close(&mut self) {
        self.entity = None;
    }

    pub fn is_open(&self) -> bool {
        self.entity.is_some()
    }

    pub fn entity(&self) -> Option<&R::Entity> {
        self.entity.as_ref()
    }

    /// Label/value lines, status and audit trail included
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        let Some(entity) = &self.entity else {
            return Vec::new();
        };

        let mut lines = R::view_fields(entity);
        lines.push(("Statut", StatusBadge::for_record(entity).text));

        let audit = entity.audit();
        let user = |u: &Option<shared::UserRef>| u.as_ref().map(|u| u.display_name()).unwrap_or_else(|| "-".to_string());
        lines.push(("Créé le", format_datetime(audit.created_at.as_deref())));
        lines.push(("Créé par", user(&audit.created_by)));
        lines.push(("Modifié le", format_datetime(audit.updated_at.as_deref())));
        lines.push(("Modifié par", user(&audit.updated_by)));
        if entity.is_deleted() {
            lines.push(("Supprimé le", format_datetime(audit.deleted_at.as_deref())));
            lines.push(("Supprimé par", user(&audit.deleted_by)));
        }
        lines
    }

    pub fn render(&self) -> String {
        let Some(entity) = &self.entity else {
            return String::new();
        };
        let lines = self.lines();
        let width = lines.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

        let mut out = format!("{} : {}\n", R::SINGULAR, R::row_label(entity));
        for (label, value) in lines {
            let pad = width - label.chars().count();
            out.push_str(&format!("  {}{} : {}\n", label, " ".repeat(pad), value));
        }
        out
    }
}

// ============ Delete ============

pub struct DeleteDialog<R: AdminResource> {
    target: Option<R::Entity>,
}

impl<R: AdminResource> Default for DeleteDialog<R> {
    fn default() -> Self {
        Self { target: None }
    }
}

impl<R: AdminResource> DeleteDialog<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, entity: R::Entity) {
        self.target = Some(entity);
    }

    /// Close without deleting
    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&R::Entity> {
        self.target.as_ref()
    }

    pub fn prompt(&self) -> String {
        match &self.target {
            Some(entity) => format!("Supprimer « {} » ?", R::row_label(entity)),
            None => String::new(),
        }
    }

    /// The only path that deletes
    pub async fn confirm<H: HttpClient>(
        &mut self,
        store: &ResourceStore<R, H>,
        toasts: &mut Toasts,
    ) -> AdminResult<()> {
        let Some(target) = &self.target else {
            return Err(AdminError::DialogClosed("suppression"));
        };

        match store.remove(target.id()).await {
            Ok(()) => {
                toasts.success(format!("{} : suppression effectuée", R::SINGULAR));
                self.target = None;
                Ok(())
            }
            Err(e) => {
                toasts.error(e.user_message());
                Err(e.into())
            }
        }
    }
}
