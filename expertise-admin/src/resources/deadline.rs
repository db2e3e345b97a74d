//! Processing deadlines

use expertise_client::Deadlines;
use shared::models::{Deadline, DeadlineCreate, DeadlineUpdate};

use super::AdminResource;
use crate::ui::form::{FormErrors, FormField, ResourceForm, form_accessors};
use crate::ui::table::{Column, SortKey};
use crate::utils::format::or_empty;
use crate::utils::validation::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeadlineForm {
    pub code: String,
    pub label: String,
    pub duration_days: String,
    pub description: String,
}

const FIELDS: &[FormField] = &[
    FormField::required("code", "Code"),
    FormField::required("label", "Libellé"),
    FormField::required("duration_days", "Durée (jours)"),
    FormField::optional("description", "Description"),
];

impl ResourceForm<Deadlines> for DeadlineForm {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn from_entity(deadline: &Deadline) -> Self {
        Self {
            code: deadline.code.clone(),
            label: deadline.label.clone(),
            duration_days: deadline.duration_days.to_string(),
            description: deadline.description.clone().unwrap_or_default(),
        }
    }

    form_accessors!(code, label, duration_days, description);

    fn to_create(&self) -> Result<DeadlineCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let code = required_text(&mut errors, "code", &self.code, MAX_CODE_LEN);
        let label = required_text(&mut errors, "label", &self.label, MAX_NAME_LEN);
        let duration_days = required_small_count(&mut errors, "duration_days", &self.duration_days);
        let description = optional_text(&mut errors, "description", &self.description, MAX_NOTE_LEN);
        errors.finish(|| {
            Some(DeadlineCreate {
                code: code?,
                label: label?,
                duration_days: duration_days?,
                description,
            })
        })
    }

    fn to_update(&self, original: &Deadline) -> Result<DeadlineUpdate, FormErrors> {
        let data = self.to_create()?;
        Ok(DeadlineUpdate {
            code: changed(data.code, original.code.clone()),
            label: changed(data.label, original.label.clone()),
            duration_days: changed(data.duration_days, original.duration_days),
            description: changed_text(data.description, original.description.as_deref()),
        })
    }
}

fn days(n: i32) -> String {
    if n.abs() > 1 { format!("{n} jours") } else { format!("{n} jour") }
}

impl AdminResource for Deadlines {
    type Form = DeadlineForm;
    const TITLE: &'static str = "Délais";
    const SINGULAR: &'static str = "Délai";
    const EMPTY_TEXT: &'static str = "Aucun délai trouvé";

    fn columns() -> Vec<Column<Deadline>> {
        vec![
            Column::new("code", "Code", |d: &Deadline| d.code.clone()),
            Column::new("label", "Libellé", |d: &Deadline| d.label.clone()),
            Column::new("duration_days", "Durée", |d: &Deadline| days(d.duration_days))
                .sort_by(|d| SortKey::Number(d.duration_days.into())),
        ]
    }

    fn view_fields(deadline: &Deadline) -> Vec<(&'static str, String)> {
        vec![
            ("Code", deadline.code.clone()),
            ("Libellé", deadline.label.clone()),
            ("Durée", days(deadline.duration_days)),
            ("Description", or_empty(deadline.description.as_deref())),
        ]
    }

    fn row_label(deadline: &Deadline) -> String {
        deadline.label.clone()
    }
}
