//! Vehicle age brackets (months)

use expertise_client::VehicleAges;
use shared::models::{VehicleAge, VehicleAgeCreate, VehicleAgeUpdate};

use super::AdminResource;
use crate::ui::form::{FormErrors, FormField, ResourceForm, form_accessors};
use crate::ui::table::{Column, SortKey};
use crate::utils::format::or_empty;
use crate::utils::validation::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleAgeForm {
    pub value: String,
    pub label: String,
    pub description: String,
}

const FIELDS: &[FormField] = &[
    FormField::required("value", "Âge (mois)"),
    FormField::required("label", "Libellé"),
    FormField::optional("description", "Description"),
];

impl ResourceForm<VehicleAges> for VehicleAgeForm {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn from_entity(age: &VehicleAge) -> Self {
        Self {
            value: age.value.to_string(),
            label: age.label.clone(),
            description: age.description.clone().unwrap_or_default(),
        }
    }

    form_accessors!(value, label, description);

    fn to_create(&self) -> Result<VehicleAgeCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let value = required_small_count(&mut errors, "value", &self.value);
        let label = required_text(&mut errors, "label", &self.label, MAX_NAME_LEN);
        let description = optional_text(&mut errors, "description", &self.description, MAX_NOTE_LEN);
        errors.finish(|| {
            Some(VehicleAgeCreate {
                value: value?,
                label: label?,
                description,
            })
        })
    }

    fn to_update(&self, original: &VehicleAge) -> Result<VehicleAgeUpdate, FormErrors> {
        let data = self.to_create()?;
        Ok(VehicleAgeUpdate {
            value: changed(data.value, original.value),
            label: changed(data.label, original.label.clone()),
            description: changed_text(data.description, original.description.as_deref()),
        })
    }
}

impl AdminResource for VehicleAges {
    type Form = VehicleAgeForm;
    const TITLE: &'static str = "Âges des véhicules";
    const SINGULAR: &'static str = "Âge de véhicule";

    fn columns() -> Vec<Column<VehicleAge>> {
        vec![
            Column::new("value", "Mois", |a: &VehicleAge| a.value.to_string())
                .sort_by(|a| SortKey::Number(a.value.into())),
            Column::new("label", "Libellé", |a: &VehicleAge| a.label.clone()),
        ]
    }

    fn view_fields(age: &VehicleAge) -> Vec<(&'static str, String)> {
        vec![
            ("Âge (mois)", age.value.to_string()),
            ("Libellé", age.label.clone()),
            ("Description", or_empty(age.description.as_deref())),
        ]
    }

    fn row_label(age: &VehicleAge) -> String {
        age.label.clone()
    }
}
