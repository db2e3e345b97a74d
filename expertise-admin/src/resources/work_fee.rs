//! Fixed work fees

use expertise_client::WorkFees;
use shared::models::{WorkFee, WorkFeeCreate, WorkFeeUpdate};

use super::AdminResource;
use crate::ui::form::{FormErrors, FormField, ResourceForm, form_accessors};
use crate::ui::table::{Column, SortKey};
use crate::utils::format::{format_xof, or_empty};
use crate::utils::validation::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkFeeForm {
    pub code: String,
    pub label: String,
    pub amount: String,
    pub description: String,
}

const FIELDS: &[FormField] = &[
    FormField::required("code", "Code"),
    FormField::required("label", "Libellé"),
    FormField::required("amount", "Montant"),
    FormField::optional("description", "Description"),
];

impl ResourceForm<WorkFees> for WorkFeeForm {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn from_entity(fee: &WorkFee) -> Self {
        Self {
            code: fee.code.clone(),
            label: fee.label.clone(),
            amount: fee.amount.clone(),
            description: fee.description.clone().unwrap_or_default(),
        }
    }

    form_accessors!(code, label, amount, description);

    fn to_create(&self) -> Result<WorkFeeCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let code = required_text(&mut errors, "code", &self.code, MAX_CODE_LEN);
        let label = required_text(&mut errors, "label", &self.label, MAX_NAME_LEN);
        let amount = required_amount(&mut errors, "amount", &self.amount);
        let description = optional_text(&mut errors, "description", &self.description, MAX_NOTE_LEN);
        errors.finish(|| {
            Some(WorkFeeCreate {
                code: code?,
                label: label?,
                amount: amount?,
                description,
            })
        })
    }

    fn to_update(&self, original: &WorkFee) -> Result<WorkFeeUpdate, FormErrors> {
        let data = self.to_create()?;
        Ok(WorkFeeUpdate {
            code: changed(data.code, original.code.clone()),
            label: changed(data.label, original.label.clone()),
            amount: changed_amount(Some(data.amount), Some(&original.amount)),
            description: changed_text(data.description, original.description.as_deref()),
        })
    }
}

impl AdminResource for WorkFees {
    type Form = WorkFeeForm;
    const TITLE: &'static str = "Frais de travaux";
    const SINGULAR: &'static str = "Frais";

    fn columns() -> Vec<Column<WorkFee>> {
        vec![
            Column::new("code", "Code", |f: &WorkFee| f.code.clone()),
            Column::new("label", "Libellé", |f: &WorkFee| f.label.clone()),
            Column::new("amount", "Montant", |f: &WorkFee| format_xof(&f.amount))
                .sort_by(|f| SortKey::amount(&f.amount)),
        ]
    }

    fn view_fields(fee: &WorkFee) -> Vec<(&'static str, String)> {
        vec![
            ("Code", fee.code.clone()),
            ("Libellé", fee.label.clone()),
            ("Montant", format_xof(&fee.amount)),
            ("Description", or_empty(fee.description.as_deref())),
        ]
    }

    fn row_label(fee: &WorkFee) -> String {
        fee.label.clone()
    }
}
