//! Banks

use expertise_client::Banks;
use shared::models::{Bank, BankCreate, BankUpdate};

use super::AdminResource;
use crate::ui::form::{FormErrors, FormField, ResourceForm, form_accessors};
use crate::ui::table::{Column, SortKey};
use crate::utils::format::{format_date, or_empty};
use crate::utils::validation::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankForm {
    pub code: String,
    pub name: String,
    pub description: String,
}

const FIELDS: &[FormField] = &[
    FormField::required("code", "Code"),
    FormField::required("name", "Nom"),
    FormField::optional("description", "Description"),
];

impl ResourceForm<Banks> for BankForm {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn from_entity(bank: &Bank) -> Self {
        Self {
            code: bank.code.clone(),
            name: bank.name.clone(),
            description: bank.description.clone().unwrap_or_default(),
        }
    }

    form_accessors!(code, name, description);

    fn to_create(&self) -> Result<BankCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let code = required_text(&mut errors, "code", &self.code, MAX_CODE_LEN);
        let name = required_text(&mut errors, "name", &self.name, MAX_NAME_LEN);
        let description = optional_text(&mut errors, "description", &self.description, MAX_NOTE_LEN);
        errors.finish(|| {
            Some(BankCreate {
                code: code?,
                name: name?,
                description,
            })
        })
    }

    fn to_update(&self, original: &Bank) -> Result<BankUpdate, FormErrors> {
        let data = self.to_create()?;
        Ok(BankUpdate {
            code: changed(data.code, original.code.clone()),
            name: changed(data.name, original.name.clone()),
            description: changed_text(data.description, original.description.as_deref()),
        })
    }
}

impl AdminResource for Banks {
    type Form = BankForm;
    const TITLE: &'static str = "Banques";
    const SINGULAR: &'static str = "Banque";
    const EMPTY_TEXT: &'static str = "Aucune banque trouvée";

    fn columns() -> Vec<Column<Bank>> {
        vec![
            Column::new("code", "Code", |b: &Bank| b.code.clone()),
            Column::new("name", "Nom", |b: &Bank| b.name.clone()),
            Column::new("created_at", "Créée le", |b: &Bank| format_date(b.audit.created_at.as_deref()))
                .sort_by(|b| SortKey::Text(b.audit.created_at.clone().unwrap_or_default())),
        ]
    }

    fn view_fields(bank: &Bank) -> Vec<(&'static str, String)> {
        vec![
            ("Code", bank.code.clone()),
            ("Nom", bank.name.clone()),
            ("Description", or_empty(bank.description.as_deref())),
        ]
    }

    fn row_label(bank: &Bank) -> String {
        format!("{} ({})", bank.name, bank.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn boa() -> Bank {
        serde_json::from_value(serde_json::json!({
            "id": 5, "code": "BOA", "name": "BOA", "description": "Bank of Africa"
        }))
        .unwrap()
    }

    #[test]
    fn test_empty_code_and_name_rejected() {
        let form = BankForm::default();
        let errors = ResourceForm::<Banks>::to_create(&form).unwrap_err();
        assert_eq!(errors.get("code"), Some(REQUIRED));
        assert_eq!(errors.get("name"), Some(REQUIRED));
    }

    #[test]
    fn test_update_contains_only_changes() {
        let original = boa();
        let mut form = <BankForm as ResourceForm<Banks>>::from_entity(&original);
        ResourceForm::<Banks>::set_field(&mut form, "name", "BOA Côte d'Ivoire").unwrap();

        let update = ResourceForm::<Banks>::to_update(&form, &original).unwrap();
        assert_eq!(
            update,
            BankUpdate {
                name: Some("BOA Côte d'Ivoire".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_unknown_field() {
        let mut form = BankForm::default();
        assert!(ResourceForm::<Banks>::set_field(&mut form, "iban", "x").is_err());
    }
}
