//! Simple reference lists: brands, colors, statuses, transmitted documents

use expertise_client::{Brands, Colors, DocumentTransmitteds, Resource, Statuses};
use shared::models::{ReferenceItem, ReferenceItemCreate, ReferenceItemUpdate};

use super::AdminResource;
use crate::ui::form::{FormErrors, FormField, ResourceForm, form_accessors};
use crate::ui::table::Column;
use crate::utils::format::or_empty;
use crate::utils::validation::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceForm {
    pub code: String,
    pub label: String,
    pub description: String,
}

const FIELDS: &[FormField] = &[
    FormField::required("code", "Code"),
    FormField::required("label", "Libellé"),
    FormField::optional("description", "Description"),
];

impl<R> ResourceForm<R> for ReferenceForm
where
    R: Resource<Entity = ReferenceItem, Create = ReferenceItemCreate, Update = ReferenceItemUpdate>,
{
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn from_entity(item: &ReferenceItem) -> Self {
        Self {
            code: item.code.clone(),
            label: item.label.clone(),
            description: item.description.clone().unwrap_or_default(),
        }
    }

    form_accessors!(code, label, description);

    fn to_create(&self) -> Result<ReferenceItemCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let code = required_text(&mut errors, "code", &self.code, MAX_CODE_LEN);
        let label = required_text(&mut errors, "label", &self.label, MAX_NAME_LEN);
        let description = optional_text(&mut errors, "description", &self.description, MAX_NOTE_LEN);
        errors.finish(|| {
            Some(ReferenceItemCreate {
                code: code?,
                label: label?,
                description,
            })
        })
    }

    fn to_update(&self, original: &ReferenceItem) -> Result<ReferenceItemUpdate, FormErrors> {
        let data = <Self as ResourceForm<R>>::to_create(self)?;
        Ok(ReferenceItemUpdate {
            code: changed(data.code, original.code.clone()),
            label: changed(data.label, original.label.clone()),
            description: changed_text(data.description, original.description.as_deref()),
        })
    }
}

fn columns() -> Vec<Column<ReferenceItem>> {
    vec![
        Column::new("code", "Code", |r: &ReferenceItem| r.code.clone()),
        Column::new("label", "Libellé", |r: &ReferenceItem| r.label.clone()),
        Column::new("description", "Description", |r: &ReferenceItem| or_empty(r.description.as_deref())),
    ]
}

fn view_fields(item: &ReferenceItem) -> Vec<(&'static str, String)> {
    vec![
        ("Code", item.code.clone()),
        ("Libellé", item.label.clone()),
        ("Description", or_empty(item.description.as_deref())),
    ]
}

macro_rules! reference_screen {
    ($($resource:ty => $title:literal, $singular:literal, $empty:literal;)+) => {
        $(
            impl AdminResource for $resource {
                type Form = ReferenceForm;
                const TITLE: &'static str = $title;
                const SINGULAR: &'static str = $singular;
                const EMPTY_TEXT: &'static str = $empty;

                fn columns() -> Vec<Column<ReferenceItem>> {
                    columns()
                }

                fn view_fields(item: &ReferenceItem) -> Vec<(&'static str, String)> {
                    view_fields(item)
                }

                fn row_label(item: &ReferenceItem) -> String {
                    format!("{} ({})", item.label, item.code)
                }
            }
        )+
    };
}

reference_screen! {
    Brands => "Marques", "Marque", "Aucune marque trouvée";
    Colors => "Couleurs", "Couleur", "Aucune couleur trouvée";
    Statuses => "Statuts", "Statut", "Aucun statut trouvé";
    DocumentTransmitteds => "Documents transmis", "Document transmis", "Aucun document trouvé";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_form_validates_label() {
        let form = ReferenceForm {
            code: "RED".to_string(),
            ..Default::default()
        };
        let errors = <ReferenceForm as ResourceForm<Colors>>::to_create(&form).unwrap_err();
        assert_eq!(errors.get("label"), Some(REQUIRED));
        assert_eq!(errors.get("code"), None);
    }
}
