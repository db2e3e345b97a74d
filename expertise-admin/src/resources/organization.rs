//! Insurers and repairers
//!
//! Both resources share the same entity and form.

use expertise_client::{Insurers, Repairers, Resource};
use shared::models::{Organization, OrganizationCreate, OrganizationUpdate};

use super::AdminResource;
use crate::ui::form::{FormErrors, FormField, ResourceForm, form_accessors};
use crate::ui::table::Column;
use crate::utils::format::or_empty;
use crate::utils::validation::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationForm {
    pub code: String,
    pub name: String,
    pub email: String,
    pub telephone: String,
    pub address: String,
}

const FIELDS: &[FormField] = &[
    FormField::required("code", "Code"),
    FormField::required("name", "Nom"),
    FormField::optional("email", "E-mail"),
    FormField::optional("telephone", "Téléphone"),
    FormField::optional("address", "Adresse"),
];

impl<R> ResourceForm<R> for OrganizationForm
where
    R: Resource<Entity = Organization, Create = OrganizationCreate, Update = OrganizationUpdate>,
{
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn from_entity(org: &Organization) -> Self {
        Self {
            code: org.code.clone(),
            name: org.name.clone(),
            email: org.email.clone().unwrap_or_default(),
            telephone: org.telephone.clone().unwrap_or_default(),
            address: org.address.clone().unwrap_or_default(),
        }
    }

    form_accessors!(code, name, email, telephone, address);

    fn to_create(&self) -> Result<OrganizationCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let code = required_text(&mut errors, "code", &self.code, MAX_CODE_LEN);
        let name = required_text(&mut errors, "name", &self.name, MAX_NAME_LEN);
        let email = optional_email(&mut errors, "email", &self.email);
        let telephone = optional_text(&mut errors, "telephone", &self.telephone, MAX_SHORT_TEXT_LEN);
        let address = optional_text(&mut errors, "address", &self.address, MAX_ADDRESS_LEN);
        errors.finish(|| {
            Some(OrganizationCreate {
                code: code?,
                name: name?,
                email,
                telephone,
                address,
            })
        })
    }

    fn to_update(&self, original: &Organization) -> Result<OrganizationUpdate, FormErrors> {
        let data = <Self as ResourceForm<R>>::to_create(self)?;
        Ok(OrganizationUpdate {
            code: changed(data.code, original.code.clone()),
            name: changed(data.name, original.name.clone()),
            email: changed_text(data.email, original.email.as_deref()),
            telephone: changed_text(data.telephone, original.telephone.as_deref()),
            address: changed_text(data.address, original.address.as_deref()),
        })
    }
}

fn columns() -> Vec<Column<Organization>> {
    vec![
        Column::new("code", "Code", |o: &Organization| o.code.clone()),
        Column::new("name", "Nom", |o: &Organization| o.name.clone()),
        Column::new("email", "E-mail", |o: &Organization| or_empty(o.email.as_deref())),
        Column::new("telephone", "Téléphone", |o: &Organization| or_empty(o.telephone.as_deref())),
    ]
}

fn view_fields(org: &Organization) -> Vec<(&'static str, String)> {
    vec![
        ("Code", org.code.clone()),
        ("Nom", org.name.clone()),
        ("E-mail", or_empty(org.email.as_deref())),
        ("Téléphone", or_empty(org.telephone.as_deref())),
        ("Adresse", or_empty(org.address.as_deref())),
    ]
}

impl AdminResource for Insurers {
    type Form = OrganizationForm;
    const TITLE: &'static str = "Assureurs";
    const SINGULAR: &'static str = "Assureur";
    const EMPTY_TEXT: &'static str = "Aucun assureur trouvé";

    fn columns() -> Vec<Column<Organization>> {
        columns()
    }

    fn view_fields(org: &Organization) -> Vec<(&'static str, String)> {
        view_fields(org)
    }

    fn row_label(org: &Organization) -> String {
        org.name.clone()
    }
}

impl AdminResource for Repairers {
    type Form = OrganizationForm;
    const TITLE: &'static str = "Réparateurs";
    const SINGULAR: &'static str = "Réparateur";
    const EMPTY_TEXT: &'static str = "Aucun réparateur trouvé";

    fn columns() -> Vec<Column<Organization>> {
        columns()
    }

    fn view_fields(org: &Organization) -> Vec<(&'static str, String)> {
        view_fields(org)
    }

    fn row_label(org: &Organization) -> String {
        org.name.clone()
    }
}
