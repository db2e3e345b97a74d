//! Clients (vehicle owners)

use expertise_client::Clients;
use shared::models::{Client, ClientCreate, ClientUpdate};

use super::AdminResource;
use crate::ui::form::{FormErrors, FormField, ResourceForm, form_accessors};
use crate::ui::table::Column;
use crate::utils::format::or_empty;
use crate::utils::validation::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    pub phone_1: String,
    pub phone_2: String,
    pub address: String,
}

const FIELDS: &[FormField] = &[
    FormField::required("name", "Nom"),
    FormField::optional("email", "E-mail"),
    FormField::optional("phone_1", "Téléphone 1"),
    FormField::optional("phone_2", "Téléphone 2"),
    FormField::optional("address", "Adresse"),
];

impl ResourceForm<Clients> for ClientForm {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn from_entity(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone().unwrap_or_default(),
            phone_1: client.phone_1.clone().unwrap_or_default(),
            phone_2: client.phone_2.clone().unwrap_or_default(),
            address: client.address.clone().unwrap_or_default(),
        }
    }

    form_accessors!(name, email, phone_1, phone_2, address);

    fn to_create(&self) -> Result<ClientCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let name = required_text(&mut errors, "name", &self.name, MAX_NAME_LEN);
        let email = optional_email(&mut errors, "email", &self.email);
        let phone_1 = optional_text(&mut errors, "phone_1", &self.phone_1, MAX_SHORT_TEXT_LEN);
        let phone_2 = optional_text(&mut errors, "phone_2", &self.phone_2, MAX_SHORT_TEXT_LEN);
        let address = optional_text(&mut errors, "address", &self.address, MAX_ADDRESS_LEN);
        errors.finish(|| {
            Some(ClientCreate {
                name: name?,
                email,
                phone_1,
                phone_2,
                address,
            })
        })
    }

    fn to_update(&self, original: &Client) -> Result<ClientUpdate, FormErrors> {
        let data = self.to_create()?;
        Ok(ClientUpdate {
            name: changed(data.name, original.name.clone()),
            email: changed_text(data.email, original.email.as_deref()),
            phone_1: changed_text(data.phone_1, original.phone_1.as_deref()),
            phone_2: changed_text(data.phone_2, original.phone_2.as_deref()),
            address: changed_text(data.address, original.address.as_deref()),
        })
    }
}

impl AdminResource for Clients {
    type Form = ClientForm;
    const TITLE: &'static str = "Clients";
    const SINGULAR: &'static str = "Client";
    const EMPTY_TEXT: &'static str = "Aucun client trouvé";

    fn columns() -> Vec<Column<Client>> {
        vec![
            Column::new("name", "Nom", |c: &Client| c.name.clone()),
            Column::new("email", "E-mail", |c: &Client| or_empty(c.email.as_deref())),
            Column::new("phone_1", "Téléphone", |c: &Client| or_empty(c.phone_1.as_deref())),
        ]
    }

    fn view_fields(client: &Client) -> Vec<(&'static str, String)> {
        vec![
            ("Nom", client.name.clone()),
            ("E-mail", or_empty(client.email.as_deref())),
            ("Téléphone 1", or_empty(client.phone_1.as_deref())),
            ("Téléphone 2", or_empty(client.phone_2.as_deref())),
            ("Adresse", or_empty(client.address.as_deref())),
        ]
    }

    fn row_label(client: &Client) -> String {
        client.name.clone()
    }
}
