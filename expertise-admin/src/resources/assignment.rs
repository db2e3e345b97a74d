//! Assignments (expertise dossiers)

use expertise_client::Assignments;
use shared::models::{Assignment, AssignmentCreate, AssignmentUpdate};

use super::AdminResource;
use crate::ui::form::{FormErrors, FormField, ResourceForm, form_accessors};
use crate::ui::table::{Column, SortKey};
use crate::utils::format::{format_date, format_percent, format_xof_opt, or_empty};
use crate::utils::validation::*;

fn reference_label(r: Option<&shared::Reference>) -> String {
    r.map(|r| r.display_label()).unwrap_or_else(|| "-".to_string())
}

fn reference_id(r: Option<&shared::Reference>) -> String {
    r.map(|r| r.id.to_string()).unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentForm {
    pub client_id: String,
    pub vehicle_id: String,
    pub insurer_id: String,
    pub repairer_id: String,
    pub assignment_type_id: String,
    pub policy_number: String,
    pub claim_number: String,
    pub received_at: String,
    pub expertise_date: String,
    pub new_vehicle_price: String,
    /// Only sent on update
    pub market_value: String,
}

const FIELDS: &[FormField] = &[
    FormField::required("client_id", "Client"),
    FormField::required("vehicle_id", "Véhicule"),
    FormField::optional("insurer_id", "Assureur"),
    FormField::optional("repairer_id", "Réparateur"),
    FormField::optional("assignment_type_id", "Type de mission"),
    FormField::optional("policy_number", "N° de police"),
    FormField::optional("claim_number", "N° de sinistre"),
    FormField::required("received_at", "Date de réception"),
    FormField::optional("expertise_date", "Date d'expertise"),
    FormField::optional("new_vehicle_price", "Prix du véhicule neuf"),
    FormField::optional("market_value", "Valeur vénale"),
];

impl ResourceForm<Assignments> for AssignmentForm {
    fn fields() -> &'static [FormField] {
        FIELDS
    }

    fn from_entity(a: &Assignment) -> Self {
        Self {
            client_id: reference_id(a.client.as_ref()),
            vehicle_id: reference_id(a.vehicle.as_ref()),
            insurer_id: reference_id(a.insurer.as_ref()),
            repairer_id: reference_id(a.repairer.as_ref()),
            assignment_type_id: reference_id(a.assignment_type.as_ref()),
            policy_number: a.policy_number.clone().unwrap_or_default(),
            claim_number: a.claim_number.clone().unwrap_or_default(),
            received_at: date_input(a.received_at.as_deref()),
            expertise_date: date_input(a.expertise_date.as_deref()),
            new_vehicle_price: a.new_vehicle_price.clone().unwrap_or_default(),
            market_value: a.market_value.clone().unwrap_or_default(),
        }
    }

    form_accessors!(
        client_id,
        vehicle_id,
        insurer_id,
        repairer_id,
        assignment_type_id,
        policy_number,
        claim_number,
        received_at,
        expertise_date,
        new_vehicle_price,
        market_value,
    );

    fn to_create(&self) -> Result<AssignmentCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let client_id = required_id(&mut errors, "client_id", &self.client_id);
        let vehicle_id = required_id(&mut errors, "vehicle_id", &self.vehicle_id);
        let insurer_id = optional_id(&mut errors, "insurer_id", &self.insurer_id);
        let repairer_id = optional_id(&mut errors, "repairer_id", &self.repairer_id);
        let assignment_type_id = optional_id(&mut errors, "assignment_type_id", &self.assignment_type_id);
        let policy_number = optional_text(&mut errors, "policy_number", &self.policy_number, MAX_SHORT_TEXT_LEN);
        let claim_number = optional_text(&mut errors, "claim_number", &self.claim_number, MAX_SHORT_TEXT_LEN);
        let received_at = required_date(&mut errors, "received_at", &self.received_at);
        let expertise_date = optional_date(&mut errors, "expertise_date", &self.expertise_date);
        let new_vehicle_price = optional_amount(&mut errors, "new_vehicle_price", &self.new_vehicle_price);

        if let (Some(received), Some(expertise)) = (received_at, expertise_date)
            && expertise < received
        {
            errors.add("expertise_date", "La date d'expertise précède la date de réception");
        }

        errors.finish(|| {
            Some(AssignmentCreate {
                client_id: client_id?,
                vehicle_id: vehicle_id?,
                insurer_id,
                repairer_id,
                assignment_type_id,
                policy_number,
                claim_number,
                received_at: received_at?,
                expertise_date,
                new_vehicle_price,
            })
        })
    }

    fn to_update(&self, original: &Assignment) -> Result<AssignmentUpdate, FormErrors> {
        let data = self.to_create()?;
        let mut errors = FormErrors::new();
        let market_value = optional_amount(&mut errors, "market_value", &self.market_value);
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(AssignmentUpdate {
            client_id: changed_id(Some(data.client_id), original.client.as_ref()),
            vehicle_id: changed_id(Some(data.vehicle_id), original.vehicle.as_ref()),
            insurer_id: changed_id(data.insurer_id, original.insurer.as_ref()),
            repairer_id: changed_id(data.repairer_id, original.repairer.as_ref()),
            assignment_type_id: changed_id(data.assignment_type_id, original.assignment_type.as_ref()),
            policy_number: changed_text(data.policy_number, original.policy_number.as_deref()),
            claim_number: changed_text(data.claim_number, original.claim_number.as_deref()),
            received_at: changed_date(Some(data.received_at), original.received_at.as_deref()),
            expertise_date: changed_date(data.expertise_date, original.expertise_date.as_deref()),
            new_vehicle_price: changed_amount(data.new_vehicle_price, original.new_vehicle_price.as_deref()),
            market_value: changed_amount(market_value, original.market_value.as_deref()),
        })
    }
}

impl AdminResource for Assignments {
    type Form = AssignmentForm;
    const TITLE: &'static str = "Dossiers";
    const SINGULAR: &'static str = "Dossier";
    const EMPTY_TEXT: &'static str = "Aucun dossier trouvé";

    fn columns() -> Vec<Column<Assignment>> {
        vec![
            Column::new("reference", "Référence", |a: &Assignment| a.reference.clone()),
            Column::new("client", "Client", |a: &Assignment| reference_label(a.client.as_ref())),
            Column::new("vehicle", "Véhicule", |a: &Assignment| reference_label(a.vehicle.as_ref())),
            Column::new("insurer", "Assureur", |a: &Assignment| reference_label(a.insurer.as_ref())),
            Column::new("received_at", "Reçu le", |a: &Assignment| format_date(a.received_at.as_deref()))
                .sort_by(|a| SortKey::Text(a.received_at.clone().unwrap_or_default())),
            Column::new("market_value", "Valeur vénale", |a: &Assignment| {
                format_xof_opt(a.market_value.as_deref())
            })
            .sort_by(|a| SortKey::amount(a.market_value.as_deref().unwrap_or_default())),
        ]
    }

    fn view_fields(a: &Assignment) -> Vec<(&'static str, String)> {
        vec![
            ("Référence", a.reference.clone()),
            ("Client", reference_label(a.client.as_ref())),
            ("Véhicule", reference_label(a.vehicle.as_ref())),
            ("Assureur", reference_label(a.insurer.as_ref())),
            ("Réparateur", reference_label(a.repairer.as_ref())),
            ("Type de mission", reference_label(a.assignment_type.as_ref())),
            ("N° de police", or_empty(a.policy_number.as_deref())),
            ("N° de sinistre", or_empty(a.claim_number.as_deref())),
            ("Date de réception", format_date(a.received_at.as_deref())),
            ("Date d'expertise", format_date(a.expertise_date.as_deref())),
            ("Prix du véhicule neuf", format_xof_opt(a.new_vehicle_price.as_deref())),
            ("Taux de vétusté", format_percent(a.depreciation_rate.as_deref())),
            ("Valeur vénale", format_xof_opt(a.market_value.as_deref())),
        ]
    }

    fn row_label(a: &Assignment) -> String {
        a.reference.clone()
    }
}
