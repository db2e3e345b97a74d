//! Vehicles and vehicle models
//!
//! The vehicle form can create a missing brand, model or color inline; the
//! created entity is selected directly from the create response.

use expertise_client::{Brands, ClientResult, Colors, HttpClient, ResourceApi, VehicleModels, Vehicles};
use shared::models::{
    ReferenceItem, ReferenceItemCreate, Vehicle, VehicleCreate, VehicleModel, VehicleModelCreate,
    VehicleModelUpdate, VehicleUpdate,
};

use super::AdminResource;
use crate::ui::form::{FormErrors, FormField, ResourceForm, form_accessors};
use crate::ui::table::{Column, SortKey};
use crate::utils::format::{format_date, format_mileage, or_empty};
use crate::utils::validation::*;

fn reference_label(r: Option<&shared::Reference>) -> String {
    r.map(|r| r.display_label()).unwrap_or_else(|| "-".to_string())
}

fn reference_id(r: Option<&shared::Reference>) -> String {
    r.map(|r| r.id.to_string()).unwrap_or_default()
}

// ============ Vehicles ============

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleForm {
    pub license_plate: String,
    pub brand_id: String,
    pub vehicle_model_id: String,
    pub color_id: String,
    pub mileage: String,
    pub first_entry_into_circulation_date: String,
    pub chassis_number: String,
}

impl VehicleForm {
    /// Select a brand just created; the model belonged to the old brand
    pub fn apply_created_brand(&mut self, brand: &ReferenceItem) {
        self.brand_id = brand.id.to_string();
        self.vehicle_model_id.clear();
    }

    pub fn apply_created_model(&mut self, model: &VehicleModel) {
        self.vehicle_model_id = model.id.to_string();
        if let Some(brand) = &model.brand {
            self.brand_id = brand.id.to_string();
        }
    }

    pub fn apply_created_color(&mut self, color: &ReferenceItem) {
        self.color_id = color.id.to_string();
    }
}

/// Create a brand and select it in `form`
pub async fn quick_create_brand<H: HttpClient>(
    form: &mut VehicleForm,
    api: &ResourceApi<Brands, H>,
    data: &ReferenceItemCreate,
) -> ClientResult<ReferenceItem> {
    let brand = api.create(data).await?;
    form.apply_created_brand(&brand);
    Ok(brand)
}

/// Create a model and select it (and its brand) in `form`
pub async fn quick_create_model<H: HttpClient>(
    form: &mut VehicleForm,
    api: &ResourceApi<VehicleModels, H>,
    data: &VehicleModelCreate,
) -> ClientResult<VehicleModel> {
    let model = api.create(data).await?;
    form.apply_created_model(&model);
    Ok(model)
}

pub async fn quick_create_color<H: HttpClient>(
    form: &mut VehicleForm,
    api: &ResourceApi<Colors, H>,
    data: &ReferenceItemCreate,
) -> ClientResult<ReferenceItem> {
    let color = api.create(data).await?;
    form.apply_created_color(&color);
    Ok(color)
}

const VEHICLE_FIELDS: &[FormField] = &[
    FormField::required("license_plate", "Immatriculation"),
    FormField::required("brand_id", "Marque"),
    FormField::required("vehicle_model_id", "Modèle"),
    FormField::optional("color_id", "Couleur"),
    FormField::optional("mileage", "Kilométrage"),
    FormField::optional("first_entry_into_circulation_date", "Date de 1ère mise en circulation"),
    FormField::optional("chassis_number", "N° de châssis"),
];

impl ResourceForm<Vehicles> for VehicleForm {
    fn fields() -> &'static [FormField] {
        VEHICLE_FIELDS
    }

    fn from_entity(vehicle: &Vehicle) -> Self {
        Self {
            license_plate: vehicle.license_plate.clone(),
            brand_id: reference_id(vehicle.brand.as_ref()),
            vehicle_model_id: reference_id(vehicle.vehicle_model.as_ref()),
            color_id: reference_id(vehicle.color.as_ref()),
            mileage: vehicle.mileage.map(|m| m.to_string()).unwrap_or_default(),
            first_entry_into_circulation_date: date_input(vehicle.first_entry_into_circulation_date.as_deref()),
            chassis_number: vehicle.chassis_number.clone().unwrap_or_default(),
        }
    }

    form_accessors!(
        license_plate,
        brand_id,
        vehicle_model_id,
        color_id,
        mileage,
        first_entry_into_circulation_date,
        chassis_number,
    );

    fn to_create(&self) -> Result<VehicleCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let license_plate = required_text(&mut errors, "license_plate", &self.license_plate, MAX_SHORT_TEXT_LEN)
            .map(|p| p.to_uppercase());
        let brand_id = required_id(&mut errors, "brand_id", &self.brand_id);
        let vehicle_model_id = required_id(&mut errors, "vehicle_model_id", &self.vehicle_model_id);
        let color_id = optional_id(&mut errors, "color_id", &self.color_id);
        let mileage = optional_count(&mut errors, "mileage", &self.mileage);
        let first_entry_into_circulation_date = optional_date(
            &mut errors,
            "first_entry_into_circulation_date",
            &self.first_entry_into_circulation_date,
        );
        let chassis_number = optional_text(&mut errors, "chassis_number", &self.chassis_number, MAX_SHORT_TEXT_LEN);
        errors.finish(|| {
            Some(VehicleCreate {
                license_plate: license_plate?,
                brand_id: brand_id?,
                vehicle_model_id: vehicle_model_id?,
                color_id,
                mileage,
                first_entry_into_circulation_date,
                chassis_number,
            })
        })
    }

    fn to_update(&self, original: &Vehicle) -> Result<VehicleUpdate, FormErrors> {
        let data = self.to_create()?;
        Ok(VehicleUpdate {
            license_plate: changed(data.license_plate, original.license_plate.clone()),
            brand_id: changed_id(Some(data.brand_id), original.brand.as_ref()),
            vehicle_model_id: changed_id(Some(data.vehicle_model_id), original.vehicle_model.as_ref()),
            color_id: changed_id(data.color_id, original.color.as_ref()),
            mileage: match data.mileage {
                Some(m) if original.mileage != Some(m) => Some(m),
                _ => None,
            },
            first_entry_into_circulation_date: changed_date(
                data.first_entry_into_circulation_date,
                original.first_entry_into_circulation_date.as_deref(),
            ),
            chassis_number: changed_text(data.chassis_number, original.chassis_number.as_deref()),
        })
    }
}

impl AdminResource for Vehicles {
    type Form = VehicleForm;
    const TITLE: &'static str = "Véhicules";
    const SINGULAR: &'static str = "Véhicule";
    const EMPTY_TEXT: &'static str = "Aucun véhicule trouvé";

    fn columns() -> Vec<Column<Vehicle>> {
        vec![
            Column::new("license_plate", "Immatriculation", |v: &Vehicle| v.license_plate.clone()),
            Column::new("brand", "Marque", |v: &Vehicle| reference_label(v.brand.as_ref())),
            Column::new("vehicle_model", "Modèle", |v: &Vehicle| reference_label(v.vehicle_model.as_ref())),
            Column::new("color", "Couleur", |v: &Vehicle| reference_label(v.color.as_ref())),
            Column::new("mileage", "Kilométrage", |v: &Vehicle| format_mileage(v.mileage))
                .sort_by(|v| SortKey::Number(v.mileage.unwrap_or(-1))),
        ]
    }

    fn view_fields(vehicle: &Vehicle) -> Vec<(&'static str, String)> {
        vec![
            ("Immatriculation", vehicle.license_plate.clone()),
            ("Marque", reference_label(vehicle.brand.as_ref())),
            ("Modèle", reference_label(vehicle.vehicle_model.as_ref())),
            ("Couleur", reference_label(vehicle.color.as_ref())),
            ("Kilométrage", format_mileage(vehicle.mileage)),
            (
                "1ère mise en circulation",
                format_date(vehicle.first_entry_into_circulation_date.as_deref()),
            ),
            ("N° de châssis", or_empty(vehicle.chassis_number.as_deref())),
        ]
    }

    fn row_label(vehicle: &Vehicle) -> String {
        vehicle.license_plate.clone()
    }
}

// ============ Vehicle models ============

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleModelForm {
    pub code: String,
    pub label: String,
    pub brand_id: String,
    pub description: String,
}

const MODEL_FIELDS: &[FormField] = &[
    FormField::required("code", "Code"),
    FormField::required("label", "Libellé"),
    FormField::required("brand_id", "Marque"),
    FormField::optional("description", "Description"),
];

impl ResourceForm<VehicleModels> for VehicleModelForm {
    fn fields() -> &'static [FormField] {
        MODEL_FIELDS
    }

    fn from_entity(model: &VehicleModel) -> Self {
        Self {
            code: model.code.clone(),
            label: model.label.clone(),
            brand_id: reference_id(model.brand.as_ref()),
            description: model.description.clone().unwrap_or_default(),
        }
    }

    form_accessors!(code, label, brand_id, description);

    fn to_create(&self) -> Result<VehicleModelCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let code = required_text(&mut errors, "code", &self.code, MAX_CODE_LEN);
        let label = required_text(&mut errors, "label", &self.label, MAX_NAME_LEN);
        let brand_id = required_id(&mut errors, "brand_id", &self.brand_id);
        let description = optional_text(&mut errors, "description", &self.description, MAX_NOTE_LEN);
        errors.finish(|| {
            Some(VehicleModelCreate {
                code: code?,
                label: label?,
                brand_id: brand_id?,
                description,
            })
        })
    }

    fn to_update(&self, original: &VehicleModel) -> Result<VehicleModelUpdate, FormErrors> {
        let data = self.to_create()?;
        Ok(VehicleModelUpdate {
            code: changed(data.code, original.code.clone()),
            label: changed(data.label, original.label.clone()),
            brand_id: changed_id(Some(data.brand_id), original.brand.as_ref()),
            description: changed_text(data.description, original.description.as_deref()),
        })
    }
}

impl AdminResource for VehicleModels {
    type Form = VehicleModelForm;
    const TITLE: &'static str = "Modèles de véhicules";
    const SINGULAR: &'static str = "Modèle";
    const EMPTY_TEXT: &'static str = "Aucun modèle trouvé";

    fn columns() -> Vec<Column<VehicleModel>> {
        vec![
            Column::new("code", "Code", |m: &VehicleModel| m.code.clone()),
            Column::new("label", "Libellé", |m: &VehicleModel| m.label.clone()),
            Column::new("brand", "Marque", |m: &VehicleModel| reference_label(m.brand.as_ref())),
        ]
    }

    fn view_fields(model: &VehicleModel) -> Vec<(&'static str, String)> {
        vec![
            ("Code", model.code.clone()),
            ("Libellé", model.label.clone()),
            ("Marque", reference_label(model.brand.as_ref())),
            ("Description", or_empty(model.description.as_deref())),
        ]
    }

    fn row_label(model: &VehicleModel) -> String {
        model.label.clone()
    }
}
