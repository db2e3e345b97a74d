//! Pricing tables: workforce hourly rates and paint prices

use expertise_client::{PaintPrices, WorkforceRates};
use shared::models::{
    PaintPrice, PaintPriceCreate, PaintPriceUpdate, WorkforceRate, WorkforceRateCreate,
    WorkforceRateUpdate,
};

use super::AdminResource;
use crate::ui::form::{FormErrors, FormField, ResourceForm, form_accessors};
use crate::ui::table::{Column, SortKey};
use crate::utils::format::{format_xof, or_empty};
use crate::utils::validation::*;

fn reference_label(r: Option<&shared::Reference>) -> String {
    r.map(|r| r.display_label()).unwrap_or_else(|| "-".to_string())
}

// ============ Workforce rates ============

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkforceRateForm {
    pub workforce_type_id: String,
    pub vehicle_category: String,
    pub hourly_rate: String,
}

const WORKFORCE_FIELDS: &[FormField] = &[
    FormField::required("workforce_type_id", "Type de main d'œuvre"),
    FormField::optional("vehicle_category", "Catégorie de véhicule"),
    FormField::required("hourly_rate", "Taux horaire"),
];

impl ResourceForm<WorkforceRates> for WorkforceRateForm {
    fn fields() -> &'static [FormField] {
        WORKFORCE_FIELDS
    }

    fn from_entity(rate: &WorkforceRate) -> Self {
        Self {
            workforce_type_id: rate
                .workforce_type
                .as_ref()
                .map(|r| r.id.to_string())
                .unwrap_or_default(),
            vehicle_category: rate.vehicle_category.clone().unwrap_or_default(),
            hourly_rate: rate.hourly_rate.clone(),
        }
    }

    form_accessors!(workforce_type_id, vehicle_category, hourly_rate);

    fn to_create(&self) -> Result<WorkforceRateCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let workforce_type_id = required_id(&mut errors, "workforce_type_id", &self.workforce_type_id);
        let vehicle_category = optional_text(&mut errors, "vehicle_category", &self.vehicle_category, MAX_SHORT_TEXT_LEN);
        let hourly_rate = required_amount(&mut errors, "hourly_rate", &self.hourly_rate);
        errors.finish(|| {
            Some(WorkforceRateCreate {
                workforce_type_id: workforce_type_id?,
                vehicle_category,
                hourly_rate: hourly_rate?,
            })
        })
    }

    fn to_update(&self, original: &WorkforceRate) -> Result<WorkforceRateUpdate, FormErrors> {
        let data = self.to_create()?;
        Ok(WorkforceRateUpdate {
            workforce_type_id: changed_id(Some(data.workforce_type_id), original.workforce_type.as_ref()),
            vehicle_category: changed_text(data.vehicle_category, original.vehicle_category.as_deref()),
            hourly_rate: changed_amount(Some(data.hourly_rate), Some(&original.hourly_rate)),
        })
    }
}

impl AdminResource for WorkforceRates {
    type Form = WorkforceRateForm;
    const TITLE: &'static str = "Taux de main d'œuvre";
    const SINGULAR: &'static str = "Taux de main d'œuvre";

    fn columns() -> Vec<Column<WorkforceRate>> {
        vec![
            Column::new("workforce_type", "Type", |r: &WorkforceRate| {
                reference_label(r.workforce_type.as_ref())
            }),
            Column::new("vehicle_category", "Catégorie", |r: &WorkforceRate| {
                or_empty(r.vehicle_category.as_deref())
            }),
            Column::new("hourly_rate", "Taux horaire", |r: &WorkforceRate| format_xof(&r.hourly_rate))
                .sort_by(|r| SortKey::amount(&r.hourly_rate)),
        ]
    }

    fn view_fields(rate: &WorkforceRate) -> Vec<(&'static str, String)> {
        vec![
            ("Type", reference_label(rate.workforce_type.as_ref())),
            ("Catégorie", or_empty(rate.vehicle_category.as_deref())),
            ("Taux horaire", format_xof(&rate.hourly_rate)),
        ]
    }

    fn row_label(rate: &WorkforceRate) -> String {
        format!(
            "{} / {}",
            reference_label(rate.workforce_type.as_ref()),
            or_empty(rate.vehicle_category.as_deref())
        )
    }
}

// ============ Paint prices ============

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintPriceForm {
    pub paint_type_id: String,
    pub hourly_rate: String,
    pub product_price: String,
}

const PAINT_FIELDS: &[FormField] = &[
    FormField::required("paint_type_id", "Type de peinture"),
    FormField::required("hourly_rate", "Taux horaire"),
    FormField::required("product_price", "Prix produit"),
];

impl ResourceForm<PaintPrices> for PaintPriceForm {
    fn fields() -> &'static [FormField] {
        PAINT_FIELDS
    }

    fn from_entity(price: &PaintPrice) -> Self {
        Self {
            paint_type_id: price
                .paint_type
                .as_ref()
                .map(|r| r.id.to_string())
                .unwrap_or_default(),
            hourly_rate: price.hourly_rate.clone(),
            product_price: price.product_price.clone(),
        }
    }

    form_accessors!(paint_type_id, hourly_rate, product_price);

    fn to_create(&self) -> Result<PaintPriceCreate, FormErrors> {
        let mut errors = FormErrors::new();
        let paint_type_id = required_id(&mut errors, "paint_type_id", &self.paint_type_id);
        let hourly_rate = required_amount(&mut errors, "hourly_rate", &self.hourly_rate);
        let product_price = required_amount(&mut errors, "product_price", &self.product_price);
        errors.finish(|| {
            Some(PaintPriceCreate {
                paint_type_id: paint_type_id?,
                hourly_rate: hourly_rate?,
                product_price: product_price?,
            })
        })
    }

    fn to_update(&self, original: &PaintPrice) -> Result<PaintPriceUpdate, FormErrors> {
        let data = self.to_create()?;
        Ok(PaintPriceUpdate {
            paint_type_id: changed_id(Some(data.paint_type_id), original.paint_type.as_ref()),
            hourly_rate: changed_amount(Some(data.hourly_rate), Some(&original.hourly_rate)),
            product_price: changed_amount(Some(data.product_price), Some(&original.product_price)),
        })
    }
}

impl AdminResource for PaintPrices {
    type Form = PaintPriceForm;
    const TITLE: &'static str = "Prix peinture";
    const SINGULAR: &'static str = "Prix peinture";

    fn columns() -> Vec<Column<PaintPrice>> {
        vec![
            Column::new("paint_type", "Type de peinture", |p: &PaintPrice| {
                reference_label(p.paint_type.as_ref())
            }),
            Column::new("hourly_rate", "Taux horaire", |p: &PaintPrice| format_xof(&p.hourly_rate))
                .sort_by(|p| SortKey::amount(&p.hourly_rate)),
            Column::new("product_price", "Prix produit", |p: &PaintPrice| format_xof(&p.product_price))
                .sort_by(|p| SortKey::amount(&p.product_price)),
        ]
    }

    fn view_fields(price: &PaintPrice) -> Vec<(&'static str, String)> {
        vec![
            ("Type de peinture", reference_label(price.paint_type.as_ref())),
            ("Taux horaire", format_xof(&price.hourly_rate)),
            ("Prix produit", format_xof(&price.product_price)),
        ]
    }

    fn row_label(price: &PaintPrice) -> String {
        reference_label(price.paint_type.as_ref())
    }
}
