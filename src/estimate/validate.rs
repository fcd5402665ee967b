//! Pre-submission validation
//!
//! `validate` never panics: it walks the form in field order and collects one
//! error per violated constraint, each carrying the wire field name and a
//! message suitable for display next to the field. On success it produces the
//! normalized, typed form the payload is built from.

use super::{City, Floors, MarlaStandard, Quality, Unit, MIN_AREA_MARLA};
use crate::state::EstimateForm;

/// A single violated constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A form that passed every constraint, with defaults filled in
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    pub area_value: f64,
    pub unit: Unit,
    pub marla_standard: MarlaStandard,
    pub quality: Quality,
    pub city: City,
    pub overall_length: String,
    pub overall_width: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub kitchen_size: u32,
    pub living_rooms: u32,
    pub drawing_dining: u32,
    pub garage: String,
    pub floors: Floors,
    pub style: String,
}

/// Validate the form, reporting every violation in field order.
pub fn validate(form: &EstimateForm) -> Result<ValidatedForm, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let area_value = match form.area.as_text().parse::<f64>() {
        Ok(value) if value >= MIN_AREA_MARLA => Some(value),
        Ok(_) => {
            errors.push(ValidationError::new(
                form.area.name,
                format!("Area value must be at least {}.", MIN_AREA_MARLA as u32),
            ));
            None
        }
        Err(_) => {
            errors.push(ValidationError::new(form.area.name, "Area value is required."));
            None
        }
    };

    if form.overall_length.is_empty() {
        errors.push(ValidationError::new(
            form.overall_length.name,
            "Overall length is required.",
        ));
    }
    if form.overall_width.is_empty() {
        errors.push(ValidationError::new(
            form.overall_width.name,
            "Overall width is required.",
        ));
    }
    if form.bedrooms < 1 {
        errors.push(ValidationError::new(
            "bedrooms",
            "Bedrooms must be at least 1.",
        ));
    }
    if form.bathrooms < 1 {
        errors.push(ValidationError::new(
            "bathrooms",
            "Bathrooms must be at least 1.",
        ));
    }
    if !(1..=2).contains(&form.kitchens) {
        errors.push(ValidationError::new(
            "kitchen_size",
            "Kitchens must be between 1 and 2.",
        ));
    }
    if form.living_rooms > 3 {
        errors.push(ValidationError::new(
            "living_rooms",
            "Living rooms cannot exceed 3.",
        ));
    }
    if form.drawing_dining > 1 {
        errors.push(ValidationError::new(
            "drawing_dining",
            "Drawing/Dining can be 0 or 1.",
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Optional text fields fall back to their documented defaults.
    let garage = if form.garage.is_empty() {
        "not required".to_string()
    } else {
        form.garage.as_text().to_string()
    };
    let style = if form.style.is_empty() {
        "Pakistani style".to_string()
    } else {
        form.style.as_text().to_string()
    };

    Ok(ValidatedForm {
        // None would have pushed an error above.
        area_value: area_value.unwrap_or(MIN_AREA_MARLA),
        unit: form.unit,
        marla_standard: form.marla_standard,
        quality: form.quality,
        city: form.city,
        overall_length: form.overall_length.as_text().to_string(),
        overall_width: form.overall_width.as_text().to_string(),
        bedrooms: form.bedrooms,
        bathrooms: form.bathrooms,
        kitchen_size: form.kitchens,
        living_rooms: form.living_rooms,
        drawing_dining: form.drawing_dining,
        garage,
        floors: form.floors,
        style,
    })
}
