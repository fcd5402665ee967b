//! Estimate form state and derivation wiring

use super::field::FormField;
use crate::estimate::{clamp_area, derive_dependents, City, Floors, MarlaStandard, Quality, Unit};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// How a field is edited (drives both key handling and rendering)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Digit/decimal-point buffer
    Numeric,
    /// Free text
    Text,
    /// Cycles through a fixed enum with arrow keys
    Select,
    /// Small integer cycled with arrow keys or set with a digit
    Count,
    /// The submit row
    Submit,
}

// Field indices, in visual order.
pub const FIELD_AREA: usize = 0;
pub const FIELD_UNIT: usize = 1;
pub const FIELD_MARLA_STANDARD: usize = 2;
pub const FIELD_QUALITY: usize = 3;
pub const FIELD_CITY: usize = 4;
pub const FIELD_LENGTH: usize = 5;
pub const FIELD_WIDTH: usize = 6;
pub const FIELD_BEDROOMS: usize = 7;
pub const FIELD_BATHROOMS: usize = 8;
pub const FIELD_KITCHENS: usize = 9;
pub const FIELD_LIVING_ROOMS: usize = 10;
pub const FIELD_DRAWING_DINING: usize = 11;
pub const FIELD_GARAGE: usize = 12;
pub const FIELD_FLOORS: usize = 13;
pub const FIELD_STYLE: usize = 14;
pub const FIELD_SUBMIT: usize = 15;

pub const FIELD_COUNT: usize = 16;

/// The construction estimate form
///
/// Created once with static defaults; the area field drives the derivation
/// chain (room counts, garage, living rooms, preset dimensions) on every
/// edit, so no partially-updated state is ever observable between fields.
#[derive(Debug, Clone)]
pub struct EstimateForm {
    pub area: FormField,
    pub unit: Unit,
    pub marla_standard: MarlaStandard,
    pub quality: Quality,
    pub city: City,
    pub overall_length: FormField,
    pub overall_width: FormField,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub kitchens: u32,
    pub living_rooms: u32,
    pub drawing_dining: u32,
    pub garage: FormField,
    pub floors: Floors,
    pub style: FormField,
    pub active_field_index: usize,
}

impl EstimateForm {
    pub fn new() -> Self {
        Self {
            area: FormField::numeric("area_value", "5"),
            unit: Unit::default(),
            marla_standard: MarlaStandard::default(),
            quality: Quality::default(),
            city: City::default(),
            overall_length: FormField::text("overall_length", "50 ft"),
            overall_width: FormField::text("overall_width", "15 ft"),
            bedrooms: 3,
            bathrooms: 2,
            kitchens: 1,
            living_rooms: 1,
            drawing_dining: 0,
            garage: FormField::text("garage", "not required"),
            floors: Floors::default(),
            style: FormField::text("style", "Pakistani style"),
            active_field_index: 0,
        }
    }

    pub fn field_kind(index: usize) -> FieldKind {
        match index {
            FIELD_AREA => FieldKind::Numeric,
            FIELD_LENGTH | FIELD_WIDTH | FIELD_GARAGE | FIELD_STYLE => FieldKind::Text,
            FIELD_UNIT | FIELD_MARLA_STANDARD | FIELD_QUALITY | FIELD_CITY | FIELD_FLOORS => {
                FieldKind::Select
            }
            FIELD_BEDROOMS | FIELD_BATHROOMS | FIELD_KITCHENS | FIELD_LIVING_ROOMS
            | FIELD_DRAWING_DINING => FieldKind::Count,
            _ => FieldKind::Submit,
        }
    }

    pub fn field_label(index: usize) -> &'static str {
        match index {
            FIELD_AREA => "Area Value",
            FIELD_UNIT => "Unit",
            FIELD_MARLA_STANDARD => "Marla Standard",
            FIELD_QUALITY => "Quality",
            FIELD_CITY => "City",
            FIELD_LENGTH => "Overall Length",
            FIELD_WIDTH => "Overall Width",
            FIELD_BEDROOMS => "Bedrooms",
            FIELD_BATHROOMS => "Bathrooms",
            FIELD_KITCHENS => "Kitchens",
            FIELD_LIVING_ROOMS => "Living Rooms",
            FIELD_DRAWING_DINING => "Drawing/Dining",
            FIELD_GARAGE => "Garage",
            FIELD_FLOORS => "Number of Floors",
            FIELD_STYLE => "Style",
            _ => "Get Estimate",
        }
    }

    /// Wire name of the field, used to match validation errors.
    pub fn field_name(index: usize) -> &'static str {
        match index {
            FIELD_AREA => "area_value",
            FIELD_UNIT => "unit",
            FIELD_MARLA_STANDARD => "marla_standard",
            FIELD_QUALITY => "quality",
            FIELD_CITY => "city",
            FIELD_LENGTH => "overall_length",
            FIELD_WIDTH => "overall_width",
            FIELD_BEDROOMS => "bedrooms",
            FIELD_BATHROOMS => "bathrooms",
            FIELD_KITCHENS => "kitchen_size",
            FIELD_LIVING_ROOMS => "living_rooms",
            FIELD_DRAWING_DINING => "drawing_dining",
            FIELD_GARAGE => "garage",
            FIELD_FLOORS => "floors",
            FIELD_STYLE => "style",
            _ => "",
        }
    }

    /// Display value for rendering
    pub fn field_display(&self, index: usize) -> String {
        match index {
            FIELD_AREA => self.area.as_text().to_string(),
            FIELD_UNIT => self.unit.label().to_string(),
            FIELD_MARLA_STANDARD => self.marla_standard.label().to_string(),
            FIELD_QUALITY => self.quality.label().to_string(),
            FIELD_CITY => self.city.label().to_string(),
            FIELD_LENGTH => self.overall_length.as_text().to_string(),
            FIELD_WIDTH => self.overall_width.as_text().to_string(),
            FIELD_BEDROOMS => self.bedrooms.to_string(),
            FIELD_BATHROOMS => self.bathrooms.to_string(),
            FIELD_KITCHENS => self.kitchens.to_string(),
            FIELD_LIVING_ROOMS => self.living_rooms.to_string(),
            FIELD_DRAWING_DINING => match self.drawing_dining {
                0 => "Not Required".to_string(),
                _ => "Required".to_string(),
            },
            FIELD_GARAGE => self.garage.as_text().to_string(),
            FIELD_FLOORS => self.floors.label().to_string(),
            FIELD_STYLE => self.style.as_text().to_string(),
            _ => String::new(),
        }
    }

    /// The area used for derivation: blank parses as the minimum, and
    /// anything unparseable falls back to it too.
    pub fn effective_area(&self) -> f64 {
        let raw = self.area.as_text();
        if raw.is_empty() {
            return crate::estimate::MIN_AREA_MARLA;
        }
        clamp_area(raw.parse::<f64>().unwrap_or(crate::estimate::MIN_AREA_MARLA))
    }

    /// Type a character into the area field and rerun the derivation chain.
    pub fn area_push_char(&mut self, c: char) {
        self.area.push_char(c);
        self.on_area_edit();
    }

    /// Backspace in the area field and rerun the derivation chain.
    pub fn area_pop_char(&mut self) {
        self.area.pop_char();
        self.on_area_edit();
    }

    /// Commit an area edit: clamp the committed value, then recompute every
    /// dependent field in one pass. An empty buffer stays empty on screen
    /// but derives as the minimum area.
    pub fn on_area_edit(&mut self) {
        if !self.area.is_empty() {
            if let Ok(value) = self.area.as_text().parse::<f64>() {
                let clamped = clamp_area(value);
                if clamped != value {
                    self.area.set_text(&format_area(clamped));
                }
            }
        }
        self.apply_derivation();
    }

    /// Leaving the area field while it is blank commits the minimum value
    /// and reruns the chain as if the user had typed it.
    pub fn on_area_blur(&mut self) {
        if self.area.is_empty() {
            self.area.set_text(&format_area(crate::estimate::MIN_AREA_MARLA));
        }
        self.apply_derivation();
    }

    fn apply_derivation(&mut self) {
        let derived = derive_dependents(self.effective_area());
        self.bedrooms = derived.bedrooms;
        self.bathrooms = derived.bathrooms;
        self.living_rooms = derived.living_rooms;
        self.garage.set_text(derived.garage);
        if let Some((width, length)) = derived.dimensions {
            self.overall_width.set_text(width);
            self.overall_length.set_text(length);
        }
    }

    /// Cycle a select or count field forward (`+1`) or backward (`-1`).
    pub fn cycle_field(&mut self, index: usize, forward: bool) {
        match index {
            FIELD_UNIT => self.unit = if forward { self.unit.next() } else { self.unit.prev() },
            FIELD_MARLA_STANDARD => {
                self.marla_standard = if forward {
                    self.marla_standard.next()
                } else {
                    self.marla_standard.prev()
                }
            }
            FIELD_QUALITY => {
                self.quality = if forward { self.quality.next() } else { self.quality.prev() }
            }
            FIELD_CITY => self.city = if forward { self.city.next() } else { self.city.prev() },
            FIELD_FLOORS => {
                self.floors = if forward { self.floors.next() } else { self.floors.prev() }
            }
            FIELD_BEDROOMS => self.bedrooms = cycle_count(self.bedrooms, forward, 1, u32::MAX),
            FIELD_BATHROOMS => self.bathrooms = cycle_count(self.bathrooms, forward, 1, u32::MAX),
            FIELD_KITCHENS => self.kitchens = cycle_count(self.kitchens, forward, 1, 2),
            FIELD_LIVING_ROOMS => {
                self.living_rooms = cycle_count(self.living_rooms, forward, 0, 3)
            }
            FIELD_DRAWING_DINING => {
                self.drawing_dining = cycle_count(self.drawing_dining, forward, 0, 1)
            }
            _ => {}
        }
    }

    /// Set a count field directly from a typed digit, clamped to its range.
    pub fn set_count_from_digit(&mut self, index: usize, digit: u32) {
        match index {
            FIELD_BEDROOMS => self.bedrooms = digit.max(1),
            FIELD_BATHROOMS => self.bathrooms = digit.max(1),
            FIELD_KITCHENS => self.kitchens = digit.clamp(1, 2),
            FIELD_LIVING_ROOMS => self.living_rooms = digit.min(3),
            FIELD_DRAWING_DINING => self.drawing_dining = digit.min(1),
            _ => {}
        }
    }

    /// Text field at the given index, if any
    pub fn text_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            FIELD_LENGTH => Some(&mut self.overall_length),
            FIELD_WIDTH => Some(&mut self.overall_width),
            FIELD_GARAGE => Some(&mut self.garage),
            FIELD_STYLE => Some(&mut self.style),
            _ => None,
        }
    }
}

impl Default for EstimateForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for EstimateForm {
    fn field_count(&self) -> usize {
        FIELD_COUNT
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FIELD_COUNT - 1);
    }
}

fn cycle_count(value: u32, forward: bool, min: u32, max: u32) -> u32 {
    if forward {
        value.saturating_add(1).min(max)
    } else {
        value.saturating_sub(1).max(min)
    }
}

/// Render an area value without a trailing `.0` for whole numbers.
fn format_area(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as u64)
    } else {
        format!("{value}")
    }
}
