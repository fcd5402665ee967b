//! Derived-field synthesis
//!
//! Every edit of the plot-area field reruns `derive_dependents`, which
//! recomputes the room counts, the garage requirement, and (for whole-marla
//! plots with a known standard cut) the overall width/length presets.
//! Keeping the whole chain in one pure function makes the invariants
//! centrally testable.

/// Minimum plot area in marla; smaller values are raised, not rejected.
pub const MIN_AREA_MARLA: f64 = 3.0;

/// Garage requirement pinned by the derivation chain.
pub const GARAGE_REQUIRED: &str = "Required";

/// Standard plot cuts for whole-marla sizes: (marla, width, length).
/// Each pair satisfies width x length = marla x 225 sq ft.
const PLOT_PRESETS: &[(u32, &str, &str)] = &[
    (3, "18", "37.5"),
    (4, "20", "45"),
    (5, "25", "45"),
    (6, "30", "45"),
    (7, "35", "45"),
    (8, "30", "60"),
    (9, "45", "45"),
    (10, "30", "75"),
];

/// Fields recomputed from the effective plot area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedFields {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub living_rooms: u32,
    pub garage: &'static str,
    /// `Some((width, length))` only for whole-marla areas in the preset
    /// table; `None` leaves the user's dimensions untouched.
    pub dimensions: Option<(&'static str, &'static str)>,
}

/// Raise sub-minimum areas to the minimum.
pub fn clamp_area(value: f64) -> f64 {
    if value < MIN_AREA_MARLA {
        MIN_AREA_MARLA
    } else {
        value
    }
}

/// Look up the preset plot cut for a whole-marla area.
pub fn preset_dimensions(effective_area: f64) -> Option<(&'static str, &'static str)> {
    if effective_area.fract() != 0.0 || !(0.0..=u32::MAX as f64).contains(&effective_area) {
        return None;
    }
    let marla = effective_area as u32;
    PLOT_PRESETS
        .iter()
        .find(|(m, _, _)| *m == marla)
        .map(|(_, w, l)| (*w, *l))
}

/// Recompute every area-dependent field from the effective area.
pub fn derive_dependents(effective_area: f64) -> DerivedFields {
    let rooms = ((effective_area * 0.5).floor().max(0.0) as u32).max(1);
    DerivedFields {
        bedrooms: rooms,
        bathrooms: rooms,
        living_rooms: if effective_area <= MIN_AREA_MARLA { 0 } else { 1 },
        garage: GARAGE_REQUIRED,
        dimensions: preset_dimensions(effective_area),
    }
}
