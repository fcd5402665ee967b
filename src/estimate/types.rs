//! Select-field value enums
//!
//! Each enum knows its wire value (`as_str`, what the estimation API
//! expects) and its display label, and can cycle forward/backward for
//! arrow-key editing in the form.

use serde::{Deserialize, Serialize};

/// Measurement unit for the plot area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Marla,
    Sqft,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Marla => "marla",
            Self::Sqft => "sqft",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Marla => "Marla",
            Self::Sqft => "Sqft",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Marla => Self::Sqft,
            Self::Sqft => Self::Marla,
        }
    }

    pub fn prev(&self) -> Self {
        self.next()
    }
}

/// Marla-to-sqft conversion standard (two competing standards exist)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarlaStandard {
    /// 225 sq ft per marla (government standard)
    #[default]
    Govt225,
    /// 272.25 sq ft per marla (old Lahore standard)
    Lahore272,
}

impl MarlaStandard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Govt225 => "225 (Govt)",
            Self::Lahore272 => "272.25 (Lahore/old)",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Govt225 => Self::Lahore272,
            Self::Lahore272 => Self::Govt225,
        }
    }

    pub fn prev(&self) -> Self {
        self.next()
    }
}

/// Construction quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Quality {
    Economy,
    #[default]
    Standard,
    Premium,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::Standard => "Standard",
            Self::Premium => "Premium",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Economy => Self::Standard,
            Self::Standard => Self::Premium,
            Self::Premium => Self::Economy,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Economy => Self::Premium,
            Self::Standard => Self::Economy,
            Self::Premium => Self::Standard,
        }
    }
}

/// City the estimator applies a cost factor for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum City {
    Lahore,
    Islamabad,
    Rawalpindi,
    Karachi,
    #[default]
    Faisalabad,
    Multan,
    Other,
}

impl City {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lahore => "Lahore",
            Self::Islamabad => "Islamabad",
            Self::Rawalpindi => "Rawalpindi",
            Self::Karachi => "Karachi",
            Self::Faisalabad => "Faisalabad",
            Self::Multan => "Multan",
            Self::Other => "Other",
        }
    }

    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Lahore => Self::Islamabad,
            Self::Islamabad => Self::Rawalpindi,
            Self::Rawalpindi => Self::Karachi,
            Self::Karachi => Self::Faisalabad,
            Self::Faisalabad => Self::Multan,
            Self::Multan => Self::Other,
            Self::Other => Self::Lahore,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Lahore => Self::Other,
            Self::Islamabad => Self::Lahore,
            Self::Rawalpindi => Self::Islamabad,
            Self::Karachi => Self::Rawalpindi,
            Self::Faisalabad => Self::Karachi,
            Self::Multan => Self::Faisalabad,
            Self::Other => Self::Multan,
        }
    }
}

/// Number of floors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Floors {
    #[default]
    Single,
    Double,
    Triple,
}

impl Floors {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single story",
            Self::Double => "double story",
            Self::Triple => "triple story",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single Story",
            Self::Double => "Double Story",
            Self::Triple => "Triple Story",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Single => Self::Double,
            Self::Double => Self::Triple,
            Self::Triple => Self::Single,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Single => Self::Triple,
            Self::Double => Self::Single,
            Self::Triple => Self::Double,
        }
    }
}
