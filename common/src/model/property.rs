use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CriteriaError;

/// Category of a listing. Serialised in lowercase (`"house"`, `"flat"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Flat,
}

impl PropertyType {
    pub const ALL: [PropertyType; 2] = [PropertyType::House, PropertyType::Flat];

    /// Lowercase form used as the `<select>` option value.
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Flat => "flat",
        }
    }

    /// Capitalised form shown on badges and feature rows.
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Flat => "Flat",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyType {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "house" => Ok(PropertyType::House),
            "flat" => Ok(PropertyType::Flat),
            _ => Err(CriteriaError::UnknownPropertyType(s.to_string())),
        }
    }
}

/// A single listing. Records are read-only for the lifetime of the session.
///
/// Image paths are relative to the asset base (e.g. `images/image1.jpg`); the
/// frontend resolves them before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: u32,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Asking price in whole LKR.
    pub price: u64,
    pub bedrooms: u32,
    pub date_added: NaiveDate,
    pub postcode: String,
    pub location: String,
    pub short_desc: String,
    pub long_desc: String,
    pub images: Vec<String>,
    pub floor_plan: String,
}

impl Property {
    /// Agency reference shown on the details page, e.g. `HL-000042`.
    pub fn reference(&self) -> String {
        format!("HL-{:06}", self.id)
    }

    /// First gallery image, used as the card and favourites thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// `"1 bed"`, `"3 beds"`.
    pub fn bedrooms_label(&self) -> String {
        if self.bedrooms == 1 {
            "1 bed".to_string()
        } else {
            format!("{} beds", self.bedrooms)
        }
    }
}
