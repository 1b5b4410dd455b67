//! Household consumption categories.
//!
//! The set of categories is fixed. Each category carries a machine name used in
//! input files and command-line flags, a display label and the unit its monthly
//! consumption is measured in.
//!
//! ```rust
//! use footprint_core::Category;
//!
//! let category: Category = "natural-gas".parse().unwrap();
//! assert_eq!(category, Category::NaturalGas);
//! assert_eq!(category.name(), "natural_gas");
//! assert_eq!(category.unit(), "m³");
//! ```

use crate::errors::FootprintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A household resource whose consumption produces emissions.
///
/// Variants are declared in display order, which is also the `Ord` order used
/// when categories key a sorted map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Grid electricity, in kWh
    Electricity,
    /// Piped natural gas, in m³
    NaturalGas,
    /// Liquefied petroleum gas, in kg
    Lpg,
    /// Gasoline, in litres
    Gasoline,
    /// Diesel, in litres
    Diesel,
    /// Organic waste, in kg
    OrganicWaste,
    /// Water, in m³
    Water,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 7] = [
        Category::Electricity,
        Category::NaturalGas,
        Category::Lpg,
        Category::Gasoline,
        Category::Diesel,
        Category::OrganicWaste,
        Category::Water,
    ];

    /// Machine name, as used in input files.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Electricity => "electricity",
            Category::NaturalGas => "natural_gas",
            Category::Lpg => "lpg",
            Category::Gasoline => "gasoline",
            Category::Diesel => "diesel",
            Category::OrganicWaste => "organic_waste",
            Category::Water => "water",
        }
    }

    /// Human-readable label used in tables and charts.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::NaturalGas => "Natural Gas",
            Category::Lpg => "LPG",
            Category::Gasoline => "Gasoline",
            Category::Diesel => "Diesel",
            Category::OrganicWaste => "Organic Waste",
            Category::Water => "Water",
        }
    }

    /// Unit of the monthly consumption reading.
    pub fn unit(&self) -> &'static str {
        match self {
            Category::Electricity => "kWh",
            Category::NaturalGas => "m³",
            Category::Lpg => "kg",
            Category::Gasoline => "L",
            Category::Diesel => "L",
            Category::OrganicWaste => "kg",
            Category::Water => "m³",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| {
                let expected: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
                FootprintError::UnknownCategory(s.to_string(), expected.join(", "))
            })
    }
}
