//! Annual emission report

use crate::category::Category;
use crate::model::FloatValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const KG_PER_TONNE: FloatValue = 1000.0;

/// Result of a single footprint calculation.
///
/// Holds the annual emissions (kg CO₂e) of every category and the total
/// footprint in tonnes CO₂e. The total is always the sum of the category
/// emissions divided by [`KG_PER_TONNE`]. Deserialisation only reads the
/// per-category emissions and recomputes the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EmissionsDocument")]
pub struct AnnualEmissionReport {
    /// unit: kg CO₂e / yr
    emissions: BTreeMap<Category, FloatValue>,
    /// unit: t CO₂e / yr
    total_tonnes: FloatValue,
}

#[derive(Deserialize)]
struct EmissionsDocument {
    emissions: BTreeMap<Category, FloatValue>,
}

impl From<EmissionsDocument> for AnnualEmissionReport {
    fn from(document: EmissionsDocument) -> Self {
        Self::from_emissions(document.emissions)
    }
}

impl AnnualEmissionReport {
    /// Build a report from per-category emissions.
    ///
    /// Categories that are not supplied are recorded as zero.
    pub fn from_emissions(emissions: impl IntoIterator<Item = (Category, FloatValue)>) -> Self {
        let mut all: BTreeMap<Category, FloatValue> =
            Category::ALL.into_iter().map(|c| (c, 0.0)).collect();
        all.extend(emissions);

        let total_kg: FloatValue = all.values().sum();
        Self {
            emissions: all,
            total_tonnes: total_kg / KG_PER_TONNE,
        }
    }

    /// Annual emission of a category (kg CO₂e).
    pub fn emission(&self, category: Category) -> FloatValue {
        self.emissions.get(&category).copied().unwrap_or(0.0)
    }

    pub fn emissions(&self) -> &BTreeMap<Category, FloatValue> {
        &self.emissions
    }

    /// Iterate over `(category, kg CO₂e)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, FloatValue)> + '_ {
        self.emissions.iter().map(|(c, e)| (*c, *e))
    }

    /// Total annual footprint (kg CO₂e).
    pub fn total_kg(&self) -> FloatValue {
        self.emissions.values().sum()
    }

    /// Total annual footprint (t CO₂e).
    pub fn total_tonnes(&self) -> FloatValue {
        self.total_tonnes
    }

    /// Fraction of the total footprint due to a category.
    ///
    /// Zero when the total footprint is zero.
    pub fn share(&self, category: Category) -> FloatValue {
        let total = self.total_kg();
        if total > 0.0 {
            self.emission(category) / total
        } else {
            0.0
        }
    }

    /// The category with the largest emission, or `None` if nothing was emitted.
    ///
    /// Ties resolve to the category that comes first in display order.
    pub fn largest_source(&self) -> Option<(Category, FloatValue)> {
        self.iter()
            .filter(|(_, e)| *e > 0.0)
            .fold(None, |best, (c, e)| match best {
                Some((_, best_e)) if best_e >= e => best,
                _ => Some((c, e)),
            })
    }
}
