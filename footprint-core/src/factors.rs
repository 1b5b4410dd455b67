//! Emission factors
//!
//! Conversion factors from consumed quantity to mass of CO₂-equivalent emitted.

use crate::category::Category;
use crate::errors::{FootprintError, FootprintResult};
use crate::model::FloatValue;
use serde::{Deserialize, Serialize};

/// Emission factor for each household category.
///
/// The default table is the one every calculation uses unless a caller
/// explicitly supplies another. Deserialisation fills any missing category
/// from the default table, so a document only needs to list the factors it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmissionFactors {
    /// unit: kg CO₂e / kWh
    /// default: 0.092
    pub electricity: FloatValue,
    /// unit: kg CO₂e / m³
    /// default: 2.15
    pub natural_gas: FloatValue,
    /// unit: kg CO₂e / kg
    /// default: 2.98
    pub lpg: FloatValue,
    /// unit: kg CO₂e / L
    /// default: 2.19
    pub gasoline: FloatValue,
    /// unit: kg CO₂e / L
    /// default: 2.66
    pub diesel: FloatValue,
    /// unit: kg CO₂e / kg
    /// default: 0.84
    pub organic_waste: FloatValue,
    /// unit: kg CO₂e / m³
    /// default: 0.29
    pub water: FloatValue,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            electricity: 0.092,
            natural_gas: 2.15,
            lpg: 2.98,
            gasoline: 2.19,
            diesel: 2.66,
            organic_waste: 0.84,
            water: 0.29,
        }
    }
}

impl EmissionFactors {
    /// Emission factor for a category (kg CO₂e per unit).
    pub fn get(&self, category: Category) -> FloatValue {
        match category {
            Category::Electricity => self.electricity,
            Category::NaturalGas => self.natural_gas,
            Category::Lpg => self.lpg,
            Category::Gasoline => self.gasoline,
            Category::Diesel => self.diesel,
            Category::OrganicWaste => self.organic_waste,
            Category::Water => self.water,
        }
    }

    pub fn set(&mut self, category: Category, factor: FloatValue) {
        let slot = match category {
            Category::Electricity => &mut self.electricity,
            Category::NaturalGas => &mut self.natural_gas,
            Category::Lpg => &mut self.lpg,
            Category::Gasoline => &mut self.gasoline,
            Category::Diesel => &mut self.diesel,
            Category::OrganicWaste => &mut self.organic_waste,
            Category::Water => &mut self.water,
        };
        *slot = factor;
    }

    /// Replace individual factors from `(name, value)` pairs, then validate.
    pub fn with_overrides<S: AsRef<str>>(
        mut self,
        pairs: impl IntoIterator<Item = (S, FloatValue)>,
    ) -> FootprintResult<Self> {
        for (name, value) in pairs {
            self.set(name.as_ref().parse()?, value);
        }
        self.validate()?;
        Ok(self)
    }

    /// Iterate over `(category, factor)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, FloatValue)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Check that every factor is finite and strictly positive.
    pub fn validate(&self) -> FootprintResult<()> {
        match self.iter().find(|(_, f)| !f.is_finite() || *f <= 0.0) {
            Some((category, value)) => Err(FootprintError::InvalidFactor { category, value }),
            None => Ok(()),
        }
    }
}
