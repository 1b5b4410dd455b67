//! Annual emission calculation.
//!
//! Each category's annual emission is its monthly reading scaled to a year and
//! multiplied by the category's emission factor:
//! $$ E = m \cdot 12 \cdot f $$
//!
//! The calculation trusts its caller: readings are expected to be finite and
//! non-negative, and nothing here checks them. See
//! [`ConsumptionReadings::validate`].

use crate::category::Category;
use crate::factors::EmissionFactors;
use crate::readings::ConsumptionReadings;
use crate::report::AnnualEmissionReport;
use log::debug;
use serde::{Deserialize, Serialize};

pub type FloatValue = f64;

pub const MONTHS_PER_YEAR: FloatValue = 12.0;

/// Annual emissions (kg CO₂e) from a monthly consumption and an emission factor.
///
/// No rounding is applied.
pub fn annual_emission(monthly_consumption: FloatValue, factor: FloatValue) -> FloatValue {
    monthly_consumption * MONTHS_PER_YEAR * factor
}

/// Compute the annual emission report using the default emission factors.
pub fn compute_report(readings: &ConsumptionReadings) -> AnnualEmissionReport {
    EmissionModel::default().compute_report(readings)
}

/// Household emission model bound to a table of emission factors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionModel {
    factors: EmissionFactors,
}

impl EmissionModel {
    /// Create a new model from a factor table
    pub fn from_parameters(factors: EmissionFactors) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    /// Annual emissions (kg CO₂e) for one category.
    pub fn calculate_emission(&self, category: Category, monthly: FloatValue) -> FloatValue {
        annual_emission(monthly, self.factors.get(category))
    }

    /// Annual emissions for every category, plus the total footprint.
    pub fn compute_report(&self, readings: &ConsumptionReadings) -> AnnualEmissionReport {
        let report = AnnualEmissionReport::from_emissions(
            readings
                .iter()
                .map(|(category, monthly)| (category, self.calculate_emission(category, monthly))),
        );
        debug!(
            "Computed annual footprint of {:.4} t CO2e from {:?}",
            report.total_tonnes(),
            readings
        );
        report
    }
}
