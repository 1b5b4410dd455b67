//! Emission model for household carbon footprints.
//!
//! Monthly consumption of seven household resources is converted into annual
//! CO₂-equivalent emissions using a fixed table of emission factors:
//!
//! $$ E_c = m_c \cdot 12 \cdot f_c $$
//!
//! $$ T = \frac{\sum_c E_c}{1000} $$
//!
//! where $m_c$ is the monthly consumption for category $c$, $f_c$ its emission
//! factor (kg CO₂e per unit), $E_c$ the annual emission in kg CO₂e and $T$ the
//! total footprint in tonnes.
//!
//! ```rust
//! use footprint_core::{compute_report, Category, ConsumptionReadings};
//!
//! let readings = ConsumptionReadings::from_iter([(Category::Electricity, 100.0)]);
//! let report = compute_report(&readings);
//!
//! assert!((report.emission(Category::Electricity) - 110.4).abs() < 1e-9);
//! assert!((report.total_tonnes() - 0.1104).abs() < 1e-12);
//! ```
//!
//! The model performs no validation. Callers collecting user input should run
//! [`ConsumptionReadings::validate`] before calculating.

pub mod category;
pub mod errors;
pub mod factors;
pub mod model;
#[cfg(feature = "python")]
pub mod python;
pub mod readings;
pub mod report;

pub use category::Category;
pub use errors::{FootprintError, FootprintResult};
pub use factors::EmissionFactors;
pub use model::{annual_emission, compute_report, EmissionModel, FloatValue};
pub use readings::ConsumptionReadings;
pub use report::AnnualEmissionReport;
