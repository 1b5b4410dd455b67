//! Python bindings for the emission model.
//!
//! This module provides Python access to:
//! - [`annual_emission`](crate::annual_emission) and report calculation
//! - [`PyAnnualEmissionReport`] wrapping [`AnnualEmissionReport`]
//! - The fixed category table (name, label, unit)
//!
//! Readings arriving from Python are validated here, so a Python UI acting as
//! the presentation layer gets a `ValueError` instead of a meaningless report.

use crate::category::Category;
use crate::errors::FootprintError;
use crate::factors::EmissionFactors;
use crate::model::{EmissionModel, FloatValue};
use crate::readings::ConsumptionReadings;
use crate::report::AnnualEmissionReport;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::collections::HashMap;

impl From<FootprintError> for PyErr {
    fn from(err: FootprintError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for AnnualEmissionReport.
#[pyclass(name = "AnnualEmissionReport", module = "footprint.core")]
#[derive(Clone)]
pub struct PyAnnualEmissionReport(pub AnnualEmissionReport);

#[pymethods]
impl PyAnnualEmissionReport {
    /// Annual emissions per category name (kg CO₂e), in display order.
    #[getter]
    pub fn emissions<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for (category, emission) in self.0.iter() {
            dict.set_item(category.name(), emission)?;
        }
        Ok(dict)
    }

    /// Total annual footprint (t CO₂e).
    #[getter]
    pub fn total_tonnes(&self) -> FloatValue {
        self.0.total_tonnes()
    }

    /// Total annual footprint (kg CO₂e).
    #[getter]
    pub fn total_kg(&self) -> FloatValue {
        self.0.total_kg()
    }

    /// Annual emission for a single category name.
    pub fn emission(&self, category: &str) -> PyResult<FloatValue> {
        let category: Category = category.parse()?;
        Ok(self.0.emission(category))
    }

    fn __repr__(&self) -> String {
        format!(
            "AnnualEmissionReport(total_tonnes={:.4})",
            self.0.total_tonnes()
        )
    }
}

/// Annual emissions (kg CO₂e) from a monthly consumption and an emission factor.
#[pyfunction]
pub fn annual_emission(monthly_consumption: FloatValue, factor: FloatValue) -> FloatValue {
    crate::model::annual_emission(monthly_consumption, factor)
}

/// Compute the annual emission report.
///
/// `readings` maps category names to monthly consumption. `factors`, if given,
/// overrides individual emission factors.
#[pyfunction]
#[pyo3(signature = (readings, factors=None))]
pub fn compute_report(
    readings: HashMap<String, FloatValue>,
    factors: Option<HashMap<String, FloatValue>>,
) -> PyResult<PyAnnualEmissionReport> {
    let readings = ConsumptionReadings::from_named(readings)?;
    let table = match factors {
        Some(factors) => EmissionFactors::default().with_overrides(factors)?,
        None => EmissionFactors::default(),
    };

    let model = EmissionModel::from_parameters(table);
    Ok(PyAnnualEmissionReport(model.compute_report(&readings)))
}

/// The fixed category table as `(name, label, unit)` tuples in display order.
#[pyfunction]
pub fn categories() -> Vec<(&'static str, &'static str, &'static str)> {
    Category::ALL
        .iter()
        .map(|c| (c.name(), c.label(), c.unit()))
        .collect()
}

#[pymodule]
pub fn core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAnnualEmissionReport>()?;
    m.add_function(wrap_pyfunction!(annual_emission, m)?)?;
    m.add_function(wrap_pyfunction!(compute_report, m)?)?;
    m.add_function(wrap_pyfunction!(categories, m)?)?;
    Ok(())
}
