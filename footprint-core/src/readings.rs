//! Monthly consumption readings.

use crate::category::Category;
use crate::errors::{FootprintError, FootprintResult};
use crate::model::FloatValue;
use serde::{Deserialize, Serialize};

/// Monthly consumption for each household category.
///
/// Units follow [`Category::unit`]. Unset categories are 0.0, which is also
/// the state of a freshly created form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsumptionReadings {
    /// unit: kWh / month
    pub electricity: FloatValue,
    /// unit: m³ / month
    pub natural_gas: FloatValue,
    /// unit: kg / month
    pub lpg: FloatValue,
    /// unit: L / month
    pub gasoline: FloatValue,
    /// unit: L / month
    pub diesel: FloatValue,
    /// unit: kg / month
    pub organic_waste: FloatValue,
    /// unit: m³ / month
    pub water: FloatValue,
}

impl ConsumptionReadings {
    pub fn new() -> Self {
        Self::default()
    }

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

    pub fn set(&mut self, category: Category, value: FloatValue) {
        let slot = match category {
            Category::Electricity => &mut self.electricity,
            Category::NaturalGas => &mut self.natural_gas,
            Category::Lpg => &mut self.lpg,
            Category::Gasoline => &mut self.gasoline,
            Category::Diesel => &mut self.diesel,
            Category::OrganicWaste => &mut self.organic_waste,
            Category::Water => &mut self.water,
        };
        *slot = value;
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, category: Category, value: FloatValue) -> Self {
        self.set(category, value);
        self
    }

    /// Iterate over `(category, reading)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, FloatValue)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// True when every reading is zero.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, v)| v == 0.0)
    }

    /// Check that a single reading is acceptable input for the model.
    pub fn check_reading(category: Category, value: FloatValue) -> FootprintResult<FloatValue> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(FootprintError::InvalidReading { category, value })
        }
    }

    /// Build readings from `(name, value)` pairs given by an untyped caller.
    ///
    /// Names are parsed with [`Category::from_str`](std::str::FromStr) and every
    /// value is checked with [`check_reading`](Self::check_reading).
    pub fn from_named<S: AsRef<str>>(
        pairs: impl IntoIterator<Item = (S, FloatValue)>,
    ) -> FootprintResult<Self> {
        let mut readings = Self::default();
        for (name, value) in pairs {
            let category: Category = name.as_ref().parse()?;
            readings.set(category, Self::check_reading(category, value)?);
        }
        Ok(readings)
    }

    /// Check that every reading is finite and non-negative.
    ///
    /// Returns the first offending category in display order.
    pub fn validate(&self) -> FootprintResult<()> {
        self.iter()
            .try_for_each(|(c, v)| Self::check_reading(c, v).map(|_| ()))
    }
}

impl FromIterator<(Category, FloatValue)> for ConsumptionReadings {
    /// Later pairs overwrite earlier ones for the same category.
    fn from_iter<I: IntoIterator<Item = (Category, FloatValue)>>(iter: I) -> Self {
        let mut readings = Self::default();
        readings.extend(iter);
        readings
    }
}

impl Extend<(Category, FloatValue)> for ConsumptionReadings {
    fn extend<I: IntoIterator<Item = (Category, FloatValue)>>(&mut self, iter: I) {
        for (category, value) in iter {
            self.set(category, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_is_zero() {
        let readings = ConsumptionReadings::new();
        assert!(readings.is_empty());
        assert!(readings.iter().all(|(_, v)| v == 0.0));
        assert!(readings.validate().is_ok());
    }

    #[test]
    fn test_set_and_get() {
        let mut readings = ConsumptionReadings::new();
        for (i, category) in Category::ALL.into_iter().enumerate() {
            readings.set(category, i as FloatValue + 1.0);
        }
        for (i, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(readings.get(category), i as FloatValue + 1.0);
        }
        assert!(!readings.is_empty());
    }

    #[test]
    fn test_from_map() {
        let map = HashMap::from([(Category::Gasoline, 50.0), (Category::Diesel, 20.0)]);
        let readings: ConsumptionReadings = map.into_iter().collect();
        assert_eq!(readings.gasoline, 50.0);
        assert_eq!(readings.diesel, 20.0);
        assert_eq!(readings.electricity, 0.0);
    }

    #[test]
    fn test_validate_rejects_negative() {
        let readings = ConsumptionReadings::new()
            .with(Category::Water, 3.0)
            .with(Category::Lpg, -1.0);
        assert_eq!(
            readings.validate(),
            Err(FootprintError::InvalidReading {
                category: Category::Lpg,
                value: -1.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let readings = ConsumptionReadings::new().with(Category::Electricity, FloatValue::NAN);
        assert!(readings.validate().is_err());
        assert!(ConsumptionReadings::check_reading(Category::Water, FloatValue::INFINITY).is_err());
    }

    #[test]
    fn test_from_named() {
        let readings =
            ConsumptionReadings::from_named([("electricity", 100.0), ("organic-waste", 4.0)])
                .unwrap();
        assert_eq!(readings.electricity, 100.0);
        assert_eq!(readings.organic_waste, 4.0);
        assert_eq!(readings.water, 0.0);
    }

    #[test]
    fn test_from_named_rejects_bad_input() {
        assert_eq!(
            ConsumptionReadings::from_named([("diesel", -20.0)]),
            Err(FootprintError::InvalidReading {
                category: Category::Diesel,
                value: -20.0
            })
        );
        assert!(ConsumptionReadings::from_named([("water", FloatValue::NAN)]).is_err());
        assert!(matches!(
            ConsumptionReadings::from_named([("coal", 1.0)]),
            Err(FootprintError::UnknownCategory(..))
        ));
    }

    #[test]
    fn test_partial_deserialization() {
        let json = r#"{"electricity": 100.0, "water": 12.5}"#;
        let readings: ConsumptionReadings =
            serde_json::from_str(json).expect("Partial deserialization failed");
        assert_eq!(readings.electricity, 100.0);
        assert_eq!(readings.water, 12.5);
        assert_eq!(readings.natural_gas, 0.0);
    }
}
