//! Fan catalog entries
//!
//! A [`FanModel`] is one row of the candidate fan table: a type label, the
//! blade diameter, the rated airflow and whether the fan carries the safety
//! listing that allows lower mounting.
//!
//! ## Nominal air speed
//!
//! The regression scales everything by the mean discharge speed through the
//! swept disc:
//!
//! ```text
//! V0 = Q / (π · D² / 4)
//! ```
//!
//! A zero diameter makes `V0` infinite (or NaN when the airflow is also zero).
//! The non-finite value flows into every derived metric and the search
//! rejects the candidate.

use alloc::{string::String, vec::Vec};
use core::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::defaults::EXAMPLE_FANS,
    errors::{require_positive, DesignError, DesignResult},
};

/// One candidate fan from the catalog
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FanModel {
    /// Manufacturer or catalog label
    pub fan_type: String,
    /// Blade tip diameter (m)
    pub diameter: f64,
    /// Rated airflow (m³/s)
    pub airflow: f64,
    /// Whether the fan meets the safety listing (UL 507)
    pub meets_certification: bool,
}

impl FanModel {
    /// Create a catalog entry
    pub fn new(
        fan_type: impl Into<String>,
        diameter: f64,
        airflow: f64,
        meets_certification: bool,
    ) -> Self {
        Self {
            fan_type: fan_type.into(),
            diameter,
            airflow,
            meets_certification,
        }
    }

    /// Area of the disc swept by the blades (m²)
    pub fn swept_area(&self) -> f64 {
        PI * self.diameter * self.diameter / 4.0
    }

    /// Mean discharge speed through the swept disc (m/s)
    pub fn nominal_air_speed(&self) -> f64 {
        self.airflow / self.swept_area()
    }

    /// Reject entries the performance model cannot use meaningfully.
    pub fn validate(&self) -> DesignResult<()> {
        require_positive("diameter", self.diameter)?;
        if !self.airflow.is_finite() {
            return Err(DesignError::InvalidValue { field: "airflow" });
        }
        Ok(())
    }
}

/// The built-in example catalog, in table order.
pub fn example_catalog() -> Vec<FanModel> {
    EXAMPLE_FANS
        .iter()
        .map(|&(label, diameter, airflow, certified)| {
            FanModel::new(label, diameter, airflow, certified)
        })
        .collect()
}

/// Build the active catalog from selected row indices.
///
/// Rows are returned in selection order, which is the order the search
/// iterates them. Indices past the end of the catalog are skipped.
pub fn select_fans(catalog: &[FanModel], indices: &[usize]) -> Vec<FanModel> {
    indices
        .iter()
        .filter_map(|&i| {
            let fan = catalog.get(i);
            if fan.is_none() {
                log_warn!("Fan selection index {} outside catalog of {}", i, catalog.len());
            }
            fan.cloned()
        })
        .collect()
}
