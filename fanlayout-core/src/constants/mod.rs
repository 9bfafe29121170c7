//! Constants for FanLayout Core
//!
//! Every fitted coefficient, fixed reference length and default parameter
//! used by the engine is defined here with a note on where it comes from.
//! Formulas elsewhere in the crate refer to these names, never to bare
//! numbers.
//!
//! ## Organization
//!
//! - **Regression**: fitted coefficients of the empirical airspeed model
//! - **Geometry**: fixed reference lengths and blade clearance factors
//! - **Certification**: minimum blade heights keyed by the safety listing
//! - **Defaults**: the default constraint set and example fan catalog
//!
//! ## Usage Guidelines
//!
//! 1. Regression coefficients are reproduced exactly; do not round them
//! 2. Values whose units look inconsistent are kept literally and flagged
//!    in their own documentation
//! 3. Use descriptive names that include units

/// Fitted coefficients of the empirical airspeed regression.
pub mod regression;

/// Fixed reference lengths used to build the dimensionless groups.
pub mod geometry;

/// Minimum blade heights from the safety listing table.
pub mod certification;

/// Default constraint values and the example fan catalog.
pub mod defaults;

pub use regression::{
    LOWEST_DR_COEFF, LOWEST_CD_COEFF, LOWEST_DO_COEFF, LOWEST_INTERCEPT,
    AVERAGE_DR_COEFF, AVERAGE_CD_COEFF, AVERAGE_DO_COEFF, AVERAGE_INTERCEPT,
    HIGHEST_HD_COEFF, HIGHEST_OFFSET, HIGHEST_INTERCEPT, SHARED_INTERCEPT,
};

pub use geometry::{
    REFERENCE_MOUNT_HEIGHT_M, REFERENCE_DISTANCE_M, BLADE_CEILING_CLEARANCE_FACTOR,
};

pub use certification::{
    CERTIFIED_MIN_BLADE_HEIGHT, UNCERTIFIED_MIN_BLADE_HEIGHT,
    CERTIFIED_DIAMETER_CAP_HEIGHT, UNCERTIFIED_DIAMETER_CAP_HEIGHT,
};
