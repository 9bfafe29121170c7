//! Reference Lengths for the Dimensionless Groups
//!
//! Two of the regression inputs divide by fixed lengths rather than by room
//! or fan dimensions. They are part of the fitted model, not tunables, but
//! [`ModelCoefficients`](crate::performance::ModelCoefficients) exposes them
//! so the values can be revisited without editing formulas.

/// Reference mount height used in `do = D / h_ref` (m).
///
/// Fixed at 1.7 m in the fitted model. Whether the fit generalises to other
/// occupant heights (seated vs standing) is unresolved.
pub const REFERENCE_MOUNT_HEIGHT_M: f64 = 1.7;

/// Reference distance used in `hd = d_ref / D` (m).
pub const REFERENCE_DISTANCE_M: f64 = 2.0;

/// Fraction of the fan diameter kept clear between blades and ceiling.
///
/// The maximum blade height is `ceiling - 0.2 · D`.
pub const BLADE_CEILING_CLEARANCE_FACTOR: f64 = 0.2;
