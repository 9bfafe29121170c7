//! Minimum Blade Heights from the Safety Listing Table
//!
//! Fans carrying the safety listing (UL 507 for the fans this model was
//! fitted on) may be mounted lower than unlisted fans.
//!
//! ## Units
//!
//! The values below are reproduced literally. They are numerically
//! inconsistent with ceiling heights expressed in metres (a 3.7 m ceiling can
//! never satisfy a 7 "m" minimum) and match the regulatory table in feet
//! (7 ft = 2.1336 m, 10 ft = 3.048 m). They are kept as-is and flagged for
//! review by a domain expert; callers that need metric values can override
//! them through [`ModelCoefficients`](crate::performance::ModelCoefficients).

/// Minimum blade height for fans that meet the certification.
pub const CERTIFIED_MIN_BLADE_HEIGHT: f64 = 7.0;

/// Minimum blade height for fans that do not meet the certification.
pub const UNCERTIFIED_MIN_BLADE_HEIGHT: f64 = 10.0;

/// Height subtracted from the ceiling when capping the admissible diameter
/// of a certified fan: `D_max = (H - 7) / 0.2`.
pub const CERTIFIED_DIAMETER_CAP_HEIGHT: f64 = 7.0;

/// Height subtracted from the ceiling when capping the admissible diameter
/// of an uncertified fan: `D_max = (H - 10) / 0.2`.
pub const UNCERTIFIED_DIAMETER_CAP_HEIGHT: f64 = 10.0;

/// Metric equivalent of [`CERTIFIED_MIN_BLADE_HEIGHT`] read as feet (m).
pub const CERTIFIED_MIN_BLADE_HEIGHT_M: f64 = 2.1336;

/// Metric equivalent of [`UNCERTIFIED_MIN_BLADE_HEIGHT`] read as feet (m).
pub const UNCERTIFIED_MIN_BLADE_HEIGHT_M: f64 = 3.048;

/// Diameter above which the uncertified cap is applied to the window's
/// upper end. Reproduced literally alongside the heights above.
pub const UNCERTIFIED_CAP_DIAMETER_THRESHOLD: f64 = 7.0;
