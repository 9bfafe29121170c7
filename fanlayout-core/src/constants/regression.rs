//! Airspeed Regression Coefficients
//!
//! The performance model estimates three air speeds inside a fan cell as
//! linear functions of four dimensionless groups, scaled by the fan's nominal
//! discharge speed:
//!
//! ```text
//! lowest  = V0 · (a1·dr + a2·cd + a3·do + c0 + a0)
//! average = V0 · (b1·dr + b2·cd + b3·do + c0 + b0)
//! highest = V0 · (h1·hd + h2 + h0)
//!
//! dr = D / r          (diameter over equivalent cell side)
//! cd = H / D          (ceiling height over diameter)
//! do = D / 1.7        (diameter over reference mount height)
//! hd = 2 / D          (reference distance over diameter)
//! ```
//!
//! The coefficients were fitted to laboratory measurements of large-diameter
//! ceiling fans and must be reproduced exactly.

// ===== SHARED TERM =====

/// Intercept shared by the lowest and area-weighted average regressions.
///
/// Appears as `1 · 0.024` in both fits (unit multiplier on a constant term).
pub const SHARED_INTERCEPT: f64 = 0.024;

// ===== LOWEST AIR SPEED =====

/// Lowest air speed: coefficient on the dimensionless diameter `dr`.
pub const LOWEST_DR_COEFF: f64 = 0.90;

/// Lowest air speed: coefficient on ceiling-to-diameter ratio `cd`.
pub const LOWEST_CD_COEFF: f64 = -0.017;

/// Lowest air speed: coefficient on diameter-to-mount-height ratio `do`.
pub const LOWEST_DO_COEFF: f64 = 0.11;

/// Lowest air speed: regression intercept.
pub const LOWEST_INTERCEPT: f64 = 0.047;

// ===== AREA-WEIGHTED AVERAGE AIR SPEED =====

/// Average air speed: coefficient on the dimensionless diameter `dr`.
pub const AVERAGE_DR_COEFF: f64 = 0.99;

/// Average air speed: coefficient on ceiling-to-diameter ratio `cd`.
pub const AVERAGE_CD_COEFF: f64 = -0.060;

/// Average air speed: coefficient on diameter-to-mount-height ratio `do`.
pub const AVERAGE_DO_COEFF: f64 = 0.11;

/// Average air speed: regression intercept.
pub const AVERAGE_INTERCEPT: f64 = 0.250;

// ===== HIGHEST AIR SPEED =====

/// Highest air speed: coefficient on reference-distance ratio `hd`.
pub const HIGHEST_HD_COEFF: f64 = -0.18;

/// Highest air speed: constant offset term (`-1 · 0.1`).
pub const HIGHEST_OFFSET: f64 = -0.10;

/// Highest air speed: regression intercept.
pub const HIGHEST_INTERCEPT: f64 = 1.30;
