//! Acceptance constraints
//!
//! A [`ConstraintSet`] holds every range and scalar the user controls: how
//! many fans per axis to try, which cell sizes and shapes are acceptable,
//! and the air speed, uniformity and blade height targets a solution must
//! meet. Values are always canonical SI; the engine never converts units.
//!
//! ```rust
//! use fanlayout_core::{ConstraintSet, Range};
//!
//! let constraints = ConstraintSet::default()
//!     .with_fans_per_axis(2, 6)
//!     .with_aspect_ratio_max(1.5)
//!     .with_uniformity(Range::new(0.5, 1.0));
//!
//! assert!(constraints.validate().is_ok());
//! ```

use core::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::defaults,
    errors::{require_positive, DesignError, DesignResult},
    performance::OperatingParameters,
};

/// Closed real interval `[min, max]`.
///
/// Acceptance tests treat it as open: see [`Range::contains_open`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Range {
    /// Create a range from its bounds
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Create a range from a `(min, max)` pair
    pub const fn from_pair(pair: (f64, f64)) -> Self {
        Self::new(pair.0, pair.1)
    }

    /// Midpoint of the range
    pub fn mean(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Strict membership: `min < value < max`. NaN is never contained.
    pub fn contains_open(&self, value: f64) -> bool {
        value > self.min && value < self.max
    }

    /// Inclusive membership: `min <= value <= max`. NaN is never contained.
    pub fn contains_closed(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether `other` lies entirely inside this range
    pub fn encloses(&self, other: &Range) -> bool {
        other.min >= self.min && other.max <= self.max
    }

    /// Reject ranges with NaN bounds or `min > max`.
    pub fn validate(&self, field: &'static str) -> DesignResult<()> {
        if self.min.is_nan() || self.max.is_nan() || self.min > self.max {
            return Err(DesignError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Inclusive integer range of fans per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FanCountRange {
    /// Fewest fans along one axis
    pub min: u32,
    /// Most fans along one axis
    pub max: u32,
}

impl FanCountRange {
    /// Create a fan-count range
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Fan counts in increasing order
    pub fn iter(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    /// Number of counts in the range
    pub fn len(&self) -> usize {
        if self.max < self.min {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }

    /// Whether the range holds no counts
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject ranges that include zero fans or are inverted.
    pub fn validate(&self) -> DesignResult<()> {
        if self.min == 0 || self.max < self.min {
            return Err(DesignError::EmptyFanCountRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Every acceptance constraint for one search
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstraintSet {
    /// Fans per axis to try, inclusive
    pub fans_per_axis: FanCountRange,
    /// Equivalent square cell side `r` (m), exclusive
    pub cell_size: Range,
    /// Maximum cell aspect ratio, exclusive
    pub aspect_ratio_max: f64,
    /// Fan diameter (m); bounds the admissible diameter window
    pub diameter: Range,
    /// Dimensionless diameter `D / r`, exclusive
    pub dimensionless_diameter: Range,
    /// Lowest air speed in the cell (m/s), exclusive
    pub min_air_speed: Range,
    /// Area-weighted average air speed (m/s), exclusive
    pub avg_air_speed: Range,
    /// Highest air speed (m/s); carried for display, not filtered on
    pub max_air_speed: Range,
    /// Uniformity, exclusive
    pub uniformity: Range,
    /// Acceptable blade height band (m)
    pub blade_height: Range,
    /// Ceiling-to-mount distance (m)
    pub mount_distance: f64,
    /// Fan speed as a percentage of full speed
    pub fan_speed_percent: f64,
}

impl Default for ConstraintSet {
    fn default() -> Self {
        Self {
            fans_per_axis: FanCountRange::new(
                defaults::FANS_PER_AXIS_RANGE.0,
                defaults::FANS_PER_AXIS_RANGE.1,
            ),
            cell_size: Range::from_pair(defaults::CELL_SIZE_RANGE_M),
            aspect_ratio_max: defaults::ASPECT_RATIO_MAX,
            diameter: Range::from_pair(defaults::DIAMETER_RANGE_M),
            dimensionless_diameter: Range::from_pair(defaults::DIMENSIONLESS_DIAMETER_RANGE),
            min_air_speed: Range::from_pair(defaults::MIN_AIR_SPEED_RANGE),
            avg_air_speed: Range::from_pair(defaults::AVG_AIR_SPEED_RANGE),
            max_air_speed: Range::from_pair(defaults::MAX_AIR_SPEED_RANGE),
            uniformity: Range::from_pair(defaults::UNIFORMITY_RANGE),
            blade_height: Range::from_pair(defaults::BLADE_HEIGHT_RANGE_M),
            mount_distance: defaults::MOUNT_DISTANCE_M,
            fan_speed_percent: defaults::FAN_SPEED_PERCENT,
        }
    }
}

impl ConstraintSet {
    /// Set the fans-per-axis range
    pub fn with_fans_per_axis(mut self, min: u32, max: u32) -> Self {
        self.fans_per_axis = FanCountRange::new(min, max);
        self
    }

    /// Set the equivalent cell side range (m)
    pub fn with_cell_size(mut self, range: Range) -> Self {
        self.cell_size = range;
        self
    }

    /// Set the maximum cell aspect ratio
    pub fn with_aspect_ratio_max(mut self, max: f64) -> Self {
        self.aspect_ratio_max = max;
        self
    }

    /// Set the fan diameter range (m)
    pub fn with_diameter(mut self, range: Range) -> Self {
        self.diameter = range;
        self
    }

    /// Set the dimensionless diameter range
    pub fn with_dimensionless_diameter(mut self, range: Range) -> Self {
        self.dimensionless_diameter = range;
        self
    }

    /// Set the lowest air speed range (m/s)
    pub fn with_min_air_speed(mut self, range: Range) -> Self {
        self.min_air_speed = range;
        self
    }

    /// Set the average air speed range (m/s)
    pub fn with_avg_air_speed(mut self, range: Range) -> Self {
        self.avg_air_speed = range;
        self
    }

    /// Set the highest air speed range (m/s)
    pub fn with_max_air_speed(mut self, range: Range) -> Self {
        self.max_air_speed = range;
        self
    }

    /// Set the uniformity range
    pub fn with_uniformity(mut self, range: Range) -> Self {
        self.uniformity = range;
        self
    }

    /// Set the blade height band (m)
    pub fn with_blade_height(mut self, range: Range) -> Self {
        self.blade_height = range;
        self
    }

    /// Set the ceiling-to-mount distance (m)
    pub fn with_mount_distance(mut self, distance: f64) -> Self {
        self.mount_distance = distance;
        self
    }

    /// Set the fan speed percentage
    pub fn with_fan_speed_percent(mut self, percent: f64) -> Self {
        self.fan_speed_percent = percent;
        self
    }

    /// Operating point handed to the performance model
    pub fn operating_parameters(&self) -> OperatingParameters {
        OperatingParameters {
            fan_speed_percent: self.fan_speed_percent,
            blade_height: self.blade_height,
            mount_distance: self.mount_distance,
        }
    }

    /// Check every range and scalar for internal consistency.
    ///
    /// Searching with an invalid set is still safe; it just returns nothing.
    pub fn validate(&self) -> DesignResult<()> {
        self.fans_per_axis.validate()?;
        self.cell_size.validate("cell_size")?;
        require_positive("aspect_ratio_max", self.aspect_ratio_max)?;
        self.diameter.validate("diameter")?;
        self.dimensionless_diameter.validate("dimensionless_diameter")?;
        self.min_air_speed.validate("min_air_speed")?;
        self.avg_air_speed.validate("avg_air_speed")?;
        self.max_air_speed.validate("max_air_speed")?;
        self.uniformity.validate("uniformity")?;
        self.blade_height.validate("blade_height")?;
        if !self.mount_distance.is_finite() {
            return Err(DesignError::InvalidValue { field: "mount_distance" });
        }
        if !self.fan_speed_percent.is_finite() {
            return Err(DesignError::InvalidValue { field: "fan_speed_percent" });
        }
        Ok(())
    }
}
