//! Empirical Airflow Performance Model
//!
//! ## Overview
//!
//! For one fan model placed in every cell of one layout, the model estimates
//! the air speed field an occupant experiences and the geometric margins of
//! the installation. It is a fitted regression, not a flow simulation.
//!
//! ## Dimensionless Groups
//!
//! ```text
//! dr = D / r          fan diameter over equivalent square cell side
//! cd = H / D          ceiling height over fan diameter
//! do = D / 1.7        fan diameter over reference mount height
//! hd = 2 / D          reference distance over fan diameter
//! ```
//!
//! ## Air Speeds
//!
//! All three speeds scale with the nominal discharge speed `V0 = Q / (πD²/4)`:
//!
//! ```text
//! lowest  = V0 · ( 0.90·dr − 0.017·cd + 0.11·do + 0.024 + 0.047)
//! average = V0 · ( 0.99·dr − 0.060·cd + 0.11·do + 0.024 + 0.250)
//! highest = V0 · (−0.18·hd − 0.10 + 1.30)
//!
//! uniformity = 1 − (highest − lowest) / highest
//! ```
//!
//! ## Installation Geometry
//!
//! - Clearance between blade tips and cell edge: `(cell − D) / 2` per axis.
//!   Negative values mean neighbouring fans overlap; they are reported, not
//!   rejected.
//! - Blade height band: from the certification minimum up to `H − 0.2·D`.
//!   The band passes when the middle of the requested blade heights lies
//!   inside it.
//!
//! ## Degenerate Inputs
//!
//! Nothing here can fail. A zero diameter gives infinite `cd`, `hd` and `V0`,
//! so every air speed comes out NaN or infinite and the search rejects the
//! candidate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        certification::{CERTIFIED_MIN_BLADE_HEIGHT, UNCERTIFIED_MIN_BLADE_HEIGHT},
        certification::{CERTIFIED_MIN_BLADE_HEIGHT_M, UNCERTIFIED_MIN_BLADE_HEIGHT_M},
        geometry::{BLADE_CEILING_CLEARANCE_FACTOR, REFERENCE_DISTANCE_M, REFERENCE_MOUNT_HEIGHT_M},
        regression::*,
    },
    constraints::Range,
    fan::FanModel,
    layout::LayoutCandidate,
    traits::AirflowModel,
};

/// Minimum blade heights keyed by the certification flag
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CertificationHeights {
    /// Minimum for fans that meet the listing
    pub certified: f64,
    /// Minimum for fans that do not
    pub uncertified: f64,
}

impl Default for CertificationHeights {
    fn default() -> Self {
        Self {
            certified: CERTIFIED_MIN_BLADE_HEIGHT,
            uncertified: UNCERTIFIED_MIN_BLADE_HEIGHT,
        }
    }
}

impl CertificationHeights {
    /// The listing heights read as feet and converted to metres
    pub fn metric() -> Self {
        Self {
            certified: CERTIFIED_MIN_BLADE_HEIGHT_M,
            uncertified: UNCERTIFIED_MIN_BLADE_HEIGHT_M,
        }
    }

    /// Minimum blade height for a fan
    pub fn for_fan(&self, fan: &FanModel) -> f64 {
        if fan.meets_certification {
            self.certified
        } else {
            self.uncertified
        }
    }
}

/// Fixed reference values of the model.
///
/// The regression coefficients themselves are not configurable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelCoefficients {
    /// Reference mount height in `do = D / h_ref` (m)
    pub reference_mount_height: f64,
    /// Reference distance in `hd = d_ref / D` (m)
    pub reference_distance: f64,
    /// Ceiling clearance as a fraction of diameter
    pub blade_clearance_factor: f64,
    /// Certification minimum blade heights
    pub certification: CertificationHeights,
}

impl Default for ModelCoefficients {
    fn default() -> Self {
        Self {
            reference_mount_height: REFERENCE_MOUNT_HEIGHT_M,
            reference_distance: REFERENCE_DISTANCE_M,
            blade_clearance_factor: BLADE_CEILING_CLEARANCE_FACTOR,
            certification: CertificationHeights::default(),
        }
    }
}

impl ModelCoefficients {
    /// Replace the certification heights
    pub fn with_certification(mut self, certification: CertificationHeights) -> Self {
        self.certification = certification;
        self
    }
}

/// Operating point the user selected for the installation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperatingParameters {
    /// Fan speed as a percentage of full speed
    pub fan_speed_percent: f64,
    /// Requested blade height band (m)
    pub blade_height: Range,
    /// Ceiling-to-mount distance (m)
    pub mount_distance: f64,
}

/// The four regression inputs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionlessGroups {
    /// `dr = D / r`
    pub diameter_ratio: f64,
    /// `cd = H / D`
    pub ceiling_ratio: f64,
    /// `do = D / h_ref`
    pub mount_ratio: f64,
    /// `hd = d_ref / D`
    pub distance_ratio: f64,
}

/// Estimated air speeds in a cell (m/s)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airspeeds {
    /// Lowest air speed
    pub lowest: f64,
    /// Area-weighted average air speed
    pub average: f64,
    /// Highest air speed
    pub highest: f64,
}

impl Airspeeds {
    /// `1 − (highest − lowest) / highest`; 1.0 is perfectly even
    pub fn uniformity(&self) -> f64 {
        1.0 - (self.highest - self.lowest) / self.highest
    }
}

/// Blade tip to cell edge clearance (m)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Clearance {
    /// Clearance along X
    pub x: f64,
    /// Clearance along Y
    pub y: f64,
}

impl Clearance {
    /// Whether blades of neighbouring fans would overlap
    pub fn has_overlap(&self) -> bool {
        self.x < 0.0 || self.y < 0.0
    }
}

/// Admissible blade height band for one fan in one room
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BladeHeightRange {
    /// Certification minimum
    pub min: f64,
    /// Ceiling clearance maximum
    pub max: f64,
    /// Whether the requested band's midpoint lies in `[min, max]`
    pub pass: bool,
}

/// One fan model evaluated in one layout
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SolutionCandidate {
    /// Grid the fans are placed on
    pub layout: LayoutCandidate,
    /// Fan model in every cell
    pub fan: FanModel,
    /// Operating point the candidate was evaluated at
    pub operating: OperatingParameters,
    /// Regression inputs
    pub groups: DimensionlessGroups,
    /// Estimated air speeds
    pub airspeeds: Airspeeds,
    /// Evenness of the air speed field
    pub uniformity: f64,
    /// Blade tip clearance
    pub clearance: Clearance,
    /// Admissible blade heights
    pub blade_height_range: BladeHeightRange,
}

impl SolutionCandidate {
    /// Catalog label of the fan
    pub fn fan_type(&self) -> &str {
        &self.fan.fan_type
    }

    /// Fans in the layout
    pub fn num_fans(&self) -> u32 {
        self.layout.num_fans()
    }

    /// Dimensionless diameter `dr`
    pub fn dimensionless_diameter(&self) -> f64 {
        self.groups.diameter_ratio
    }

    /// Cell aspect ratio of the layout
    pub fn aspect_ratio(&self) -> f64 {
        self.layout.aspect_ratio()
    }
}

/// The fitted regression model
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerformanceModel {
    coefficients: ModelCoefficients,
}

impl PerformanceModel {
    /// Create a model with explicit reference values
    pub fn new(coefficients: ModelCoefficients) -> Self {
        Self { coefficients }
    }

    /// Reference values in use
    pub fn coefficients(&self) -> &ModelCoefficients {
        &self.coefficients
    }

    /// Regression inputs for a fan in a layout
    pub fn groups(&self, layout: &LayoutCandidate, fan: &FanModel) -> DimensionlessGroups {
        let diameter = fan.diameter;
        DimensionlessGroups {
            diameter_ratio: diameter / layout.r(),
            ceiling_ratio: layout.room().ceiling_height / diameter,
            mount_ratio: diameter / self.coefficients.reference_mount_height,
            distance_ratio: self.coefficients.reference_distance / diameter,
        }
    }

    /// Air speeds for a fan with the given regression inputs
    pub fn airspeeds(&self, fan: &FanModel, groups: &DimensionlessGroups) -> Airspeeds {
        let v0 = fan.nominal_air_speed();
        let lowest = v0
            * (LOWEST_DR_COEFF * groups.diameter_ratio
                + LOWEST_CD_COEFF * groups.ceiling_ratio
                + LOWEST_DO_COEFF * groups.mount_ratio
                + SHARED_INTERCEPT
                + LOWEST_INTERCEPT);
        let average = v0
            * (AVERAGE_DR_COEFF * groups.diameter_ratio
                + AVERAGE_CD_COEFF * groups.ceiling_ratio
                + AVERAGE_DO_COEFF * groups.mount_ratio
                + SHARED_INTERCEPT
                + AVERAGE_INTERCEPT);
        let highest =
            v0 * (HIGHEST_HD_COEFF * groups.distance_ratio + HIGHEST_OFFSET + HIGHEST_INTERCEPT);

        Airspeeds {
            lowest,
            average,
            highest,
        }
    }

    /// Admissible blade heights, tested against the requested band's midpoint
    pub fn blade_height_range(
        &self,
        layout: &LayoutCandidate,
        fan: &FanModel,
        requested: &Range,
    ) -> BladeHeightRange {
        let min = self.coefficients.certification.for_fan(fan);
        let max = layout.room().ceiling_height
            - self.coefficients.blade_clearance_factor * fan.diameter;
        let mean = requested.mean();

        BladeHeightRange {
            min,
            max,
            pass: min <= mean && mean <= max,
        }
    }
}

/// Blade tip clearance to the cell edges
pub fn clearance(layout: &LayoutCandidate, fan: &FanModel) -> Clearance {
    Clearance {
        x: (layout.cell_size_x() - fan.diameter) / 2.0,
        y: (layout.cell_size_y() - fan.diameter) / 2.0,
    }
}

impl AirflowModel for PerformanceModel {
    fn evaluate(
        &self,
        layout: &LayoutCandidate,
        fan: &FanModel,
        operating: &OperatingParameters,
    ) -> SolutionCandidate {
        let groups = self.groups(layout, fan);
        let airspeeds = self.airspeeds(fan, &groups);

        SolutionCandidate {
            layout: *layout,
            fan: fan.clone(),
            operating: *operating,
            groups,
            uniformity: airspeeds.uniformity(),
            airspeeds,
            clearance: clearance(layout, fan),
            blade_height_range: self.blade_height_range(layout, fan, &operating.blade_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomModel;

    const EPS: f64 = 1e-9;

    fn worked_layout() -> LayoutCandidate {
        LayoutCandidate::new(4, 4, RoomModel::new(3.7, 16.0, 13.0))
    }

    fn example_c() -> FanModel {
        FanModel::new("ExampleC", 1.524, 3.765196, true)
    }

    fn operating(band: Range) -> OperatingParameters {
        OperatingParameters {
            fan_speed_percent: 100.0,
            blade_height: band,
            mount_distance: 0.2,
        }
    }

    #[test]
    fn groups_match_definitions() {
        let g = PerformanceModel::default().groups(&worked_layout(), &example_c());
        assert!((g.diameter_ratio - 1.524 / 13.0f64.sqrt()).abs() < EPS);
        assert!((g.ceiling_ratio - 3.7 / 1.524).abs() < EPS);
        assert!((g.mount_ratio - 1.524 / 1.7).abs() < EPS);
        assert!((g.distance_ratio - 2.0 / 1.524).abs() < EPS);
    }

    #[test]
    fn regression_reproduces_fitted_values() {
        let fan = example_c();
        let solution = PerformanceModel::default().evaluate(
            &worked_layout(),
            &fan,
            &operating(Range::new(2.1336, 3.048)),
        );
        let v0 = fan.nominal_air_speed();
        let dr = 1.524 / 13.0f64.sqrt();
        let cd = 3.7 / 1.524;
        let d_o = 1.524 / 1.7;
        let hd = 2.0 / 1.524;

        let lowest = v0 * (0.9 * dr - 0.017 * cd + 0.11 * d_o + 0.024 + 0.047);
        let average = v0 * (0.99 * dr - 0.06 * cd + 0.11 * d_o + 0.024 + 0.25);
        let highest = v0 * (-0.18 * hd - 0.1 + 1.3);

        assert!((solution.airspeeds.lowest - lowest).abs() < EPS);
        assert!((solution.airspeeds.average - average).abs() < EPS);
        assert!((solution.airspeeds.highest - highest).abs() < EPS);
        assert!((solution.uniformity - (1.0 - (highest - lowest) / highest)).abs() < EPS);

        assert!((solution.airspeeds.lowest - 1.0501).abs() < 1e-3);
        assert!((solution.airspeeds.average - 1.3322).abs() < 1e-3);
        assert!((solution.airspeeds.highest - 1.9893).abs() < 1e-3);
        assert!((solution.uniformity - 0.5279).abs() < 1e-3);
    }

    #[test]
    fn clearance_may_be_negative() {
        let layout = worked_layout();
        let c = clearance(&layout, &example_c());
        assert!((c.x - 1.238).abs() < EPS);
        assert!((c.y - 0.863).abs() < EPS);
        assert!(!c.has_overlap());

        let huge = FanModel::new("Huge", 4.2672, 25.30817, false);
        assert!(clearance(&layout, &huge).has_overlap());
    }

    #[test]
    fn literal_certification_heights_never_pass_in_metres() {
        let solution = PerformanceModel::default().evaluate(
            &worked_layout(),
            &example_c(),
            &operating(Range::new(2.1336, 3.048)),
        );
        let band = solution.blade_height_range;
        assert_eq!(band.min, 7.0);
        assert!((band.max - (3.7 - 0.2 * 1.524)).abs() < EPS);
        assert!(!band.pass);
    }

    #[test]
    fn metric_certification_heights() {
        let model = PerformanceModel::new(
            ModelCoefficients::default().with_certification(CertificationHeights::metric()),
        );
        let layout = worked_layout();

        // Band midpoint 2.59 m sits between 2.1336 and 3.395
        let certified = model.blade_height_range(&layout, &example_c(), &Range::new(2.1336, 3.048));
        assert!(certified.pass);

        // Uncertified fans need 3.048 m, above the midpoint
        let uncertified = FanModel::new("ExampleF", 2.4384, 13.80304, false);
        let band = model.blade_height_range(&layout, &uncertified, &Range::new(2.1336, 3.048));
        assert_eq!(band.min, 3.048);
        assert!(!band.pass);
    }

    #[test]
    fn operating_parameters_are_carried_not_applied() {
        let model = PerformanceModel::default();
        let band = Range::new(2.1336, 3.048);
        let full = model.evaluate(&worked_layout(), &example_c(), &operating(band));
        let mut half_op = operating(band);
        half_op.fan_speed_percent = 50.0;
        half_op.mount_distance = 0.6;
        let half = model.evaluate(&worked_layout(), &example_c(), &half_op);

        assert_eq!(full.airspeeds, half.airspeeds);
        assert_eq!(half.operating.fan_speed_percent, 50.0);
        assert_eq!(half.operating.mount_distance, 0.6);
    }

    #[test]
    fn zero_diameter_propagates_non_finite() {
        let fan = FanModel::new("Broken", 0.0, 3.0, true);
        let solution = PerformanceModel::default().evaluate(
            &worked_layout(),
            &fan,
            &operating(Range::new(2.0, 3.0)),
        );
        assert!(!solution.airspeeds.lowest.is_finite());
        assert!(!solution.airspeeds.average.is_finite());
        assert!(!solution.airspeeds.highest.is_finite());
        assert!(!solution.uniformity.is_finite());
    }
}
