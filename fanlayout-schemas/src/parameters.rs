//! Saved parameter state and the design request built from it

use fanlayout_core::{
    constants::defaults, design, design_with, AirflowModel, ConstraintSet, DesignReport,
    FanModel, Range, RoomModel,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    fan_table::{default_fan_table, FanRow},
    SchemaError,
};

/// Everything the tool persists between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterState {
    /// Equivalent square cell side `r` (m)
    pub cell_size: [f64; 2],
    /// Lowest air speed (m/s)
    pub min_air_speed: [f64; 2],
    /// Average air speed (m/s)
    pub avg_air_speed: [f64; 2],
    /// Highest air speed (m/s)
    pub max_air_speed: [f64; 2],
    /// Uniformity
    pub uniformity: [f64; 2],
    /// Fans per axis
    pub num_fans: [u32; 2],
    /// Fan diameter (m)
    pub diameter: [f64; 2],
    /// Blade height band (m)
    pub blade_height: [f64; 2],
    /// Fan diameter over cell side
    pub dimensionless_diameter: [f64; 2],
    /// Room extent along X (m)
    pub length: f64,
    /// Room extent along Y (m)
    pub width: f64,
    /// Ceiling height (m)
    pub height: f64,
    /// Maximum cell aspect ratio
    pub aspect_ratio: f64,
    /// Ceiling-to-mount distance (m)
    pub mount_distance: f64,
    /// Fan speed (% of full)
    pub fan_speed: f64,
    /// Every row of the fan table
    pub fan_table_data: Vec<FanRow>,
    /// Indices into `fan_table_data`, in selection order
    #[serde(rename = "selectedCandidateFanIDs")]
    pub selected_candidate_fan_ids: Vec<usize>,
}

impl Default for ParameterState {
    /// The tool's first-run state, including its demonstration fan selection.
    fn default() -> Self {
        let pair = |(min, max): (f64, f64)| [min, max];
        Self {
            cell_size: pair(defaults::CELL_SIZE_RANGE_M),
            min_air_speed: pair(defaults::MIN_AIR_SPEED_RANGE),
            avg_air_speed: pair(defaults::AVG_AIR_SPEED_RANGE),
            max_air_speed: pair(defaults::MAX_AIR_SPEED_RANGE),
            uniformity: pair(defaults::UNIFORMITY_RANGE),
            num_fans: [defaults::FANS_PER_AXIS_RANGE.0, defaults::FANS_PER_AXIS_RANGE.1],
            diameter: pair(defaults::DIAMETER_RANGE_M),
            blade_height: pair(defaults::BLADE_HEIGHT_RANGE_M),
            dimensionless_diameter: pair(defaults::DIMENSIONLESS_DIAMETER_RANGE),
            length: defaults::ROOM_LENGTH_M,
            width: defaults::ROOM_WIDTH_M,
            height: defaults::CEILING_HEIGHT_M,
            aspect_ratio: defaults::ASPECT_RATIO_MAX,
            mount_distance: defaults::MOUNT_DISTANCE_M,
            fan_speed: defaults::FAN_SPEED_PERCENT,
            fan_table_data: default_fan_table(),
            selected_candidate_fan_ids: defaults::DEFAULT_SELECTED_FANS.to_vec(),
        }
    }
}

fn range(pair: [f64; 2]) -> Range {
    Range::new(pair[0], pair[1])
}

impl ParameterState {
    /// Decode a saved document
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode for saving
    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Room with `length` along X and `width` along Y
    pub fn room(&self) -> RoomModel {
        RoomModel::new(self.height, self.length, self.width)
    }

    /// Constraint set carried by the sliders
    pub fn constraints(&self) -> ConstraintSet {
        ConstraintSet::default()
            .with_fans_per_axis(self.num_fans[0], self.num_fans[1])
            .with_cell_size(range(self.cell_size))
            .with_aspect_ratio_max(self.aspect_ratio)
            .with_diameter(range(self.diameter))
            .with_dimensionless_diameter(range(self.dimensionless_diameter))
            .with_min_air_speed(range(self.min_air_speed))
            .with_avg_air_speed(range(self.avg_air_speed))
            .with_max_air_speed(range(self.max_air_speed))
            .with_uniformity(range(self.uniformity))
            .with_blade_height(range(self.blade_height))
            .with_mount_distance(self.mount_distance)
            .with_fan_speed_percent(self.fan_speed)
    }

    /// Every fan in the table
    pub fn catalog(&self) -> Vec<FanModel> {
        self.fan_table_data.iter().map(FanModel::from).collect()
    }

    /// Selected fans in selection order
    pub fn selected_fans(&self) -> Result<Vec<FanModel>, SchemaError> {
        self.selected_candidate_fan_ids
            .iter()
            .map(|&i| {
                self.fan_table_data
                    .get(i)
                    .map(FanModel::from)
                    .ok_or(SchemaError::UnknownFan(i))
            })
            .collect()
    }

    /// Validate and assemble a design request
    pub fn to_request(&self) -> Result<DesignRequest, SchemaError> {
        let room = self.room();
        room.validate()?;
        let constraints = self.constraints();
        constraints.validate()?;
        let catalog = self.selected_fans()?;

        for fan in &catalog {
            if let Err(e) = fan.validate() {
                warn!("Selected fan {} is unusable: {}", fan.fan_type, e);
            }
        }
        debug!(
            "Design request: {} x {} x {} m room, {} selected fans",
            room.size_x,
            room.size_y,
            room.ceiling_height,
            catalog.len()
        );

        Ok(DesignRequest {
            room,
            catalog,
            constraints,
        })
    }
}

/// Validated inputs for one design run
#[derive(Debug, Clone, PartialEq)]
pub struct DesignRequest {
    /// Room geometry
    pub room: RoomModel,
    /// Selected fans in selection order
    pub catalog: Vec<FanModel>,
    /// Acceptance constraints
    pub constraints: ConstraintSet,
}

impl DesignRequest {
    /// Run with the fitted regression model
    pub fn run(&self) -> DesignReport {
        design(&self.room, &self.catalog, &self.constraints)
    }

    /// Run with a caller-supplied model
    pub fn run_with<M: AirflowModel + Clone>(&self, model: &M) -> DesignReport {
        design_with(model, &self.room, &self.catalog, &self.constraints)
    }
}
