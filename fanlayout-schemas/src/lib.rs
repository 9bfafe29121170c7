//! Parameter Documents for FanLayout
//!
//! ## Overview
//!
//! The interactive tool saves its whole parameter state (room geometry, every
//! constraint slider, the fan table and the selected rows) as one JSON
//! object. This crate reads and writes that document and turns it into a
//! validated design request for `fanlayout-core`.
//!
//! ## Document Format
//!
//! ```json
//! {
//!   "cellSize": [4.572, 15.24],
//!   "minAirSpeed": [0.5, 1.5],
//!   "avgAirSpeed": [0.5, 2],
//!   "maxAirSpeed": [0.5, 4.0],
//!   "uniformity": [0.3, 1.0],
//!   "numFans": [1, 10],
//!   "diameter": [1.2192, 4.2672],
//!   "bladeHeight": [2.1336, 3.048],
//!   "dimensionlessDiameter": [0.15, 0.5],
//!   "length": 13,
//!   "width": 16,
//!   "height": 3.7,
//!   "aspectRatio": 1.25,
//!   "mountDistance": 0.2,
//!   "fanSpeed": 100,
//!   "fanTableData": [["ExampleA", 1.2192, 2.611757, true]],
//!   "selectedCandidateFanIDs": [0]
//! }
//! ```
//!
//! - Ranges are `[min, max]` pairs.
//! - Fan rows are `[type, diameter, airflow, listed]`.
//! - Missing keys take the tool's defaults.
//! - Display keys (`isSIunits`, `isSeated`, `view`, `selectedSolutionID`)
//!   are accepted and ignored; values are always read as SI.
//!
//! The room is built as the tool builds it: `length` runs along X and
//! `width` along Y.
//!
//! ## Usage Example
//!
//! ```rust
//! use fanlayout_schemas::ParameterState;
//!
//! let state = ParameterState::from_json(r#"{ "length": 20, "width": 12 }"#)?;
//! let request = state.to_request()?;
//! assert_eq!(request.room.size_x, 20.0);
//!
//! let report = request.run();
//! println!("{} layouts", report.layouts.len());
//! # Ok::<(), fanlayout_schemas::SchemaError>(())
//! ```

use fanlayout_core::DesignError;

pub mod fan_table;
pub mod parameters;

pub use fan_table::{default_fan_table, FanRow};
pub use parameters::{DesignRequest, ParameterState};

/// Parameter document errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    /// The document is not valid JSON or has the wrong shape
    #[error("Failed to parse parameters: {0}")]
    Parse(String),

    /// A selected row index is past the end of the fan table
    #[error("Selected fan {0} is not in the fan table")]
    UnknownFan(usize),

    /// The decoded values fail core validation
    #[error("Invalid parameters: {0}")]
    InvalidParameters(DesignError),
}

impl From<serde_json::Error> for SchemaError {
    fn from(e: serde_json::Error) -> Self {
        SchemaError::Parse(e.to_string())
    }
}

impl From<DesignError> for SchemaError {
    fn from(e: DesignError) -> Self {
        SchemaError::InvalidParameters(e)
    }
}
