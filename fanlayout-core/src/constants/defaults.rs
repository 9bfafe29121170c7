//! Default Parameter Set
//!
//! The constraint values an interactive session starts from before the user
//! moves any control. All lengths are metres, speeds m/s, flows m³/s.

// ===== ROOM =====

/// Default room length, mapped to the X axis (m).
pub const ROOM_LENGTH_M: f64 = 13.0;

/// Default room width, mapped to the Y axis (m).
pub const ROOM_WIDTH_M: f64 = 16.0;

/// Default ceiling height (m).
pub const CEILING_HEIGHT_M: f64 = 3.7;

// ===== LAYOUT CONSTRAINTS =====

/// Equivalent square cell side range (m). 15 ft to 50 ft.
pub const CELL_SIZE_RANGE_M: (f64, f64) = (4.572, 15.24);

/// Fans per axis, inclusive.
pub const FANS_PER_AXIS_RANGE: (u32, u32) = (1, 10);

/// Maximum cell aspect ratio (exclusive).
pub const ASPECT_RATIO_MAX: f64 = 1.25;

// ===== SOLUTION CONSTRAINTS =====

/// Lowest air speed range (m/s).
pub const MIN_AIR_SPEED_RANGE: (f64, f64) = (0.5, 1.5);

/// Area-weighted average air speed range (m/s).
pub const AVG_AIR_SPEED_RANGE: (f64, f64) = (0.5, 2.0);

/// Highest air speed range (m/s). Carried for the display layer only.
pub const MAX_AIR_SPEED_RANGE: (f64, f64) = (0.5, 4.0);

/// Uniformity range (dimensionless).
pub const UNIFORMITY_RANGE: (f64, f64) = (0.3, 1.0);

/// Fan diameter range (m). 4 ft to 14 ft.
pub const DIAMETER_RANGE_M: (f64, f64) = (1.2192, 4.2672);

/// Blade height band (m). 7 ft to 10 ft.
pub const BLADE_HEIGHT_RANGE_M: (f64, f64) = (2.1336, 3.048);

/// Dimensionless diameter range `D / r`.
pub const DIMENSIONLESS_DIAMETER_RANGE: (f64, f64) = (0.15, 0.5);

// ===== OPERATING PARAMETERS =====

/// Distance from ceiling to fan mount (m).
pub const MOUNT_DISTANCE_M: f64 = 0.2;

/// Fan speed as a percentage of full speed.
pub const FAN_SPEED_PERCENT: f64 = 100.0;

// ===== EXAMPLE CATALOG =====

/// Example fan catalog rows: `(type, diameter m, airflow m³/s, certified)`.
pub const EXAMPLE_FANS: [(&str, f64, f64, bool); 9] = [
    ("ExampleA", 1.2192, 2.611757, true),
    ("ExampleB", 1.319784, 2.258268, true),
    ("ExampleC", 1.524, 3.765196, true),
    ("ExampleD", 1.524, 3.826077, true),
    ("ExampleE", 2.1336, 7.734745, true),
    ("ExampleF", 2.4384, 13.80304, false),
    ("ExampleG", 2.4384, 16.57101, false),
    ("ExampleH", 3.048, 20.91151, false),
    ("ExampleI", 4.2672, 25.30817, false),
];

/// Catalog rows selected when a session starts without saved state.
pub const DEFAULT_SELECTED_FANS: [usize; 4] = [3, 4, 6, 7];
