/// Id reserved for the single rectangle that exists at startup.
pub const ROOT_ID: u32 = 1;
/// First id handed out by the counter; everything below it is the root.
pub const FIRST_CHILD_ID: u32 = 2;

/// Width and height of the root square, in percent of the viewport.
pub const ROOT_EXTENT: f64 = 100.0;
pub const ROOT_AREA: f64 = ROOT_EXTENT * ROOT_EXTENT;

/// Tolerance for area and edge comparisons. Percentages are halved or thirded
/// on every split, so this stays well above accumulated f64 error even after
/// thousands of splits.
pub const AREA_EPSILON: f64 = 1e-6;

/// Seed used for `TilingRng` when the binary does not provide one.
pub const DEFAULT_SEED: u64 = 42;
