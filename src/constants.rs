/// Fixed page geometry and interaction constants
///
/// All dimensions are in points (72 points = 1 inch). A page is a 4x6 inch
/// print with two landscape photo slots stacked vertically.

/// Page width: 4 inches
pub const PAGE_WIDTH: f32 = 4.0 * 72.0;

/// Page height: 6 inches
pub const PAGE_HEIGHT: f32 = 6.0 * 72.0;

/// Photo slot width: full page width
pub const SLOT_WIDTH: f32 = 4.0 * 72.0;

/// Photo slot height: 2.9 inches (2.9 + 0.2 + 2.9 = 6 inches)
pub const SLOT_HEIGHT: f32 = 2.9 * 72.0;

/// Gap between the two photo slots: 0.2 inches
pub const SLOT_GAP: f32 = 0.2 * 72.0;

/// Page margin used around pages in the preview column: 0.25 inches
pub const PAGE_MARGIN: f32 = 0.25 * 72.0;

/// How many photos fit on one page
pub const PHOTOS_PER_PAGE: usize = 2;

/// Lower bound for the photo zoom factor
pub const MIN_SCALE: f32 = 0.5;

/// Upper bound for the photo zoom factor
pub const MAX_SCALE: f32 = 3.0;

/// Pointer travel (in points of radial distance from the slot center)
/// required for one full unit of scale change
pub const SCALE_SENSITIVITY: f32 = 100.0;

/// Draw radius of the corner/edge scale handles
pub const SCALE_HANDLE_RADIUS: f32 = 6.0;

/// Draw radius of the center move handle
pub const MOVE_HANDLE_RADIUS: f32 = 8.0;

/// Hit-test radius around a handle center (slightly larger than drawn)
pub const HANDLE_HIT_RADIUS: f32 = 10.0;
