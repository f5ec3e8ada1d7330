//! Tablet-to-screen coordinate mapping domain entity.
//!
//! A pen tablet reports positions in its own absolute device units (the
//! [`TabletArea`]).  Before anything can be drawn or a cursor moved, those
//! positions must be translated into a screen or window rectangle (the
//! [`OutputRegion`]).  The [`MappingContext`] binds one tablet area to one
//! output region and applies a linear per-axis transform: the tablet's
//! minimum corner lands on the output's minimum corner, the maximum corner
//! on the maximum corner, with independent X and Y scale factors and no
//! rotation.
//!
//! All geometry is `f64`.  Conversion back to integer pixel coordinates
//! happens only at the presentation edge via [`Point::to_pixel`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a mapping context, derived from UUID v4.
pub type ContextId = Uuid;

/// Errors that can occur when building a mapping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    /// A tablet area or output region has zero or negative width/height.
    ///
    /// This is non-fatal: callers discard the requested change and keep the
    /// previous mapping context unchanged.
    #[error("rectangle has zero or negative width/height")]
    InvalidRegion,
}

/// A position in either tablet or output coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts to integer pixel coordinates.
    ///
    /// Rounding rule: round to nearest, ties away from zero (`f64::round`).
    pub fn to_pixel(self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

/// The physical sensing rectangle of a pen tablet (or a sub-region of it,
/// such as the left half), in device-native absolute units.
///
/// Immutable once queried from the device; a fresh area is queried whenever
/// the active tablet changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabletArea {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl TabletArea {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The minimum (top-left in device orientation) corner.
    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// The maximum corner.
    pub fn max(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Horizontal midpoint, the split boundary used by [`split_tablet_area`].
    pub fn mid_x(&self) -> f64 {
        self.min_x + self.width() / 2.0
    }

    /// `false` for degenerate rectangles (zero or negative width/height).
    pub fn has_positive_extent(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

/// The destination rectangle that tablet coordinates are mapped onto, in
/// screen or window coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputRegion {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl OutputRegion {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// A region anchored at the origin, e.g. a full desktop of `w`×`h` pixels.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn max(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// `false` for degenerate rectangles (zero or negative width/height).
    pub fn has_positive_extent(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

/// An immutable binding of one [`TabletArea`] to one [`OutputRegion`].
///
/// Contexts are never mutated in place: any configuration change builds a
/// new context and swaps it in a single assignment, so readers observe
/// either the old or the fully-new context, never a partial update.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingContext {
    id: ContextId,
    tablet_area: TabletArea,
    output_region: OutputRegion,
}

impl MappingContext {
    /// Builds a mapping from `tablet_area` onto `output_region`.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidRegion`] if either rectangle has zero
    /// or negative width/height.
    pub fn build(
        tablet_area: TabletArea,
        output_region: OutputRegion,
    ) -> Result<Self, MappingError> {
        if !tablet_area.has_positive_extent() || !output_region.has_positive_extent() {
            return Err(MappingError::InvalidRegion);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            tablet_area,
            output_region,
        })
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn tablet_area(&self) -> &TabletArea {
        &self.tablet_area
    }

    pub fn output_region(&self) -> &OutputRegion {
        &self.output_region
    }

    /// Applies the per-axis linear transform to a tablet-space point.
    ///
    /// No clamping is performed: points outside the tablet area extrapolate
    /// linearly.  Drivers are not expected to emit out-of-range coordinates
    /// under normal operation, but the mapper must not misbehave when they do.
    pub fn map_point(&self, p: Point) -> Point {
        let a = &self.tablet_area;
        let o = &self.output_region;
        Point {
            x: o.min_x + (p.x - a.min_x) * o.width() / a.width(),
            y: o.min_y + (p.y - a.min_y) * o.height() / a.height(),
        }
    }
}

/// Divides a tablet area at its horizontal midpoint into two equal-width
/// halves sharing the full height.
///
/// The halves share the midpoint edge, so their widths sum to the original
/// width and their union reconstructs the original area.  The left half is
/// also usable alone when only the left portion of the surface is mapped.
pub fn split_tablet_area(area: TabletArea) -> (TabletArea, TabletArea) {
    let mid = area.mid_x();
    let left = TabletArea::new(area.min_x, area.min_y, mid, area.max_y);
    let right = TabletArea::new(mid, area.min_y, area.max_x, area.max_y);
    (left, right)
}

/// Picks the output rectangle for the current configuration snapshot:
/// `window_bounds` when constrained to the window, else `desktop_bounds`.
///
/// Pure and stateless; calling it twice with identical arguments yields
/// identical results.
pub fn select_output_region(
    constrained_to_window: bool,
    window_bounds: OutputRegion,
    desktop_bounds: OutputRegion,
) -> OutputRegion {
    if constrained_to_window {
        window_bounds
    } else {
        desktop_bounds
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn area(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> TabletArea {
        TabletArea::new(min_x, min_y, max_x, max_y)
    }

    fn region(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> OutputRegion {
        OutputRegion::new(min_x, min_y, max_x, max_y)
    }

    // ── Rectangle helpers ─────────────────────────────────────────────────────

    #[test]
    fn test_tablet_area_width_and_height() {
        let a = area(100.0, 200.0, 1100.0, 900.0);
        assert_eq!(a.width(), 1000.0);
        assert_eq!(a.height(), 700.0);
    }

    #[test]
    fn test_output_region_from_size_is_anchored_at_origin() {
        let o = OutputRegion::from_size(1920.0, 1080.0);
        assert_eq!(o.min(), Point::new(0.0, 0.0));
        assert_eq!(o.max(), Point::new(1920.0, 1080.0));
    }

    #[test]
    fn test_point_to_pixel_rounds_half_away_from_zero() {
        assert_eq!(Point::new(959.5, 539.4).to_pixel(), (960, 539));
        assert_eq!(Point::new(-0.5, -1.2).to_pixel(), (-1, -1));
    }

    // ── build ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_build_succeeds_for_positive_extents() {
        let ctx = MappingContext::build(
            area(0.0, 0.0, 1000.0, 1000.0),
            region(0.0, 0.0, 1920.0, 1080.0),
        );
        assert!(ctx.is_ok());
    }

    #[test]
    fn test_build_fails_for_zero_width_tablet_area() {
        let result = MappingContext::build(
            area(500.0, 0.0, 500.0, 1000.0),
            region(0.0, 0.0, 1920.0, 1080.0),
        );
        assert_eq!(result, Err(MappingError::InvalidRegion));
    }

    #[test]
    fn test_build_fails_for_zero_height_tablet_area() {
        let result = MappingContext::build(
            area(0.0, 300.0, 1000.0, 300.0),
            region(0.0, 0.0, 1920.0, 1080.0),
        );
        assert_eq!(result, Err(MappingError::InvalidRegion));
    }

    #[test]
    fn test_build_fails_for_zero_width_output_region() {
        let result = MappingContext::build(
            area(0.0, 0.0, 1000.0, 1000.0),
            region(100.0, 0.0, 100.0, 1080.0),
        );
        assert_eq!(result, Err(MappingError::InvalidRegion));
    }

    #[test]
    fn test_build_fails_for_negative_extent_output_region() {
        let result = MappingContext::build(
            area(0.0, 0.0, 1000.0, 1000.0),
            region(1920.0, 1080.0, 0.0, 0.0),
        );
        assert_eq!(result, Err(MappingError::InvalidRegion));
    }

    #[test]
    fn test_build_assigns_distinct_context_ids() {
        let a = area(0.0, 0.0, 1000.0, 1000.0);
        let o = region(0.0, 0.0, 1920.0, 1080.0);
        let c1 = MappingContext::build(a, o).unwrap();
        let c2 = MappingContext::build(a, o).unwrap();
        assert_ne!(c1.id(), c2.id());
    }

    // ── map_point ─────────────────────────────────────────────────────────────

    #[test]
    fn test_map_point_sends_min_corner_to_min_corner() {
        let a = area(100.0, 50.0, 2100.0, 1550.0);
        let o = region(10.0, 20.0, 1930.0, 1100.0);
        let ctx = MappingContext::build(a, o).unwrap();
        assert_eq!(ctx.map_point(a.min()), o.min());
    }

    #[test]
    fn test_map_point_sends_max_corner_to_max_corner() {
        let a = area(100.0, 50.0, 2100.0, 1550.0);
        let o = region(10.0, 20.0, 1930.0, 1100.0);
        let ctx = MappingContext::build(a, o).unwrap();
        assert_eq!(ctx.map_point(a.max()), o.max());
    }

    #[test]
    fn test_map_point_center_of_tablet_maps_to_center_of_desktop() {
        // Tablet (0,0)–(1000,1000) onto desktop (0,0)–(1920,1080):
        // (500, 500) must land on (960, 540).
        let ctx = MappingContext::build(
            area(0.0, 0.0, 1000.0, 1000.0),
            region(0.0, 0.0, 1920.0, 1080.0),
        )
        .unwrap();
        assert_eq!(ctx.map_point(Point::new(500.0, 500.0)), Point::new(960.0, 540.0));
    }

    #[test]
    fn test_map_point_scales_axes_independently() {
        // X doubles, Y halves.
        let ctx = MappingContext::build(
            area(0.0, 0.0, 100.0, 100.0),
            region(0.0, 0.0, 200.0, 50.0),
        )
        .unwrap();
        assert_eq!(ctx.map_point(Point::new(10.0, 10.0)), Point::new(20.0, 5.0));
    }

    #[test]
    fn test_map_point_honours_nonzero_output_origin() {
        // Window at (300, 200), 640×480, fed from a 1000×1000 tablet.
        let ctx = MappingContext::build(
            area(0.0, 0.0, 1000.0, 1000.0),
            region(300.0, 200.0, 940.0, 680.0),
        )
        .unwrap();
        assert_eq!(ctx.map_point(Point::new(0.0, 0.0)), Point::new(300.0, 200.0));
        assert_eq!(ctx.map_point(Point::new(500.0, 500.0)), Point::new(620.0, 440.0));
    }

    #[test]
    fn test_map_point_extrapolates_beyond_tablet_area_without_clamping() {
        let ctx = MappingContext::build(
            area(0.0, 0.0, 1000.0, 1000.0),
            region(0.0, 0.0, 1920.0, 1080.0),
        )
        .unwrap();
        // 25% past the right edge keeps the linear scale.
        assert_eq!(ctx.map_point(Point::new(1250.0, 0.0)), Point::new(2400.0, 0.0));
        // Negative inputs extrapolate below the output origin.
        assert_eq!(ctx.map_point(Point::new(-500.0, -500.0)), Point::new(-960.0, -540.0));
    }

    // ── split_tablet_area ─────────────────────────────────────────────────────

    #[test]
    fn test_split_produces_expected_halves() {
        let (left, right) = split_tablet_area(area(0.0, 0.0, 1000.0, 1000.0));
        assert_eq!(left, area(0.0, 0.0, 500.0, 1000.0));
        assert_eq!(right, area(500.0, 0.0, 1000.0, 1000.0));
    }

    #[test]
    fn test_split_half_widths_sum_to_original_width() {
        let a = area(120.0, 40.0, 2093.0, 1480.0);
        let (left, right) = split_tablet_area(a);
        assert_eq!(left.width() + right.width(), a.width());
    }

    #[test]
    fn test_split_halves_share_the_midpoint_edge_and_full_height() {
        let a = area(120.0, 40.0, 2093.0, 1480.0);
        let (left, right) = split_tablet_area(a);
        assert_eq!(left.max_x, right.min_x);
        assert_eq!(left.min_y, a.min_y);
        assert_eq!(right.max_y, a.max_y);
    }

    #[test]
    fn test_split_union_reconstructs_original_area() {
        let a = area(-50.0, -20.0, 950.0, 980.0);
        let (left, right) = split_tablet_area(a);
        assert_eq!(left.min_x, a.min_x);
        assert_eq!(right.max_x, a.max_x);
        assert_eq!(left.min_y, right.min_y);
        assert_eq!(left.max_y, right.max_y);
    }

    #[test]
    fn test_left_half_maps_onto_full_output_region() {
        // A half used alone still spans the whole output.
        let (left, _) = split_tablet_area(area(0.0, 0.0, 1000.0, 1000.0));
        let ctx = MappingContext::build(left, region(0.0, 0.0, 1920.0, 1080.0)).unwrap();
        assert_eq!(ctx.map_point(Point::new(500.0, 1000.0)), Point::new(1920.0, 1080.0));
    }

    // ── select_output_region ──────────────────────────────────────────────────

    #[test]
    fn test_select_output_region_prefers_window_when_constrained() {
        let window = region(100.0, 100.0, 740.0, 580.0);
        let desktop = region(0.0, 0.0, 1920.0, 1080.0);
        assert_eq!(select_output_region(true, window, desktop), window);
    }

    #[test]
    fn test_select_output_region_uses_desktop_when_unconstrained() {
        let window = region(100.0, 100.0, 740.0, 580.0);
        let desktop = region(0.0, 0.0, 1920.0, 1080.0);
        assert_eq!(select_output_region(false, window, desktop), desktop);
    }

    #[test]
    fn test_select_output_region_is_idempotent() {
        let window = region(100.0, 100.0, 740.0, 580.0);
        let desktop = region(0.0, 0.0, 1920.0, 1080.0);
        let first = select_output_region(true, window, desktop);
        let second = select_output_region(true, window, desktop);
        assert_eq!(first, second);
    }

    // ── Failure semantics ─────────────────────────────────────────────────────

    #[test]
    fn test_failed_build_leaves_existing_context_usable() {
        let ctx = MappingContext::build(
            area(0.0, 0.0, 1000.0, 1000.0),
            region(0.0, 0.0, 1920.0, 1080.0),
        )
        .unwrap();

        // A rejected rebuild with a degenerate output region must not
        // disturb the context already in hand.
        let rejected = MappingContext::build(
            area(0.0, 0.0, 1000.0, 1000.0),
            region(0.0, 0.0, 0.0, 1080.0),
        );
        assert_eq!(rejected, Err(MappingError::InvalidRegion));

        assert_eq!(ctx.map_point(Point::new(500.0, 500.0)), Point::new(960.0, 540.0));
    }
}
