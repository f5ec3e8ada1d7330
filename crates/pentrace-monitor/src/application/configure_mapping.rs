//! Builds validated mapping context sets from toggle state.
//!
//! The main entry point is [`build_contexts`], which converts a
//! [`MappingToggles`] snapshot (typically loaded from TOML or flipped by a
//! UI control) plus the current rectangles into a [`ContextSet`] —
//! all-or-nothing, so a rejected rectangle never leaves a half-built set
//! behind.
//!
//! # Why rebuild instead of mutate? (for beginners)
//!
//! Every toggle change constructs a brand-new context set and swaps it in a
//! single assignment.  Readers of the set therefore always observe either
//! the old configuration or the complete new one, never a mix — the same
//! guarantee a pointer swap gives in concurrent code, kept here even though
//! event dispatch is single-threaded today.

use pentrace_core::{
    select_output_region, split_tablet_area, MappingContext, MappingError, OutputRegion,
    SurfaceHalf, TabletArea,
};

/// Snapshot of the user-facing configuration toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingToggles {
    /// Whether mapped input also drives the system pointer.
    pub moves_cursor: bool,
    /// Whether the output region tracks the window instead of the desktop.
    pub constrained_to_window: bool,
    /// Whether only the left half of the tablet surface is mapped.
    pub use_left_half: bool,
    /// Whether the surface is halved into two independent contexts.
    /// Takes precedence over `use_left_half`.
    pub split_tablet: bool,
}

impl Default for MappingToggles {
    fn default() -> Self {
        Self {
            moves_cursor: true,
            constrained_to_window: false,
            use_left_half: false,
            split_tablet: false,
        }
    }
}

/// The active mapping contexts: one for the whole (or left-half) surface,
/// plus a second one for the right half when the surface is split.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextSet {
    primary: MappingContext,
    primary_half: SurfaceHalf,
    /// Right-half context; present only under `split_tablet`.
    secondary: Option<MappingContext>,
}

impl ContextSet {
    /// Picks the context responsible for a tablet-space X coordinate.
    ///
    /// With a split surface the primary covers X below the midpoint and the
    /// secondary everything at or beyond it; otherwise the primary covers
    /// the whole surface.
    pub fn select(&self, tablet_x: f64) -> (&MappingContext, SurfaceHalf) {
        match &self.secondary {
            Some(right) if tablet_x >= self.primary.tablet_area().max_x => {
                (right, SurfaceHalf::Right)
            }
            Some(_) => (&self.primary, SurfaceHalf::Left),
            None => (&self.primary, self.primary_half),
        }
    }

    pub fn primary(&self) -> &MappingContext {
        &self.primary
    }

    pub fn secondary(&self) -> Option<&MappingContext> {
        self.secondary.as_ref()
    }
}

/// Builds the context set for a toggle snapshot.
///
/// The output region is chosen by [`select_output_region`]; under
/// `split_tablet` each half maps onto the *full* selected output region,
/// giving two complete independent drawing contexts.
///
/// # Errors
///
/// Returns [`MappingError::InvalidRegion`] if any involved rectangle has
/// zero or negative extent.  Nothing is partially applied on failure.
pub fn build_contexts(
    toggles: &MappingToggles,
    tablet_area: TabletArea,
    window_bounds: OutputRegion,
    desktop_bounds: OutputRegion,
) -> Result<ContextSet, MappingError> {
    let output = select_output_region(toggles.constrained_to_window, window_bounds, desktop_bounds);

    if toggles.split_tablet {
        let (left, right) = split_tablet_area(tablet_area);
        let primary = MappingContext::build(left, output)?;
        let secondary = MappingContext::build(right, output)?;
        return Ok(ContextSet {
            primary,
            primary_half: SurfaceHalf::Left,
            secondary: Some(secondary),
        });
    }

    if toggles.use_left_half {
        let (left, _) = split_tablet_area(tablet_area);
        return Ok(ContextSet {
            primary: MappingContext::build(left, output)?,
            primary_half: SurfaceHalf::Left,
            secondary: None,
        });
    }

    Ok(ContextSet {
        primary: MappingContext::build(tablet_area, output)?,
        primary_half: SurfaceHalf::Whole,
        secondary: None,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pentrace_core::Point;

    fn full_area() -> TabletArea {
        TabletArea::new(0.0, 0.0, 1000.0, 1000.0)
    }

    fn desktop() -> OutputRegion {
        OutputRegion::from_size(1920.0, 1080.0)
    }

    fn window() -> OutputRegion {
        OutputRegion::new(300.0, 200.0, 940.0, 680.0)
    }

    #[test]
    fn test_default_toggles_move_cursor_over_full_desktop() {
        let toggles = MappingToggles::default();
        assert!(toggles.moves_cursor);
        assert!(!toggles.constrained_to_window);
        assert!(!toggles.use_left_half);
        assert!(!toggles.split_tablet);
    }

    #[test]
    fn test_build_contexts_full_area_covers_whole_surface() {
        let set = build_contexts(&MappingToggles::default(), full_area(), window(), desktop())
            .expect("valid rectangles must build");

        assert!(set.secondary().is_none());
        let (ctx, half) = set.select(500.0);
        assert_eq!(half, SurfaceHalf::Whole);
        assert_eq!(ctx.map_point(Point::new(500.0, 500.0)), Point::new(960.0, 540.0));
    }

    #[test]
    fn test_build_contexts_constrained_maps_into_window() {
        let toggles = MappingToggles {
            constrained_to_window: true,
            ..MappingToggles::default()
        };
        let set = build_contexts(&toggles, full_area(), window(), desktop()).unwrap();

        assert_eq!(*set.primary().output_region(), window());
        let (ctx, _) = set.select(0.0);
        assert_eq!(ctx.map_point(Point::new(0.0, 0.0)), Point::new(300.0, 200.0));
    }

    #[test]
    fn test_build_contexts_left_half_only() {
        let toggles = MappingToggles {
            use_left_half: true,
            ..MappingToggles::default()
        };
        let set = build_contexts(&toggles, full_area(), window(), desktop()).unwrap();

        assert!(set.secondary().is_none());
        assert_eq!(set.primary().tablet_area().max_x, 500.0);
        let (_, half) = set.select(250.0);
        assert_eq!(half, SurfaceHalf::Left);
    }

    #[test]
    fn test_build_contexts_split_produces_two_independent_contexts() {
        let toggles = MappingToggles {
            split_tablet: true,
            ..MappingToggles::default()
        };
        let set = build_contexts(&toggles, full_area(), window(), desktop()).unwrap();

        let secondary = set.secondary().expect("split must build a right-half context");
        assert_eq!(*set.primary().tablet_area(), TabletArea::new(0.0, 0.0, 500.0, 1000.0));
        assert_eq!(*secondary.tablet_area(), TabletArea::new(500.0, 0.0, 1000.0, 1000.0));
        // Both halves span the full output region.
        assert_eq!(*set.primary().output_region(), desktop());
        assert_eq!(*secondary.output_region(), desktop());
    }

    #[test]
    fn test_split_takes_precedence_over_left_half() {
        let toggles = MappingToggles {
            use_left_half: true,
            split_tablet: true,
            ..MappingToggles::default()
        };
        let set = build_contexts(&toggles, full_area(), window(), desktop()).unwrap();
        assert!(set.secondary().is_some());
    }

    #[test]
    fn test_select_routes_point_to_matching_half() {
        let toggles = MappingToggles {
            split_tablet: true,
            ..MappingToggles::default()
        };
        let set = build_contexts(&toggles, full_area(), window(), desktop()).unwrap();

        let (_, left_half) = set.select(499.9);
        let (_, right_half) = set.select(500.0);
        assert_eq!(left_half, SurfaceHalf::Left);
        assert_eq!(right_half, SurfaceHalf::Right);
    }

    #[test]
    fn test_build_contexts_rejects_degenerate_window_when_constrained() {
        let toggles = MappingToggles {
            constrained_to_window: true,
            ..MappingToggles::default()
        };
        let degenerate = OutputRegion::new(300.0, 200.0, 300.0, 680.0);
        let result = build_contexts(&toggles, full_area(), degenerate, desktop());
        assert_eq!(result, Err(MappingError::InvalidRegion));
    }

    #[test]
    fn test_build_contexts_ignores_degenerate_window_when_unconstrained() {
        // A collapsed window is irrelevant while mapping to the desktop.
        let degenerate = OutputRegion::new(300.0, 200.0, 300.0, 680.0);
        let result = build_contexts(&MappingToggles::default(), full_area(), degenerate, desktop());
        assert!(result.is_ok());
    }
}
