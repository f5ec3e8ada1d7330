//! TabletMonitor: maps raw tablet/mouse events and forwards display samples.
//!
//! This use case is the heart of the monitor application.  It receives raw
//! input events from the event source, applies the active [`ContextSet`] to
//! every pen point, and dispatches typed samples to the [`EventDisplay`].
//!
//! # Architecture
//!
//! This use case depends only on traits (`EventDisplay`, `CursorDriver`,
//! `SurfaceQuery`) and domain types (`MappingContext`).  All infrastructure
//! implementations are injected at construction time, making the use case
//! fully unit-testable.
//!
//! The monitor holds no display widgets: it produces plain records and the
//! presenter decides how to render them.

use std::sync::Arc;

use async_trait::async_trait;
use pentrace_core::{
    MappingError, ModifierFlags, MousePhase, MouseSample, OutputRegion, PenSample, Point,
    ProximitySample, TabletArea,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::application::configure_mapping::{build_contexts, ContextSet, MappingToggles};
use crate::infrastructure::event_source::RawPenEvent;

/// Error type for the monitor use case.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("display error: {0}")]
    Display(String),
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Trait for presenting event samples on a display surface.
///
/// Infrastructure implementations render to a console or UI bridge; test
/// implementations record calls.
#[async_trait]
pub trait EventDisplay: Send + Sync {
    /// Presents a mouse sample.
    async fn show_mouse(&self, sample: MouseSample) -> Result<(), String>;

    /// Presents a pen sample with its mapped position.
    async fn show_pen(&self, sample: PenSample) -> Result<(), String>;

    /// Presents a transducer proximity change.
    async fn show_proximity(&self, sample: ProximitySample) -> Result<(), String>;
}

/// Trait for driving the physical system pointer.
///
/// Used only while `moves_cursor` is enabled; test implementations record calls.
pub trait CursorDriver: Send + Sync {
    /// Moves the pointer to (x, y) in output (pixel) coordinates.
    fn move_cursor(&self, x: i64, y: i64);
}

/// Trait for querying a tablet's physical sensing area.
///
/// The monitor re-queries whenever the active tablet changes.
#[cfg_attr(test, mockall::automock)]
pub trait SurfaceQuery: Send + Sync {
    /// Returns the sensing area of the given tablet, if the device is known.
    fn surface_area(&self, device_id: u32) -> Option<TabletArea>;
}

/// The tablet monitor use case.
///
/// Receives raw captured events, translates pen points through the active
/// mapping contexts, and forwards samples to the display surface.
pub struct TabletMonitor {
    toggles: MappingToggles,
    desktop_bounds: OutputRegion,
    window_bounds: OutputRegion,
    tablet_area: TabletArea,
    /// Device id of the tablet the contexts were built for.
    last_used_tablet: Option<u32>,
    contexts: ContextSet,
    display: Arc<dyn EventDisplay>,
    cursor: Arc<dyn CursorDriver>,
    surfaces: Arc<dyn SurfaceQuery>,
}

impl TabletMonitor {
    /// Creates a new monitor with an initial context set.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidRegion`] if the initial rectangles
    /// cannot form a valid mapping.
    pub fn new(
        toggles: MappingToggles,
        tablet_area: TabletArea,
        window_bounds: OutputRegion,
        desktop_bounds: OutputRegion,
        display: Arc<dyn EventDisplay>,
        cursor: Arc<dyn CursorDriver>,
        surfaces: Arc<dyn SurfaceQuery>,
    ) -> Result<Self, MappingError> {
        let contexts = build_contexts(&toggles, tablet_area, window_bounds, desktop_bounds)?;
        Ok(Self {
            toggles,
            desktop_bounds,
            window_bounds,
            tablet_area,
            last_used_tablet: None,
            contexts,
            display,
            cursor,
            surfaces,
        })
    }

    /// Returns the current toggle snapshot.
    pub fn toggles(&self) -> &MappingToggles {
        &self.toggles
    }

    /// Returns the active context set.
    pub fn contexts(&self) -> &ContextSet {
        &self.contexts
    }

    // ── Toggle operations ─────────────────────────────────────────────────────
    //
    // Each operation takes a full snapshot, rebuilds the context set, and
    // swaps it in one assignment.  On rejection the monitor is untouched and
    // the previous mapping stays live, so a bad toggle surfaces as a no-op.

    /// Enables or disables driving the system pointer from mapped input.
    pub fn set_moves_cursor(&mut self, enabled: bool) -> Result<(), MappingError> {
        let mut toggles = self.toggles;
        toggles.moves_cursor = enabled;
        self.apply_toggles(toggles)
    }

    /// Constrains the output region to the window, or releases it back to
    /// the desktop.
    pub fn set_constrained_to_window(&mut self, enabled: bool) -> Result<(), MappingError> {
        let mut toggles = self.toggles;
        toggles.constrained_to_window = enabled;
        self.apply_toggles(toggles)
    }

    /// Maps only the left half of the tablet surface.
    pub fn set_use_left_half(&mut self, enabled: bool) -> Result<(), MappingError> {
        let mut toggles = self.toggles;
        toggles.use_left_half = enabled;
        self.apply_toggles(toggles)
    }

    /// Splits the surface into two independent mapping contexts.
    pub fn set_split_tablet(&mut self, enabled: bool) -> Result<(), MappingError> {
        let mut toggles = self.toggles;
        toggles.split_tablet = enabled;
        self.apply_toggles(toggles)
    }

    /// Restores the plain full-surface mapping: clears the constrain,
    /// left-half, and split toggles while leaving cursor control as-is.
    pub fn use_real_absolute_coordinates(&mut self) -> Result<(), MappingError> {
        let toggles = MappingToggles {
            moves_cursor: self.toggles.moves_cursor,
            constrained_to_window: false,
            use_left_half: false,
            split_tablet: false,
        };
        self.apply_toggles(toggles)
    }

    /// Tracks a window move/resize.  Only affects the mapping while
    /// `constrained_to_window` is set, but the bounds are recorded either way
    /// so a later constrain toggle uses fresh geometry.
    ///
    /// Degenerate bounds are rejected even while unconstrained; the previous
    /// bounds and mapping stay live.
    pub fn set_window_bounds(&mut self, bounds: OutputRegion) -> Result<(), MappingError> {
        if !bounds.has_positive_extent() {
            warn!("window bounds rejected: degenerate rectangle; keeping previous mapping");
            return Err(MappingError::InvalidRegion);
        }
        let contexts = build_contexts(&self.toggles, self.tablet_area, bounds, self.desktop_bounds)?;
        self.window_bounds = bounds;
        self.contexts = contexts;
        Ok(())
    }

    fn apply_toggles(&mut self, toggles: MappingToggles) -> Result<(), MappingError> {
        match build_contexts(&toggles, self.tablet_area, self.window_bounds, self.desktop_bounds) {
            Ok(contexts) => {
                self.toggles = toggles;
                self.contexts = contexts;
                debug!(context_id = %self.contexts.primary().id(), "mapping contexts rebuilt");
                Ok(())
            }
            Err(e) => {
                warn!("mapping rebuild rejected: {e}; keeping previous contexts");
                Err(e)
            }
        }
    }

    // ── Event handling ────────────────────────────────────────────────────────

    /// Handles a raw input event from the event source.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Display`] if the presenter fails to accept
    /// the sample.  Mapping rejections during a tablet switch never fail the
    /// event; the previous contexts stay live.
    pub async fn handle_event(&mut self, event: RawPenEvent) -> Result<(), MonitorError> {
        match event {
            RawPenEvent::MouseMove { x, y, delta_x, delta_y, modifiers, from_tablet } => {
                self.show_mouse(MousePhase::Move, x, y, delta_x, delta_y, modifiers, from_tablet)
                    .await
            }
            RawPenEvent::MouseDown { x, y, modifiers, from_tablet } => {
                self.show_mouse(MousePhase::Down, x, y, 0.0, 0.0, modifiers, from_tablet)
                    .await
            }
            RawPenEvent::MouseDrag { x, y, delta_x, delta_y, modifiers, from_tablet } => {
                self.show_mouse(MousePhase::Drag, x, y, delta_x, delta_y, modifiers, from_tablet)
                    .await
            }
            RawPenEvent::MouseUp { x, y, modifiers, from_tablet } => {
                self.show_mouse(MousePhase::Up, x, y, 0.0, 0.0, modifiers, from_tablet)
                    .await
            }
            RawPenEvent::PenPoint {
                device_id,
                absolute_x,
                absolute_y,
                absolute_z,
                pressure,
                tangential_pressure,
                tilt_x,
                tilt_y,
                rotation,
            } => {
                if self.last_used_tablet != Some(device_id) {
                    self.adopt_tablet(device_id);
                }

                let point = Point::new(f64::from(absolute_x), f64::from(absolute_y));
                let (context, half) = self.contexts.select(point.x);
                let mapped = context.map_point(point);

                if self.toggles.moves_cursor {
                    let (px, py) = mapped.to_pixel();
                    self.cursor.move_cursor(px, py);
                }

                let sample = PenSample {
                    device_id,
                    absolute_x,
                    absolute_y,
                    absolute_z,
                    pressure,
                    tangential_pressure,
                    tilt_x,
                    tilt_y,
                    rotation,
                    mapped,
                    half,
                };
                self.display
                    .show_pen(sample)
                    .await
                    .map_err(MonitorError::Display)
            }
            RawPenEvent::PenProximity {
                device_id,
                transducer_serial,
                transducer_name,
                entering,
            } => {
                if entering && self.last_used_tablet != Some(device_id) {
                    self.adopt_tablet(device_id);
                }
                let sample = ProximitySample {
                    device_id,
                    transducer_serial,
                    transducer_name,
                    entering,
                };
                self.display
                    .show_proximity(sample)
                    .await
                    .map_err(MonitorError::Display)
            }
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    #[allow(clippy::too_many_arguments)]
    async fn show_mouse(
        &self,
        phase: MousePhase,
        x: f64,
        y: f64,
        delta_x: f64,
        delta_y: f64,
        modifiers: ModifierFlags,
        from_tablet: bool,
    ) -> Result<(), MonitorError> {
        let sample = MouseSample {
            phase,
            location: Point::new(x, y),
            delta_x,
            delta_y,
            modifiers,
            from_tablet,
        };
        self.display
            .show_mouse(sample)
            .await
            .map_err(MonitorError::Display)
    }

    /// Makes the given tablet the active one, re-querying its sensing area
    /// and rebuilding the context set.  A rejected rebuild or an unknown
    /// device keeps the previous area and contexts live.
    fn adopt_tablet(&mut self, device_id: u32) {
        self.last_used_tablet = Some(device_id);

        let Some(area) = self.surfaces.surface_area(device_id) else {
            debug!(device_id, "no surface info for tablet; keeping current area");
            return;
        };

        match build_contexts(&self.toggles, area, self.window_bounds, self.desktop_bounds) {
            Ok(contexts) => {
                self.tablet_area = area;
                self.contexts = contexts;
                debug!(device_id, "contexts rebuilt for newly active tablet");
            }
            Err(e) => {
                warn!(device_id, "tablet reports degenerate area: {e}; keeping previous mapping");
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
