//! # pentrace-core
//!
//! Shared library for PenTrace containing the coordinate-mapping domain
//! entities and the typed event records exchanged between the event source,
//! the monitor use case, and the presentation surface.
//!
//! This crate has zero dependencies on OS APIs, UI frameworks, or tablet
//! drivers.
//!
//! # Architecture overview (for beginners)
//!
//! PenTrace is a pen-tablet event monitor: it receives tablet (pen/stylus)
//! input — absolute position, pressure, tilt, rotation, transducer identity —
//! alongside ordinary mouse events, and maps the tablet's physical sensing
//! rectangle onto an output rectangle on screen (the full desktop, the active
//! window, or — when the surface is split — two independent halves).
//!
//! This crate (`pentrace-core`) is the shared foundation.  It defines:
//!
//! - **`domain`** – Pure geometry with no OS dependencies.  The most
//!   important piece is the [`MappingContext`]: an immutable binding of one
//!   tablet area to one output region with a per-axis linear transform.
//!
//! - **`events`** – The typed records that flow through the system: what the
//!   platform event source delivers (mouse phases, pen points, proximity)
//!   and what the monitor produces for display (samples carrying mapped
//!   coordinates).

// Declare the two top-level modules.  Rust will look for each in a
// subdirectory with the same name (e.g., src/domain/mod.rs).
pub mod domain;
pub mod events;

// Re-export the most-used types at the crate root so callers can write
// `pentrace_core::MappingContext` instead of the full module path.
pub use domain::mapping::{
    select_output_region, split_tablet_area, ContextId, MappingContext, MappingError,
    OutputRegion, Point, TabletArea,
};
pub use events::records::{
    ModifierFlags, MousePhase, MouseSample, PenSample, ProximitySample, SurfaceHalf,
};
