//! Tablet surface catalogue.
//!
//! A real deployment would ask the driver for each tablet's sensing
//! rectangle; this catalogue serves per-device entries from configuration
//! with a fallback area for devices it has never seen.

use std::collections::HashMap;

use pentrace_core::TabletArea;

use crate::application::monitor_events::SurfaceQuery;

/// Configuration-backed [`SurfaceQuery`] implementation.
pub struct StaticSurfaces {
    areas: HashMap<u32, TabletArea>,
    fallback: TabletArea,
}

impl StaticSurfaces {
    /// Creates a catalogue that answers `fallback` for every device.
    pub fn with_fallback(fallback: TabletArea) -> Self {
        Self {
            areas: HashMap::new(),
            fallback,
        }
    }

    /// Registers the sensing area of a specific device.
    pub fn insert(&mut self, device_id: u32, area: TabletArea) {
        self.areas.insert(device_id, area);
    }
}

impl SurfaceQuery for StaticSurfaces {
    fn surface_area(&self, device_id: u32) -> Option<TabletArea> {
        Some(*self.areas.get(&device_id).unwrap_or(&self.fallback))
    }
}
