//! Console presentation surface.
//!
//! The monitor produces plain sample records; this module renders them as
//! structured log lines.  A graphical frontend would implement the same
//! [`EventDisplay`] trait against its widget set — one write-only field per
//! record attribute — without touching the application layer.

use async_trait::async_trait;
use pentrace_core::{MouseSample, PenSample, ProximitySample};
use tracing::{debug, info};

use crate::application::monitor_events::{CursorDriver, EventDisplay};

/// Renders every sample through `tracing` at `info` level.
pub struct ConsoleDisplay;

#[async_trait]
impl EventDisplay for ConsoleDisplay {
    async fn show_mouse(&self, sample: MouseSample) -> Result<(), String> {
        info!(
            target: "pentrace::display",
            phase = ?sample.phase,
            x = sample.location.x,
            y = sample.location.y,
            delta_x = sample.delta_x,
            delta_y = sample.delta_y,
            modifiers = sample.modifiers.0,
            from_tablet = sample.from_tablet,
            "mouse"
        );
        Ok(())
    }

    async fn show_pen(&self, sample: PenSample) -> Result<(), String> {
        let (px, py) = sample.mapped.to_pixel();
        info!(
            target: "pentrace::display",
            device_id = sample.device_id,
            absolute_x = sample.absolute_x,
            absolute_y = sample.absolute_y,
            absolute_z = sample.absolute_z,
            pressure = sample.pressure,
            tangential_pressure = sample.tangential_pressure,
            tilt_x = sample.tilt_x,
            tilt_y = sample.tilt_y,
            rotation = sample.rotation,
            mapped_x = px,
            mapped_y = py,
            half = ?sample.half,
            "pen"
        );
        Ok(())
    }

    async fn show_proximity(&self, sample: ProximitySample) -> Result<(), String> {
        info!(
            target: "pentrace::display",
            device_id = sample.device_id,
            transducer_serial = sample.transducer_serial,
            transducer_name = %sample.transducer_name,
            entering = sample.entering,
            "proximity"
        );
        Ok(())
    }
}

/// Cursor driver that only logs the requested positions.
///
/// Used where no OS pointer is available (headless demo, CI); a platform
/// adapter would call the OS warp-cursor API instead.
pub struct TracingCursorDriver;

impl CursorDriver for TracingCursorDriver {
    fn move_cursor(&self, x: i64, y: i64) {
        debug!(target: "pentrace::display", x, y, "cursor move");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pentrace_core::{ModifierFlags, MousePhase, Point};

    #[test]
    fn test_console_display_accepts_every_record_family() {
        let display = ConsoleDisplay;

        let mouse = MouseSample {
            phase: MousePhase::Move,
            location: Point::new(10.0, 20.0),
            delta_x: 1.0,
            delta_y: 1.0,
            modifiers: ModifierFlags::default(),
            from_tablet: true,
        };
        let proximity = ProximitySample {
            device_id: 1,
            transducer_serial: 7,
            transducer_name: "Pen".to_string(),
            entering: true,
        };

        tokio_test::block_on(async {
            assert!(display.show_mouse(mouse).await.is_ok());
            assert!(display.show_proximity(proximity).await.is_ok());
        });
    }
}
