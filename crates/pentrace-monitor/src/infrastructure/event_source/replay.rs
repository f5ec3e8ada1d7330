//! Replay event source: feeds a scripted event sequence from a background
//! thread.
//!
//! Stands in for a platform driver adapter wherever one is unavailable —
//! the demo binary uses it to exercise the full pipeline with a synthetic
//! pen stroke.  Events are delivered through the same channel shape a real
//! adapter would use.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc, Arc,
};
use std::time::Duration;

use pentrace_core::{ModifierFlags, TabletArea};

use super::{EventSource, RawPenEvent, SourceError};

/// Device id used by the scripted demo stroke.
pub const DEMO_DEVICE_ID: u32 = 1;

/// An [`EventSource`] that replays a fixed event sequence.
///
/// Each call to [`start`](EventSource::start) replays the sequence from the
/// beginning on a fresh background thread; [`stop`](EventSource::stop) halts
/// delivery.
pub struct ReplayEventSource {
    events: Vec<RawPenEvent>,
    interval: Duration,
    running: Arc<AtomicBool>,
}

impl ReplayEventSource {
    pub fn new(events: Vec<RawPenEvent>, interval: Duration) -> Self {
        Self {
            events,
            interval,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Builds a scripted diagonal stroke across `area`: the transducer
    /// enters proximity, draws with a pressure ramp while the synthesised
    /// mouse drags along, lifts, and leaves proximity.
    pub fn demo_stroke(area: TabletArea) -> Self {
        const STEPS: usize = 16;

        let mut events = Vec::with_capacity(STEPS + 4);
        events.push(RawPenEvent::PenProximity {
            device_id: DEMO_DEVICE_ID,
            transducer_serial: 0x00A1_57E5,
            transducer_name: "Demo Grip Pen".to_string(),
            entering: true,
        });
        events.push(RawPenEvent::MouseDown {
            x: 0.0,
            y: 0.0,
            modifiers: ModifierFlags::default(),
            from_tablet: true,
        });

        let step_x = area.width() / (STEPS - 1) as f64;
        let step_y = area.height() / (STEPS - 1) as f64;
        for i in 0..STEPS {
            let t = i as f64 / (STEPS - 1) as f64;
            let x = area.min_x + step_x * i as f64;
            let y = area.min_y + step_y * i as f64;
            // Pressure ramps up and back down over the stroke.
            let pressure = (1.0 - (2.0 * t - 1.0).abs()) as f32;

            events.push(RawPenEvent::PenPoint {
                device_id: DEMO_DEVICE_ID,
                absolute_x: x.round() as i32,
                absolute_y: y.round() as i32,
                absolute_z: 0,
                pressure,
                tangential_pressure: 0.0,
                tilt_x: 0.2,
                tilt_y: -0.1,
                rotation: 0.0,
            });
            events.push(RawPenEvent::MouseDrag {
                x,
                y,
                delta_x: step_x,
                delta_y: step_y,
                modifiers: ModifierFlags::default(),
                from_tablet: true,
            });
        }

        events.push(RawPenEvent::MouseUp {
            x: area.max_x,
            y: area.max_y,
            modifiers: ModifierFlags::default(),
            from_tablet: true,
        });
        events.push(RawPenEvent::PenProximity {
            device_id: DEMO_DEVICE_ID,
            transducer_serial: 0x00A1_57E5,
            transducer_name: "Demo Grip Pen".to_string(),
            entering: false,
        });

        Self::new(events, Duration::from_millis(40))
    }

    /// Overrides the delay between replayed events.
    pub fn paced(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

impl EventSource for ReplayEventSource {
    fn start(&self) -> Result<mpsc::Receiver<RawPenEvent>, SourceError> {
        let (tx, rx) = mpsc::channel();
        let events = self.events.clone();
        let interval = self.interval;
        let running = Arc::clone(&self.running);
        running.store(true, Ordering::Relaxed);

        std::thread::spawn(move || {
            for event in events {
                if !running.load(Ordering::Relaxed) {
                    break;
                }
                if tx.send(event).is_err() {
                    // Receiver gone; nothing left to deliver.
                    break;
                }
                std::thread::sleep(interval);
            }
        });

        Ok(rx)
    }

    fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }
}
