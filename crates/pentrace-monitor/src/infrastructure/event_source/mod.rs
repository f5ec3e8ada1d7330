//! Event source infrastructure for the monitor application.
//!
//! A platform adapter subscribes to the OS tablet/mouse event stream and
//! places raw events into a channel consumed by the Tokio async runtime.
//! The monitor never manages the subscription lifecycle itself; it only
//! drains the receiver.
//!
//! # Testability
//!
//! The [`EventSource`] trait allows unit tests to inject synthetic events
//! without a tablet attached: see [`mock::MockEventSource`].  The
//! [`replay::ReplayEventSource`] feeds a scripted stroke and stands in for
//! a driver adapter in the demo binary.

use std::sync::mpsc;

use pentrace_core::ModifierFlags;

pub mod mock;
pub mod replay;

/// A raw input event as delivered by the platform event source.
///
/// Mouse variants mirror the four phases of a pointer interaction;
/// `from_tablet` marks mouse events that were synthesised from a tablet
/// transducer.  Pen variants carry the tablet-specific axes and identity.
#[derive(Debug, Clone)]
pub enum RawPenEvent {
    /// The pointer moved with no button held.
    MouseMove {
        x: f64,
        y: f64,
        delta_x: f64,
        delta_y: f64,
        modifiers: ModifierFlags,
        from_tablet: bool,
    },
    /// A button was pressed.
    MouseDown {
        x: f64,
        y: f64,
        modifiers: ModifierFlags,
        from_tablet: bool,
    },
    /// The pointer moved with a button held.
    MouseDrag {
        x: f64,
        y: f64,
        delta_x: f64,
        delta_y: f64,
        modifiers: ModifierFlags,
        from_tablet: bool,
    },
    /// A button was released.
    MouseUp {
        x: f64,
        y: f64,
        modifiers: ModifierFlags,
        from_tablet: bool,
    },
    /// An absolute tablet point with the full axis set.
    PenPoint {
        device_id: u32,
        /// Absolute position in device-native units.
        absolute_x: i32,
        absolute_y: i32,
        absolute_z: i32,
        /// Tip pressure, 0.0 to 1.0.
        pressure: f32,
        /// Barrel/tangential pressure, -1.0 to 1.0.
        tangential_pressure: f32,
        /// Tilt away from vertical, -1.0 to 1.0 per axis.
        tilt_x: f32,
        tilt_y: f32,
        /// Barrel rotation in degrees.
        rotation: f32,
    },
    /// A transducer entered or left tablet proximity.
    PenProximity {
        device_id: u32,
        transducer_serial: u64,
        transducer_name: String,
        entering: bool,
    },
}

/// Error type for event source operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to start event source: {0}")]
    StartFailed(String),
    #[error("event source has already been stopped")]
    AlreadyStopped,
}

/// Trait abstracting raw event production.
///
/// A production implementation wraps the platform driver; tests use
/// [`mock::MockEventSource`]; the demo binary uses
/// [`replay::ReplayEventSource`].
pub trait EventSource: Send {
    /// Starts the event source and returns a receiver for captured events.
    fn start(&self) -> Result<mpsc::Receiver<RawPenEvent>, SourceError>;
    /// Stops the event source and releases its resources.
    fn stop(&self);
}
