//! Typed event records produced by the monitor for the presentation surface.
//!
//! These are plain data: the monitor holds no display widgets and the
//! presenter holds no mapping state.  Everything derives `serde` so a future
//! UI bridge can marshal records without touching this crate.

use serde::{Deserialize, Serialize};

use crate::domain::mapping::Point;

/// Modifier-key bitmask carried on every mouse record.
///
/// Bit layout:
/// - Bit 0: Caps Lock
/// - Bit 1: Shift
/// - Bit 2: Control
/// - Bit 3: Option/Alt
/// - Bit 4: Command/Super
/// - Bit 5: Fn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModifierFlags(pub u8);

impl ModifierFlags {
    pub const CAPS_LOCK: u8 = 1 << 0;
    pub const SHIFT: u8 = 1 << 1;
    pub const CONTROL: u8 = 1 << 2;
    pub const OPTION: u8 = 1 << 3;
    pub const COMMAND: u8 = 1 << 4;
    pub const FUNCTION: u8 = 1 << 5;

    /// Returns `true` if the Shift modifier is active.
    pub fn shift(&self) -> bool {
        self.0 & Self::SHIFT != 0
    }

    /// Returns `true` if the Control modifier is active.
    pub fn control(&self) -> bool {
        self.0 & Self::CONTROL != 0
    }

    /// Returns `true` if the Option/Alt modifier is active.
    pub fn option(&self) -> bool {
        self.0 & Self::OPTION != 0
    }

    /// Returns `true` if the Command/Super modifier is active.
    pub fn command(&self) -> bool {
        self.0 & Self::COMMAND != 0
    }
}

/// Which phase of a mouse interaction produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MousePhase {
    Move,
    Down,
    Drag,
    Up,
}

/// A mouse event after passing through the monitor.
///
/// `from_tablet` is set when the pointing device behind the mouse event is a
/// tablet transducer rather than a plain mouse; such events are accompanied
/// by a [`PenSample`] carrying the tablet-specific axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseSample {
    pub phase: MousePhase,
    /// Cursor location in window coordinates.
    pub location: Point,
    /// Relative movement since the previous event.  Zero for Down/Up.
    pub delta_x: f64,
    pub delta_y: f64,
    pub modifiers: ModifierFlags,
    pub from_tablet: bool,
}

/// Which portion of a split tablet surface produced a pen sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceHalf {
    /// The surface is not split; the whole area is one context.
    Whole,
    Left,
    Right,
}

/// A tablet point event enriched with its mapped output position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenSample {
    /// Identifier of the tablet device that produced the event.
    pub device_id: u32,
    /// Absolute position in device-native units.
    pub absolute_x: i32,
    pub absolute_y: i32,
    pub absolute_z: i32,
    /// Tip pressure, 0.0 (no contact) to 1.0 (full scale).
    pub pressure: f32,
    /// Barrel/tangential pressure, -1.0 to 1.0.
    pub tangential_pressure: f32,
    /// Tilt away from vertical, -1.0 to 1.0 per axis.
    pub tilt_x: f32,
    pub tilt_y: f32,
    /// Barrel rotation in degrees.
    pub rotation: f32,
    /// The absolute position translated through the active mapping context.
    pub mapped: Point,
    /// Which half of a split surface the point fell in.
    pub half: SurfaceHalf,
}

/// A transducer entering or leaving tablet proximity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProximitySample {
    pub device_id: u32,
    /// Serial number of the pen/stylus instrument, distinct from the tablet.
    pub transducer_serial: u64,
    /// Human-readable transducer name (e.g. "Grip Pen").
    pub transducer_name: String,
    /// `true` when entering proximity, `false` when leaving.
    pub entering: bool,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
