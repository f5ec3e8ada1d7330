//! Event records shared between the event source, the monitor, and the
//! presentation surface.

pub mod records;

pub use records::*;
