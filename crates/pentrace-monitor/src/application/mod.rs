//! Application layer use cases for the monitor application.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure geometry rules) and the infrastructure (OS/driver/storage).
//!
//! Use cases in this layer:
//!
//! - **Orchestrate** domain objects to fulfil a user goal (e.g., "map this
//!   pen point through the active context and show it").
//! - **Depend on abstractions** (traits) rather than concrete
//!   implementations, so the infrastructure can be swapped without changing
//!   this code.
//! - **Contain no OS calls, no driver I/O, no file system access**.
//!
//! # Sub-modules
//!
//! - **`monitor_events`** – Receives raw tablet/mouse events, applies the
//!   active mapping context, and forwards display samples.  This is the most
//!   critical use case — it runs on every pen movement.
//!
//! - **`configure_mapping`** – Builds a validated context set from the
//!   toggle snapshot (full area / left half / split, desktop / window).

pub mod configure_mapping;
pub mod monitor_events;
