//! Domain entities for PenTrace.
//!
//! This module contains pure geometry with no infrastructure dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain** (or "entities" layer).  Domain code:
//!
//! - Contains the core rules of the application.
//! - Has **no** imports from OS APIs, tablet drivers, or UI frameworks.
//! - Can be compiled and tested on any platform without any external setup.
//! - Defines the data types and operations that make the system uniquely what
//!   it is: in this case, the concept of a linear mapping from a tablet's
//!   physical sensing rectangle onto a screen or window rectangle.
//!
//! Code in outer layers (infrastructure, application, UI) depends on the
//! domain, but the domain never depends on them.  This makes the domain easy
//! to unit-test in isolation.

/// Tablet-to-screen coordinate mapping — the core domain concept.
///
/// See [`mapping::MappingContext`] for the main type.
pub mod mapping;
