//! Persistence for the monitor application.

pub mod config;
