//! Optiroute library
//!
//! This module exposes the loader, cache, route and report modules for use
//! in integration tests.

pub mod cache;
pub mod cli;
pub mod input;
pub mod report;
pub mod route;
