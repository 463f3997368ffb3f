//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, show, init)
//! - [`graph`] - Inspect the facility graph
//! - [`risk`] - Classify facilities against current hazards
//! - [`route`] - Full assessment: hazards, risk set, safe route

pub mod common;
pub mod config;
pub mod graph;
pub mod risk;
pub mod route;
