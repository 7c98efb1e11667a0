//! PeakSquare Estates listing browser library
//!
//! Exposes the data, cache, and render layers for use in integration tests.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod render;
pub mod search;
pub mod ui;
