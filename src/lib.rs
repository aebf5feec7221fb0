//! Core library for the `loadsweep` CLI.
//!
//! The binary sweeps one parameter at a time (concurrency, posts per user,
//! followees per user) against a fixed HTTP endpoint: it seeds the backing
//! store for each value, fires repeated bursts of concurrent requests, and
//! reduces the trial means into per-axis CSV, chart and JSON artifacts.
pub mod app;
pub mod args;
pub mod collaborators;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod report;
pub mod sweep;
pub mod trial;

mod system;
