//! Rollcall Library
//!
//! Core library for the Rollcall desktop application.

pub mod api;
pub mod app;
pub mod config;
pub mod types;
pub mod ui;
