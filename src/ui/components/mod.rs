//! Shared UI components
//!
//! Reusable primitives used across the layout.

pub mod loading;
pub mod notice;
