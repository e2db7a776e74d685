//! rmdialog Core
//!
//! This crate contains the pieces every other rmdialog crate leans on:
//! logging setup, profiling hooks and the small geometry types used for
//! layout and window sizing.

pub mod geometry;
pub mod logging;
pub mod profiling;
