//! Time-series utilities shared by the orchestrator and I/O collaborators.
//!
//! Modules include:
//! - `parse`: shared record parsing, so every component agrees on validity
//! - `align`: grid boundary arithmetic
//! - `window`: global window across a group of instruments
//! - `resample`: per-instrument bucketing onto the grid
//! - `fill`: forward and backward fill passes
/// Grid boundary arithmetic.
pub mod align;
/// Forward and backward fill over bucket arrays.
pub mod fill;
/// Raw record parsing.
pub mod parse;
/// Per-instrument resampling onto a window's grid.
pub mod resample;
/// Global window computation across instruments.
pub mod window;
