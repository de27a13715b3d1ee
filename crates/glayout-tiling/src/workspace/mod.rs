//! Per-workspace tiling state: window tracking, geometry, focus, and master
//! control.

mod dispatch;
mod focus;
mod geometry;
mod master;
mod tracker;
mod types;

pub use types::*;
