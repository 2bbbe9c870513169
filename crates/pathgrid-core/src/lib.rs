//! **pathgrid-core**: the grid model shared by the pathgrid searches.
//!
//! This crate provides positions, the [`Grid`] of open and blocked cells with
//! its start and goal, layout presets, text snapshots and the validation
//! error type. It carries no search state: searches keep their own
//! bookkeeping and only ever borrow a `Grid` immutably.

pub mod ascii;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use config::GridConfig;
pub use error::GridError;
pub use geom::Pos;
pub use grid::{CellSnapshot, Grid};
