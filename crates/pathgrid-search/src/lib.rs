//! Grid searches that report both what they explored and what they found.
//!
//! This crate runs one of four strategies over a [`pathgrid_core::Grid`]:
//!
//! - **BFS**: FIFO queue, shortest by hop count ([`Strategy::Bfs`])
//! - **DFS**: LIFO stack, any connecting path ([`Strategy::Dfs`])
//! - **Dijkstra**: open list ordered by distance ([`Strategy::Dijkstra`])
//! - **A\***: open list ordered by distance plus [`manhattan`] estimate
//!   ([`Strategy::AStar`])
//!
//! Every run goes through [`Searcher`], which validates the grid, owns all
//! per-cell bookkeeping, and returns a [`SearchOutcome`] holding the cells in
//! the order they were settled and the path from start to goal.
//!
//! ```
//! use pathgrid_core::Grid;
//! use pathgrid_search::{Searcher, Strategy};
//!
//! let grid = Grid::parse("S.#\n..#\n..G").unwrap();
//! let out = Searcher::new().run(&grid, Strategy::AStar).unwrap();
//! assert!(out.is_reached());
//! assert_eq!(out.path.len(), 5);
//! ```
//!
//! # Determinism
//!
//! Neighbours are always expanded up, down, left, right, and the open list
//! breaks ties by insertion order, so identical grids give identical traces.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod frontier;
mod path;
mod searcher;
mod strategy;

pub use distance::manhattan;
pub use searcher::{SearchOutcome, Searcher, UNREACHABLE, search};
pub use strategy::{ParseStrategyError, Strategy};
