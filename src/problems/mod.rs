//! Pre-made implementations of the `Problem` trait for common domains.

pub mod grid_maze;
pub mod river_crossing;
pub mod route_graph;
