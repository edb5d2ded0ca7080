//! A small and simple toolkit for graph search and game-tree evaluation.
//!
//! This library provides generic implementations of the classic search
//! algorithms: uninformed graph search (depth-first, breadth-first,
//! uniform-cost), informed search (A* and greedy best-first with pluggable
//! heuristics), and adversarial evaluation of explicit game trees (minimax,
//! alpha-beta pruning, expectimax, and multiplayer max^n). A pair of
//! balanced index structures (B-tree, B+-tree) rounds out the ordered-search
//! theme. Everything is synchronous, single-threaded, and driven through the
//! `Problem` trait or a caller-built tree.
//!
//! # Example
//!
//! ```rust
//! use ego_tree::tree;
//! use searchkit::adversarial::{alpha_beta, expectimax};
//! use searchkit::game_tree::GameNode;
//! use searchkit::problems::grid_maze::GridMaze;
//! use searchkit::search::astar_search;
//!
//! // Find the cheapest way through a maze with A*.
//! let maze = GridMaze::parse(&[
//!     "S..#.",
//!     ".#.#.",
//!     ".#...",
//!     ".##.#",
//!     "....G",
//! ]);
//! let solution = astar_search(&maze, |state| maze.manhattan(state)).unwrap();
//! assert_eq!(solution.cost, 8.0);
//!
//! // Evaluate a small stochastic game tree.
//! let game = tree!(GameNode::max_node() => {
//!     GameNode::chance() => {
//!         GameNode::terminal(2.0).with_prob(0.25),
//!         GameNode::terminal(8.0).with_prob(0.75),
//!     },
//!     GameNode::terminal(6.0),
//! });
//! assert_eq!(expectimax(game.root()).unwrap(), 6.5);
//!
//! // Deterministic trees evaluate with pruning.
//! let duel = tree!(GameNode::max_node() => {
//!     GameNode::min_node() => { GameNode::terminal(3.0), GameNode::terminal(9.0) },
//!     GameNode::min_node() => { GameNode::terminal(2.0), GameNode::terminal(7.0) },
//! });
//! assert_eq!(alpha_beta(duel.root()).unwrap(), 3.0);
//! ```

/// Recursive evaluators for explicit game trees: minimax, alpha-beta,
/// expectimax, and max^n.
pub mod adversarial;
/// Error types shared across the crate.
pub mod error;
/// Frontier disciplines (stack, queue, priority queue) that give the generic
/// engine its expansion order.
pub mod frontier;
/// Game-tree node payloads, structural validation, and a seeded random-tree
/// generator.
pub mod game_tree;
/// Ordered index structures: B-tree and B+-tree.
pub mod index;
/// Contains the `Problem` trait, which defines the interface for a search
/// problem.
pub mod problem;
/// Contains pre-made implementations of the `Problem` trait for common
/// domains.
pub mod problems;
/// Contains traits and implementations for random number generation.
pub mod random;
/// The search engines: one generic graph-search skeleton and its
/// depth-first, breadth-first, uniform-cost, A*, and greedy entry points.
pub mod search;
