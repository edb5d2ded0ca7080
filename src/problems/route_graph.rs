use std::collections::HashMap;

use crate::problem::Problem;

/// A symmetric weighted graph over string-named locations.
///
/// Edges are stored per node in insertion order, so successor order - and
/// with it depth-first expansion - is deterministic.
#[derive(Default)]
pub struct RouteGraph {
    edges: HashMap<String, Vec<(String, f64)>>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an undirected edge. Either endpoint may be new to the graph.
    pub fn link(&mut self, a: &str, b: &str, distance: f64) {
        assert!(distance >= 0.0, "edge distance must be non-negative");
        self.edges
            .entry(a.to_owned())
            .or_default()
            .push((b.to_owned(), distance));
        self.edges
            .entry(b.to_owned())
            .or_default()
            .push((a.to_owned(), distance));
    }

    pub fn contains(&self, node: &str) -> bool {
        self.edges.contains_key(node)
    }

    fn neighbors(&self, node: &str) -> &[(String, f64)] {
        self.edges
            .get(node)
            .unwrap_or_else(|| panic!("node {node:?} is not part of the graph"))
    }
}

/// Shortest-route problem between two nodes of a [`RouteGraph`]. The action
/// labels are the names of the nodes travelled to.
pub struct RouteProblem<'a> {
    graph: &'a RouteGraph,
    start: String,
    goal: String,
}

impl<'a> RouteProblem<'a> {
    pub fn new(graph: &'a RouteGraph, start: &str, goal: &str) -> Self {
        assert!(graph.contains(start), "start {start:?} is not in the graph");
        assert!(graph.contains(goal), "goal {goal:?} is not in the graph");
        Self {
            graph,
            start: start.to_owned(),
            goal: goal.to_owned(),
        }
    }
}

impl Problem for RouteProblem<'_> {
    type State = String;
    type Action = String;

    fn start(&self) -> String {
        self.start.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &String) -> Vec<(String, String, f64)> {
        self.graph
            .neighbors(state)
            .iter()
            .map(|(next, distance)| (next.clone(), next.clone(), *distance))
            .collect()
    }
}

/// A heuristic backed by a straight-line-distance table. Nodes missing from
/// the table estimate infinity, which prunes them outright - matching how
/// such tables are usually published (distances to one fixed goal).
pub fn table_heuristic(table: HashMap<String, f64>) -> impl Fn(&String) -> f64 {
    move |state| table.get(state).copied().unwrap_or(f64::INFINITY)
}
