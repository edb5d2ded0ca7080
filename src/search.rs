use std::collections::HashSet;

use log::{debug, trace};

use crate::frontier::{BestFirst, Entry, Fifo, Frontier, Lifo};
use crate::problem::Problem;

/// The result of a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<A> {
    /// The actions leading from the start state to a goal state. Empty when
    /// the start state is itself a goal.
    pub actions: Vec<A>,
    /// The accumulated step cost of `actions`.
    pub cost: f64,
    /// How many states were expanded before the goal was reached. A
    /// diagnostic for comparing strategies, not part of the solution proper.
    pub expanded: usize,
}

/// The generic graph-search skeleton shared by every engine in this module.
///
/// Pops entries off the frontier; the first entry whose state passes the goal
/// test is the answer. A visited set guarantees each state is expanded at
/// most once per call (graph-search semantics). Once a state is marked
/// visited it is never re-expanded, even if a cheaper path to it shows up
/// later; see [`astar_search`] for where that matters.
///
/// Returns `None` when the frontier is exhausted without reaching a goal.
/// That is the documented no-solution signal, distinct from the panics that
/// problem implementations reserve for contract violations.
pub fn best_first_search<P, F>(problem: &P, mut frontier: F) -> Option<Solution<P::Action>>
where
    P: Problem,
    F: Frontier<P::State, P::Action>,
{
    let mut visited: HashSet<P::State> = HashSet::new();
    let mut expanded = 0usize;

    frontier.push(Entry {
        state: problem.start(),
        path: Vec::new(),
        cost: 0.0,
    });

    while let Some(entry) = frontier.pop() {
        if problem.is_goal(&entry.state) {
            debug!(
                "goal reached: cost={}, path_len={}, expanded={}",
                entry.cost,
                entry.path.len(),
                expanded
            );
            return Some(Solution {
                actions: entry.path,
                cost: entry.cost,
                expanded,
            });
        }

        if visited.contains(&entry.state) {
            continue;
        }
        visited.insert(entry.state.clone());
        expanded += 1;
        trace!("expanding state #{expanded} at cost {}", entry.cost);

        let children: Vec<Entry<P::State, P::Action>> = problem
            .successors(&entry.state)
            .into_iter()
            .filter(|(state, _, _)| !visited.contains(state))
            .map(|(state, action, step_cost)| {
                debug_assert!(
                    step_cost >= 0.0,
                    "negative step cost {step_cost} breaks optimality guarantees"
                );
                let mut path = entry.path.clone();
                path.push(action);
                Entry {
                    state,
                    path,
                    cost: entry.cost + step_cost,
                }
            })
            .collect();
        frontier.extend(children);
    }

    debug!("frontier exhausted after {expanded} expansions; no solution");
    None
}

/// Searches the deepest nodes first (LIFO frontier).
///
/// Complete on finite state spaces thanks to the visited set, but neither
/// cost-optimal nor shortest-path optimal.
pub fn depth_first_search<P: Problem>(problem: &P) -> Option<Solution<P::Action>> {
    best_first_search(problem, Lifo::new())
}

/// Searches the shallowest nodes first (FIFO frontier).
///
/// Returns a path with the minimum number of actions; cost-optimal when all
/// step costs are equal.
pub fn breadth_first_search<P: Problem>(problem: &P) -> Option<Solution<P::Action>> {
    best_first_search(problem, Fifo::new())
}

/// Searches the node of least accumulated cost first.
///
/// Cost-optimal for any non-negative step-cost structure.
pub fn uniform_cost_search<P: Problem>(problem: &P) -> Option<Solution<P::Action>> {
    best_first_search(problem, BestFirst::new(|entry: &Entry<P::State, P::Action>| entry.cost))
}

/// Searches the node with the lowest combined cost and heuristic first
/// (priority g + h).
///
/// The zero heuristic degenerates to [`uniform_cost_search`]. Cost-optimality
/// requires an admissible heuristic (never overestimates the true remaining
/// cost). The visited set never re-expands a state, so an *inconsistent*
/// heuristic can in principle lock in a suboptimal path to an interior state;
/// consistency (the triangle inequality across every edge) rules that out.
/// This engine does not re-open visited states - a known limitation, not
/// detected at runtime.
pub fn astar_search<P, H>(problem: &P, heuristic: H) -> Option<Solution<P::Action>>
where
    P: Problem,
    H: Fn(&P::State) -> f64,
{
    best_first_search(
        problem,
        BestFirst::new(move |entry: &Entry<P::State, P::Action>| {
            let h = heuristic(&entry.state);
            debug_assert!(h >= 0.0, "heuristic returned a negative estimate {h}");
            entry.cost + h
        }),
    )
}

/// Searches the node with the lowest heuristic estimate first (priority h
/// alone), ignoring accumulated cost.
///
/// Fast and frequently good, but offers no optimality guarantee.
pub fn greedy_best_first_search<P, H>(problem: &P, heuristic: H) -> Option<Solution<P::Action>>
where
    P: Problem,
    H: Fn(&P::State) -> f64,
{
    best_first_search(
        problem,
        BestFirst::new(move |entry: &Entry<P::State, P::Action>| {
            let h = heuristic(&entry.state);
            debug_assert!(h >= 0.0, "heuristic returned a negative estimate {h}");
            h
        }),
    )
}
