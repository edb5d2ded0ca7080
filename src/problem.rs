use std::hash::Hash;

/// The central trait of the library, defining the interface for a search problem.
///
/// To run the search engines against a custom domain, this trait must be
/// implemented. It gives the engines everything they need: where the search
/// starts, when it is done, and which moves are available at a given state.
///
/// Implementations are expected to be immutable once constructed. Queries on
/// states outside the declared state space are contract violations;
/// implementers should fail fast with a descriptive panic rather than guess
/// a fallback.
pub trait Problem {
    /// The type representing a point in the search space. Two states are the
    /// same point iff they compare equal.
    type State: Clone + Eq + Hash;

    /// The type representing a move between states. This could be a simple
    /// direction enum or a more complex struct for intricate actions.
    type Action: Clone + PartialEq;

    /// Returns the start state for the search problem.
    fn start(&self) -> Self::State;

    /// Returns true if and only if the state is a valid goal state.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Returns the ordered list of `(successor, action, step_cost)` triples
    /// available from the given state.
    ///
    /// Step costs must be non-negative; negative costs break the optimality
    /// guarantees of uniform-cost search and A*.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Action, f64)>;

    /// Returns the total cost of a particular sequence of actions, replayed
    /// from the start state.
    ///
    /// The sequence must be composed of legal moves; an action that does not
    /// apply to the state reached so far is a contract violation and panics.
    fn action_sequence_cost(&self, actions: &[Self::Action]) -> f64 {
        let mut state = self.start();
        let mut total = 0.0;
        for (i, action) in actions.iter().enumerate() {
            let (next, _, step_cost) = self
                .successors(&state)
                .into_iter()
                .find(|(_, a, _)| a == action)
                .unwrap_or_else(|| {
                    panic!("action at index {i} does not apply to the state reached so far")
                });
            total += step_cost;
            state = next;
        }
        total
    }
}
