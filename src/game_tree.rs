use ego_tree::{NodeMut, NodeRef, Tree};

use crate::error::{Error, Result};
use crate::random::RandomSource;

/// Tolerance when checking that a chance node's probabilities sum to 1.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// The role a game-tree node plays during evaluation.
///
/// A closed set: the evaluators in [`crate::adversarial`] match on it
/// exhaustively, so an "unrecognized node tag" cannot exist at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    /// A leaf carrying its utility for the maximizing player.
    Terminal(f64),
    /// The maximizing player moves here.
    Max,
    /// The minimizing player moves here.
    Min,
    /// Nature moves here; every child edge carries a probability.
    Chance,
}

/// The payload of a node in a two-player (optionally stochastic) game tree.
///
/// Trees are `ego_tree::Tree<GameNode>` values, constructed once by the
/// caller and read-only during evaluation. `prob` is the probability of the
/// edge leading here from a [`NodeKind::Chance`] parent; it must be `None`
/// everywhere else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameNode {
    pub kind: NodeKind,
    pub prob: Option<f64>,
}

impl GameNode {
    pub const fn terminal(utility: f64) -> Self {
        Self {
            kind: NodeKind::Terminal(utility),
            prob: None,
        }
    }

    pub const fn max_node() -> Self {
        Self {
            kind: NodeKind::Max,
            prob: None,
        }
    }

    pub const fn min_node() -> Self {
        Self {
            kind: NodeKind::Min,
            prob: None,
        }
    }

    pub const fn chance() -> Self {
        Self {
            kind: NodeKind::Chance,
            prob: None,
        }
    }

    /// Attaches the probability of the edge from a chance parent. Reads well
    /// inside `ego_tree::tree!` literals.
    pub const fn with_prob(mut self, prob: f64) -> Self {
        self.prob = Some(prob);
        self
    }
}

/// The payload of a node in a multiplayer (max^n) game tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MaxnNode {
    /// An internal node where the given player (an index into the payoff
    /// vector) picks the move.
    ToMove(usize),
    /// A leaf carrying one payoff per player.
    Payoff(Vec<f64>),
}

/// Structurally validates a two-player game tree before evaluation.
///
/// Checks, failing fast on the first violation:
/// - every internal node has at least one child;
/// - every child of a chance node carries a probability in [0, 1];
/// - the probabilities under each chance node sum to 1 (within
///   [`PROBABILITY_TOLERANCE`]); they are never silently normalized;
/// - no probability is attached under a non-chance parent.
///
/// The evaluators re-check the distribution rules they depend on, so calling
/// this first is recommended but not required.
pub fn validate(tree: &Tree<GameNode>) -> Result<()> {
    validate_node(tree.root())
}

fn validate_node(node: NodeRef<'_, GameNode>) -> Result<()> {
    match node.value().kind {
        NodeKind::Terminal(_) => Ok(()),
        NodeKind::Max | NodeKind::Min => {
            if !node.has_children() {
                return Err(Error::EmptyInternalNode);
            }
            for child in node.children() {
                if child.value().prob.is_some() {
                    return Err(Error::UnexpectedProbability);
                }
                validate_node(child)?;
            }
            Ok(())
        }
        NodeKind::Chance => {
            if !node.has_children() {
                return Err(Error::EmptyInternalNode);
            }
            let mut sum = 0.0;
            for child in node.children() {
                let prob = child.value().prob.ok_or(Error::MissingChanceProbability)?;
                if !prob.is_finite() || !(0.0..=1.0).contains(&prob) {
                    return Err(Error::InvalidChanceProbability { value: prob });
                }
                sum += prob;
                validate_node(child)?;
            }
            if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
                return Err(Error::UnnormalizedDistribution { sum });
            }
            Ok(())
        }
    }
}

/// Builds a pseudo-random minimax tree: a Max root, levels alternating
/// Max/Min below it, `branching` children per internal node, and terminal
/// utilities drawn from [-50, 50].
///
/// `depth` counts internal levels and must be at least 1. Driven by a
/// [`RandomSource`] so a seeded generator yields the same corpus every run.
pub fn random_tree<R: RandomSource>(random: &mut R, depth: u32, branching: u32) -> Tree<GameNode> {
    assert!(depth >= 1, "a game tree needs at least one internal level");
    assert!(branching >= 1, "internal nodes need at least one child");

    let mut tree = Tree::new(GameNode::max_node());
    let mut root = tree.root_mut();
    grow(&mut root, random, depth - 1, branching, true);
    tree
}

fn grow<R: RandomSource>(
    node: &mut NodeMut<'_, GameNode>,
    random: &mut R,
    levels_left: u32,
    branching: u32,
    minimizing: bool,
) {
    for _ in 0..branching {
        if levels_left == 0 {
            let utility = random.next_in(101) as f64 - 50.0;
            node.append(GameNode::terminal(utility));
        } else {
            let payload = if minimizing {
                GameNode::min_node()
            } else {
                GameNode::max_node()
            };
            let mut child = node.append(payload);
            grow(&mut child, random, levels_left - 1, branching, !minimizing);
        }
    }
}

#[cfg(test)]
mod tests {
    use ego_tree::tree;

    use super::*;
    use crate::random::Lcg;

    #[test]
    fn validates_a_well_formed_stochastic_tree() {
        let tree = tree!(GameNode::max_node() => {
            GameNode::chance() => {
                GameNode::terminal(2.0).with_prob(0.25),
                GameNode::terminal(8.0).with_prob(0.75),
            },
            GameNode::terminal(5.0),
        });
        assert!(validate(&tree).is_ok());
    }

    #[test]
    fn rejects_an_unnormalized_distribution() {
        let tree = tree!(GameNode::chance() => {
            GameNode::terminal(1.0).with_prob(0.5),
            GameNode::terminal(2.0).with_prob(0.3),
        });
        assert_eq!(
            validate(&tree),
            Err(Error::UnnormalizedDistribution { sum: 0.8 })
        );
    }

    #[test]
    fn rejects_a_chance_child_without_probability() {
        let tree = tree!(GameNode::chance() => {
            GameNode::terminal(1.0).with_prob(0.5),
            GameNode::terminal(2.0),
        });
        assert_eq!(validate(&tree), Err(Error::MissingChanceProbability));
    }

    #[test]
    fn rejects_a_probability_under_a_max_node() {
        let tree = tree!(GameNode::max_node() => {
            GameNode::terminal(1.0).with_prob(1.0),
        });
        assert_eq!(validate(&tree), Err(Error::UnexpectedProbability));
    }

    #[test]
    fn rejects_a_childless_internal_node() {
        let tree = tree!(GameNode::max_node() => {
            GameNode::min_node(),
        });
        assert_eq!(validate(&tree), Err(Error::EmptyInternalNode));
    }

    #[test]
    fn random_trees_are_reproducible_and_well_formed() {
        let first = random_tree(&mut Lcg::new(11), 3, 2);
        let second = random_tree(&mut Lcg::new(11), 3, 2);
        assert!(validate(&first).is_ok());
        let pairs = first.values().zip(second.values());
        for (a, b) in pairs {
            assert_eq!(a, b);
        }
        // 1 root + 2 + 4 internal nodes + 8 terminals.
        assert_eq!(first.values().count(), 15);
    }
}
