//! Recursive evaluators over explicit game trees.
//!
//! All four are pure folds over read-only [`ego_tree`] nodes: no mutation,
//! no shared state, recursion depth bounded by tree depth. Very deep trees
//! can therefore exhaust the call stack; that resource bound is the
//! caller's to manage.

use ego_tree::NodeRef;
use log::trace;

use crate::error::{Error, Result};
use crate::game_tree::{GameNode, MaxnNode, NodeKind, PROBABILITY_TOLERANCE};

/// Evaluates a deterministic two-player tree: terminals return their
/// utility, Max nodes the maximum over children, Min nodes the minimum.
///
/// A chance node is a contract violation here; use [`expectimax`] for
/// stochastic trees.
pub fn minimax(node: NodeRef<'_, GameNode>) -> Result<f64> {
    match node.value().kind {
        NodeKind::Terminal(utility) => Ok(utility),
        NodeKind::Max => fold_children(node, f64::max),
        NodeKind::Min => fold_children(node, f64::min),
        NodeKind::Chance => Err(Error::ChanceInDeterministicTree),
    }
}

fn fold_children(
    node: NodeRef<'_, GameNode>,
    pick: impl Fn(f64, f64) -> f64 + Copy,
) -> Result<f64> {
    let mut best: Option<f64> = None;
    for child in node.children() {
        let value = minimax(child)?;
        best = Some(match best {
            None => value,
            Some(current) => pick(current, value),
        });
    }
    best.ok_or(Error::EmptyInternalNode)
}

/// [`minimax`] with alpha-beta pruning.
///
/// Carries the (alpha, beta) window down the recursion; once beta <= alpha
/// the remaining children of the current node are never visited. The root
/// value is always identical to the unpruned minimax value.
pub fn alpha_beta(node: NodeRef<'_, GameNode>) -> Result<f64> {
    alpha_beta_bounded(node, f64::NEG_INFINITY, f64::INFINITY)
}

fn alpha_beta_bounded(node: NodeRef<'_, GameNode>, mut alpha: f64, mut beta: f64) -> Result<f64> {
    match node.value().kind {
        NodeKind::Terminal(utility) => Ok(utility),
        NodeKind::Max => {
            if !node.has_children() {
                return Err(Error::EmptyInternalNode);
            }
            let mut value = f64::NEG_INFINITY;
            for child in node.children() {
                value = value.max(alpha_beta_bounded(child, alpha, beta)?);
                alpha = alpha.max(value);
                if beta <= alpha {
                    trace!("beta cutoff at alpha={alpha}, beta={beta}");
                    break;
                }
            }
            Ok(value)
        }
        NodeKind::Min => {
            if !node.has_children() {
                return Err(Error::EmptyInternalNode);
            }
            let mut value = f64::INFINITY;
            for child in node.children() {
                value = value.min(alpha_beta_bounded(child, alpha, beta)?);
                beta = beta.min(value);
                if beta <= alpha {
                    trace!("alpha cutoff at alpha={alpha}, beta={beta}");
                    break;
                }
            }
            Ok(value)
        }
        NodeKind::Chance => Err(Error::ChanceInDeterministicTree),
    }
}

/// Evaluates a stochastic tree: like [`minimax`], plus chance nodes whose
/// value is the probability-weighted average of their children.
///
/// The distribution under each chance node is validated on the way down -
/// a sum away from 1 fails fast and is never silently normalized.
pub fn expectimax(node: NodeRef<'_, GameNode>) -> Result<f64> {
    match node.value().kind {
        NodeKind::Terminal(utility) => Ok(utility),
        NodeKind::Max => {
            let mut best: Option<f64> = None;
            for child in node.children() {
                let value = expectimax(child)?;
                best = Some(best.map_or(value, |b: f64| b.max(value)));
            }
            best.ok_or(Error::EmptyInternalNode)
        }
        NodeKind::Min => {
            let mut best: Option<f64> = None;
            for child in node.children() {
                let value = expectimax(child)?;
                best = Some(best.map_or(value, |b: f64| b.min(value)));
            }
            best.ok_or(Error::EmptyInternalNode)
        }
        NodeKind::Chance => {
            if !node.has_children() {
                return Err(Error::EmptyInternalNode);
            }
            let mut expected = 0.0;
            let mut prob_sum = 0.0;
            for child in node.children() {
                let prob = child.value().prob.ok_or(Error::MissingChanceProbability)?;
                if !prob.is_finite() || !(0.0..=1.0).contains(&prob) {
                    return Err(Error::InvalidChanceProbability { value: prob });
                }
                prob_sum += prob;
                expected += prob * expectimax(child)?;
            }
            if (prob_sum - 1.0).abs() > PROBABILITY_TOLERANCE {
                return Err(Error::UnnormalizedDistribution { sum: prob_sum });
            }
            Ok(expected)
        }
    }
}

/// Evaluates a multiplayer tree (max^n): terminals carry one payoff per
/// player; at a node owned by player `p` the child vector with the largest
/// `p`-th component wins.
///
/// Ties go to the first child achieving the maximum - that choice decides
/// which of the *other* players' payoffs propagate upward.
pub fn maxn(node: NodeRef<'_, MaxnNode>, num_players: usize) -> Result<Vec<f64>> {
    match node.value() {
        MaxnNode::Payoff(payoffs) => {
            if payoffs.len() != num_players {
                return Err(Error::PayoffArity {
                    expected: num_players,
                    got: payoffs.len(),
                });
            }
            Ok(payoffs.clone())
        }
        MaxnNode::ToMove(player) => {
            let player = *player;
            if player >= num_players {
                return Err(Error::PlayerOutOfRange {
                    player,
                    num_players,
                });
            }
            let mut best: Option<Vec<f64>> = None;
            for child in node.children() {
                let value = maxn(child, num_players)?;
                match &best {
                    Some(current) if value[player] <= current[player] => {}
                    _ => best = Some(value),
                }
            }
            best.ok_or(Error::EmptyInternalNode)
        }
    }
}

#[cfg(test)]
mod tests {
    use ego_tree::tree;

    use super::*;
    use crate::game_tree::random_tree;
    use crate::random::Lcg;

    fn terminal(utility: f64) -> GameNode {
        GameNode::terminal(utility)
    }

    #[test]
    fn minimax_picks_max_of_mins() {
        // Root max over two min nodes: min(3, 12, 8) = 3, min(2, 4, 6) = 2.
        let tree = tree!(GameNode::max_node() => {
            GameNode::min_node() => { terminal(3.0), terminal(12.0), terminal(8.0) },
            GameNode::min_node() => { terminal(2.0), terminal(4.0), terminal(6.0) },
        });
        assert_eq!(minimax(tree.root()).unwrap(), 3.0);
        assert_eq!(alpha_beta(tree.root()).unwrap(), 3.0);
    }

    #[test]
    fn minimax_rejects_chance_nodes() {
        let tree = tree!(GameNode::max_node() => {
            GameNode::chance() => {
                terminal(1.0).with_prob(0.5),
                terminal(2.0).with_prob(0.5),
            },
        });
        assert_eq!(minimax(tree.root()), Err(Error::ChanceInDeterministicTree));
        assert_eq!(
            alpha_beta(tree.root()),
            Err(Error::ChanceInDeterministicTree)
        );
    }

    #[test]
    fn alpha_beta_equals_minimax_on_a_random_corpus() {
        for seed in 0..20 {
            for depth in 2..=4 {
                for branching in 2..=3 {
                    let tree = random_tree(&mut Lcg::new(seed), depth, branching);
                    let plain = minimax(tree.root()).unwrap();
                    let pruned = alpha_beta(tree.root()).unwrap();
                    assert_eq!(
                        plain, pruned,
                        "pruning changed the root value (seed {seed}, depth {depth}, branching {branching})"
                    );
                }
            }
        }
    }

    #[test]
    fn expectimax_weights_children_by_probability() {
        let tree = tree!(GameNode::chance() => {
            terminal(2.0).with_prob(0.25),
            terminal(8.0).with_prob(0.75),
        });
        assert_eq!(expectimax(tree.root()).unwrap(), 6.5);
    }

    #[test]
    fn expectimax_handles_mixed_trees() {
        // max(chance(0.5*0 + 0.5*10) = 5, min(4, 9) = 4) = 5.
        let tree = tree!(GameNode::max_node() => {
            GameNode::chance() => {
                terminal(0.0).with_prob(0.5),
                terminal(10.0).with_prob(0.5),
            },
            GameNode::min_node() => { terminal(4.0), terminal(9.0) },
        });
        assert_eq!(expectimax(tree.root()).unwrap(), 5.0);
    }

    #[test]
    fn expectimax_matches_minimax_on_deterministic_trees() {
        let tree = random_tree(&mut Lcg::new(5), 3, 3);
        assert_eq!(
            expectimax(tree.root()).unwrap(),
            minimax(tree.root()).unwrap()
        );
    }

    #[test]
    fn expectimax_rejects_an_unnormalized_distribution() {
        let tree = tree!(GameNode::chance() => {
            terminal(1.0).with_prob(0.4),
            terminal(2.0).with_prob(0.4),
        });
        assert!(matches!(
            expectimax(tree.root()),
            Err(Error::UnnormalizedDistribution { .. })
        ));
    }

    #[test]
    fn maxn_each_player_maximizes_their_own_component() {
        // Player 0 moves at the root; player 1 moves below.
        // Left: player 1 picks (1, 9) over (5, 2). Right: player 1 picks
        // (4, 6) over (8, 1). Player 0 then prefers (4, 6) to (1, 9).
        let tree = tree!(MaxnNode::ToMove(0) => {
            MaxnNode::ToMove(1) => {
                MaxnNode::Payoff(vec![5.0, 2.0]),
                MaxnNode::Payoff(vec![1.0, 9.0]),
            },
            MaxnNode::ToMove(1) => {
                MaxnNode::Payoff(vec![8.0, 1.0]),
                MaxnNode::Payoff(vec![4.0, 6.0]),
            },
        });
        assert_eq!(maxn(tree.root(), 2).unwrap(), vec![4.0, 6.0]);
    }

    #[test]
    fn maxn_ties_keep_the_first_child() {
        // Both children give player 0 the same payoff; the first one decides
        // what player 1 receives.
        let tree = tree!(MaxnNode::ToMove(0) => {
            MaxnNode::Payoff(vec![7.0, 1.0]),
            MaxnNode::Payoff(vec![7.0, 100.0]),
        });
        assert_eq!(maxn(tree.root(), 2).unwrap(), vec![7.0, 1.0]);
    }

    #[test]
    fn maxn_on_a_zero_sum_tree_matches_minimax() {
        // Scalar tree: max over min(6, 3) and min(5, 8) = max(3, 5) = 5.
        let scalar = tree!(GameNode::max_node() => {
            GameNode::min_node() => { terminal(6.0), terminal(3.0) },
            GameNode::min_node() => { terminal(5.0), terminal(8.0) },
        });
        // The same tree with player 1's payoff as the negation: minimizing
        // your opponent is maximizing yourself.
        let vector = tree!(MaxnNode::ToMove(0) => {
            MaxnNode::ToMove(1) => {
                MaxnNode::Payoff(vec![6.0, -6.0]),
                MaxnNode::Payoff(vec![3.0, -3.0]),
            },
            MaxnNode::ToMove(1) => {
                MaxnNode::Payoff(vec![5.0, -5.0]),
                MaxnNode::Payoff(vec![8.0, -8.0]),
            },
        });
        let value = minimax(scalar.root()).unwrap();
        assert_eq!(maxn(vector.root(), 2).unwrap(), vec![value, -value]);
    }

    #[test]
    fn maxn_rejects_wrong_payoff_arity_and_bad_players() {
        let short = tree!(MaxnNode::ToMove(0) => {
            MaxnNode::Payoff(vec![1.0]),
        });
        assert_eq!(
            maxn(short.root(), 2),
            Err(Error::PayoffArity {
                expected: 2,
                got: 1
            })
        );

        let bad_player = tree!(MaxnNode::ToMove(3) => {
            MaxnNode::Payoff(vec![1.0, 2.0]),
        });
        assert_eq!(
            maxn(bad_player.root(), 2),
            Err(Error::PlayerOutOfRange {
                player: 3,
                num_players: 2
            })
        );
    }

    #[test]
    fn evaluators_reject_childless_internal_nodes() {
        let tree = ego_tree::Tree::new(GameNode::max_node());
        assert_eq!(minimax(tree.root()), Err(Error::EmptyInternalNode));
        assert_eq!(alpha_beta(tree.root()), Err(Error::EmptyInternalNode));
        assert_eq!(expectimax(tree.root()), Err(Error::EmptyInternalNode));

        let maxn_tree = ego_tree::Tree::new(MaxnNode::ToMove(0));
        assert_eq!(maxn(maxn_tree.root(), 1), Err(Error::EmptyInternalNode));
    }
}
