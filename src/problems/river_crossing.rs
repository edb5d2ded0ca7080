use crate::problem::Problem;

/// One boat trip: how many missionaries and cannibals board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ferry {
    pub missionaries: u32,
    pub cannibals: u32,
}

/// The missionaries-and-cannibals river crossing.
///
/// A state is `(m, c, boat)`: missionaries and cannibals on the left bank,
/// and whether the boat is there (`true` = left). Everyone starts on the
/// left; the goal is everyone on the right with the boat. A bank where
/// cannibals outnumber missionaries (and at least one missionary is
/// present) is lost, as is a boat crewed that way.
pub struct RiverCrossing {
    missionaries: u32,
    cannibals: u32,
    boat_capacity: u32,
}

impl RiverCrossing {
    pub fn new(missionaries: u32, cannibals: u32, boat_capacity: u32) -> Self {
        assert!(boat_capacity >= 1, "the boat must carry at least one person");
        Self {
            missionaries,
            cannibals,
            boat_capacity,
        }
    }

    /// Everyone still on the wrong side needs a seat: at least
    /// (m + c) / capacity more trips. Admissible, so A* stays optimal.
    pub fn heuristic(&self, state: &(u32, u32, bool)) -> f64 {
        let (m, c, _) = *state;
        (m + c) as f64 / self.boat_capacity as f64
    }

    fn bank_is_safe(&self, m: u32, c: u32) -> bool {
        (m == 0 || m >= c) && {
            let (rm, rc) = (self.missionaries - m, self.cannibals - c);
            rm == 0 || rm >= rc
        }
    }
}

impl Problem for RiverCrossing {
    type State = (u32, u32, bool);
    type Action = Ferry;

    fn start(&self) -> (u32, u32, bool) {
        (self.missionaries, self.cannibals, true)
    }

    fn is_goal(&self, state: &(u32, u32, bool)) -> bool {
        *state == (0, 0, false)
    }

    fn successors(&self, state: &(u32, u32, bool)) -> Vec<((u32, u32, bool), Ferry, f64)> {
        let (m, c, boat_left) = *state;
        assert!(
            m <= self.missionaries && c <= self.cannibals,
            "state {state:?} is outside the declared state space"
        );

        // People available on the boat's side of the river.
        let (avail_m, avail_c) = if boat_left {
            (m, c)
        } else {
            (self.missionaries - m, self.cannibals - c)
        };

        let mut moves = Vec::new();
        for i in 0..=self.boat_capacity {
            for j in 0..=self.boat_capacity {
                if i + j < 1 || i + j > self.boat_capacity {
                    continue;
                }
                // Cannibals may not outnumber missionaries in the boat.
                if i > 0 && i < j {
                    continue;
                }
                if i > avail_m || j > avail_c {
                    continue;
                }
                let next = if boat_left {
                    (m - i, c - j, false)
                } else {
                    (m + i, c + j, true)
                };
                if self.bank_is_safe(next.0, next.1) {
                    moves.push((
                        next,
                        Ferry {
                            missionaries: i,
                            cannibals: j,
                        },
                        1.0,
                    ));
                }
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{astar_search, breadth_first_search, uniform_cost_search};

    #[test]
    fn classic_instance_takes_eleven_crossings() {
        // 3 missionaries, 3 cannibals, boat for 2: the textbook answer is 11.
        let problem = RiverCrossing::new(3, 3, 2);
        let solution = breadth_first_search(&problem).unwrap();
        assert_eq!(solution.actions.len(), 11);
    }

    #[test]
    fn every_crossing_in_the_solution_is_safe() {
        let problem = RiverCrossing::new(4, 4, 3);
        let solution = breadth_first_search(&problem).unwrap();
        let mut state = problem.start();
        for ferry in &solution.actions {
            let (next, _, _) = problem
                .successors(&state)
                .into_iter()
                .find(|(_, action, _)| action == ferry)
                .expect("solution action is legal");
            state = next;
        }
        assert!(problem.is_goal(&state));
    }

    #[test]
    fn astar_with_the_seat_heuristic_matches_ucs() {
        let problem = RiverCrossing::new(4, 4, 3);
        let ucs = uniform_cost_search(&problem).unwrap();
        let astar = astar_search(&problem, |state| problem.heuristic(state)).unwrap();
        assert_eq!(astar.cost, ucs.cost);
    }

    #[test]
    fn four_couples_with_a_two_seat_boat_is_unsolvable() {
        let problem = RiverCrossing::new(4, 4, 2);
        assert!(breadth_first_search(&problem).is_none());
        assert!(uniform_cost_search(&problem).is_none());
        assert!(astar_search(&problem, |state| problem.heuristic(state)).is_none());
    }
}
