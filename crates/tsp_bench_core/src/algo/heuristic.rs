use crate::{graph::CityGraph, visit::VisitSet};

const NO_DISTANCE: u32 = u32::MAX;

/// Outcome of one lookahead-bounded step: the bounded distance estimate used
/// to rank candidates, and the chosen next city (`None` once every city has
/// been visited).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StepChoice {
    pub distance: u32,
    pub chosen: Option<usize>,
}

/// Approximate solvers driven by each city's precomputed neighbor ranking.
/// Nearest-neighbor and bounded lookahead share one recurrence; they differ
/// only in how many nearest candidates the budget lets them examine.
pub struct HeuristicSolver<'g> {
    graph: &'g CityGraph,
}

impl<'g> HeuristicSolver<'g> {
    pub fn new(graph: &'g CityGraph) -> Self {
        Self { graph }
    }

    /// Greedy tour distance from `start`: a single recursion that always
    /// takes the closest unvisited city (`lookahead = 1` at every depth),
    /// so the returned distance is the sum of the edges actually taken.
    pub fn nearest_neighbor(&self, start: usize, visit: VisitSet) -> u32 {
        self.next_step(start, visit, 1).distance
    }

    /// Examines the `min(lookahead, |visit|)` nearest unvisited candidates,
    /// evaluating each with a budget one smaller (floored at 1), and returns
    /// the best candidate with its bounded estimate. Only candidates present
    /// in `visit` count toward the budget.
    ///
    /// Panics on caller misuse: `visit` containing `current`, a zero
    /// lookahead, or a non-empty `visit` yielding no candidate (the latter
    /// would mean the neighbor ranking is inconsistent with the graph).
    pub fn next_step(&self, current: usize, visit: VisitSet, lookahead: usize) -> StepChoice {
        if visit.contains(current) {
            panic!("heuristic: current_city={current} must not be in visit={visit:#x}");
        }
        if lookahead < 1 {
            panic!("heuristic: lookahead must be >= 1");
        }
        if visit.is_empty() {
            return StepChoice {
                distance: 0,
                chosen: None,
            };
        }

        let mut examined = 0;
        let mut min_distance = NO_DISTANCE;
        let mut best_city = None;
        for &next_city in self.graph.neighbors_by_distance(current) {
            if !visit.contains(next_city) {
                continue;
            }
            let distance = self.graph.distance(current, next_city)
                + self
                    .next_step(next_city, visit.without(next_city), (lookahead - 1).max(1))
                    .distance;
            // Strict comparison: the nearest-ranked minimum wins ties.
            if distance < min_distance {
                min_distance = distance;
                best_city = Some(next_city);
            }
            examined += 1;
            if examined == lookahead {
                break;
            }
        }

        let Some(chosen) = best_city else {
            panic!("heuristic: no candidate examined for non-empty visit={visit:#x}");
        };
        StepChoice {
            distance: min_distance,
            chosen: Some(chosen),
        }
    }
}
