use crate::{graph::CityGraph, visit::VisitSet};

const NO_DISTANCE: u32 = u32::MAX;

/// Exhaustive open-path solvers. The brute-force and dynamic-programming
/// variants share one recurrence over `(current city, visit set)` states and
/// differ only in whether results are cached, so they compute the same
/// function wherever both are feasible.
pub struct ExactSolver<'g> {
    graph: &'g CityGraph,
}

impl<'g> ExactSolver<'g> {
    pub fn new(graph: &'g CityGraph) -> Self {
        Self { graph }
    }

    /// Length of the shortest path that starts at `start`, visits every city
    /// in `visit` exactly once, and ends anywhere (no return edge).
    ///
    /// `use_memo` selects the dynamic-programming variant, which allocates a
    /// fresh `n * 2^n` table per call; callers gate the instance size (see
    /// `Algorithm::max_cities`) before asking for it.
    ///
    /// Panics if `visit` contains `start` — that is caller misuse, not bad
    /// input data.
    pub fn solve(&self, start: usize, visit: VisitSet, use_memo: bool) -> u32 {
        if use_memo {
            let mut memo = MemoTable::new(self.graph.num_cities());
            self.search(start, visit, Some(&mut memo))
        } else {
            self.search(start, visit, None)
        }
    }

    fn search(&self, current: usize, visit: VisitSet, mut memo: Option<&mut MemoTable>) -> u32 {
        if visit.contains(current) {
            panic!("exact: current_city={current} must not be in visit={visit:#x}");
        }
        if visit.is_empty() {
            return 0;
        }
        if let Some(memo) = memo.as_deref_mut()
            && let Some(found) = memo.get(current, visit)
        {
            return found;
        }

        let mut min_distance = NO_DISTANCE;
        for next_city in 0..self.graph.num_cities() {
            if !visit.contains(next_city) {
                continue;
            }
            let distance = self.graph.distance(current, next_city)
                + self.search(next_city, visit.without(next_city), memo.as_deref_mut());
            // Strict comparison: the earliest-scanned minimum wins ties.
            if distance < min_distance {
                min_distance = distance;
            }
        }

        if min_distance == NO_DISTANCE {
            panic!("exact: no candidate city for non-empty visit={visit:#x}");
        }
        if let Some(memo) = memo {
            memo.insert(current, visit, min_distance);
        }
        min_distance
    }
}

/// Best-distance cache keyed by `(city, visit set)`. Presence is tracked in
/// a separate bit vector, so a cached distance of zero (coincident cities)
/// is distinguishable from a slot that was never computed.
struct MemoTable {
    num_cities: usize,
    values: Vec<u32>,
    present: Vec<u64>,
}

impl MemoTable {
    fn new(num_cities: usize) -> Self {
        let slots = num_cities << num_cities;
        Self {
            num_cities,
            values: vec![0; slots],
            present: vec![0; slots.div_ceil(64)],
        }
    }

    fn slot(&self, city: usize, visit: VisitSet) -> usize {
        (city << self.num_cities) | visit.bits() as usize
    }

    fn get(&self, city: usize, visit: VisitSet) -> Option<u32> {
        let slot = self.slot(city, visit);
        if self.present[slot / 64] & (1 << (slot % 64)) != 0 {
            Some(self.values[slot])
        } else {
            None
        }
    }

    fn insert(&mut self, city: usize, visit: VisitSet, value: u32) {
        let slot = self.slot(city, visit);
        self.values[slot] = value;
        self.present[slot / 64] |= 1 << (slot % 64);
    }
}

#[cfg(test)]
mod tests {
    use super::{ExactSolver, MemoTable};
    use crate::{city::City, graph::CityGraph, io::input::generate_cities, visit::VisitSet};

    fn square() -> CityGraph {
        let cities = vec![
            City::new(0, 0),
            City::new(10, 0),
            City::new(10, 10),
            City::new(0, 10),
        ];
        CityGraph::build(cities).expect("square instance should build")
    }

    #[test]
    fn brute_force_finds_the_square_optimum() {
        let graph = square();
        let solver = ExactSolver::new(&graph);
        let visit = VisitSet::full_except(4, 0);
        assert_eq!(solver.solve(0, visit, false), 30);
    }

    #[test]
    fn dyn_prog_finds_the_square_optimum() {
        let graph = square();
        let solver = ExactSolver::new(&graph);
        let visit = VisitSet::full_except(4, 0);
        assert_eq!(solver.solve(0, visit, true), 30);
    }

    #[test]
    fn both_variants_agree_on_seeded_instances() {
        for seed in [1, 7, 42] {
            let graph = CityGraph::build(generate_cities(9, seed)).expect("instance");
            let solver = ExactSolver::new(&graph);
            for start in 0..3 {
                let visit = VisitSet::full_except(9, start);
                assert_eq!(
                    solver.solve(start, visit, false),
                    solver.solve(start, visit, true),
                    "seed={seed} start={start}"
                );
            }
        }
    }

    #[test]
    fn two_city_instance_is_a_single_edge() {
        let graph =
            CityGraph::build(vec![City::new(0, 0), City::new(30, 40)]).expect("pair instance");
        let solver = ExactSolver::new(&graph);
        assert_eq!(solver.solve(0, VisitSet::full_except(2, 0), false), 50);
        assert_eq!(solver.solve(1, VisitSet::full_except(2, 1), true), 50);
    }

    #[test]
    fn coincident_cities_cache_a_true_zero_distance() {
        // Every sub-distance is zero, which the memo must still treat as a
        // computed entry rather than an empty slot.
        let cities = vec![City::new(5, 5), City::new(5, 5), City::new(5, 5)];
        let graph = CityGraph::build(cities).expect("instance");
        let solver = ExactSolver::new(&graph);
        let visit = VisitSet::full_except(3, 0);
        assert_eq!(solver.solve(0, visit, false), 0);
        assert_eq!(solver.solve(0, visit, true), 0);
    }

    #[test]
    fn memo_distinguishes_zero_from_absent() {
        let mut memo = MemoTable::new(4);
        let visit = VisitSet::full_except(4, 0);
        assert_eq!(memo.get(0, visit), None);
        memo.insert(0, visit, 0);
        assert_eq!(memo.get(0, visit), Some(0));
    }

    #[test]
    #[should_panic(expected = "must not be in visit")]
    fn start_city_inside_the_visit_set_is_fatal() {
        let graph = square();
        let visit = VisitSet::full_except(4, 1);
        ExactSolver::new(&graph).solve(0, visit, false);
    }
}
