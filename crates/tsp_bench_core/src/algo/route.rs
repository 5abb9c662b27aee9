use crate::{algo::heuristic::HeuristicSolver, graph::CityGraph, visit::VisitSet};

/// Tour built one step at a time by the bounded-lookahead heuristic.
#[derive(Debug)]
pub struct Route {
    /// Visit order, starting with the start city.
    pub cities: Vec<usize>,
    /// Sum of the edge distances actually taken.
    pub total_distance: u32,
}

/// Constructs a full route from `start`: each step asks the heuristic for
/// the next city with the configured top-level lookahead, commits to it, and
/// repeats on the shrunk visit set. The lookahead estimates only rank
/// candidates; the route total sums real edges.
pub fn assemble_route(graph: &CityGraph, start: usize, lookahead: usize) -> Route {
    let solver = HeuristicSolver::new(graph);
    let mut visit = VisitSet::full_except(graph.num_cities(), start);
    let mut cities = Vec::with_capacity(graph.num_cities());
    cities.push(start);
    let mut current = start;
    let mut total_distance = 0;

    while !visit.is_empty() {
        let step = solver.next_step(current, visit, lookahead);
        let Some(chosen) = step.chosen else {
            panic!(
                "route: no city chosen with {} cities left to visit",
                visit.len()
            );
        };

        total_distance += graph.distance(current, chosen);
        current = chosen;
        visit = visit.without(current);
        cities.push(current);
        log::trace!("route: step to={current} total={total_distance}");
    }

    Route {
        cities,
        total_distance,
    }
}

#[derive(Debug, Default)]
pub struct RouteMetrics {
    pub total: u32,
    pub longest: u32,
    pub average: f64,
}

impl Route {
    /// Open-path edge metrics, logged in one line for the benchmark record.
    pub fn edge_metrics(&self, graph: &CityGraph) -> RouteMetrics {
        let n = self.cities.len();
        if n < 2 {
            log::info!("metrics: n < 2 so there's nothing to report");
            return RouteMetrics::default();
        }

        let distances: Vec<u32> = self
            .cities
            .windows(2)
            .map(|edge| graph.distance(edge[0], edge[1]))
            .collect();
        let total = distances.iter().sum();
        let longest = distances.iter().copied().max().unwrap_or(0);
        let average = f64::from(total) / (n - 1) as f64;

        log::info!("metrics: n={n} total={total} longest={longest} avg={average:.1}");

        RouteMetrics {
            total,
            longest,
            average,
        }
    }
}
