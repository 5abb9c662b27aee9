mod exact;
mod heuristic;
mod route;

use std::fmt;

pub use exact::ExactSolver;
pub use heuristic::{HeuristicSolver, StepChoice};
pub use route::{Route, RouteMetrics, assemble_route};

use crate::{
    Error, Result,
    constants::{MAX_CITIES, MAX_CITIES_BRUTE_FORCE, MAX_CITIES_DYN_PROG},
    graph::CityGraph,
    visit::VisitSet,
};

/// Benchmarked solving strategies, in the order the harness runs them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Algorithm {
    BruteForce,
    DynProg,
    Bounded,
    NearestNeighbor,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Self::BruteForce,
        Self::DynProg,
        Self::Bounded,
        Self::NearestNeighbor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute-force",
            Self::DynProg => "dyn-prog",
            Self::Bounded => "bounded",
            Self::NearestNeighbor => "nearest-neighbor",
        }
    }

    /// Largest instance the algorithm finishes within tolerable time and
    /// memory. The harness reports anything above as `not_run` instead of
    /// invoking the solver.
    pub fn max_cities(self) -> usize {
        match self {
            Self::BruteForce => MAX_CITIES_BRUTE_FORCE,
            Self::DynProg => MAX_CITIES_DYN_PROG,
            Self::Bounded | Self::NearestNeighbor => MAX_CITIES,
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "brute-force" => Ok(Self::BruteForce),
            "dyn-prog" => Ok(Self::DynProg),
            "bounded" => Ok(Self::Bounded),
            "nearest-neighbor" => Ok(Self::NearestNeighbor),
            _ => Err(Error::invalid_input(format!(
                "Invalid algorithm: {value} (expected brute-force|dyn-prog|bounded|nearest-neighbor)"
            ))),
        }
    }

    /// Full-tour distance from `start` visiting every other city once.
    /// `lookahead` only affects the bounded variant.
    pub fn run(self, graph: &CityGraph, start: usize, lookahead: usize) -> u32 {
        let visit = VisitSet::full_except(graph.num_cities(), start);
        match self {
            Self::BruteForce => ExactSolver::new(graph).solve(start, visit, false),
            Self::DynProg => ExactSolver::new(graph).solve(start, visit, true),
            Self::Bounded => {
                let route = assemble_route(graph, start, lookahead);
                route.edge_metrics(graph);
                route.total_distance
            }
            Self::NearestNeighbor => HeuristicSolver::new(graph).nearest_neighbor(start, visit),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
