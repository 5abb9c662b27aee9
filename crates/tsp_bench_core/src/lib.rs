//! Benchmarks exact and heuristic solvers for the open-path traveling-
//! salesperson problem on small synthetic city graphs, comparing solution
//! quality and running time across strategies.

mod algo;
mod city;
pub mod constants;
mod error;
mod graph;
mod io;
pub mod logging;
mod runner;
mod visit;

pub use algo::{
    Algorithm, ExactSolver, HeuristicSolver, Route, RouteMetrics, StepChoice, assemble_route,
};
pub use city::City;
pub use error::{Error, Result};
pub use graph::CityGraph;
pub use io::input::{generate_cities, load_cities};
pub use io::options::{BenchOptions, LogFormat, LogLevel};
pub use runner::{BenchResult, Outcome, render_results, run_benchmark};
pub use visit::VisitSet;
