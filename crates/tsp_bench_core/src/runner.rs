use std::{
    fmt::Write,
    time::{Duration, Instant},
};

use crate::{
    Error, Result, algo::Algorithm, graph::CityGraph, io::options::BenchOptions,
};

/// Result row for one algorithm in the benchmark table.
#[derive(Clone, Debug)]
pub struct BenchResult {
    pub algorithm: Algorithm,
    pub outcome: Outcome,
}

#[derive(Clone, Debug)]
pub enum Outcome {
    /// The instance exceeds the algorithm's feasible city count, so it was
    /// never invoked.
    NotRun,
    Completed { distance: u32, duration: Duration },
}

/// Runs every selected algorithm on the instance, gating each on its
/// feasibility bound and timing the ones that run.
pub fn run_benchmark(graph: &CityGraph, options: &BenchOptions) -> Result<Vec<BenchResult>> {
    let n = graph.num_cities();
    if options.start_city >= n {
        return Err(Error::invalid_input(format!(
            "start-city {} out of range for {n} cities",
            options.start_city
        )));
    }
    if options.lookahead < 1 {
        return Err(Error::invalid_input("lookahead must be >= 1"));
    }

    let mut results = Vec::with_capacity(options.algorithms.len());
    for &algorithm in &options.algorithms {
        if n > algorithm.max_cities() {
            log::warn!(
                "runner: skip alg={algorithm} n={n} max={}",
                algorithm.max_cities()
            );
            results.push(BenchResult {
                algorithm,
                outcome: Outcome::NotRun,
            });
            continue;
        }

        log::info!(
            "runner: start alg={algorithm} n={n} start_city={} lookahead={}",
            options.start_city,
            options.lookahead
        );
        let now = Instant::now();
        let distance = algorithm.run(graph, options.start_city, options.lookahead);
        let duration = now.elapsed();
        log::info!(
            "runner: done alg={algorithm} distance={distance} secs={:.6}",
            duration.as_secs_f64()
        );

        results.push(BenchResult {
            algorithm,
            outcome: Outcome::Completed { distance, duration },
        });
    }

    Ok(results)
}

/// Fixed-width result table, one row per algorithm.
pub fn render_results(results: &[BenchResult]) -> String {
    let mut out = String::new();
    for result in results {
        match result.outcome {
            Outcome::NotRun => {
                let _ = writeln!(out, "  {:<16} {:>12}", result.algorithm.name(), "not_run");
            }
            Outcome::Completed { distance, duration } => {
                let _ = writeln!(
                    out,
                    "  {:<16} {:>12} {:>3}.{:06}",
                    result.algorithm.name(),
                    distance,
                    duration.as_secs(),
                    duration.subsec_micros()
                );
            }
        }
    }
    out
}
