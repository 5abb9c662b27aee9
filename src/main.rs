use std::time::Instant;

use log::info;

use tsp_bench_core::{
    BenchOptions, CityGraph, Result, load_cities, logging, render_results, run_benchmark,
};

fn main() -> Result<()> {
    let now = Instant::now();
    let options = BenchOptions::from_args()?;
    logging::init_logger(&options)?;

    info!("options: {options}");

    let cities = load_cities(&options)?;
    let graph = CityGraph::build(cities)?;

    println!("cities {} ...", graph.num_cities());
    let results = run_benchmark(&graph, &options)?;
    print!("{}", render_results(&results));

    info!(
        "benchmark: done n={} secs={:.2}",
        graph.num_cities(),
        now.elapsed().as_secs_f32()
    );

    Ok(())
}
