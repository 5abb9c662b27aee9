use std::{fs, io::Read};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Error, Result, city::City, constants::GRID_SIZE, io::options::BenchOptions};

/// City coordinates for one benchmark run: parsed from the configured input
/// (file or stdin), or generated from the seed when no input is given.
pub fn load_cities(options: &BenchOptions) -> Result<Vec<City>> {
    let input = options.input.trim();
    if input.is_empty() {
        log::debug!("input: generating n={} seed={}", options.cities, options.seed);
        return Ok(generate_cities(options.cities, options.seed));
    }

    let text = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };
    parse_cities(&text)
}

/// Seeded uniform placement on the benchmark grid; the same seed always
/// yields the same instance.
pub fn generate_cities(count: usize, seed: u64) -> Vec<City> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| City::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE)))
        .collect()
}

fn parse_cities(input: &str) -> Result<Vec<City>> {
    let mut cities = Vec::new();
    for (idx, tok) in input.split_whitespace().enumerate() {
        let mut it = tok.split(',');
        let x_s = it
            .next()
            .ok_or_else(|| Error::invalid_input(format!("Token {}: missing x", idx + 1)))?;
        let y_s = it
            .next()
            .ok_or_else(|| Error::invalid_input(format!("Token {}: missing y", idx + 1)))?;

        if it.next().is_some() {
            return Err(Error::invalid_input(format!(
                "Token {}: expected 'x,y' but got extra comma fields: {tok}",
                idx + 1
            )));
        }

        let x: i32 = x_s.parse().map_err(|_| {
            Error::invalid_input(format!("Token {}: invalid x coordinate: {x_s}", idx + 1))
        })?;
        let y: i32 = y_s.parse().map_err(|_| {
            Error::invalid_input(format!("Token {}: invalid y coordinate: {y_s}", idx + 1))
        })?;

        let city = City::new(x, y);
        if !city.is_valid() {
            return Err(Error::invalid_data(format!(
                "Token {}: coordinates outside the 0..{GRID_SIZE} grid: {tok}",
                idx + 1
            )));
        }
        cities.push(city);
    }

    if cities.is_empty() {
        return Err(Error::invalid_input("No city coordinates provided."));
    }

    Ok(cities)
}
