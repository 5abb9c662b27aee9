use crate::{
    Error, Result,
    city::City,
    constants::{MAX_CITIES, MIN_CITIES},
};

/// Immutable metric model of one benchmark instance: city coordinates, the
/// full pairwise distance matrix, and each city's neighbor ranking. Both
/// tables are built once here and never mutated; solvers only read.
pub struct CityGraph {
    cities: Vec<City>,
    /// Row-major `n * n` truncated Euclidean distances.
    distance: Vec<u32>,
    /// Per city, all city indices ordered by ascending distance, ties
    /// broken toward the lower index.
    neighbor_order: Vec<Vec<usize>>,
}

impl CityGraph {
    pub fn build(cities: Vec<City>) -> Result<Self> {
        let n = cities.len();
        if !(MIN_CITIES..=MAX_CITIES).contains(&n) {
            return Err(Error::invalid_input(format!(
                "city count must be in {MIN_CITIES}..={MAX_CITIES}, got {n}"
            )));
        }

        let mut distance = vec![0u32; n * n];
        for i in 0..n {
            for j in 0..n {
                distance[i * n + j] = cities[i].dist(&cities[j]);
            }
        }

        let mut neighbor_order = Vec::with_capacity(n);
        for i in 0..n {
            let mut order: Vec<usize> = (0..n).collect();
            // Stable sort keeps equal-distance candidates in index order.
            order.sort_by_key(|&j| distance[i * n + j]);
            neighbor_order.push(order);
        }

        log::debug!("graph: built n={n}");
        Ok(Self {
            cities,
            distance,
            neighbor_order,
        })
    }

    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    pub fn city(&self, i: usize) -> City {
        self.cities[i]
    }

    pub fn distance(&self, i: usize, j: usize) -> u32 {
        self.distance[i * self.cities.len() + j]
    }

    /// All city indices ranked nearest-first from `i` (including `i` itself
    /// at rank zero). Consumed by the heuristic solver.
    pub fn neighbors_by_distance(&self, i: usize) -> &[usize] {
        &self.neighbor_order[i]
    }
}

#[cfg(test)]
mod tests {
    use super::CityGraph;
    use crate::city::City;

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
    fn build_rejects_too_few_cities() {
        let err = CityGraph::build(vec![City::new(0, 0)]).expect_err("one city should fail");
        assert!(err.to_string().contains("city count must be in 2..=64"));
    }

    #[test]
    fn build_rejects_too_many_cities() {
        let cities = (0..65).map(|i| City::new(i, i)).collect();
        let err = CityGraph::build(cities).expect_err("65 cities should fail");
        assert!(err.to_string().contains("got 65"));
    }

    #[test]
    fn square_distances_match_the_literal_matrix() {
        let graph = square();
        assert_eq!(graph.distance(0, 1), 10);
        assert_eq!(graph.distance(1, 2), 10);
        assert_eq!(graph.distance(2, 3), 10);
        assert_eq!(graph.distance(0, 3), 10);
        assert_eq!(graph.distance(0, 2), 14);
        assert_eq!(graph.distance(1, 3), 14);
    }

    #[test]
    fn distance_is_symmetric_with_zero_diagonal() {
        let cities = vec![
            City::new(3, 991),
            City::new(407, 62),
            City::new(998, 521),
            City::new(46, 46),
            City::new(300, 711),
        ];
        let graph = CityGraph::build(cities).expect("instance should build");
        for i in 0..graph.num_cities() {
            assert_eq!(graph.distance(i, i), 0);
            for j in 0..graph.num_cities() {
                assert_eq!(graph.distance(i, j), graph.distance(j, i));
            }
        }
    }

    #[test]
    fn neighbor_order_is_sorted_by_distance() {
        let cities = vec![
            City::new(0, 0),
            City::new(500, 500),
            City::new(20, 5),
            City::new(999, 999),
        ];
        let graph = CityGraph::build(cities).expect("instance should build");
        for i in 0..graph.num_cities() {
            let order = graph.neighbors_by_distance(i);
            assert_eq!(order.len(), graph.num_cities());
            assert_eq!(order[0], i);
            for pair in order.windows(2) {
                assert!(graph.distance(i, pair[0]) <= graph.distance(i, pair[1]));
            }
        }
    }

    #[test]
    fn neighbor_order_breaks_ties_toward_the_lower_index() {
        // From city 0 both city 1 and city 3 sit at distance 10.
        let graph = square();
        assert_eq!(graph.neighbors_by_distance(0), &[0, 1, 3, 2]);
    }
}
