//! Shared city fixtures for the plotwise benchmarks.

use plotwise_core::{City, CityBuilder};

/// Six plots in a cycle with the hall linked to every other plot.
///
/// Small enough that a full survey (4096 assignments) fits in a tight
/// benchmark iteration.
#[must_use]
pub fn hex_city(min_empty: usize, max_empty: usize) -> City {
    CityBuilder::new(6)
        .with_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)])
        .with_hall_links([0, 2, 4])
        .with_empty_bounds(min_empty, max_empty)
        .build()
        .expect("hexagon topology is valid")
}

/// The eleven-plot ridge layout shipped with the CLI.
#[must_use]
pub fn ridge_city(min_empty: usize, max_empty: usize) -> City {
    CityBuilder::new(11)
        .with_edges([
            (0, 1),
            (1, 2),
            (1, 3),
            (3, 4),
            (3, 5),
            (4, 7),
            (5, 6),
            (6, 7),
            (7, 8),
            (7, 9),
            (8, 9),
            (9, 10),
        ])
        .with_hall_links([1, 3, 4, 9])
        .with_empty_bounds(min_empty, max_empty)
        .build()
        .expect("ridge topology is valid")
}
