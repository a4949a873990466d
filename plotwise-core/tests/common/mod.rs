use plotwise_core::{City, CityBuilder};

/// Eleven-plot ridge topology used by the shipped calculator: a chain of
/// clusters around a central hall linked to plots 1, 3, 4, and 9.
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

/// Two plots joined by one edge, with the hall linked to plot 0.
pub fn pair_city(min_empty: usize, max_empty: usize) -> City {
    CityBuilder::new(2)
        .with_edge(0, 1)
        .with_hall_link(0)
        .with_empty_bounds(min_empty, max_empty)
        .build()
        .expect("pair topology is valid")
}
