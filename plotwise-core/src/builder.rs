//! Builder for wiring [`City`] instances from declarative adjacency specs.
//!
//! Accumulator methods are infallible; every index is validated in
//! [`CityBuilder::build`] so a partially wired city is never observable.

use std::collections::BTreeSet;

use crate::{
    building::Neighbour,
    city::City,
    error::{CityError, Result},
};

/// Configures and constructs [`City`] instances.
///
/// Edges are held as an unordered-pair set: adding the same connection
/// twice, in either direction, is idempotent and neighbour lists never
/// double-count a link. Each builder is consumed by [`CityBuilder::build`];
/// independent cities come from independent builders.
///
/// # Examples
/// ```
/// use plotwise_core::CityBuilder;
///
/// let city = CityBuilder::new(3)
///     .with_edges([(0, 1), (1, 2)])
///     .with_hall_link(1)
///     .with_empty_bounds(0, 1)
///     .build()?;
/// assert_eq!(city.plot_count(), 3);
/// assert_eq!(city.hall_links(), &[1]);
/// # Ok::<(), plotwise_core::CityError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CityBuilder {
    plots: usize,
    hall_links: BTreeSet<usize>,
    edges: BTreeSet<(usize, usize)>,
    min_empty: usize,
    max_empty: usize,
}

impl CityBuilder {
    /// Creates a builder for a city of `plots` plots with no connections
    /// and empty bounds of zero.
    #[must_use]
    pub fn new(plots: usize) -> Self {
        Self {
            plots,
            hall_links: BTreeSet::new(),
            edges: BTreeSet::new(),
            min_empty: 0,
            max_empty: 0,
        }
    }

    /// Links `plot` to the city hall.
    #[must_use]
    pub fn with_hall_link(mut self, plot: usize) -> Self {
        self.hall_links.insert(plot);
        self
    }

    /// Links every plot in `plots` to the city hall.
    #[must_use]
    pub fn with_hall_links<I>(mut self, plots: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.hall_links.extend(plots);
        self
    }

    /// Connects plots `a` and `b` both ways.
    #[must_use]
    pub fn with_edge(mut self, a: usize, b: usize) -> Self {
        let pair = if a <= b { (a, b) } else { (b, a) };
        self.edges.insert(pair);
        self
    }

    /// Connects every unordered pair in `edges` both ways.
    #[must_use]
    pub fn with_edges<I>(self, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        edges
            .into_iter()
            .fold(self, |builder, (a, b)| builder.with_edge(a, b))
    }

    /// Sets the minimum and maximum number of plots that may stay empty
    /// simultaneously.
    ///
    /// `min > max` is accepted and documented behaviour: no assignment can
    /// then satisfy the bounds, so every assignment is illegal and a
    /// survey reports zero legal arrangements.
    #[must_use]
    pub fn with_empty_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_empty = min;
        self.max_empty = max;
        self
    }

    /// Validates the accumulated links and wires a [`City`] with every
    /// plot initially [`Empty`](crate::BuildingKind::Empty).
    ///
    /// # Errors
    /// Returns [`CityError::PlotOutOfRange`] when any edge endpoint or
    /// hall link lies outside `0..plots`; no city is produced in that
    /// case.
    pub fn build(self) -> Result<City> {
        let plots = self.plots;
        let check = |index: usize| -> Result<()> {
            if index < plots {
                Ok(())
            } else {
                Err(CityError::PlotOutOfRange { index, plots })
            }
        };

        let mut links: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); plots];
        for &(a, b) in &self.edges {
            check(a)?;
            check(b)?;
            links[a].insert(b);
            links[b].insert(a);
        }
        for &plot in &self.hall_links {
            check(plot)?;
        }

        let adjacency = links
            .into_iter()
            .enumerate()
            .map(|(plot, neighbours)| {
                let mut list: Vec<Neighbour> = neighbours.into_iter().map(Neighbour::Plot).collect();
                if self.hall_links.contains(&plot) {
                    list.push(Neighbour::Hall);
                }
                list
            })
            .collect();

        let hall_links = self.hall_links.into_iter().collect();
        Ok(City::new(
            adjacency,
            hall_links,
            self.min_empty,
            self.max_empty,
        ))
    }
}
