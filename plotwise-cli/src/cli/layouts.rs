//! Named layout presets consumed by the survey commands.
//!
//! Topologies live here as data tables; the core builder turns them into
//! wired cities.

use clap::ValueEnum;
use plotwise_core::{City, CityBuilder, CityError};

/// Known city layouts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LayoutName {
    /// Eleven plots chained around a central hall.
    Adamazium,
}

/// Declarative adjacency table for one layout.
#[derive(Debug)]
pub struct LayoutPreset {
    /// Number of plots.
    pub plots: usize,
    /// Plots adjacent to the hall.
    pub hall_links: &'static [usize],
    /// Unordered plot adjacency pairs.
    pub edges: &'static [(usize, usize)],
}

const ADAMAZIUM: LayoutPreset = LayoutPreset {
    plots: 11,
    hall_links: &[1, 3, 4, 9],
    edges: &[
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
    ],
};

impl LayoutName {
    /// Returns the adjacency table for this layout.
    #[must_use]
    pub fn preset(self) -> &'static LayoutPreset {
        match self {
            Self::Adamazium => &ADAMAZIUM,
        }
    }

    /// Stable lowercase name used in reports and spans.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adamazium => "adamazium",
        }
    }

    /// Builds a wired city for this layout with the given empty bounds.
    ///
    /// # Errors
    /// Returns [`CityError`] when the preset table references a plot out
    /// of range; shipped presets are expected to be valid.
    pub fn build_city(self, min_empty: usize, max_empty: usize) -> Result<City, CityError> {
        let preset = self.preset();
        CityBuilder::new(preset.plots)
            .with_hall_links(preset.hall_links.iter().copied())
            .with_edges(preset.edges.iter().copied())
            .with_empty_bounds(min_empty, max_empty)
            .build()
    }
}
