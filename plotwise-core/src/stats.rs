//! Happiness and income evaluation for a city's current assignment.

use crate::{
    building::{BuildingKind, Neighbour},
    city::City,
};

const HAPPINESS_FLOOR: i32 = -5;
const HAPPINESS_CEILING: i32 = 5;
/// Income earned per factory link to a house or the hall.
const INCOME_PER_LINK: u32 = 400;

/// Happiness and income derived from one assignment.
///
/// Never stored on the city; always recomputed by [`City::stats`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CityStats {
    happiness: i32,
    income: u32,
}

impl CityStats {
    pub(crate) fn new(happiness: i32, income: u32) -> Self {
        Self { happiness, income }
    }

    /// Returns the clamped happiness value, always within `-5..=5`.
    #[must_use]
    pub fn happiness(self) -> i32 {
        self.happiness
    }

    /// Returns the income in monetary units.
    #[must_use]
    pub fn income(self) -> u32 {
        self.income
    }

    /// Returns the ranking value used by the survey.
    ///
    /// Zero whenever happiness is below one, otherwise income plus
    /// happiness: income alone never rescues an unhappy city.
    #[must_use]
    pub fn score(self) -> u32 {
        if self.happiness < 1 {
            0
        } else {
            self.income + self.happiness as u32
        }
    }
}

impl City {
    /// Computes happiness and income for the current assignment.
    ///
    /// Pure function of the assignment and the fixed topology; legality is
    /// ignored. Entertainment venues earn one happiness for existing, one
    /// more per neighbouring house or hall, and lose one per neighbouring
    /// factory. Factories cost one happiness and earn income for each
    /// neighbouring house or hall. Happiness is clamped to `-5..=5` after
    /// the pass.
    ///
    /// # Examples
    /// ```
    /// use plotwise_core::{BuildingKind, CityBuilder};
    ///
    /// let mut city = CityBuilder::new(2)
    ///     .with_edge(0, 1)
    ///     .with_hall_link(0)
    ///     .build()?;
    /// city.set_kind(0, BuildingKind::Entertainment)?;
    /// city.set_kind(1, BuildingKind::House)?;
    ///
    /// let stats = city.stats();
    /// assert_eq!(stats.happiness(), 3);
    /// assert_eq!(stats.income(), 0);
    /// assert_eq!(stats.score(), 3);
    /// # Ok::<(), plotwise_core::CityError>(())
    /// ```
    #[must_use]
    pub fn stats(&self) -> CityStats {
        let mut happiness = 0i32;
        let mut income_links = 0u32;

        for (plot, &kind) in self.kinds.iter().enumerate() {
            match kind {
                BuildingKind::Entertainment => {
                    happiness += 1;
                    for neighbour in &self.adjacency[plot] {
                        match neighbour {
                            Neighbour::Hall => happiness += 1,
                            Neighbour::Plot(other) => match self.kinds[*other] {
                                BuildingKind::House => happiness += 1,
                                BuildingKind::Factory => happiness -= 1,
                                BuildingKind::Empty | BuildingKind::Entertainment => {}
                            },
                        }
                    }
                }
                BuildingKind::Factory => {
                    happiness -= 1;
                    for neighbour in &self.adjacency[plot] {
                        let earns = match neighbour {
                            Neighbour::Hall => true,
                            Neighbour::Plot(other) => self.kinds[*other] == BuildingKind::House,
                        };
                        if earns {
                            income_links += 1;
                        }
                    }
                }
                BuildingKind::Empty | BuildingKind::House => {}
            }
        }

        CityStats::new(
            happiness.clamp(HAPPINESS_FLOOR, HAPPINESS_CEILING),
            income_links * INCOME_PER_LINK,
        )
    }
}
