//! Legality predicate over a city's current assignment.

use crate::{
    building::{BuildingKind, Neighbour},
    city::City,
};

impl City {
    /// Decides whether the current assignment is permitted.
    ///
    /// An assignment is legal when the number of empty plots lies within
    /// the configured bounds and no occupied plot is isolated, meaning
    /// surrounded exclusively by empty plots. The hall always counts as an
    /// occupied neighbour; an occupied plot with no neighbours at all is
    /// isolated. Exceeding the maximum empty count short-circuits.
    ///
    /// One pass over plots and edges; deterministic for a given assignment
    /// and bounds.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        let mut empty = 0usize;
        for (plot, &kind) in self.kinds.iter().enumerate() {
            if kind == BuildingKind::Empty {
                empty += 1;
                if empty > self.max_empty {
                    return false;
                }
                continue;
            }

            let isolated = self.adjacency[plot].iter().all(|neighbour| match neighbour {
                Neighbour::Hall => false,
                Neighbour::Plot(other) => self.kinds[*other] == BuildingKind::Empty,
            });
            if isolated {
                return false;
            }
        }

        empty >= self.min_empty
    }
}
