//! The city aggregate: plots, hall adjacency, and snapshot access.

use crate::{
    building::{BuildingKind, Neighbour},
    error::{CityError, Result},
};

/// A wired city: fixed topology and empty bounds, mutable per-plot kinds.
///
/// Constructed through [`crate::CityBuilder`]; the topology and the empty
/// bounds never change afterwards. The per-plot assignment is the search
/// variable and is expected to be rewritten millions of times during a
/// survey. Plot identities are the dense range `0..plot_count()` and
/// adjacency is always symmetric.
///
/// # Examples
/// ```
/// use plotwise_core::{BuildingKind, CityBuilder, Neighbour};
///
/// let mut city = CityBuilder::new(2)
///     .with_edge(0, 1)
///     .with_hall_link(0)
///     .build()?;
/// city.set_kind(1, BuildingKind::House)?;
/// assert_eq!(city.kind(1), Some(BuildingKind::House));
/// assert_eq!(city.neighbours(0), Some(&[Neighbour::Plot(1), Neighbour::Hall][..]));
/// # Ok::<(), plotwise_core::CityError>(())
/// ```
#[derive(Clone, Debug)]
pub struct City {
    pub(crate) kinds: Vec<BuildingKind>,
    pub(crate) adjacency: Vec<Vec<Neighbour>>,
    pub(crate) hall_links: Vec<usize>,
    pub(crate) min_empty: usize,
    pub(crate) max_empty: usize,
}

impl City {
    pub(crate) fn new(
        adjacency: Vec<Vec<Neighbour>>,
        hall_links: Vec<usize>,
        min_empty: usize,
        max_empty: usize,
    ) -> Self {
        let kinds = vec![BuildingKind::Empty; adjacency.len()];
        Self {
            kinds,
            adjacency,
            hall_links,
            min_empty,
            max_empty,
        }
    }

    /// Returns the number of plots in the city.
    #[must_use]
    pub fn plot_count(&self) -> usize {
        self.kinds.len()
    }

    /// Returns the minimum number of plots that must stay empty.
    #[must_use]
    pub fn min_empty(&self) -> usize {
        self.min_empty
    }

    /// Returns the maximum number of plots allowed to stay empty.
    #[must_use]
    pub fn max_empty(&self) -> usize {
        self.max_empty
    }

    /// Returns the kind currently assigned to `plot`, or `None` for an
    /// out-of-range index.
    #[must_use]
    pub fn kind(&self, plot: usize) -> Option<BuildingKind> {
        self.kinds.get(plot).copied()
    }

    /// Returns the full per-plot assignment in plot order.
    #[must_use]
    pub fn kinds(&self) -> &[BuildingKind] {
        &self.kinds
    }

    /// Assigns `kind` to `plot`.
    ///
    /// # Errors
    /// Returns [`CityError::PlotOutOfRange`] when `plot` is not a valid
    /// index.
    pub fn set_kind(&mut self, plot: usize, kind: BuildingKind) -> Result<()> {
        let plots = self.kinds.len();
        let slot = self
            .kinds
            .get_mut(plot)
            .ok_or(CityError::PlotOutOfRange { index: plot, plots })?;
        *slot = kind;
        Ok(())
    }

    /// Returns the neighbour list of `plot`, or `None` for an out-of-range
    /// index.
    ///
    /// Plot neighbours come first in ascending index order; the hall, when
    /// linked, is the final entry. The list never contains duplicates.
    #[must_use]
    pub fn neighbours(&self, plot: usize) -> Option<&[Neighbour]> {
        self.adjacency.get(plot).map(Vec::as_slice)
    }

    /// Returns the plots linked to the hall, in ascending order.
    #[must_use]
    pub fn hall_links(&self) -> &[usize] {
        &self.hall_links
    }

    /// Captures the current assignment as an owned [`Snapshot`].
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.kinds.clone())
    }

    /// Overwrites the current assignment with `snapshot`.
    ///
    /// The write is all-or-nothing: a rejected snapshot leaves the city
    /// untouched.
    ///
    /// # Errors
    /// Returns [`CityError::SnapshotLength`] when the snapshot's length
    /// does not match the plot count.
    ///
    /// # Examples
    /// ```
    /// use plotwise_core::{BuildingKind, CityBuilder};
    ///
    /// let mut city = CityBuilder::new(2).with_edge(0, 1).build()?;
    /// city.set_kind(0, BuildingKind::Factory)?;
    /// let snapshot = city.snapshot();
    /// city.set_kind(0, BuildingKind::Empty)?;
    /// city.apply_snapshot(&snapshot)?;
    /// assert_eq!(city.snapshot(), snapshot);
    /// # Ok::<(), plotwise_core::CityError>(())
    /// ```
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) -> Result<()> {
        if snapshot.len() != self.kinds.len() {
            return Err(CityError::SnapshotLength {
                got: snapshot.len(),
                expected: self.kinds.len(),
            });
        }
        self.kinds.copy_from_slice(snapshot.kinds());
        Ok(())
    }
}

/// The full per-plot assignment at one point in time.
///
/// A snapshot has no identity beyond its values: two snapshots compare
/// equal exactly when every plot holds the same kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snapshot {
    kinds: Vec<BuildingKind>,
}

impl Snapshot {
    /// Wraps an ordered kind sequence as a snapshot.
    #[must_use]
    pub fn new(kinds: Vec<BuildingKind>) -> Self {
        Self { kinds }
    }

    /// Returns the kinds in plot order.
    #[must_use]
    pub fn kinds(&self) -> &[BuildingKind] {
        &self.kinds
    }

    /// Returns the number of plots the snapshot covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns whether the snapshot covers no plots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
