//! Exhaustive survey of a city's assignment space.
//!
//! Visits every point in `{assignable kinds}^plot_count` by decoding a
//! base-4 index into the city's kind vector, filters through the legality
//! predicate, and retains all assignments achieving the maximum score.
//! Correctness relies purely on exhaustiveness; there is no pruning.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tracing::{info, instrument, warn};

use crate::{
    building::BuildingKind,
    city::{City, Snapshot},
    error::SurveyError,
    stats::CityStats,
};

/// Largest plot count a survey accepts.
///
/// `4^plots` must stay representable in a `u64` index; anything near this
/// bound is far beyond practical enumeration time anyway.
pub const MAX_SURVEY_PLOTS: usize = 31;

/// Cooperative cancellation handle shared with a running survey.
///
/// The flag is polled once per assignment, so cancellation takes effect
/// promptly even deep into a combinatorially large sweep. Cloning shares
/// the underlying flag.
///
/// # Examples
/// ```
/// use plotwise_core::CancelFlag;
///
/// let flag = CancelFlag::new();
/// assert!(!flag.is_cancelled());
/// flag.cancel();
/// assert!(flag.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelFlag {
    inner: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Creates a flag in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag; every survey polling it will abort.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    /// Returns whether the flag has been raised.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

/// The best score found by a survey, with every snapshot achieving it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Incumbent {
    stats: CityStats,
    snapshots: Vec<Snapshot>,
}

impl Incumbent {
    /// Returns the stats of the best-scoring assignments.
    #[must_use]
    pub fn stats(&self) -> CityStats {
        self.stats
    }

    /// Returns the best score itself.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.stats.score()
    }

    /// Returns every tied-best snapshot, in visit order.
    ///
    /// Ties are not deduplicated: assignments differing only by symmetric
    /// plot swaps are distinct entries. No cap is applied.
    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }
}

/// Counters and tied-best layouts produced by one survey pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SurveyReport {
    arrangements: u64,
    legal_arrangements: u64,
    best: Option<Incumbent>,
}

impl SurveyReport {
    /// Returns the size of the visited assignment space, `4^plots`.
    #[must_use]
    pub fn arrangements(&self) -> u64 {
        self.arrangements
    }

    /// Returns how many visited assignments were legal.
    #[must_use]
    pub fn legal_arrangements(&self) -> u64 {
        self.legal_arrangements
    }

    /// Returns the best-scoring result, or `None` when no assignment was
    /// legal.
    #[must_use]
    pub fn best(&self) -> Option<&Incumbent> {
        self.best.as_ref()
    }
}

/// Surveys the full assignment space of `city` to completion.
///
/// The city's bounds are fixed for the pass; sweeping bounds means
/// rebuilding and re-surveying, which is the caller's loop. The city's
/// kind vector is left holding the final visited assignment. Parallel
/// callers must give each worker its own [`City`]: the assignment buffer
/// is mutated in place and is not safely shared.
///
/// # Errors
/// Returns [`SurveyError::SpaceTooLarge`] when the city has more than
/// [`MAX_SURVEY_PLOTS`] plots.
///
/// # Examples
/// ```
/// use plotwise_core::{CityBuilder, survey};
///
/// let mut city = CityBuilder::new(1).with_hall_link(0).build()?;
/// let report = survey(&mut city)?;
/// // Empty violates max_empty = 0; House and Factory score zero, and the
/// // entertainment venue beside the hall scores two.
/// assert_eq!(report.legal_arrangements(), 3);
/// let best = report.best().expect("a legal layout exists");
/// assert_eq!(best.score(), 2);
/// assert_eq!(best.snapshots().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn survey(city: &mut City) -> Result<SurveyReport, SurveyError> {
    survey_with_cancel(city, &CancelFlag::new())
}

/// Surveys the full assignment space of `city`, polling `cancel` once per
/// assignment.
///
/// # Errors
/// Returns [`SurveyError::SpaceTooLarge`] when the city has more than
/// [`MAX_SURVEY_PLOTS`] plots, and [`SurveyError::Cancelled`] when the
/// flag is raised before the space is exhausted.
#[instrument(
    name = "survey.run",
    err,
    skip(city, cancel),
    fields(
        plots = city.plot_count(),
        min_empty = city.min_empty(),
        max_empty = city.max_empty(),
    ),
)]
pub fn survey_with_cancel(
    city: &mut City,
    cancel: &CancelFlag,
) -> Result<SurveyReport, SurveyError> {
    let plots = city.plot_count();
    if plots > MAX_SURVEY_PLOTS {
        return Err(SurveyError::SpaceTooLarge {
            plots,
            limit: MAX_SURVEY_PLOTS,
        });
    }

    let arrangements = 1u64 << (2 * plots);
    let mut legal_arrangements = 0u64;
    let mut best: Option<Incumbent> = None;

    for index in 0..arrangements {
        if cancel.is_cancelled() {
            warn!(index, "survey cancelled before completion");
            return Err(SurveyError::Cancelled);
        }

        assign_from_index(city, index);
        if !city.is_legal() {
            continue;
        }
        legal_arrangements += 1;

        let stats = city.stats();
        match best.as_mut() {
            None => {
                best = Some(Incumbent {
                    stats,
                    snapshots: vec![city.snapshot()],
                });
            }
            Some(incumbent) => {
                let score = stats.score();
                if score > incumbent.score() {
                    incumbent.stats = stats;
                    incumbent.snapshots.clear();
                    incumbent.snapshots.push(city.snapshot());
                } else if score == incumbent.score() {
                    incumbent.snapshots.push(city.snapshot());
                }
            }
        }
    }

    info!(
        legal_arrangements,
        best_score = best.as_ref().map(Incumbent::score),
        tied = best.as_ref().map(|incumbent| incumbent.snapshots.len()),
        "survey completed"
    );
    Ok(SurveyReport {
        arrangements,
        legal_arrangements,
        best,
    })
}

/// Decodes `index` in base 4 into the city's kind vector, digit order
/// matching plot order.
fn assign_from_index(city: &mut City, index: u64) {
    for (plot, slot) in city.kinds.iter_mut().enumerate() {
        *slot = kind_for_digit(index >> (2 * plot));
    }
}

fn kind_for_digit(digits: u64) -> BuildingKind {
    match digits & 0b11 {
        0 => BuildingKind::Empty,
        1 => BuildingKind::House,
        2 => BuildingKind::Entertainment,
        _ => BuildingKind::Factory,
    }
}
