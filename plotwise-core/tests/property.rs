//! Property suites for stats, legality, and survey invariants.

use plotwise_core::{BuildingKind, City, CityBuilder, Snapshot, survey};
use proptest::prelude::*;

/// Declarative description of a small random city plus an assignment.
#[derive(Clone, Debug)]
struct CitySpec {
    plots: usize,
    edges: Vec<(usize, usize)>,
    hall_links: Vec<usize>,
    kinds: Vec<BuildingKind>,
    min_empty: usize,
    max_empty: usize,
}

fn kind_strategy() -> impl Strategy<Value = BuildingKind> {
    prop::sample::select(BuildingKind::ASSIGNABLE.to_vec())
}

fn city_spec() -> impl Strategy<Value = CitySpec> {
    (1usize..=5).prop_flat_map(|plots| {
        (
            prop::collection::vec((0..plots, 0..plots), 0..=8),
            prop::collection::vec(0..plots, 0..=plots),
            prop::collection::vec(kind_strategy(), plots),
            0usize..=plots,
            0usize..=plots,
        )
            .prop_map(move |(edges, hall_links, kinds, min_empty, max_empty)| CitySpec {
                plots,
                edges,
                hall_links,
                kinds,
                min_empty,
                max_empty,
            })
    })
}

fn build_city(spec: &CitySpec) -> City {
    let mut city = CityBuilder::new(spec.plots)
        .with_edges(spec.edges.iter().copied())
        .with_hall_links(spec.hall_links.iter().copied())
        .with_empty_bounds(spec.min_empty, spec.max_empty)
        .build()
        .expect("generated indices are in range");
    city.apply_snapshot(&Snapshot::new(spec.kinds.clone()))
        .expect("generated kinds match the plot count");
    city
}

fn empty_count(kinds: &[BuildingKind]) -> usize {
    kinds
        .iter()
        .filter(|&&kind| kind == BuildingKind::Empty)
        .count()
}

proptest! {
    #[test]
    fn happiness_stays_clamped(spec in city_spec()) {
        let city = build_city(&spec);
        let happiness = city.stats().happiness();
        prop_assert!((-5..=5).contains(&happiness));
    }

    #[test]
    fn stats_are_pure(spec in city_spec()) {
        let city = build_city(&spec);
        prop_assert_eq!(city.stats(), city.stats());
    }

    #[test]
    fn snapshot_round_trips(spec in city_spec()) {
        let mut city = build_city(&spec);
        let snapshot = city.snapshot();
        city.apply_snapshot(&snapshot).expect("lengths match");
        prop_assert_eq!(city.snapshot(), snapshot);
        prop_assert_eq!(city.kinds(), spec.kinds.as_slice());
    }

    #[test]
    fn legal_assignments_respect_empty_bounds(spec in city_spec()) {
        let city = build_city(&spec);
        let empties = empty_count(city.kinds());
        if empties > city.max_empty() || empties < city.min_empty() {
            prop_assert!(!city.is_legal());
        }
    }

    #[test]
    fn legal_assignments_have_no_isolated_buildings(spec in city_spec()) {
        let city = build_city(&spec);
        prop_assume!(city.is_legal());
        for (plot, &kind) in city.kinds().iter().enumerate() {
            if kind == BuildingKind::Empty {
                continue;
            }
            let neighbours = city.neighbours(plot).expect("plot must exist");
            let occupied = neighbours.iter().any(|neighbour| match neighbour {
                plotwise_core::Neighbour::Hall => true,
                plotwise_core::Neighbour::Plot(other) => {
                    city.kind(*other) != Some(BuildingKind::Empty)
                }
            });
            prop_assert!(occupied, "plot {plot} is occupied but isolated");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn survey_counters_and_incumbent_are_consistent(spec in city_spec()) {
        let mut city = build_city(&spec);
        let report = survey(&mut city).expect("at most five plots are surveyable");

        prop_assert_eq!(report.arrangements(), 1u64 << (2 * spec.plots));
        prop_assert!(report.legal_arrangements() <= report.arrangements());

        if let Some(best) = report.best() {
            prop_assert!(!best.snapshots().is_empty());
            for snapshot in best.snapshots() {
                city.apply_snapshot(snapshot).expect("lengths match");
                prop_assert!(city.is_legal());
                prop_assert_eq!(city.stats().score(), best.score());
            }
        } else {
            prop_assert_eq!(report.legal_arrangements(), 0);
        }
    }

    #[test]
    fn no_legal_assignment_beats_the_incumbent(spec in city_spec()) {
        let mut city = build_city(&spec);
        let report = survey(&mut city.clone()).expect("at most five plots are surveyable");
        let best_score = report.best().map(plotwise_core::Incumbent::score);

        for index in 0..(1u64 << (2 * spec.plots)) {
            let kinds: Vec<BuildingKind> = (0..spec.plots)
                .map(|plot| {
                    let digit = u8::try_from((index >> (2 * plot)) & 0b11)
                        .expect("digit fits in u8");
                    BuildingKind::from_digit(digit).expect("masked digit is in range")
                })
                .collect();
            city.apply_snapshot(&Snapshot::new(kinds)).expect("lengths match");
            if !city.is_legal() {
                continue;
            }
            let score = city.stats().score();
            let ceiling = best_score.expect("a legal assignment implies an incumbent");
            prop_assert!(score <= ceiling);
        }
    }
}
