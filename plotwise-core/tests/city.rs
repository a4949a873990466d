//! Tests for city construction, wiring, and snapshot access.

mod common;

use common::{pair_city, ridge_city};
use plotwise_core::{BuildingKind, CityBuilder, CityError, Neighbour, Snapshot};
use rstest::rstest;

const RIDGE_EDGES: [(usize, usize); 12] = [
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
];

#[test]
fn new_city_starts_all_empty() {
    let city = ridge_city(0, 0);
    assert_eq!(city.plot_count(), 11);
    assert!(
        city.kinds()
            .iter()
            .all(|&kind| kind == BuildingKind::Empty)
    );
}

#[test]
fn bounds_are_exposed() {
    let city = pair_city(1, 2);
    assert_eq!(city.min_empty(), 1);
    assert_eq!(city.max_empty(), 2);
}

#[test]
fn adjacency_is_symmetric() {
    let city = ridge_city(0, 0);
    for &(a, b) in &RIDGE_EDGES {
        let forward = city.neighbours(a).expect("plot must exist");
        let backward = city.neighbours(b).expect("plot must exist");
        assert!(forward.contains(&Neighbour::Plot(b)), "missing {a} -> {b}");
        assert!(backward.contains(&Neighbour::Plot(a)), "missing {b} -> {a}");
    }
}

#[test]
fn neighbours_sorted_with_hall_last() {
    let city = ridge_city(0, 0);
    assert_eq!(
        city.neighbours(7),
        Some(
            &[
                Neighbour::Plot(4),
                Neighbour::Plot(6),
                Neighbour::Plot(8),
                Neighbour::Plot(9),
            ][..]
        )
    );
    assert_eq!(
        city.neighbours(9),
        Some(
            &[
                Neighbour::Plot(7),
                Neighbour::Plot(8),
                Neighbour::Plot(10),
                Neighbour::Hall,
            ][..]
        )
    );
    assert_eq!(city.hall_links(), &[1, 3, 4, 9]);
}

#[test]
fn duplicate_edges_collapse() {
    let city = CityBuilder::new(2)
        .with_edge(0, 1)
        .with_edge(1, 0)
        .build()
        .expect("edges are in range");
    assert_eq!(city.neighbours(0), Some(&[Neighbour::Plot(1)][..]));
    assert_eq!(city.neighbours(1), Some(&[Neighbour::Plot(0)][..]));
}

#[rstest]
#[case::edge_endpoint(CityBuilder::new(3).with_edge(0, 3))]
#[case::hall_link(CityBuilder::new(3).with_hall_link(3))]
fn build_rejects_out_of_range_indices(#[case] builder: CityBuilder) {
    let err = builder.build().expect_err("index 3 is out of range");
    assert_eq!(err, CityError::PlotOutOfRange { index: 3, plots: 3 });
}

#[test]
fn set_kind_rejects_out_of_range_plot() {
    let mut city = pair_city(0, 0);
    let err = city
        .set_kind(2, BuildingKind::House)
        .expect_err("plot 2 does not exist");
    assert_eq!(err, CityError::PlotOutOfRange { index: 2, plots: 2 });
}

#[test]
fn lookups_return_none_out_of_range() {
    let city = pair_city(0, 0);
    assert_eq!(city.kind(2), None);
    assert_eq!(city.neighbours(2), None);
}

#[test]
fn snapshot_round_trips() {
    let mut city = pair_city(0, 0);
    city.set_kind(0, BuildingKind::Entertainment)
        .expect("plot 0 exists");
    city.set_kind(1, BuildingKind::Factory).expect("plot 1 exists");

    let snapshot = city.snapshot();
    city.set_kind(0, BuildingKind::Empty).expect("plot 0 exists");
    city.apply_snapshot(&snapshot).expect("lengths match");

    assert_eq!(city.snapshot(), snapshot);
    assert_eq!(city.kind(0), Some(BuildingKind::Entertainment));
    assert_eq!(city.kind(1), Some(BuildingKind::Factory));
}

#[test]
fn apply_snapshot_rejects_wrong_length_without_mutating() {
    let mut city = pair_city(0, 0);
    city.set_kind(0, BuildingKind::House).expect("plot 0 exists");
    let before = city.snapshot();

    let short = Snapshot::new(vec![BuildingKind::Factory]);
    let err = city
        .apply_snapshot(&short)
        .expect_err("length 1 must be rejected");
    assert_eq!(err, CityError::SnapshotLength { got: 1, expected: 2 });
    assert_eq!(city.snapshot(), before);
}

#[test]
fn builders_produce_independent_cities() {
    let mut first = pair_city(0, 0);
    let second = pair_city(0, 0);
    first
        .set_kind(0, BuildingKind::Factory)
        .expect("plot 0 exists");
    assert_eq!(second.kind(0), Some(BuildingKind::Empty));
}
