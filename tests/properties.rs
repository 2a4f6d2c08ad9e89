use std::collections::HashMap;

use city_tour::constructive::nearest_neighbor;
use city_tour::distance::{haversine, DistanceMatrix};
use city_tour::evaluation::route_length;
use city_tour::models::Coordinate;
use city_tour::Error;
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0, -180.0f64..=180.0)
        .prop_map(|(lat, lon)| Coordinate::new(lat, lon).expect("in range"))
}

fn coordinates(max: usize) -> impl Strategy<Value = Vec<Coordinate>> {
    prop::collection::vec(coordinate(), 1..max)
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        prop_assert!((haversine(&a, &b) - haversine(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn distance_zero_identity(a in coordinate()) {
        prop_assert_eq!(haversine(&a, &a), 0.0);
    }

    #[test]
    fn distance_is_bounded(a in coordinate(), b in coordinate()) {
        let d = haversine(&a, &b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * city_tour::distance::EARTH_RADIUS_KM + 1e-6);
    }

    #[test]
    fn matrix_is_well_formed(coords in coordinates(20)) {
        let ids: Vec<usize> = (0..coords.len()).collect();
        let map: HashMap<usize, Coordinate> = ids.iter().copied().zip(coords.iter().copied()).collect();
        let dm = DistanceMatrix::from_points(&ids, &map).expect("all resolved");
        prop_assert_eq!(dm.size(), coords.len());
        for i in 0..dm.size() {
            prop_assert_eq!(dm.get(i, i), 0.0);
            for j in 0..dm.size() {
                prop_assert_eq!(dm.get(i, j), dm.get(j, i));
                prop_assert!(dm.get(i, j) >= 0.0);
                if i != j && coords[i] != coords[j] {
                    prop_assert!(dm.get(i, j) > 0.0);
                }
            }
        }
    }

    #[test]
    fn tour_is_complete(coords in coordinates(25), start_seed in any::<usize>()) {
        let dm = DistanceMatrix::from_coordinates(&coords);
        let n = dm.size();
        let start = start_seed % n;
        let tour = nearest_neighbor(&dm, start).expect("valid input");
        let route = tour.route();

        prop_assert_eq!(route.len(), n + 1);
        prop_assert_eq!(route[0], start);
        prop_assert_eq!(route[n], start);

        let mut interior = route[1..n].to_vec();
        interior.sort_unstable();
        let expected: Vec<usize> = (0..n).filter(|&i| i != start).collect();
        prop_assert_eq!(interior, expected);
    }

    #[test]
    fn tour_length_is_consistent(coords in coordinates(25), start_seed in any::<usize>()) {
        let dm = DistanceMatrix::from_coordinates(&coords);
        let tour = nearest_neighbor(&dm, start_seed % dm.size()).expect("valid input");
        let recomputed = route_length(&dm, tour.route()).expect("route fits matrix");
        prop_assert!((tour.total_length() - recomputed).abs() <= 1e-9 * recomputed.max(1.0));
    }

    #[test]
    fn tour_is_deterministic(coords in coordinates(25), start_seed in any::<usize>()) {
        let dm = DistanceMatrix::from_coordinates(&coords);
        let start = start_seed % dm.size();
        let a = nearest_neighbor(&dm, start).expect("valid input");
        let b = nearest_neighbor(&dm, start).expect("valid input");
        prop_assert_eq!(a.route(), b.route());
        prop_assert_eq!(a.total_length().to_bits(), b.total_length().to_bits());
    }

    #[test]
    fn first_step_is_nearest(coords in coordinates(25), start_seed in any::<usize>()) {
        let dm = DistanceMatrix::from_coordinates(&coords);
        let n = dm.size();
        prop_assume!(n >= 2);
        let start = start_seed % n;
        let tour = nearest_neighbor(&dm, start).expect("valid input");
        let first = tour.route()[1];
        for j in (0..n).filter(|&j| j != start) {
            prop_assert!(dm.get(start, first) <= dm.get(start, j));
            if dm.get(start, j) == dm.get(start, first) {
                prop_assert!(first <= j);
            }
        }
    }

    #[test]
    fn start_out_of_range_is_rejected(coords in coordinates(10), extra in 0usize..5) {
        let dm = DistanceMatrix::from_coordinates(&coords);
        let index = dm.size() + extra;
        prop_assert_eq!(
            nearest_neighbor(&dm, index),
            Err(Error::InvalidStartIndex { index, size: dm.size() })
        );
    }
}

#[test]
fn empty_input_is_rejected() {
    let dm = DistanceMatrix::from_coordinates(&[]);
    assert_eq!(nearest_neighbor(&dm, 0), Err(Error::EmptyInput));
}

#[test]
fn tour_serializes_to_json() {
    let coords = [
        Coordinate::new(0.0, 0.0).expect("valid"),
        Coordinate::new(0.0, 1.0).expect("valid"),
    ];
    let dm = DistanceMatrix::from_coordinates(&coords);
    let tour = nearest_neighbor(&dm, 1).expect("valid");
    let json = serde_json::to_value(&tour).expect("serializable");
    assert_eq!(json["route"], serde_json::json!([1, 0, 1]));
}
