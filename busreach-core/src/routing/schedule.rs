//! Single-route bus journey search over stop timetables.
//!
//! A journey walks from the origin to a boarding stop, waits for the next
//! scheduled time there, rides to an alighting stop (the next scheduled time
//! at that stop after boarding) and walks on to the destination. Every pair
//! of boarding and alighting stops on the route is tried.

use crate::{
    Error, MINUTES_PER_DAY, Minutes, OsmId, Route, WalkingMatrix, seconds_to_minutes,
};

/// Fastest single-route journey found for an origin/destination pair
#[derive(Debug, Clone, PartialEq)]
pub struct BusJourney {
    pub board_stop: OsmId,
    pub alight_stop: OsmId,
    /// Scheduled time at the boarding stop
    pub board_time: Minutes,
    /// Scheduled time at the alighting stop
    pub alight_time: Minutes,
    /// Walk from the origin to the boarding stop, minutes
    pub access_walk: f64,
    /// Walk from the alighting stop to the destination, minutes
    pub egress_walk: f64,
    /// Door-to-door time, minutes
    pub total: f64,
}

/// Minimum travel time in minutes using `route`, or `None` when no boarding
/// and alighting pair is feasible today.
///
/// # Errors
///
/// `InvalidTime` if `departure_time` is not within the day,
/// `MissingDistanceEntry` if the matrix lacks an origin or destination entry
/// for any stop of the route.
pub fn travel_time(
    matrix: &WalkingMatrix,
    route: &Route,
    departure_time: Minutes,
    origin: &OsmId,
    destination: &OsmId,
) -> Result<Option<f64>, Error> {
    best_journey(matrix, route, departure_time, origin, destination)
        .map(|journey| journey.map(|j| j.total))
}

/// Same search as [`travel_time`], returning the winning journey.
///
/// Ties keep the first pair found, boarding stops in route order first.
///
/// # Errors
///
/// See [`travel_time`].
pub fn best_journey(
    matrix: &WalkingMatrix,
    route: &Route,
    departure_time: Minutes,
    origin: &OsmId,
    destination: &OsmId,
) -> Result<Option<BusJourney>, Error> {
    if departure_time >= MINUTES_PER_DAY {
        return Err(Error::InvalidTime(departure_time));
    }

    // All lookups happen up front, so a missing entry fails even when the
    // stop would be infeasible anyway
    let access = walking_minutes(matrix, route, origin)?;
    let egress = walking_minutes(matrix, route, destination)?;

    let departure = f64::from(departure_time);
    let mut best: Option<BusJourney> = None;

    for (board_stop, access_walk) in route.stops.iter().zip(&access) {
        let Some(access_walk) = *access_walk else {
            continue;
        };
        let Some(board_time) = board_stop.next_after(departure + access_walk) else {
            continue;
        };

        for (alight_stop, egress_walk) in route.stops.iter().zip(&egress) {
            let Some(egress_walk) = *egress_walk else {
                continue;
            };
            let Some(alight_time) = alight_stop.next_after(f64::from(board_time)) else {
                continue;
            };

            let total = f64::from(alight_time) - departure + egress_walk;
            if best.as_ref().is_none_or(|b| total < b.total) {
                best = Some(BusJourney {
                    board_stop: board_stop.id,
                    alight_stop: alight_stop.id,
                    board_time,
                    alight_time,
                    access_walk,
                    egress_walk,
                    total,
                });
            }
        }
    }

    Ok(best)
}

/// Walking minutes between `point` and each stop of the route, `None` for
/// unreachable stops
fn walking_minutes(
    matrix: &WalkingMatrix,
    route: &Route,
    point: &OsmId,
) -> Result<Vec<Option<f64>>, Error> {
    route
        .stop_ids()
        .map(|stop| matrix.get(point, stop).map(|walk| walk.map(seconds_to_minutes)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DayType, Stop, WalkingTime};
    use proptest::prelude::*;

    const ORIGIN: OsmId = OsmId::node(100);
    const DESTINATION: OsmId = OsmId::node(200);

    fn route(stops: Vec<(u64, Vec<Minutes>)>) -> Route {
        Route::new(
            DayType::Weekday,
            "Test",
            "Operator",
            stops
                .into_iter()
                .map(|(id, times)| Stop::new(OsmId::node(id), times).unwrap())
                .collect(),
        )
        .unwrap()
    }

    /// Matrix rows for `ORIGIN` and `DESTINATION`, walking times in seconds
    fn matrix(
        stops: &[u64],
        origin: Vec<Option<WalkingTime>>,
        destination: Vec<Option<WalkingTime>>,
    ) -> WalkingMatrix {
        let stops = stops.iter().map(|&id| OsmId::node(id)).collect();
        WalkingMatrix::new(
            vec![ORIGIN, DESTINATION],
            stops,
            origin.into_iter().chain(destination).collect(),
        )
        .unwrap()
    }

    #[test]
    fn boards_next_departure_and_alights_at_same_stop() {
        // walk 10 min to reach the stop at 590, board at 600, next time at
        // the same stop is 700
        let route = route(vec![(1, vec![600, 700])]);
        let matrix = matrix(&[1], vec![Some(600)], vec![Some(0)]);

        let result = travel_time(&matrix, &route, 580, &ORIGIN, &DESTINATION).unwrap();
        assert_eq!(result, Some(120.0));
    }

    #[test]
    fn no_later_departure_is_unreachable() {
        let route = route(vec![(1, vec![600, 700])]);
        let matrix = matrix(&[1], vec![Some(600)], vec![Some(0)]);

        let result = travel_time(&matrix, &route, 695, &ORIGIN, &DESTINATION).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn departure_equal_to_arrival_is_missed() {
        // arriving exactly at 600 must wait for the 700 bus
        let route = route(vec![(1, vec![600, 700, 800])]);
        let matrix = matrix(&[1], vec![Some(1200)], vec![Some(0)]);

        let journey = best_journey(&matrix, &route, 580, &ORIGIN, &DESTINATION)
            .unwrap()
            .unwrap();
        assert_eq!(journey.board_time, 700);
        assert_eq!(journey.alight_time, 800);
    }

    #[test]
    fn picks_cheapest_pair_on_multi_stop_route() {
        let route = route(vec![
            (1, vec![600, 660]),
            (2, vec![610, 670]),
            (3, vec![625, 685]),
        ]);
        // origin near stop 1, destination near stop 3
        let matrix = matrix(
            &[1, 2, 3],
            vec![Some(120), Some(900), Some(1800)],
            vec![Some(1800), Some(1800), Some(60)],
        );

        let journey = best_journey(&matrix, &route, 590, &ORIGIN, &DESTINATION)
            .unwrap()
            .unwrap();
        assert_eq!(journey.board_stop, OsmId::node(1));
        assert_eq!(journey.alight_stop, OsmId::node(3));
        assert_eq!(journey.board_time, 600);
        assert_eq!(journey.alight_time, 625);
        assert!((journey.total - 36.0).abs() < 1e-9);
        assert!(
            (journey.total
                - (f64::from(journey.alight_time) - 590.0 + journey.egress_walk))
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn unreachable_stops_are_skipped_not_zero() {
        let route = route(vec![(1, vec![600, 700]), (2, vec![610, 710])]);
        let matrix = matrix(&[1, 2], vec![None, Some(60)], vec![Some(60), None]);

        let journey = best_journey(&matrix, &route, 590, &ORIGIN, &DESTINATION)
            .unwrap()
            .unwrap();
        assert_eq!(journey.board_stop, OsmId::node(2));
        assert_eq!(journey.alight_stop, OsmId::node(1));
        // board at 2 at 610, next time at 1 after 610 is 700
        assert!((journey.total - 111.0).abs() < 1e-9);

        let cut_off = matrix_with_all_unreachable();
        assert_eq!(
            travel_time(&cut_off, &route, 590, &ORIGIN, &DESTINATION).unwrap(),
            None
        );
    }

    fn matrix_with_all_unreachable() -> WalkingMatrix {
        matrix(&[1, 2], vec![None, None], vec![Some(0), Some(0)])
    }

    #[test]
    fn missing_matrix_entry_fails() {
        let route = route(vec![(1, vec![600]), (9, vec![610])]);
        let matrix = matrix(&[1], vec![Some(0)], vec![Some(0)]);

        let err = travel_time(&matrix, &route, 500, &ORIGIN, &DESTINATION).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingDistanceEntry { point, stop }
                if point == ORIGIN && stop == OsmId::node(9)
        ));

        let stranger = OsmId::way(5);
        assert!(matches!(
            travel_time(&matrix, &route, 500, &stranger, &DESTINATION),
            Err(Error::MissingDistanceEntry { .. })
        ));
    }

    #[test]
    fn departure_outside_day_is_rejected() {
        let route = route(vec![(1, vec![600])]);
        let matrix = matrix(&[1], vec![Some(0)], vec![Some(0)]);
        assert!(matches!(
            travel_time(&matrix, &route, 1440, &ORIGIN, &DESTINATION),
            Err(Error::InvalidTime(1440))
        ));
    }

    /// Exhaustive reference: every pair, linear scans
    fn reference(
        stops: &[(u64, Vec<Minutes>)],
        access: &[Option<WalkingTime>],
        egress: &[Option<WalkingTime>],
        departure: Minutes,
    ) -> Option<f64> {
        let mut best: Option<f64> = None;
        for (a, (_, board_times)) in stops.iter().enumerate() {
            let Some(walk) = access[a] else { continue };
            let arrival = f64::from(departure) + f64::from(walk) / 60.0;
            let Some(&dep) = board_times.iter().find(|&&t| f64::from(t) > arrival) else {
                continue;
            };
            for (b, (_, alight_times)) in stops.iter().enumerate() {
                let Some(walk) = egress[b] else { continue };
                let Some(&arr) = alight_times.iter().find(|&&t| t > dep) else {
                    continue;
                };
                let total = f64::from(arr) - f64::from(departure) + f64::from(walk) / 60.0;
                best = Some(best.map_or(total, |b| b.min(total)));
            }
        }
        best
    }

    fn schedule() -> impl Strategy<Value = Vec<Minutes>> {
        prop::collection::vec(300u32..1400, 0..8).prop_map(|mut times| {
            times.sort_unstable();
            times
        })
    }

    proptest! {
        #[test]
        fn matches_exhaustive_pairwise_search(
            schedules in prop::collection::vec(schedule(), 1..5),
            walks in prop::collection::vec(
                (prop::option::weighted(0.85, 0u32..3600), prop::option::weighted(0.85, 0u32..3600)),
                5,
            ),
            departure in 0u32..1440,
        ) {
            let stops: Vec<(u64, Vec<Minutes>)> = schedules
                .into_iter()
                .enumerate()
                .map(|(i, times)| (i as u64 + 1, times))
                .collect();
            let ids: Vec<u64> = stops.iter().map(|(id, _)| *id).collect();
            let access: Vec<_> = walks.iter().take(stops.len()).map(|w| w.0).collect();
            let egress: Vec<_> = walks.iter().take(stops.len()).map(|w| w.1).collect();

            let matrix = matrix(&ids, access.clone(), egress.clone());
            let route = route(stops.clone());

            let found = travel_time(&matrix, &route, departure, &ORIGIN, &DESTINATION).unwrap();
            let expected = reference(&stops, &access, &egress, departure);
            match (found, expected) {
                (Some(f), Some(e)) => prop_assert!((f - e).abs() < 1e-9),
                (f, e) => prop_assert_eq!(f, e),
            }
            if let Some(total) = found {
                prop_assert!(total > 0.0);
            }
        }
    }
}
