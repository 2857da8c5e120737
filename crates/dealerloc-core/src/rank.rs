//! Distance ranking: haversine miles from an origin, stable ascending sort.

use crate::bbox::Origin;
use crate::dealer::DealerRecord;

const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance in miles between `origin` and a coordinate pair,
/// on a spherical earth (haversine).
#[must_use]
pub fn distance_miles(origin: Origin, latitude: f64, longitude: f64) -> f64 {
    let lat1 = origin.lat.to_radians();
    let lat2 = latitude.to_radians();
    let delta_lat = (latitude - origin.lat).to_radians();
    let delta_lng = (longitude - origin.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Annotates each record with its distance from `origin` and returns the
/// records sorted ascending by distance.
///
/// The sort is stable, so ties keep their original relative order — there
/// is no secondary key. Pure function of its inputs: identical inputs give
/// an identical output sequence.
#[must_use]
pub fn rank(mut records: Vec<DealerRecord>, origin: Origin) -> Vec<DealerRecord> {
    for record in &mut records {
        record.distance = Some(distance_miles(origin, record.latitude, record.longitude));
    }
    // Coordinates are validated at store entry, so distances are finite.
    records.sort_by(|a, b| {
        let da = a.distance.unwrap_or(f64::INFINITY);
        let db = b.distance.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, lat: f64, lng: f64) -> DealerRecord {
        DealerRecord {
            id: id.to_owned(),
            name: format!("Dealer {id}"),
            latitude: lat,
            longitude: lng,
            description: None,
            address: None,
            city: None,
            state: None,
            postal_code: None,
            phone: None,
            open_hours: None,
            diversity: None,
            website: None,
            distance: None,
        }
    }

    fn origin(lng: f64, lat: f64) -> Origin {
        Origin::new(lng, lat).unwrap()
    }

    #[test]
    fn distance_to_self_is_zero() {
        let d = distance_miles(origin(-94.58, 39.1), 39.1, -94.58);
        assert!(d.abs() < 1e-9);
    }

    #[test]
    fn one_degree_latitude_is_about_69_miles() {
        let d = distance_miles(origin(0.0, 0.0), 1.0, 0.0);
        assert!((d - 69.0).abs() < 0.5, "got {d}");
    }

    #[test]
    fn nearer_record_ranks_first() {
        let ranked = rank(
            vec![record("far", 2.0, 0.0), record("near", 1.0, 0.0)],
            origin(0.0, 0.0),
        );
        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["near", "far"]);
    }

    #[test]
    fn every_distance_is_annotated_and_non_negative() {
        let ranked = rank(
            vec![record("a", 2.0, 3.0), record("b", -1.0, -4.0)],
            origin(0.0, 0.0),
        );
        for r in &ranked {
            assert!(r.distance.unwrap() >= 0.0);
        }
    }

    #[test]
    fn output_is_non_decreasing() {
        let ranked = rank(
            vec![
                record("a", 5.0, 5.0),
                record("b", 1.0, 1.0),
                record("c", 3.0, 3.0),
                record("d", 0.5, 0.5),
            ],
            origin(0.0, 0.0),
        );
        let distances: Vec<f64> = ranked.iter().map(|r| r.distance.unwrap()).collect();
        for pair in distances.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn ties_preserve_input_order() {
        // Same point twice: equal distance, stable sort keeps input order.
        let ranked = rank(
            vec![record("first", 1.0, 1.0), record("second", 1.0, 1.0)],
            origin(0.0, 0.0),
        );
        let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);
    }

    #[test]
    fn rank_is_deterministic() {
        let input = vec![
            record("a", 10.0, -20.0),
            record("b", -5.0, 30.0),
            record("c", 42.0, 42.0),
        ];
        let o = origin(-94.58, 39.1);
        let once: Vec<String> = rank(input.clone(), o).into_iter().map(|r| r.id).collect();
        let twice: Vec<String> = rank(input, o).into_iter().map(|r| r.id).collect();
        assert_eq!(once, twice);
    }
}
