use crate::records::Coordinate;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers (haversine). Kilometers are the one
/// distance unit used throughout the application.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAIPEI: Coordinate = Coordinate {
        lat: 25.03236,
        lng: 121.51813,
    };
    const KAOHSIUNG: Coordinate = Coordinate {
        lat: 22.62792,
        lng: 120.30143,
    };

    #[test]
    fn identical_points_are_exactly_zero() {
        assert_eq!(distance_km(TAIPEI, TAIPEI), 0.0);
        assert_eq!(distance_km(KAOHSIUNG, KAOHSIUNG), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = distance_km(TAIPEI, KAOHSIUNG);
        let back = distance_km(KAOHSIUNG, TAIPEI);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn taipei_to_kaohsiung_is_about_295_km() {
        let d = distance_km(TAIPEI, KAOHSIUNG);
        assert!((d - 295.0).abs() < 3.0, "got {d} km");
    }

    #[test]
    fn short_distances_stay_in_scale() {
        // Taipei main station to a point ~1 km east.
        let station = Coordinate::new(25.0478, 121.5319);
        let nearby = Coordinate::new(25.0478, 121.5418);
        let d = distance_km(station, nearby);
        assert!((0.9..1.1).contains(&d), "got {d} km");
    }
}
