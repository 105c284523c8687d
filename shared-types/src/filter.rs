use serde::{Deserialize, Serialize};

use crate::geo::distance_km;
use crate::records::{Coordinate, InspectionRecord};

/// Brand and radius are independently optional; an absent constraint passes
/// every record on that axis. A reference point without a radius is an
/// unbounded spatial constraint, so it only excludes records that have no
/// usable position at all.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub reference_point: Option<Coordinate>,
    pub radius_km: Option<f64>,
    pub brand: Option<String>,
}

impl FilterCriteria {
    pub fn matches<R: InspectionRecord>(&self, record: &R) -> bool {
        if let Some(brand) = self.brand.as_deref() {
            if record.brand() != Some(brand) {
                return false;
            }
        }

        let Some(reference) = self.reference_point else {
            return true;
        };
        let Some(position) = record.position() else {
            return false;
        };
        match self.radius_km {
            Some(radius) => distance_km(reference, position) <= radius,
            None => true,
        }
    }
}

/// Stateless, order-preserving selection over the full in-memory collection.
pub fn select_matching<'r, R: InspectionRecord>(
    records: &'r [R],
    criteria: &FilterCriteria,
) -> Vec<&'r R> {
    records
        .iter()
        .filter(|record| criteria.matches(*record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ScaleRecord;

    fn record(brand: &str, lat: f64, lng: f64) -> ScaleRecord {
        ScaleRecord {
            brand: Some(brand.to_string()),
            latitude: Some(lat),
            longitude: Some(lng),
            ..Default::default()
        }
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let records = vec![
            record("ACME", 25.0, 121.5),
            record("Mettler", 24.1, 120.7),
            record("ACME", 22.6, 120.3),
        ];
        let selected = select_matching(&records, &FilterCriteria::default());
        assert_eq!(selected.len(), 3);
        for (kept, original) in selected.iter().zip(records.iter()) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn brand_match_is_exact_and_case_sensitive() {
        let records = vec![record("ACME", 25.0, 121.5), record("acme", 25.0, 121.5)];
        let criteria = FilterCriteria {
            brand: Some("ACME".to_string()),
            ..Default::default()
        };
        let selected = select_matching(&records, &criteria);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].brand.as_deref(), Some("ACME"));
    }

    #[test]
    fn zero_radius_keeps_only_the_exact_position() {
        let records = vec![
            record("ACME", 25.0478, 121.5319),
            // ~1 km east of the reference point
            record("ACME", 25.0478, 121.5418),
        ];
        let criteria = FilterCriteria {
            reference_point: Some(Coordinate::new(25.0478, 121.5319)),
            radius_km: Some(0.0),
            brand: None,
        };
        let selected = select_matching(&records, &criteria);
        assert_eq!(selected.len(), 1);

        let tighter = FilterCriteria {
            radius_km: Some(0.5),
            ..criteria
        };
        assert_eq!(select_matching(&records, &tighter).len(), 1);
    }

    #[test]
    fn taipei_station_five_km_radius_keeps_nearby_record() {
        let records = vec![record("ACME", 25.04, 121.53), record("ACME", 24.0, 120.0)];
        let criteria = FilterCriteria {
            reference_point: Some(Coordinate::new(25.0478, 121.5319)),
            radius_km: Some(5.0),
            brand: None,
        };
        let selected = select_matching(&records, &criteria);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].latitude, Some(25.04));
    }

    #[test]
    fn missing_radius_with_reference_point_is_unbounded() {
        let records = vec![record("ACME", 25.0, 121.5), record("ACME", 22.6, 120.3)];
        let criteria = FilterCriteria {
            reference_point: Some(Coordinate::new(25.0478, 121.5319)),
            radius_km: None,
            brand: None,
        };
        assert_eq!(select_matching(&records, &criteria).len(), 2);
    }

    #[test]
    fn positionless_record_fails_spatial_but_passes_without_reference() {
        let mut positionless = record("ACME", 0.0, 0.0);
        positionless.latitude = None;
        let records = vec![positionless];

        let spatial = FilterCriteria {
            reference_point: Some(Coordinate::new(25.0, 121.5)),
            radius_km: None,
            brand: None,
        };
        assert!(select_matching(&records, &spatial).is_empty());

        let brand_only = FilterCriteria {
            brand: Some("ACME".to_string()),
            ..Default::default()
        };
        assert_eq!(select_matching(&records, &brand_only).len(), 1);
    }
}
