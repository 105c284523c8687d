use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{Category, Coordinate};

use crate::views::map::map_marker_popup::MapMarkerPopup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    Fail,
    Scale,
    Weighbridge,
    Reference,
}

/// A failed inspection wins over the category color, whatever the category.
pub fn marker_icon(category: Category, passed: bool) -> MarkerIcon {
    if !passed {
        return MarkerIcon::Fail;
    }
    match category {
        Category::Scale => MarkerIcon::Scale,
        Category::Weighbridge => MarkerIcon::Weighbridge,
    }
}

impl MarkerIcon {
    fn fill(self) -> &'static str {
        match self {
            MarkerIcon::Fail => "%23dc2626",
            MarkerIcon::Scale => "%232563eb",
            MarkerIcon::Weighbridge => "%2316a34a",
            MarkerIcon::Reference => "%23111827",
        }
    }

    pub fn data_uri(self) -> String {
        format!(
            "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='25' height='41' viewBox='0 0 25 41'%3E%3Cpath fill='{}' stroke='%23ffffff' stroke-width='1.5' d='M12.5 1C6.4 1 1.5 5.9 1.5 12c0 7.6 11 28 11 28s11-20.4 11-28c0-6.1-4.9-11-11-11zm0 15a4 4 0 1 1 0-8 4 4 0 0 1 0 8z'/%3E%3C/svg%3E",
            self.fill()
        )
    }
}

#[component]
pub fn RecordMarker(
    position: Coordinate,
    icon: MarkerIcon,
    title: String,
    fields: Vec<(&'static str, String)>,
) -> impl IntoView {
    view! {
        <Marker
            position=Position::new(position.lat, position.lng)
            draggable=false
            icon_url=Some(icon.data_uri())
            icon_size=Some((25.0, 41.0))
            icon_anchor=Some((12.0, 41.0))
        >
            <Popup>
                <MapMarkerPopup title=title fields=fields />
            </Popup>
        </Marker>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_inspection_overrides_category() {
        assert_eq!(marker_icon(Category::Scale, false), MarkerIcon::Fail);
        assert_eq!(marker_icon(Category::Weighbridge, false), MarkerIcon::Fail);
    }

    #[test]
    fn passing_records_use_their_category_color() {
        assert_eq!(marker_icon(Category::Scale, true), MarkerIcon::Scale);
        assert_eq!(
            marker_icon(Category::Weighbridge, true),
            MarkerIcon::Weighbridge
        );
    }

    #[test]
    fn failed_record_near_taipei_station_is_matched_and_flagged() {
        use shared_types::{Coordinate, FilterCriteria, InspectionRecord, ScaleRecord};

        let record = ScaleRecord {
            inspection_result: Some("n".to_string()),
            latitude: Some(25.04),
            longitude: Some(121.53),
            ..Default::default()
        };
        let criteria = FilterCriteria {
            reference_point: Some(Coordinate::new(25.0478, 121.5319)),
            radius_km: Some(5.0),
            brand: None,
        };

        assert!(criteria.matches(&record));
        assert_eq!(
            marker_icon(record.category(), record.passed()),
            MarkerIcon::Fail
        );
    }

    #[test]
    fn icon_uris_are_distinct_per_color() {
        let uris = [
            MarkerIcon::Fail.data_uri(),
            MarkerIcon::Scale.data_uri(),
            MarkerIcon::Weighbridge.data_uri(),
            MarkerIcon::Reference.data_uri(),
        ];
        for (i, uri) in uris.iter().enumerate() {
            assert!(uri.starts_with("data:image/svg+xml,"));
            for other in &uris[i + 1..] {
                assert_ne!(uri, other);
            }
        }
    }
}
