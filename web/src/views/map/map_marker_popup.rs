use leptos::prelude::*;
use shared_types::{ScaleRecord, WeighbridgeRecord};
use thaw::{Label, LabelSize};

/// One popup template for both categories: a title line and a fixed list of
/// labeled fields. Missing values render as empty strings.
#[component]
pub fn MapMarkerPopup(title: String, fields: Vec<(&'static str, String)>) -> impl IntoView {
    view! {
        <div style="margin: 0.5rem 0; display: flex; flex-direction: column; gap: 0.25rem;">
            <Label size=LabelSize::Large>{title}</Label>
            {fields
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <p style="margin: 0; color: #6b7280; font-size: 0.875rem;">
                            {format!("{label}: {value}")}
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

pub fn scale_popup(record: &ScaleRecord) -> (String, Vec<(&'static str, String)>) {
    let fields = vec![
        ("Brand", text(&record.brand)),
        ("Model", text(&record.model)),
        ("Serial no.", text(&record.serial_number)),
        ("Certified", text(&record.certification_date)),
        ("Certificate no.", text(&record.certificate_number)),
        ("Inspected", text(&record.inspection_date)),
        ("Result", text(&record.inspection_result)),
    ];
    (text(&record.store_name), fields)
}

pub fn weighbridge_popup(record: &WeighbridgeRecord) -> (String, Vec<(&'static str, String)>) {
    let fields = vec![
        ("Address", text(&record.address)),
        ("Brand", text(&record.brand)),
        ("Model", text(&record.model)),
        ("Capacity", text(&record.capacity)),
        ("Certified", text(&record.certification_date)),
        ("Certificate no.", text(&record.certificate_number)),
        ("Inspected", text(&record.inspection_date)),
        ("Result", text(&record.inspection_result)),
    ];
    (text(&record.owner), fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_render_as_empty_strings() {
        let (title, fields) = scale_popup(&ScaleRecord::default());
        assert_eq!(title, "");
        assert!(!fields.is_empty());
        assert!(fields.iter().all(|(_, value)| value.is_empty()));

        let (title, fields) = weighbridge_popup(&WeighbridgeRecord::default());
        assert_eq!(title, "");
        assert!(fields.iter().all(|(_, value)| value.is_empty()));
    }

    #[test]
    fn populated_fields_keep_their_raw_text() {
        let record = ScaleRecord {
            store_name: Some("南門市場".to_string()),
            brand: Some("ACME".to_string()),
            inspection_result: Some("N".to_string()),
            ..Default::default()
        };
        let (title, fields) = scale_popup(&record);
        assert_eq!(title, "南門市場");
        assert!(fields.contains(&("Brand", "ACME".to_string())));
        assert!(fields.contains(&("Result", "N".to_string())));
    }

    #[test]
    fn weighbridge_popup_carries_capacity_and_address() {
        let record = WeighbridgeRecord {
            owner: Some("台泥物流".to_string()),
            address: Some("桃園市龜山區".to_string()),
            capacity: Some("50000".to_string()),
            ..Default::default()
        };
        let (title, fields) = weighbridge_popup(&record);
        assert_eq!(title, "台泥物流");
        assert!(fields.contains(&("Address", "桃園市龜山區".to_string())));
        assert!(fields.contains(&("Capacity", "50000".to_string())));
    }
}
