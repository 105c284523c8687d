use crate::{
    components::{error::ErrorView, loading::LoadingView},
    views::map::{
        map_marker::{marker_icon, MarkerIcon, RecordMarker},
        map_marker_popup::{scale_popup, weighbridge_popup},
        state::{parse_radius, MapFilterState},
    },
};
use leptos::prelude::*;
use leptos_leaflet::{
    leaflet::{Map, MouseEvent},
    prelude::*,
};
use shared_types::{select_matching, Coordinate, InspectionRecord, ScaleRecord, WeighbridgeRecord};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

/// Default view over the Taipei basin, where both datasets cluster.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 25.03236,
    lng: 121.51813,
};

#[component]
pub fn MapRenderer(
    filter_state: RwSignal<MapFilterState>,
    radius_input: RwSignal<String>,
    show_scales: RwSignal<bool>,
    show_weighbridges: RwSignal<bool>,
    scale_records: Resource<Result<Vec<ScaleRecord>, ServerFnError>>,
    weighbridge_records: Resource<Result<Vec<WeighbridgeRecord>, ServerFnError>>,
) -> impl IntoView {
    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    // Every click replaces the reference point; the drawn subset only moves
    // on an explicit apply.
    Effect::new(move |_| {
        let Some(map_instance) = map.get() else {
            return;
        };

        let cb: Closure<dyn FnMut(MouseEvent)> = Closure::wrap(Box::new(move |event: MouseEvent| {
            let clicked = event.lat_lng();
            let point = Coordinate::new(clicked.lat(), clicked.lng());
            filter_state.update(|state| state.set_reference_point(point));
        }));

        let raw_map: &EventTarget = map_instance.unchecked_ref();
        raw_map
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .expect("Failed to attach");

        cb.forget();
    });

    view! {
        <MapContainer
            style="height: 100%; width: 100%; flex: 1"
            center=Position::new(DEFAULT_CENTER.lat, DEFAULT_CENTER.lng)
            zoom=10.0
            set_view=true
            map=map.write_only()
        >
            <TileLayer
                url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            />
            {move ||
                filter_state.get().reference_point.map(|point| {
                    let radius_m = parse_radius(&radius_input.get()).map(|km| km * 1000.0);
                    view! {
                        <Marker
                            position=Position::new(point.lat, point.lng)
                            draggable=false
                            icon_url=Some(MarkerIcon::Reference.data_uri())
                            icon_size=Some((25.0, 41.0))
                            icon_anchor=Some((12.0, 41.0))
                        >
                            <Popup>
                                <p style="margin: 0;">"Reference point"</p>
                            </Popup>
                        </Marker>
                        {radius_m.map(|radius| view! {
                            <Circle
                                center=Position::new(point.lat, point.lng)
                                radius=radius
                            />
                        })}
                    }
                })
            }
            {move || {
                if !show_scales.get() {
                    return ().into_any();
                }
                match scale_records.get() {
                    Some(Ok(records)) => {
                        let criteria = filter_state.with(|state| state.applied.clone());
                        select_matching(&records, &criteria)
                            .into_iter()
                            .filter_map(|record| {
                                let position = record.position()?;
                                let icon = marker_icon(record.category(), record.passed());
                                let (title, fields) = scale_popup(record);
                                Some(view! {
                                    <RecordMarker position=position icon=icon title=title fields=fields />
                                })
                            })
                            .collect_view()
                            .into_any()
                    }
                    Some(Err(err)) => {
                        leptos::logging::error!("Error fetching scale records: {}", err);
                        view! {
                            <ErrorView message=Some("Market scale data is unavailable.".to_string()) />
                        }.into_any()
                    }
                    None => view! {
                        <LoadingView message=Some("Fetching market scales...".to_string()) />
                    }.into_any(),
                }
            }}
            {move || {
                if !show_weighbridges.get() {
                    return ().into_any();
                }
                match weighbridge_records.get() {
                    Some(Ok(records)) => {
                        let criteria = filter_state.with(|state| state.applied.clone());
                        select_matching(&records, &criteria)
                            .into_iter()
                            .filter_map(|record| {
                                let position = record.position()?;
                                let icon = marker_icon(record.category(), record.passed());
                                let (title, fields) = weighbridge_popup(record);
                                Some(view! {
                                    <RecordMarker position=position icon=icon title=title fields=fields />
                                })
                            })
                            .collect_view()
                            .into_any()
                    }
                    Some(Err(err)) => {
                        leptos::logging::error!("Error fetching weighbridge records: {}", err);
                        view! {
                            <ErrorView message=Some("Weighbridge data is unavailable.".to_string()) />
                        }.into_any()
                    }
                    None => view! {
                        <LoadingView message=Some("Fetching weighbridges...".to_string()) />
                    }.into_any(),
                }
            }}
        </MapContainer>
    }
}
