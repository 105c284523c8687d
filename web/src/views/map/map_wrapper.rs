use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, FlexAlign, Input, Label};

use crate::{
    components::error::ErrorView,
    server::{fetch_scale_records, fetch_weighbridge_records},
    views::map::{
        drop_down_brands::DropDownBrands,
        map_renderer::MapRenderer,
        state::{FilterError, FilterPhase, MapFilterState},
    },
};
use shared_types::select_matching;

#[component]
pub fn InspectionMap() -> impl IntoView {
    let filter_state = RwSignal::new(MapFilterState::default());
    let radius_input = RwSignal::new(String::new());
    let brand_input: RwSignal<Option<String>> = RwSignal::new(None);
    let show_scales = RwSignal::new(true);
    let show_weighbridges = RwSignal::new(true);
    let filter_error: RwSignal<Option<String>> = RwSignal::new(None);

    // The two datasets load independently; whichever arrives first renders
    // first, and one failing leaves the other alone.
    let scale_records = Resource::new(|| (), |_| fetch_scale_records());
    let weighbridge_records = Resource::new(|| (), |_| fetch_weighbridge_records());

    let brands = Signal::derive(move || {
        let mut brands: Vec<String> = Vec::new();
        if let Some(Ok(records)) = scale_records.get() {
            brands.extend(records.iter().filter_map(|record| record.brand.clone()));
        }
        if let Some(Ok(records)) = weighbridge_records.get() {
            brands.extend(records.iter().filter_map(|record| record.brand.clone()));
        }
        brands.sort();
        brands.dedup();
        brands
    });

    // Counts are the lengths of the exact subsets being drawn, recomputed
    // from the full collections; they can never drift from the markers. A
    // hidden layer draws nothing, so it counts as zero.
    let scale_count = move || {
        if !show_scales.get() {
            return 0;
        }
        let criteria = filter_state.with(|state| state.applied.clone());
        match scale_records.get() {
            Some(Ok(records)) => select_matching(&records, &criteria).len(),
            _ => 0,
        }
    };
    let weighbridge_count = move || {
        if !show_weighbridges.get() {
            return 0;
        }
        let criteria = filter_state.with(|state| state.applied.clone());
        match weighbridge_records.get() {
            Some(Ok(records)) => select_matching(&records, &criteria).len(),
            _ => 0,
        }
    };

    let apply_filter = move |_ev: web_sys::MouseEvent| {
        let radius = radius_input.get_untracked();
        let brand = brand_input.get_untracked().unwrap_or_default();
        let mut outcome: Result<(), FilterError> = Ok(());
        filter_state.update(|state| outcome = state.apply_filter(&radius, &brand));
        filter_error.set(outcome.err().map(|e| e.to_string()));
    };

    let clear_filter = move |_ev: web_sys::MouseEvent| {
        filter_state.update(|state| state.clear());
        radius_input.set(String::new());
        brand_input.set(None);
        filter_error.set(None);
    };

    let phase_hint = move || match filter_state.get().phase {
        FilterPhase::NoReferencePoint => "Click the map to set a reference point.",
        FilterPhase::ReferenceSet => {
            "Reference point set. Apply the filter to redraw the markers."
        }
        FilterPhase::Filtered => {
            "Markers show the applied filter. Click the map to move the reference point."
        }
    };

    view! {
        <div class="inspection-container">
            <div class="inspection-header">
                <h1>"Weighing-device inspections"</h1>
                <div class="inspection-stats">
                    <div class="stat-item">
                        <span class="stat-number">{scale_count}</span>
                        <span>"market scales"</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number">{weighbridge_count}</span>
                        <span>"weighbridges"</span>
                    </div>
                </div>
            </div>

            <div class="inspection-content">
                <div class="inspection-sidebar">
                    <div class="sidebar-header">
                        <h2>"Filters"</h2>
                    </div>

                    <div class="sidebar-content">
                        {move || filter_error.get().map(|message| view! {
                            <ErrorView message=Some(message) />
                        })}

                        <p class="filter-hint">{phase_hint}</p>

                        <div class="filter-section">
                            <h3>"Distance"</h3>
                            <Flex vertical=true align=FlexAlign::Start>
                                <Label>"Radius (km)"</Label>
                                <Input placeholder="e.g. 5" value=radius_input />
                            </Flex>
                        </div>

                        <div class="filter-section">
                            <h3>"Brand"</h3>
                            <DropDownBrands brand=brand_input brands=brands />
                        </div>

                        <div class="filter-section">
                            <h3>"Layers"</h3>
                            <label class="layer-checkbox-label">
                                <input
                                    type="checkbox"
                                    on:change=move |ev| show_scales.set(event_target_checked(&ev))
                                    checked=move || show_scales.get()
                                />
                                <span>"Market scales"</span>
                            </label>
                            <label class="layer-checkbox-label">
                                <input
                                    type="checkbox"
                                    on:change=move |ev| show_weighbridges.set(event_target_checked(&ev))
                                    checked=move || show_weighbridges.get()
                                />
                                <span>"Weighbridges"</span>
                            </label>
                        </div>

                        <Flex>
                            <Button appearance=ButtonAppearance::Primary on_click=apply_filter>
                                "Apply filter"
                            </Button>
                            <Button on_click=clear_filter>"Clear filter"</Button>
                        </Flex>
                    </div>
                </div>

                <div class="inspection-map-wrapper">
                    <MapRenderer
                        filter_state=filter_state
                        radius_input=radius_input
                        show_scales=show_scales
                        show_weighbridges=show_weighbridges
                        scale_records=scale_records
                        weighbridge_records=weighbridge_records
                    />

                    <div class="map-info-control">
                        <b>"Market scales: "</b>{scale_count}<br/>
                        <b>"Weighbridges: "</b>{weighbridge_count}
                    </div>

                    <div class="map-legend">
                        <h4>"Map Legend"</h4>
                        <div class="legend-items">
                            <div class="legend-item">
                                <div class="legend-marker legend-scale"></div>
                                <span>"Market scale, passed"</span>
                            </div>
                            <div class="legend-item">
                                <div class="legend-marker legend-weighbridge"></div>
                                <span>"Weighbridge, passed"</span>
                            </div>
                            <div class="legend-item">
                                <div class="legend-marker legend-fail"></div>
                                <span>"Failed inspection"</span>
                            </div>
                            <div class="legend-item">
                                <div class="legend-marker legend-reference"></div>
                                <span>"Reference point"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
