use shared_types::{Coordinate, FilterCriteria};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Pick a reference point on the map before applying the filter")]
    MissingReferencePoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPhase {
    #[default]
    NoReferencePoint,
    ReferenceSet,
    Filtered,
}

/// All interaction state in one value, owned by the map page and threaded
/// through filtering and rendering.
///
/// `applied` is the criteria the markers are currently drawn from. It only
/// changes on an explicit apply or clear, so picking a new reference point
/// while filtered leaves the drawn subset alone until the filter is re-run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapFilterState {
    pub phase: FilterPhase,
    pub reference_point: Option<Coordinate>,
    pub applied: FilterCriteria,
}

impl MapFilterState {
    /// A map click always replaces the reference point, never merges.
    pub fn set_reference_point(&mut self, point: Coordinate) {
        self.reference_point = Some(point);
        self.phase = FilterPhase::ReferenceSet;
    }

    pub fn apply_filter(
        &mut self,
        radius_input: &str,
        brand_input: &str,
    ) -> Result<(), FilterError> {
        let reference = self
            .reference_point
            .ok_or(FilterError::MissingReferencePoint)?;

        self.applied = FilterCriteria {
            reference_point: Some(reference),
            radius_km: parse_radius(radius_input),
            brand: normalize_brand(brand_input),
        };
        self.phase = FilterPhase::Filtered;
        Ok(())
    }

    /// Back to the initial state: no reference point, unfiltered markers.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Empty or unparseable radius input means "no radius bound". A zero radius
/// is kept as a real, point-exact constraint.
pub fn parse_radius(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|radius| radius.is_finite() && *radius >= 0.0)
}

/// Empty brand input means "any brand"; matching stays exact on the trimmed
/// text, never case-folded.
pub fn normalize_brand(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
