use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Scale,
    Weighbridge,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Scale => "Market scales",
            Category::Weighbridge => "Weighbridges",
        }
    }
}

/// Inspection entry for a market-type platform scale. Field names mirror the
/// authority's published column headers; everything except the coordinates is
/// carried as-is for display.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ScaleRecord {
    #[serde(rename = "店名", default, deserialize_with = "lenient_string")]
    pub store_name: Option<String>,
    #[serde(rename = "廠牌", default, deserialize_with = "lenient_string")]
    pub brand: Option<String>,
    #[serde(rename = "型式", default, deserialize_with = "lenient_string")]
    pub model: Option<String>,
    #[serde(rename = "器物號碼", default, deserialize_with = "lenient_string")]
    pub serial_number: Option<String>,
    #[serde(rename = "檢定日期", default, deserialize_with = "lenient_string")]
    pub certification_date: Option<String>,
    #[serde(rename = "檢定合格單號", default, deserialize_with = "lenient_string")]
    pub certificate_number: Option<String>,
    #[serde(rename = "檢查日期", default, deserialize_with = "lenient_string")]
    pub inspection_date: Option<String>,
    #[serde(rename = "檢查合格與否", default, deserialize_with = "lenient_string")]
    pub inspection_result: Option<String>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub longitude: Option<f64>,
}

/// Inspection entry for a fixed vehicle weighbridge.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct WeighbridgeRecord {
    #[serde(rename = "所有人", default, deserialize_with = "lenient_string")]
    pub owner: Option<String>,
    #[serde(rename = "地址", default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(rename = "廠牌", default, deserialize_with = "lenient_string")]
    pub brand: Option<String>,
    #[serde(rename = "型式", default, deserialize_with = "lenient_string")]
    pub model: Option<String>,
    #[serde(rename = "Max", default, deserialize_with = "lenient_string")]
    pub capacity: Option<String>,
    #[serde(rename = "檢定日期", default, deserialize_with = "lenient_string")]
    pub certification_date: Option<String>,
    #[serde(rename = "檢定合格單號", default, deserialize_with = "lenient_string")]
    pub certificate_number: Option<String>,
    #[serde(rename = "檢查日期", default, deserialize_with = "lenient_string")]
    pub inspection_date: Option<String>,
    #[serde(rename = "檢查合格與否", default, deserialize_with = "lenient_string")]
    pub inspection_result: Option<String>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub longitude: Option<f64>,
}

pub trait InspectionRecord {
    fn category(&self) -> Category;
    fn position(&self) -> Option<Coordinate>;
    fn brand(&self) -> Option<&str>;
    fn inspection_result(&self) -> Option<&str>;

    /// A record fails only when the raw result, trimmed and uppercased, is
    /// exactly "N". Missing or blank results count as passed.
    fn passed(&self) -> bool {
        match self.inspection_result() {
            Some(result) => result.trim().to_uppercase() != "N",
            None => true,
        }
    }
}

impl InspectionRecord for ScaleRecord {
    fn category(&self) -> Category {
        Category::Scale
    }

    fn position(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
            _ => None,
        }
    }

    fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    fn inspection_result(&self) -> Option<&str> {
        self.inspection_result.as_deref()
    }
}

impl InspectionRecord for WeighbridgeRecord {
    fn category(&self) -> Category {
        Category::Weighbridge
    }

    fn position(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
            _ => None,
        }
    }

    fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    fn inspection_result(&self) -> Option<&str> {
        self.inspection_result.as_deref()
    }
}

// The published JSON is exported from spreadsheets, so scalar columns arrive
// as strings, numbers, or booleans depending on the export batch.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

// Coordinates come through as numbers or numeric strings; anything else
// leaves the record without a position instead of failing the whole payload.
fn lenient_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}
