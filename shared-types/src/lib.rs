pub mod filter;
pub mod geo;
pub mod records;

pub use filter::{select_matching, FilterCriteria};
pub use records::{Category, Coordinate, InspectionRecord, ScaleRecord, WeighbridgeRecord};
