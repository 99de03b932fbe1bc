//! Bus route data model

mod merced;
pub mod registry;
pub mod types;

pub use registry::RouteRegistry;
pub use types::{DayType, Route, Stop};
