pub mod days;
pub mod geo;
pub mod stats;

pub use days::{round_trip_travel_days, travel_days_one_way};
pub use geo::{haversine_km, GeoPoint};
pub use stats::{first_min_by, GroupedMean};
