pub const HOURS_PER_DAY: f64 = 24.0;

/// Whole travel days for one leg; any partial day counts as a full day.
/// Travel times beyond `u64` days saturate.
pub fn travel_days_one_way(travel_time_hours: f64) -> u64 {
    (travel_time_hours / HOURS_PER_DAY).ceil() as u64
}

/// Round-trip travel days: the one-way leg is rounded up first and then
/// doubled, which can exceed `ceil(2 * hours / 24)`.
pub fn round_trip_travel_days(travel_time_hours: f64) -> u64 {
    travel_days_one_way(travel_time_hours).saturating_mul(2)
}
