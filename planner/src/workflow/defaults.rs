//! Built-in tables for the Grenoble to Abuja comparison.
//!
//! Factors are g CO2e per passenger-km (ADEME Base Carbone 2023, UK GHG
//! conversion factors 2023, ITF Transport Outlook). Distances, durations and
//! prices are rough mid-2024 estimates; costs are round trip, durations one
//! way including transfers.

use crate::workflow::config::{Place, TripEndpoints};
use ecotravel::math::GeoPoint;
use ecotravel::model::{
    Accommodation, EmissionFactors, Route, Scenario, Segment, TransportMode, TravelTables,
};

pub const OUTPUT_DIR: &str = "results";

pub fn trip() -> TripEndpoints {
    TripEndpoints {
        origin: Place {
            name: "Grenoble".into(),
            location: GeoPoint::new(45.1885, 5.7245),
        },
        destination: Place {
            name: "Abuja".into(),
            location: GeoPoint::new(9.0765, 7.3986),
        },
    }
}

pub fn emission_factors() -> EmissionFactors {
    EmissionFactors::new()
        // long haul economy, radiative forcing included
        .with(TransportMode::Plane, 250.0)
        .with(TransportMode::Train, 35.0)
        .with(TransportMode::Bus, 25.0)
        // single occupant
        .with(TransportMode::Car, 165.0)
        .with(TransportMode::CarPool, 42.0)
        // Ro-Pax ferry, low-end estimate
        .with(TransportMode::Ship, 18.0)
}

pub fn routes() -> Vec<Route> {
    use TransportMode::{Bus, Plane, Ship, Train};

    vec![
        Route {
            name: "Air Travel".into(),
            segments: vec![
                Segment::new(Train, 110.0, "Grenoble to Lyon St Exupéry Airport (LYS)"),
                Segment::new(Plane, 400.0, "Lyon (LYS) to Paris (CDG)"),
                Segment::new(Plane, 4200.0, "Paris (CDG) to Abuja (ABV)"),
            ],
            travel_time_hours: 10.0,
            cost_eur: 820.0,
        },
        Route {
            name: "Mixed Transport".into(),
            segments: vec![
                Segment::new(Train, 300.0, "Grenoble to Marseille"),
                Segment::new(Ship, 1800.0, "Marseille to Tangier (Morocco)"),
                Segment::new(Bus, 3500.0, "Tangier to Dakar (Senegal)"),
                Segment::new(Bus, 3200.0, "Dakar to Abuja (Nigeria)"),
            ],
            travel_time_hours: 175.0,
            cost_eur: 1200.0,
        },
        Route {
            name: "Land & Sea".into(),
            segments: vec![
                Segment::new(Train, 650.0, "Grenoble to Barcelona"),
                Segment::new(Ship, 1500.0, "Barcelona to Tangier (Morocco)"),
                Segment::new(Bus, 1200.0, "Tangier across Morocco/Western Sahara"),
                Segment::new(Bus, 1500.0, "Western Sahara border to Senegal border"),
                Segment::new(Bus, 2400.0, "Senegal border to Abuja"),
            ],
            travel_time_hours: 165.0,
            cost_eur: 1150.0,
        },
    ]
}

/// Daily prices in Abuja.
pub fn accommodations() -> Vec<Accommodation> {
    vec![
        Accommodation::new("Hotel", 90.0),
        Accommodation::new("Hostel", 30.0),
        Accommodation::new("Airbnb", 50.0),
    ]
}

pub fn scenarios() -> Vec<Scenario> {
    vec![Scenario::new("1-week", 7), Scenario::new("1-month", 30)]
}

pub fn tables() -> TravelTables {
    TravelTables {
        emission_factors: emission_factors(),
        routes: routes(),
        accommodations: accommodations(),
        scenarios: scenarios(),
    }
}
