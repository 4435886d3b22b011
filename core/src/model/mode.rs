use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of transport modes a segment can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransportMode {
    Plane,
    Train,
    Bus,
    Car,
    CarPool,
    Ship,
}

impl TransportMode {
    pub const ALL: [TransportMode; 6] = [
        TransportMode::Plane,
        TransportMode::Train,
        TransportMode::Bus,
        TransportMode::Car,
        TransportMode::CarPool,
        TransportMode::Ship,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TransportMode::Plane => "Plane",
            TransportMode::Train => "Train",
            TransportMode::Bus => "Bus",
            TransportMode::Car => "Car",
            TransportMode::CarPool => "CarPool",
            TransportMode::Ship => "Ship",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_serialized_names() {
        for mode in TransportMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.label()));
        }
    }

    #[test]
    fn unknown_mode_name_is_rejected() {
        let parsed: Result<TransportMode, _> = serde_json::from_str("\"Hovercraft\"");
        assert!(parsed.is_err());
    }
}
