//! Bicycle record and type definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bicycle types the fleet accepts.
///
/// The token form (`city`, `courier`, ...) is what the backing file and the
/// command line use. Matching is exact and case-sensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BicycleType {
    /// Upright city bike.
    City,
    /// Courier / cargo bike.
    Courier,
    /// Mountain bike.
    Mountain,
    /// Flat-bar road bike.
    Flat,
}

impl BicycleType {
    /// Every allowed type, in menu order.
    pub const ALL: [BicycleType; 4] = [Self::City, Self::Courier, Self::Mountain, Self::Flat];

    /// Token used in the backing file and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::City => "city",
            Self::Courier => "courier",
            Self::Mountain => "mountain",
            Self::Flat => "flat",
        }
    }

    /// Cycle to the next type: city → courier → mountain → flat → city
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::City => Self::Courier,
            Self::Courier => Self::Mountain,
            Self::Mountain => Self::Flat,
            Self::Flat => Self::City,
        }
    }

    /// Cycle backwards through the allow-list.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::City => Self::Flat,
            Self::Courier => Self::City,
            Self::Mountain => Self::Courier,
            Self::Flat => Self::Mountain,
        }
    }
}

impl fmt::Display for BicycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is not on the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBicycleType(pub String);

impl FromStr for BicycleType {
    type Err = UnknownBicycleType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownBicycleType(s.to_string()))
    }
}

/// A single bicycle in the fleet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BicycleRecord {
    /// Allow-listed bicycle type.
    #[serde(rename = "type")]
    pub kind: BicycleType,
    /// Where the bicycle is parked. A single token without whitespace.
    pub location: String,
    /// `true` when the bicycle can be borrowed, `false` while it is out.
    pub available: bool,
}

impl BicycleRecord {
    /// A freshly added bicycle, available for borrowing.
    pub fn new(kind: BicycleType, location: impl Into<String>) -> Self {
        Self {
            kind,
            location: location.into(),
            available: true,
        }
    }

    /// Human-readable availability label.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.available {
            crate::constants::LABEL_AVAILABLE
        } else {
            crate::constants::LABEL_BORROWED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allowed_types() {
        assert_eq!("city".parse(), Ok(BicycleType::City));
        assert_eq!("courier".parse(), Ok(BicycleType::Courier));
        assert_eq!("mountain".parse(), Ok(BicycleType::Mountain));
        assert_eq!("flat".parse(), Ok(BicycleType::Flat));
    }

    #[test]
    fn test_parse_rejects_unknown_and_case() {
        assert_eq!(
            "hybrid".parse::<BicycleType>(),
            Err(UnknownBicycleType("hybrid".to_string()))
        );
        assert!("City".parse::<BicycleType>().is_err());
        assert!("".parse::<BicycleType>().is_err());
    }

    #[test]
    fn test_type_cycle() {
        assert_eq!(BicycleType::City.next(), BicycleType::Courier);
        assert_eq!(BicycleType::Flat.next(), BicycleType::City);
        assert_eq!(BicycleType::City.prev(), BicycleType::Flat);
        for kind in BicycleType::ALL {
            assert_eq!(kind.next().prev(), kind);
        }
    }

    #[test]
    fn test_new_record_is_available() {
        let bike = BicycleRecord::new(BicycleType::Mountain, "depot-1");
        assert!(bike.available);
        assert_eq!(bike.status_label(), "Available");
    }

    #[test]
    fn test_record_json_shape() {
        let bike = BicycleRecord::new(BicycleType::Flat, "north");
        let json = serde_json::to_value(&bike).unwrap();
        assert_eq!(json["type"], "flat");
        assert_eq!(json["location"], "north");
        assert_eq!(json["available"], true);
    }
}
