//! Routing between logical pose-estimate variants and their bus keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::keys;

/// Which alliance wall the field origin is placed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alliance {
    Blue,
    Red,
}

/// Upstream localization algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// MegaTag1: multi-tag solve with no orientation input.
    MegaTag1,
    /// MegaTag2: solve seeded with the robot's reported heading.
    MegaTag2,
}

/// One of the four pose-estimate entries the camera publishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TelemetryVariant {
    #[default]
    BlueMegaTag1,
    BlueMegaTag2,
    RedMegaTag1,
    RedMegaTag2,
}

impl TelemetryVariant {
    /// Every variant, in key-table order.
    pub const ALL: [TelemetryVariant; 4] = [
        TelemetryVariant::BlueMegaTag1,
        TelemetryVariant::BlueMegaTag2,
        TelemetryVariant::RedMegaTag1,
        TelemetryVariant::RedMegaTag2,
    ];

    /// Picks the variant for an alliance origin and algorithm.
    pub fn new(alliance: Alliance, algorithm: Algorithm) -> Self {
        match (alliance, algorithm) {
            (Alliance::Blue, Algorithm::MegaTag1) => TelemetryVariant::BlueMegaTag1,
            (Alliance::Blue, Algorithm::MegaTag2) => TelemetryVariant::BlueMegaTag2,
            (Alliance::Red, Algorithm::MegaTag1) => TelemetryVariant::RedMegaTag1,
            (Alliance::Red, Algorithm::MegaTag2) => TelemetryVariant::RedMegaTag2,
        }
    }

    /// The bus entry that carries this variant's pose-estimate array.
    pub fn key_name(&self) -> &'static str {
        match self {
            TelemetryVariant::BlueMegaTag1 => keys::BOTPOSE_WPIBLUE,
            TelemetryVariant::BlueMegaTag2 => keys::BOTPOSE_ORB_WPIBLUE,
            TelemetryVariant::RedMegaTag1 => keys::BOTPOSE_WPIRED,
            TelemetryVariant::RedMegaTag2 => keys::BOTPOSE_ORB_WPIRED,
        }
    }

    /// Reverse lookup. Returns `None` for keys that are not pose-estimate entries.
    pub fn from_key_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key_name() == name)
    }

    /// True for the MegaTag2 variants.
    pub fn is_algorithm_v2(&self) -> bool {
        self.algorithm() == Algorithm::MegaTag2
    }

    /// Field origin the pose is expressed in.
    pub fn alliance(&self) -> Alliance {
        match self {
            TelemetryVariant::BlueMegaTag1 | TelemetryVariant::BlueMegaTag2 => Alliance::Blue,
            TelemetryVariant::RedMegaTag1 | TelemetryVariant::RedMegaTag2 => Alliance::Red,
        }
    }

    /// Localization algorithm that produced the pose.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            TelemetryVariant::BlueMegaTag1 | TelemetryVariant::RedMegaTag1 => Algorithm::MegaTag1,
            TelemetryVariant::BlueMegaTag2 | TelemetryVariant::RedMegaTag2 => Algorithm::MegaTag2,
        }
    }
}

impl fmt::Display for TelemetryVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_name())
    }
}

/// Returned when parsing a key that names no pose-estimate entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVariantKey(pub String);

impl fmt::Display for UnknownVariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a pose-estimate key", self.0)
    }
}

impl std::error::Error for UnknownVariantKey {}

impl FromStr for TelemetryVariant {
    type Err = UnknownVariantKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key_name(s).ok_or_else(|| UnknownVariantKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(TelemetryVariant::BlueMegaTag1.key_name(), "botpose_wpiblue");
        assert_eq!(TelemetryVariant::BlueMegaTag2.key_name(), "botpose_orb_wpiblue");
        assert_eq!(TelemetryVariant::RedMegaTag1.key_name(), "botpose_wpired");
        assert_eq!(TelemetryVariant::RedMegaTag2.key_name(), "botpose_orb_wpired");
    }

    #[test]
    fn test_from_key_name_roundtrip() {
        for variant in TelemetryVariant::ALL {
            assert_eq!(TelemetryVariant::from_key_name(variant.key_name()), Some(variant));
        }
    }

    #[test]
    fn test_from_key_name_unknown() {
        assert_eq!(TelemetryVariant::from_key_name("botpose"), None);
        assert_eq!(TelemetryVariant::from_key_name(""), None);
        assert!("botpose_targetspace".parse::<TelemetryVariant>().is_err());
    }

    #[test]
    fn test_algorithm_flag() {
        assert!(!TelemetryVariant::BlueMegaTag1.is_algorithm_v2());
        assert!(TelemetryVariant::BlueMegaTag2.is_algorithm_v2());
        assert!(!TelemetryVariant::RedMegaTag1.is_algorithm_v2());
        assert!(TelemetryVariant::RedMegaTag2.is_algorithm_v2());
    }

    #[test]
    fn test_new_matches_accessors() {
        for variant in TelemetryVariant::ALL {
            assert_eq!(TelemetryVariant::new(variant.alliance(), variant.algorithm()), variant);
        }
    }
}
