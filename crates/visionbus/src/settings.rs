use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Table used when a camera is addressed with an empty name.
pub const DEFAULT_TABLE: &str = "limelight";

/// Settings for a [`VisionBus`](crate::VisionBus).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusSettings {
    /// Table name substituted for an empty camera name.
    pub default_table: String,

    /// Flush the store right after writing the robot orientation, so
    /// MegaTag2 sees the heading in the same frame.
    pub flush_on_orientation: bool,
}

impl Default for BusSettings {
    fn default() -> Self {
        Self {
            default_table: DEFAULT_TABLE.to_string(),
            flush_on_orientation: true,
        }
    }
}

impl BusSettings {
    /// Parses settings from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Maps a camera name to its table, substituting the default table for
    /// an empty name.
    pub fn table_name<'a>(&'a self, camera: &'a str) -> &'a str {
        if camera.is_empty() {
            &self.default_table
        } else {
            camera
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = BusSettings::default();
        assert_eq!(settings.default_table, "limelight");
        assert!(settings.flush_on_orientation);
    }

    #[test]
    fn test_partial_json() {
        let settings = BusSettings::from_json_str(r#"{ "flush_on_orientation": false }"#).unwrap();
        assert_eq!(settings.default_table, "limelight");
        assert!(!settings.flush_on_orientation);
    }

    #[test]
    fn test_invalid_json() {
        let err = BusSettings::from_json_str("{ default_table: 3 }").unwrap_err();
        assert!(matches!(err, StoreError::InvalidSettings(_)));
    }

    #[test]
    fn test_table_name() {
        let settings = BusSettings::default();
        assert_eq!(settings.table_name(""), "limelight");
        assert_eq!(settings.table_name("limelight-front"), "limelight-front");
    }
}
