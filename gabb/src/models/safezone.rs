//! Safezone models.
//!
//! The safezone service is older than the rest of the API: it is not under
//! the versioned path and uses PascalCase keys in both directions.

use serde::{Deserialize, Serialize};

use super::DeviceId;
use crate::error::{Error, Result};

/// A geofenced area around a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Safezone {
    pub longitude: f64,
    pub latitude: f64,
    pub name: String,
    /// Allowed distance from the point. The app will not go below about 150.
    pub radius: f64,
    pub enabled: bool,
    /// Devices the zone applies to.
    pub devices: Vec<DeviceId>,
}

impl Safezone {
    /// Check coordinates and radius before sending.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::InvalidArgument(format!(
                "latitude {} out of range",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::InvalidArgument(format!(
                "longitude {} out of range",
                self.longitude
            )));
        }
        if self.radius.is_nan() || self.radius <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn zone() -> Safezone {
        Safezone {
            longitude: -80.48236483894243,
            latitude: 48.51629188103274,
            name: "Home".into(),
            radius: 150.0,
            enabled: true,
            devices: vec![DeviceId(555555)],
        }
    }

    #[test]
    fn test_safezone_payload() {
        assert_eq!(
            serde_json::to_value(zone()).unwrap(),
            json!({
                "Longitude": -80.48236483894243,
                "Latitude": 48.51629188103274,
                "Name": "Home",
                "Radius": 150.0,
                "Enabled": true,
                "Devices": [555555],
            })
        );
    }

    #[test]
    fn test_safezone_validate() {
        assert!(zone().validate().is_ok());

        let mut bad = zone();
        bad.latitude = 91.0;
        assert!(bad.validate().is_err());

        let mut bad = zone();
        bad.radius = f64::NAN;
        assert!(bad.validate().is_err());

        let mut bad = zone();
        bad.radius = 0.0;
        assert!(bad.validate().is_err());

        let mut bad = zone();
        bad.radius = -150.0;
        assert!(bad.validate().is_err());
    }
}
