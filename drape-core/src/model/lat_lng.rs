use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// a geographic point in degrees. latitude is positive north of the
/// equator, longitude positive east of the prime meridian. values are not
/// range-checked or wrapped; that is the producing host's concern.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> LatLng {
        LatLng {
            latitude,
            longitude,
        }
    }

    /// wire snapshot of this point as a JSON object.
    pub fn to_json(&self) -> Value {
        json!({
            "latitude": self.latitude,
            "longitude": self.longitude,
        })
    }
}

impl From<LatLng> for geo_types::Point<f64> {
    /// geo convention puts longitude on the x axis and latitude on y.
    fn from(value: LatLng) -> geo_types::Point<f64> {
        geo_types::Point::new(value.longitude, value.latitude)
    }
}

impl From<geo_types::Point<f64>> for LatLng {
    fn from(value: geo_types::Point<f64>) -> LatLng {
        LatLng::new(value.y(), value.x())
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
