use geo::Contains;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::LatLng;

/// a geographic rectangle described by its southwest and northeast
/// corners. corners are stored as provided; boxes crossing the
/// antimeridian are not normalized here.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LatLngBounds {
    pub southwest: LatLng,
    pub northeast: LatLng,
}

impl LatLngBounds {
    pub fn new(southwest: LatLng, northeast: LatLng) -> LatLngBounds {
        LatLngBounds {
            southwest,
            northeast,
        }
    }

    /// wire snapshot of this box as a JSON object of two corner points.
    pub fn to_json(&self) -> Value {
        json!({
            "southwest": self.southwest.to_json(),
            "northeast": self.northeast.to_json(),
        })
    }

    /// view of this box as a geo rectangle (x=longitude, y=latitude).
    pub fn to_rect(&self) -> geo::Rect<f64> {
        geo::Rect::new(
            geo_types::Point::from(self.southwest),
            geo_types::Point::from(self.northeast),
        )
    }

    /// true if the point falls strictly within this box.
    pub fn contains(&self, point: &LatLng) -> bool {
        self.to_rect().contains(&geo_types::Point::from(*point))
    }
}
