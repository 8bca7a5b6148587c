use serde_json::{json, Value};

/// describes where the host should source an overlay image from. the
/// actual pixel data never passes through this crate except in the
/// [`BitmapDescriptor::Bytes`] case, which carries encoded image bytes
/// opaquely.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum BitmapDescriptor {
    /// the host platform's default marker image
    #[default]
    DefaultMarker,
    /// the default marker tinted by a hue, in degrees
    DefaultMarkerWithHue(f64),
    /// an image resolved from a named asset bundled with the host
    Asset { name: String },
    /// raw encoded image bytes (PNG or similar), hex-encoded on the wire
    Bytes { data: Vec<u8> },
}

impl BitmapDescriptor {
    /// wire snapshot as a tagged array, first element naming the source.
    pub fn to_json(&self) -> Value {
        match self {
            BitmapDescriptor::DefaultMarker => json!(["defaultMarker"]),
            BitmapDescriptor::DefaultMarkerWithHue(hue) => json!(["defaultMarkerWithHue", hue]),
            BitmapDescriptor::Asset { name } => json!(["fromAsset", name]),
            BitmapDescriptor::Bytes { data } => json!(["fromBytes", hex::encode(data)]),
        }
    }
}
