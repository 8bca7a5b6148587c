use crate::model::overlay::TapHandler;
use crate::model::{BitmapDescriptor, LatLng, LatLngBounds, ScreenOffset};

/// a set of field overrides for building or revising a
/// [`GroundOverlay`](crate::model::overlay::GroundOverlay). unset fields
/// inherit the value of whatever the update is applied to, so a field can
/// be replaced but never cleared back to absent. the overlay identifier is
/// deliberately not part of an update.
#[derive(Clone, Debug, Default)]
pub struct GroundOverlayUpdate {
    pub consume_tap_events: Option<bool>,
    pub visible: Option<bool>,
    pub z_index: Option<i64>,
    pub bitmap: Option<BitmapDescriptor>,
    pub bearing: Option<f64>,
    pub anchor: Option<ScreenOffset>,
    pub transparency: Option<f64>,
    pub on_tap: Option<TapHandler>,
    pub location: Option<LatLng>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub bounds: Option<LatLngBounds>,
}
