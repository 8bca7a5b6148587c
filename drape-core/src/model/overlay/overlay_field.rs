//! Field names used in ground overlay wire snapshots.
//!
//! # Examples
//!
//! ### Point-placed overlay
//!
//! ```json
//! {
//!   "groundOverlayId": "go1",
//!   "consumeTapEvents": false,
//!   "transparency": 0.0,
//!   "bearing": 0.0,
//!   "visible": true,
//!   "zIndex": 0,
//!   "height": 50.0,
//!   "anchor": [0.0, 0.0],
//!   "bitmap": ["defaultMarker"],
//!   "width": 100.0,
//!   "location": { "latitude": 39.73, "longitude": -104.99 }
//! }
//! ```
//!
//! ### Bounds-placed overlay
//!
//! the `bounds` key appears only in bounds mode; `location`, `width` and
//! `height` are still written with their current (default) values.
//!
//! ```json
//! {
//!   "groundOverlayId": "go2",
//!   "bounds": {
//!     "southwest": { "latitude": 39.6, "longitude": -105.1 },
//!     "northeast": { "latitude": 39.9, "longitude": -104.7 }
//!   },
//!   "location": { "latitude": 0.0, "longitude": 0.0 }
//! }
//! ```

pub const GROUND_OVERLAY_ID: &str = "groundOverlayId";
pub const CONSUME_TAP_EVENTS: &str = "consumeTapEvents";
pub const TRANSPARENCY: &str = "transparency";
pub const BEARING: &str = "bearing";
pub const VISIBLE: &str = "visible";
pub const Z_INDEX: &str = "zIndex";
pub const HEIGHT: &str = "height";
pub const ANCHOR: &str = "anchor";
pub const BOUNDS: &str = "bounds";
pub const BITMAP: &str = "bitmap";
pub const WIDTH: &str = "width";
pub const LOCATION: &str = "location";
