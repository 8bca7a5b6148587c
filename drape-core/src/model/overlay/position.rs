use serde::{Deserialize, Serialize};

use crate::model::overlay::GroundOverlayError;
use crate::model::{LatLng, LatLngBounds};

/// where and how large a ground overlay is on the map. exactly one
/// placement mode is active at a time, so a constructed position can
/// never hold a contradictory field combination.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum OverlayPosition {
    /// anchored at a point with explicit width and height, in meters
    PointAndSize {
        location: LatLng,
        width: f64,
        height: f64,
    },
    /// anchored at a point with explicit width; height follows the image
    /// aspect ratio on the host side
    PointAndWidth { location: LatLng, width: f64 },
    /// stretched to cover a geographic rectangle
    Bounds { bounds: LatLngBounds },
    /// not yet placed. hosts treat this as "do not draw"
    #[default]
    Unset,
}

impl OverlayPosition {
    /// validates a raw optional-field combination into a placement mode.
    /// accepts exactly four combinations: location+width+height,
    /// location+width, bounds alone, or nothing at all. every other
    /// combination is a caller contract violation.
    pub fn from_fields(
        location: Option<LatLng>,
        width: Option<f64>,
        height: Option<f64>,
        bounds: Option<LatLngBounds>,
    ) -> Result<OverlayPosition, GroundOverlayError> {
        match (location, width, height, bounds) {
            (Some(location), Some(width), Some(height), None) => Ok(OverlayPosition::PointAndSize {
                location,
                width,
                height,
            }),
            (Some(location), Some(width), None, None) => {
                Ok(OverlayPosition::PointAndWidth { location, width })
            }
            (None, None, None, Some(bounds)) => Ok(OverlayPosition::Bounds { bounds }),
            (None, None, None, None) => Ok(OverlayPosition::Unset),
            (location, width, height, bounds) => {
                Err(GroundOverlayError::InvalidPositioningConfiguration {
                    location: location.is_some(),
                    width: width.is_some(),
                    height: height.is_some(),
                    bounds: bounds.is_some(),
                })
            }
        }
    }

    /// the anchoring point, or the default origin when the active mode
    /// carries no point. wire snapshots always include this projection.
    pub fn location(&self) -> LatLng {
        match self {
            OverlayPosition::PointAndSize { location, .. } => *location,
            OverlayPosition::PointAndWidth { location, .. } => *location,
            _ => LatLng::default(),
        }
    }

    /// the overlay width in meters, or 0.0 when the active mode carries
    /// no width.
    pub fn width(&self) -> f64 {
        match self {
            OverlayPosition::PointAndSize { width, .. } => *width,
            OverlayPosition::PointAndWidth { width, .. } => *width,
            _ => 0.0,
        }
    }

    /// the overlay height in meters, or 0.0 when the active mode carries
    /// no height.
    pub fn height(&self) -> f64 {
        match self {
            OverlayPosition::PointAndSize { height, .. } => *height,
            _ => 0.0,
        }
    }

    /// the covering rectangle, present only in bounds mode.
    pub fn bounds(&self) -> Option<&LatLngBounds> {
        match self {
            OverlayPosition::Bounds { bounds } => Some(bounds),
            _ => None,
        }
    }

    /// the raw optional fields this mode was built from, for merging
    /// overrides before re-validation.
    pub fn decompose(
        &self,
    ) -> (
        Option<LatLng>,
        Option<f64>,
        Option<f64>,
        Option<LatLngBounds>,
    ) {
        match self {
            OverlayPosition::PointAndSize {
                location,
                width,
                height,
            } => (Some(*location), Some(*width), Some(*height), None),
            OverlayPosition::PointAndWidth { location, width } => {
                (Some(*location), Some(*width), None, None)
            }
            OverlayPosition::Bounds { bounds } => (None, None, None, Some(*bounds)),
            OverlayPosition::Unset => (None, None, None, None),
        }
    }
}
