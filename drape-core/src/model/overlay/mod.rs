mod error;
mod ground_overlay;
mod id;
pub mod overlay_field;
mod position;
mod tap;
mod update;

pub use error::GroundOverlayError;
pub use ground_overlay::GroundOverlay;
pub use id::GroundOverlayId;
pub use position::OverlayPosition;
pub use tap::TapHandler;
pub use update::GroundOverlayUpdate;
