#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GroundOverlayError {
    #[error("invalid positioning configuration: location={location}, width={width}, height={height}, bounds={bounds}. allowed: location+width+height, location+width, bounds alone, or all unset")]
    InvalidPositioningConfiguration {
        location: bool,
        width: bool,
        height: bool,
        bounds: bool,
    },
}
