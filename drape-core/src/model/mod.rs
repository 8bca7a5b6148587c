mod bitmap_descriptor;
mod lat_lng;
mod lat_lng_bounds;
pub mod overlay;
mod screen_offset;

pub use bitmap_descriptor::BitmapDescriptor;
pub use lat_lng::LatLng;
pub use lat_lng_bounds::LatLngBounds;
pub use screen_offset::ScreenOffset;
