use std::hash::{Hash, Hasher};

use serde_json::{json, Value};

use crate::model::overlay::overlay_field as field;
use crate::model::overlay::{
    GroundOverlayError, GroundOverlayId, GroundOverlayUpdate, OverlayPosition, TapHandler,
};
use crate::model::{BitmapDescriptor, LatLng, LatLngBounds, ScreenOffset};

/// an immutable description of a geo-referenced image draped over the map
/// surface. revision happens by [`GroundOverlay::copy_with`], which
/// produces a new value; the identifier survives every revision.
///
/// equality and hashing are deliberately asymmetric: `==` compares every
/// field (including the tap handler, by reference identity), while `Hash`
/// covers the identifier alone. two overlays with the same id and
/// different styling hash identically yet compare unequal, because the id
/// is the primary key inside an owning collection. collections that need
/// `Eq` should key by [`GroundOverlayId`] instead; this type provides only
/// `PartialEq` since it carries floating point fields.
#[derive(Clone, Debug)]
pub struct GroundOverlay {
    ground_overlay_id: GroundOverlayId,
    position: OverlayPosition,
    consume_tap_events: bool,
    visible: bool,
    z_index: i64,
    bitmap: BitmapDescriptor,
    bearing: f64,
    anchor: ScreenOffset,
    transparency: f64,
    on_tap: Option<TapHandler>,
}

impl GroundOverlay {
    /// creates an overlay at the given position with default styling:
    /// visible, not consuming taps, z-index 0, default marker bitmap, no
    /// rotation, top-left anchor, fully opaque, no tap handler.
    pub fn new(ground_overlay_id: GroundOverlayId, position: OverlayPosition) -> GroundOverlay {
        GroundOverlay {
            ground_overlay_id,
            position,
            consume_tap_events: false,
            visible: true,
            z_index: 0,
            bitmap: BitmapDescriptor::default(),
            bearing: 0.0,
            anchor: ScreenOffset::default(),
            transparency: 0.0,
            on_tap: None,
        }
    }

    /// creates an overlay from raw optional fields, validating that the
    /// positioning fields form one of the four legal combinations. unset
    /// fields take the same defaults as [`GroundOverlay::new`].
    pub fn from_fields(
        ground_overlay_id: GroundOverlayId,
        fields: GroundOverlayUpdate,
    ) -> Result<GroundOverlay, GroundOverlayError> {
        GroundOverlay::new(ground_overlay_id, OverlayPosition::Unset).copy_with(fields)
    }

    /// produces a revised overlay: set fields of the update override the
    /// current values, unset fields inherit them, and the identifier is
    /// always preserved. positioning overrides are merged onto the current
    /// placement fields and re-validated, so an override combination that
    /// breaks the placement invariant fails exactly like construction.
    pub fn copy_with(
        &self,
        update: GroundOverlayUpdate,
    ) -> Result<GroundOverlay, GroundOverlayError> {
        let (location, width, height, bounds) = self.position.decompose();
        let position = OverlayPosition::from_fields(
            update.location.or(location),
            update.width.or(width),
            update.height.or(height),
            update.bounds.or(bounds),
        )?;
        let revised = GroundOverlay {
            ground_overlay_id: self.ground_overlay_id.clone(),
            position,
            consume_tap_events: update.consume_tap_events.unwrap_or(self.consume_tap_events),
            visible: update.visible.unwrap_or(self.visible),
            z_index: update.z_index.unwrap_or(self.z_index),
            bitmap: update.bitmap.unwrap_or_else(|| self.bitmap.clone()),
            bearing: update.bearing.unwrap_or(self.bearing),
            anchor: update.anchor.unwrap_or(self.anchor),
            transparency: update.transparency.unwrap_or(self.transparency),
            on_tap: update.on_tap.or_else(|| self.on_tap.clone()),
        };
        revised.warn_on_suspect_values();
        Ok(revised)
    }

    pub fn ground_overlay_id(&self) -> &GroundOverlayId {
        &self.ground_overlay_id
    }

    pub fn position(&self) -> &OverlayPosition {
        &self.position
    }

    /// true if taps on this overlay should be routed to its handler
    /// instead of falling through to the map
    pub fn consume_tap_events(&self) -> bool {
        self.consume_tap_events
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// draw-order key; overlays with lower values render beneath higher
    pub fn z_index(&self) -> i64 {
        self.z_index
    }

    pub fn bitmap(&self) -> &BitmapDescriptor {
        &self.bitmap
    }

    /// clockwise rotation in degrees, applied about the anchor
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    pub fn anchor(&self) -> ScreenOffset {
        self.anchor
    }

    /// 0.0 is opaque, 1.0 fully transparent. not range-checked
    pub fn transparency(&self) -> f64 {
        self.transparency
    }

    pub fn on_tap(&self) -> Option<&TapHandler> {
        self.on_tap.as_ref()
    }

    pub fn location(&self) -> LatLng {
        self.position.location()
    }

    pub fn width(&self) -> f64 {
        self.position.width()
    }

    pub fn height(&self) -> f64 {
        self.position.height()
    }

    pub fn bounds(&self) -> Option<&LatLngBounds> {
        self.position.bounds()
    }

    /// wire snapshot of this overlay as a JSON object. every field is
    /// written with its current value on each call; `bounds` appears only
    /// in bounds mode, and the tap handler never appears since callbacks
    /// are a local-process concern. `location`, `width` and `height` are
    /// always written, carrying their defaults when the active placement
    /// mode does not use them.
    pub fn to_json(&self) -> Value {
        let mut row = serde_json::Map::new();
        row.insert(
            field::GROUND_OVERLAY_ID.to_string(),
            json!(self.ground_overlay_id.0),
        );
        row.insert(
            field::CONSUME_TAP_EVENTS.to_string(),
            json!(self.consume_tap_events),
        );
        row.insert(field::TRANSPARENCY.to_string(), json!(self.transparency));
        row.insert(field::BEARING.to_string(), json!(self.bearing));
        row.insert(field::VISIBLE.to_string(), json!(self.visible));
        row.insert(field::Z_INDEX.to_string(), json!(self.z_index));
        row.insert(field::HEIGHT.to_string(), json!(self.height()));
        row.insert(field::ANCHOR.to_string(), self.anchor.to_json());
        if let Some(bounds) = self.bounds() {
            row.insert(field::BOUNDS.to_string(), bounds.to_json());
        }
        row.insert(field::BITMAP.to_string(), self.bitmap.to_json());
        row.insert(field::WIDTH.to_string(), json!(self.width()));
        row.insert(field::LOCATION.to_string(), self.location().to_json());
        Value::Object(row)
    }

    /// flags legal-but-suspect styling values without rejecting them
    fn warn_on_suspect_values(&self) {
        if !(0.0..=1.0).contains(&self.transparency) {
            log::warn!(
                "overlay {} transparency {} is outside [0.0, 1.0]; hosts may clamp or reject it",
                self.ground_overlay_id,
                self.transparency
            );
        }
        if self.width() < 0.0 || self.height() < 0.0 {
            log::warn!(
                "overlay {} has negative size ({} x {}); hosts may reject it",
                self.ground_overlay_id,
                self.width(),
                self.height()
            );
        }
    }
}

impl PartialEq for GroundOverlay {
    fn eq(&self, other: &GroundOverlay) -> bool {
        self.ground_overlay_id == other.ground_overlay_id
            && self.position == other.position
            && self.consume_tap_events == other.consume_tap_events
            && self.visible == other.visible
            && self.z_index == other.z_index
            && self.bitmap == other.bitmap
            && self.bearing == other.bearing
            && self.anchor == other.anchor
            && self.transparency == other.transparency
            && self.on_tap == other.on_tap
    }
}

// hash covers the identifier alone; see the type-level docs. equal values
// always share an id, so the Hash/PartialEq contract still holds.
impl Hash for GroundOverlay {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ground_overlay_id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::GroundOverlay;
    use crate::model::overlay::{
        GroundOverlayError, GroundOverlayId, GroundOverlayUpdate, OverlayPosition, TapHandler,
    };
    use crate::model::{BitmapDescriptor, LatLng, LatLngBounds, ScreenOffset};
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn id(value: &str) -> GroundOverlayId {
        GroundOverlayId(value.to_string())
    }

    fn point_and_size_overlay() -> GroundOverlay {
        GroundOverlay::from_fields(
            id("go1"),
            GroundOverlayUpdate {
                location: Some(LatLng::new(10.0, 20.0)),
                width: Some(5.0),
                height: Some(5.0),
                ..Default::default()
            },
        )
        .expect("legal positioning fields")
    }

    fn bounds_overlay() -> GroundOverlay {
        GroundOverlay::from_fields(
            id("go2"),
            GroundOverlayUpdate {
                bounds: Some(LatLngBounds::new(
                    LatLng::new(39.6, -105.1),
                    LatLng::new(39.9, -104.7),
                )),
                ..Default::default()
            },
        )
        .expect("legal positioning fields")
    }

    fn hash_of(overlay: &GroundOverlay) -> u64 {
        let mut hasher = DefaultHasher::new();
        overlay.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_applies_default_styling() {
        let overlay = GroundOverlay::new(id("go1"), OverlayPosition::Unset);
        assert!(!overlay.consume_tap_events());
        assert!(overlay.visible());
        assert_eq!(overlay.z_index(), 0);
        assert_eq!(overlay.bitmap(), &BitmapDescriptor::DefaultMarker);
        assert_eq!(overlay.bearing(), 0.0);
        assert_eq!(overlay.anchor(), ScreenOffset::new(0.0, 0.0));
        assert_eq!(overlay.transparency(), 0.0);
        assert!(overlay.on_tap().is_none());
        assert_eq!(overlay.location(), LatLng::default());
        assert_eq!(overlay.width(), 0.0);
        assert_eq!(overlay.height(), 0.0);
        assert!(overlay.bounds().is_none());
    }

    #[test]
    fn test_from_fields_rejects_mixed_positioning() {
        let result = GroundOverlay::from_fields(
            id("go1"),
            GroundOverlayUpdate {
                location: Some(LatLng::new(10.0, 20.0)),
                bounds: Some(LatLngBounds::new(
                    LatLng::new(39.6, -105.1),
                    LatLng::new(39.9, -104.7),
                )),
                ..Default::default()
            },
        );
        assert_eq!(
            result,
            Err(GroundOverlayError::InvalidPositioningConfiguration {
                location: true,
                width: false,
                height: false,
                bounds: true,
            })
        );
    }

    #[test]
    fn test_copy_with_preserves_identifier() {
        let overlay = point_and_size_overlay();
        let revised = overlay
            .copy_with(GroundOverlayUpdate {
                z_index: Some(4),
                visible: Some(false),
                ..Default::default()
            })
            .expect("styling overrides never break positioning");
        assert_eq!(revised.ground_overlay_id(), overlay.ground_overlay_id());
    }

    #[test]
    fn test_copy_with_inherits_untouched_fields() {
        let overlay = point_and_size_overlay();
        let revised = overlay
            .copy_with(GroundOverlayUpdate {
                bearing: Some(90.0),
                ..Default::default()
            })
            .expect("styling overrides never break positioning");
        assert_eq!(revised.bearing(), 90.0);
        assert_eq!(revised.z_index(), overlay.z_index());
        assert_eq!(revised.visible(), overlay.visible());
        assert_eq!(revised.transparency(), overlay.transparency());
        assert_eq!(revised.anchor(), overlay.anchor());
        assert_eq!(revised.bitmap(), overlay.bitmap());
        assert_eq!(revised.position(), overlay.position());
    }

    #[test]
    fn test_copy_with_can_grow_point_and_width_into_point_and_size() {
        let overlay = GroundOverlay::from_fields(
            id("go1"),
            GroundOverlayUpdate {
                location: Some(LatLng::new(10.0, 20.0)),
                width: Some(5.0),
                ..Default::default()
            },
        )
        .expect("legal positioning fields");
        assert_eq!(overlay.height(), 0.0);

        let revised = overlay
            .copy_with(GroundOverlayUpdate {
                height: Some(7.5),
                ..Default::default()
            })
            .expect("adding height to point+width is legal");
        assert_eq!(
            revised.position(),
            &OverlayPosition::PointAndSize {
                location: LatLng::new(10.0, 20.0),
                width: 5.0,
                height: 7.5,
            }
        );
    }

    #[test]
    fn test_copy_with_rejects_positioning_conflicts() {
        let overlay = point_and_size_overlay();
        let result = overlay.copy_with(GroundOverlayUpdate {
            bounds: Some(LatLngBounds::new(
                LatLng::new(39.6, -105.1),
                LatLng::new(39.9, -104.7),
            )),
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(GroundOverlayError::InvalidPositioningConfiguration { .. })
        ));
    }

    #[test]
    fn test_clone_is_value_equal_and_distinct() {
        let overlay = point_and_size_overlay();
        let copy = overlay.clone();
        assert_eq!(copy, overlay);
        assert!(!std::ptr::eq(&copy, &overlay));
    }

    #[test]
    fn test_same_id_different_fields_hash_identically_but_compare_unequal() {
        let a = point_and_size_overlay();
        let b = a
            .copy_with(GroundOverlayUpdate {
                z_index: Some(9),
                ..Default::default()
            })
            .expect("styling overrides never break positioning");
        assert_ne!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_equality_covers_every_field() {
        let base = point_and_size_overlay();
        let touched: Vec<GroundOverlayUpdate> = vec![
            GroundOverlayUpdate {
                consume_tap_events: Some(true),
                ..Default::default()
            },
            GroundOverlayUpdate {
                visible: Some(false),
                ..Default::default()
            },
            GroundOverlayUpdate {
                z_index: Some(1),
                ..Default::default()
            },
            GroundOverlayUpdate {
                bitmap: Some(BitmapDescriptor::Asset {
                    name: "overlays/runway.png".to_string(),
                }),
                ..Default::default()
            },
            GroundOverlayUpdate {
                bearing: Some(45.0),
                ..Default::default()
            },
            GroundOverlayUpdate {
                anchor: Some(ScreenOffset::new(0.5, 0.5)),
                ..Default::default()
            },
            GroundOverlayUpdate {
                transparency: Some(0.5),
                ..Default::default()
            },
            GroundOverlayUpdate {
                on_tap: Some(TapHandler::new(|| {})),
                ..Default::default()
            },
            GroundOverlayUpdate {
                location: Some(LatLng::new(11.0, 20.0)),
                ..Default::default()
            },
            GroundOverlayUpdate {
                width: Some(6.0),
                ..Default::default()
            },
            GroundOverlayUpdate {
                height: Some(6.0),
                ..Default::default()
            },
        ];
        for update in touched {
            let revised = base
                .copy_with(update.clone())
                .expect("single-field styling overrides never break positioning");
            assert_ne!(base, revised, "override {update:?} should break equality");
        }
    }

    #[test]
    fn test_equality_with_shared_tap_handler() {
        let handler = TapHandler::new(|| {});
        let build = |handler: TapHandler| {
            point_and_size_overlay()
                .copy_with(GroundOverlayUpdate {
                    on_tap: Some(handler),
                    ..Default::default()
                })
                .expect("styling overrides never break positioning")
        };
        let a = build(handler.clone());
        let b = build(handler);
        assert_eq!(a, b);

        let c = build(TapHandler::new(|| {}));
        assert_ne!(a, c);
    }

    #[test]
    fn test_to_json_point_and_size_shape() {
        let overlay = point_and_size_overlay();
        let row = overlay.to_json();
        assert_eq!(row["groundOverlayId"], json!("go1"));
        assert_eq!(row["location"], json!({"latitude": 10.0, "longitude": 20.0}));
        assert_eq!(row["width"], json!(5.0));
        assert_eq!(row["height"], json!(5.0));
        assert_eq!(row["consumeTapEvents"], json!(false));
        assert_eq!(row["transparency"], json!(0.0));
        assert_eq!(row["bearing"], json!(0.0));
        assert_eq!(row["visible"], json!(true));
        assert_eq!(row["zIndex"], json!(0));
        assert_eq!(row["anchor"], json!([0.0, 0.0]));
        assert_eq!(row["bitmap"], json!(["defaultMarker"]));
        assert!(row.get("bounds").is_none());
    }

    #[test]
    fn test_to_json_bounds_mode_still_writes_default_location() {
        let overlay = bounds_overlay();
        let row = overlay.to_json();
        assert_eq!(
            row["bounds"],
            json!({
                "southwest": {"latitude": 39.6, "longitude": -105.1},
                "northeast": {"latitude": 39.9, "longitude": -104.7},
            })
        );
        // current-field-value semantics: the unused point is written as
        // its default rather than omitted
        assert_eq!(row["location"], json!({"latitude": 0.0, "longitude": 0.0}));
        assert_eq!(row["width"], json!(0.0));
        assert_eq!(row["height"], json!(0.0));
    }

    #[test]
    fn test_to_json_anchor_is_ordered_pair() {
        let overlay = point_and_size_overlay()
            .copy_with(GroundOverlayUpdate {
                anchor: Some(ScreenOffset::new(0.25, 0.75)),
                ..Default::default()
            })
            .expect("styling overrides never break positioning");
        assert_eq!(overlay.to_json()["anchor"], json!([0.25, 0.75]));
    }

    #[test]
    fn test_to_json_never_carries_the_tap_handler() {
        let overlay = point_and_size_overlay()
            .copy_with(GroundOverlayUpdate {
                on_tap: Some(TapHandler::new(|| {})),
                ..Default::default()
            })
            .expect("styling overrides never break positioning");
        let row = overlay.to_json();
        assert!(row.get("onTap").is_none());
        // point mode writes every key except bounds, and nothing else
        let object = row.as_object().expect("snapshot is an object");
        assert_eq!(object.len(), 11);
        assert!(object.get("bounds").is_none());
    }
}
