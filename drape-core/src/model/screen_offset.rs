use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// a fractional offset within an overlay image, where (0, 0) is the top
/// left corner and (1, 1) the bottom right. used as the rotation and
/// placement origin for overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenOffset {
    pub dx: f64,
    pub dy: f64,
}

impl ScreenOffset {
    pub fn new(dx: f64, dy: f64) -> ScreenOffset {
        ScreenOffset { dx, dy }
    }

    /// wire snapshot as a two-element array, `[dx, dy]`.
    pub fn to_json(&self) -> Value {
        json!([self.dx, self.dy])
    }
}

// offsets travel as two-element arrays, not keyed objects
impl Serialize for ScreenOffset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.dx, self.dy).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScreenOffset {
    fn deserialize<D>(deserializer: D) -> Result<ScreenOffset, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (dx, dy) = <(f64, f64)>::deserialize(deserializer)?;
        Ok(ScreenOffset::new(dx, dy))
    }
}
